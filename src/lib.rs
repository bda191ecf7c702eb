//! Cyber docs MCP server library.
//!
//! Serves a fixed set of API specification documents over the Model Context
//! Protocol. Every document is exposed in two representations plus a tool:
//!
//! - `resource://<ns>/<doc>.docx` - the original Word file, base64 encoded,
//!   read from disk on every request
//! - `resource://<ns>/<doc>.md` - a Markdown summary held in memory
//! - `docs.get<Doc>` - a tool returning the summary with pointers to both
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and transports
//! - **domains**: documents catalog, resources and tools
//!
//! # Example
//!
//! ```rust,no_run
//! use cyber_docs_mcp_server::{core::McpServer, core::Config};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config)?;
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, McpServer, Result};
