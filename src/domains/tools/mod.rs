//! Tools domain module.
//!
//! Tools are callable operations exposed to MCP clients. This server offers
//! one retrieval tool per document, named `docs.get<Doc>`, which returns the
//! document summary together with the URIs of its resources.
//!
//! ## Architecture
//!
//! - `definitions/` - The retrieval tool, parameterized by document
//! - `router.rs` - Dynamic ToolRouter builder for STDIO/TCP transport
//! - `registry.rs` - Tool metadata and HTTP dispatch
//! - `error.rs` - Tool-specific error types
//!
//! **No need to modify `server.rs`!** The router is built from the catalog.

pub mod definitions;
mod error;
mod registry;
pub mod router;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use router::build_tool_router;
