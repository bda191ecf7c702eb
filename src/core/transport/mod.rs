//! Listeners that carry MCP sessions to the document server.
//!
//! Every transport hands requests to the same registered `McpServer`, so a
//! document reads identically whichever way the client connects:
//! - `stdio` (default): one session over stdin/stdout, for editor and desktop hosts
//! - `tcp`: one session per accepted connection
//! - `http`: JSON-RPC over `POST`, plus `/health` for probes
//!
//! Only the transports enabled as cargo features are compiled in.

mod config;
mod error;
mod service;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "tcp")]
pub mod tcp;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::TransportConfig;
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(any(feature = "tcp", feature = "http"))]
pub use config::DEFAULT_HOST;

#[cfg(feature = "tcp")]
pub use config::{DEFAULT_TCP_PORT, TcpConfig};

#[cfg(feature = "http")]
pub use config::{DEFAULT_HTTP_PORT, DEFAULT_RPC_PATH, HttpConfig};
