//! Listener settings for the document server.
//!
//! Only the shapes and their defaults live here; `Config::from_env` fills
//! them from `MCP_TRANSPORT` and the per-transport variables.

use serde::{Deserialize, Serialize};

#[cfg(not(any(feature = "stdio", feature = "tcp", feature = "http")))]
compile_error!("At least one transport feature must be enabled: stdio, tcp, or http");

/// Loopback address used when no host is configured.
#[cfg(any(feature = "tcp", feature = "http"))]
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Port for TCP sessions when `MCP_TCP_PORT` is unset or invalid.
#[cfg(feature = "tcp")]
pub const DEFAULT_TCP_PORT: u16 = 3000;

/// Port for the HTTP listener when `MCP_HTTP_PORT` is unset or invalid.
#[cfg(feature = "http")]
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// JSON-RPC endpoint path of the HTTP listener.
#[cfg(feature = "http")]
pub const DEFAULT_RPC_PATH: &str = "/mcp";

/// Where MCP sessions are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// A single session over the process's stdin/stdout.
    #[cfg(feature = "stdio")]
    Stdio,

    /// One session per accepted TCP connection.
    #[cfg(feature = "tcp")]
    Tcp(TcpConfig),

    /// Stateless JSON-RPC over `POST`.
    #[cfg(feature = "http")]
    Http(HttpConfig),
}

#[cfg(feature = "tcp")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TcpConfig {
    pub host: String,
    pub port: u16,
}

#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    pub host: String,
    pub port: u16,

    /// Path of the JSON-RPC endpoint (`/mcp` unless overridden).
    pub rpc_path: String,

    /// Answer CORS preflights so browser clients can fetch documents.
    pub enable_cors: bool,
}

#[cfg(feature = "tcp")]
impl Default for TcpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_TCP_PORT,
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_HTTP_PORT,
            rpc_path: DEFAULT_RPC_PATH.to_string(),
            enable_cors: true,
        }
    }
}

impl Default for TransportConfig {
    /// The first compiled-in transport, preferring stdio.
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        let transport = Self::Stdio;

        #[cfg(all(not(feature = "stdio"), feature = "tcp"))]
        let transport = Self::Tcp(TcpConfig::default());

        #[cfg(all(not(feature = "stdio"), not(feature = "tcp"), feature = "http"))]
        let transport = Self::Http(HttpConfig::default());

        transport
    }
}

impl TransportConfig {
    /// Short label used in startup logs.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "stdio".to_string(),
            #[cfg(feature = "tcp")]
            Self::Tcp(cfg) => format!("tcp://{}:{}", cfg.host, cfg.port),
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("http://{}:{}{}", cfg.host, cfg.port, cfg.rpc_path),
        }
    }
}
