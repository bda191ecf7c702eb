//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables (and a `.env` file) or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

#[cfg(feature = "http")]
use super::transport::{DEFAULT_HTTP_PORT, DEFAULT_RPC_PATH, HttpConfig};
#[cfg(any(feature = "tcp", feature = "http"))]
use super::transport::DEFAULT_HOST;
#[cfg(feature = "tcp")]
use super::transport::{DEFAULT_TCP_PORT, TcpConfig};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Documents domain configuration.
    pub documents: DocumentsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the served documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentsConfig {
    /// Directory holding the binary originals (`<doc>.docx`).
    /// Relative paths resolve against the working directory at read time.
    pub base_path: PathBuf,

    /// Namespace segment of every resource URI (`resource://<namespace>/...`).
    pub namespace: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("spec"),
            namespace: "cyber".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "cyber-mcp-docs".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            documents: DocumentsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`, `MCP_DOCS_PATH`,
    /// `MCP_DOCS_NAMESPACE` and `MCP_TRANSPORT`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        // The debug toggle wins over an explicit level.
        if std::env::var("MCP_DEBUG").is_ok_and(|v| parse_flag(&v)) {
            config.logging.level = "debug".to_string();
        }

        if let Ok(path) = std::env::var("MCP_DOCS_PATH") {
            config.documents.base_path = PathBuf::from(path);
            info!("Documents directory set to {:?}", config.documents.base_path);
        }

        if let Ok(namespace) = std::env::var("MCP_DOCS_NAMESPACE") {
            config.documents.namespace = namespace;
        }

        config.transport = transport_from_env();

        config
    }
}

/// Select the listener from `MCP_TRANSPORT`.
///
/// Unset selects the first compiled-in transport. A value naming a transport
/// that is unknown or not built in falls back to the same default.
fn transport_from_env() -> TransportConfig {
    let requested = std::env::var("MCP_TRANSPORT")
        .unwrap_or_default()
        .trim()
        .to_lowercase();

    match requested.as_str() {
        "" => TransportConfig::default(),
        #[cfg(feature = "stdio")]
        "stdio" => TransportConfig::Stdio,
        #[cfg(feature = "tcp")]
        "tcp" => TransportConfig::Tcp(TcpConfig {
            host: env_or("MCP_TCP_HOST", DEFAULT_HOST),
            port: env_port("MCP_TCP_PORT", DEFAULT_TCP_PORT),
        }),
        #[cfg(feature = "http")]
        "http" => TransportConfig::Http(HttpConfig {
            host: env_or("MCP_HTTP_HOST", DEFAULT_HOST),
            port: env_port("MCP_HTTP_PORT", DEFAULT_HTTP_PORT),
            rpc_path: env_or("MCP_HTTP_PATH", DEFAULT_RPC_PATH),
            enable_cors: std::env::var("MCP_HTTP_CORS").map_or(true, |v| parse_flag(&v)),
        }),
        other => {
            let fallback = TransportConfig::default();
            warn!(
                "Transport {:?} is not available in this build, using {}",
                other,
                fallback.description()
            );
            fallback
        }
    }
}

#[cfg(any(feature = "tcp", feature = "http"))]
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read a port, keeping the default when the value does not parse.
#[cfg(any(feature = "tcp", feature = "http"))]
fn env_port(key: &str, default: u16) -> u16 {
    match std::env::var(key) {
        Ok(value) => value.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid {}={:?}, using port {}", key, value, default);
            default
        }),
        Err(_) => default,
    }
}

/// Interpret a boolean-ish environment value.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_env() {
        unsafe {
            std::env::remove_var("MCP_DEBUG");
            std::env::remove_var("MCP_LOG_LEVEL");
            std::env::remove_var("MCP_DOCS_PATH");
            std::env::remove_var("MCP_DOCS_NAMESPACE");
            std::env::remove_var("MCP_TRANSPORT");
            std::env::remove_var("MCP_TCP_PORT");
            std::env::remove_var("MCP_HTTP_PORT");
            std::env::remove_var("MCP_HTTP_PATH");
            std::env::remove_var("MCP_HTTP_CORS");
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.server.name, "cyber-mcp-docs");
        assert_eq!(config.documents.base_path, PathBuf::from("spec"));
        assert_eq!(config.documents.namespace, "cyber");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_debug_flag_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", "warn");
            std::env::set_var("MCP_DEBUG", "true");
        }
        let config = Config::from_env();
        assert_eq!(config.logging.level, "debug");
        clear_env();
    }

    #[test]
    fn test_debug_flag_disabled() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_LOG_LEVEL", "warn");
            std::env::set_var("MCP_DEBUG", "false");
        }
        let config = Config::from_env();
        assert_eq!(config.logging.level, "warn");
        clear_env();
    }

    #[test]
    fn test_documents_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_DOCS_PATH", "/srv/spec");
            std::env::set_var("MCP_DOCS_NAMESPACE", "acme");
        }
        let config = Config::from_env();
        assert_eq!(config.documents.base_path, PathBuf::from("/srv/spec"));
        assert_eq!(config.documents.namespace, "acme");
        clear_env();
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_transport_defaults_to_stdio() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        assert!(matches!(Config::from_env().transport, TransportConfig::Stdio));

        unsafe {
            std::env::set_var("MCP_TRANSPORT", "carrier-pigeon");
        }
        assert!(matches!(Config::from_env().transport, TransportConfig::Stdio));
        clear_env();
    }

    #[cfg(feature = "tcp")]
    #[test]
    fn test_tcp_transport_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_TRANSPORT", "TCP");
            std::env::set_var("MCP_TCP_PORT", "not-a-port");
        }
        match Config::from_env().transport {
            TransportConfig::Tcp(tcp) => {
                assert_eq!(tcp.host, DEFAULT_HOST);
                assert_eq!(tcp.port, DEFAULT_TCP_PORT);
            }
            other => panic!("Expected TCP transport, got {other:?}"),
        }
        clear_env();
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_transport_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_env();
        unsafe {
            std::env::set_var("MCP_TRANSPORT", "http");
            std::env::set_var("MCP_HTTP_PORT", "9090");
            std::env::set_var("MCP_HTTP_PATH", "/docs");
            std::env::set_var("MCP_HTTP_CORS", "off");
        }
        match Config::from_env().transport {
            TransportConfig::Http(http) => {
                assert_eq!(http.port, 9090);
                assert_eq!(http.rpc_path, "/docs");
                assert!(!http.enable_cors);
            }
            other => panic!("Expected HTTP transport, got {other:?}"),
        }
        clear_env();
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("1"));
        assert!(parse_flag("TRUE"));
        assert!(parse_flag(" on "));
        assert!(!parse_flag("0"));
        assert!(!parse_flag("false"));
        assert!(!parse_flag(""));
    }
}
