//! Resource-specific error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// A handler is already registered under this URI.
    #[error("Resource already registered: {0}")]
    AlreadyRegistered(String),

    /// The backing file of a binary resource could not be read.
    #[error("Failed to read resource {uri} from {}: {source}", path.display())]
    Read {
        uri: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }

    /// Create a new "already registered" error.
    pub fn already_registered(uri: impl Into<String>) -> Self {
        Self::AlreadyRegistered(uri.into())
    }

    /// Create a new read error for the given URI and backing path.
    pub fn read(uri: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            uri: uri.into(),
            path: path.into(),
            source,
        }
    }

    /// The URI this error refers to.
    pub fn uri(&self) -> &str {
        match self {
            Self::NotFound(uri) | Self::AlreadyRegistered(uri) => uri,
            Self::Read { uri, .. } => uri,
        }
    }
}
