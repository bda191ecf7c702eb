//! Catalog-specific error types.

use thiserror::Error;

/// Configuration errors detected while assembling the document catalog.
///
/// Any of these is fatal: the server must not start serving requests.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// Two definitions share a logical name.
    #[error("Duplicate document name: {0}")]
    DuplicateName(String),

    /// A binary or text URI is claimed more than once.
    #[error("Duplicate resource URI '{uri}' (documents '{first}' and '{second}')")]
    DuplicateUri {
        uri: String,
        first: String,
        second: String,
    },

    /// Two definitions share a tool name.
    #[error("Duplicate tool name '{tool}' (documents '{first}' and '{second}')")]
    DuplicateToolName {
        tool: String,
        first: String,
        second: String,
    },
}
