//! Documents domain module.
//!
//! Holds the document definitions served by this server and the catalog
//! that validates them at startup. Every other domain is driven from the
//! catalog: each document yields one binary resource, one text resource and
//! one retrieval tool.
//!
//! ## Adding a New Document
//!
//! 1. Drop its Markdown summary in `content/`
//! 2. Add a `DocumentDefinition` to `DocumentCatalog::builtin()`
//! 3. Place the `.docx` original in the configured documents directory

mod catalog;
mod definition;
mod error;

pub use catalog::DocumentCatalog;
pub use definition::{DocumentDefinition, MIME_TYPE_DOCX, MIME_TYPE_MARKDOWN, URI_SCHEME};
pub use error::CatalogError;
