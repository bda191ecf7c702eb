//! Resources domain module.
//!
//! Resources are read-only documents addressable by URI. Every document in
//! the catalog is exposed twice: as its binary `.docx` original (base64 blob)
//! and as its Markdown summary (text).
//!
//! ## Architecture
//!
//! - `handlers.rs` - Content producers, one per representation
//! - `registry.rs` - Derives handlers from the document catalog
//! - `service.rs` - URI dispatch table for listing and reading
//!
//! **No need to modify `service.rs` when adding documents!**

mod error;
mod handlers;
mod registry;
mod service;

pub use error::ResourceError;
pub use handlers::{BinaryDocumentHandler, ResourceHandler, TextDocumentHandler};
pub use registry::{document_handlers, get_all_resources};
pub use service::ResourceService;
