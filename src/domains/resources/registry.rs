//! Resource Registry - derives resource handlers from the document catalog.
//!
//! Each document contributes exactly two handlers, one per representation.
//! Adding a document to the catalog is enough to expose it here.

use std::sync::Arc;

use super::handlers::{BinaryDocumentHandler, ResourceHandler, TextDocumentHandler};
use crate::domains::documents::{DocumentCatalog, DocumentDefinition};

/// Build the binary and text handlers for one document.
pub fn document_handlers(document: &Arc<DocumentDefinition>) -> [Arc<dyn ResourceHandler>; 2] {
    [
        Arc::new(BinaryDocumentHandler::new(document.clone())),
        Arc::new(TextDocumentHandler::new(document.clone())),
    ]
}

/// Get all resource handlers for the catalog, in catalog order.
pub fn get_all_resources(catalog: &DocumentCatalog) -> Vec<Arc<dyn ResourceHandler>> {
    catalog.iter().flat_map(document_handlers).collect()
}
