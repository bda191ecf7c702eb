//! Tool Router - builds the rmcp ToolRouter from the document catalog.
//!
//! Every document gets one retrieval route; the routes differ only in the
//! document they are bound to.

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::GetDocumentTool;
use crate::domains::documents::DocumentCatalog;

/// Build the tool router with one retrieval tool per document.
pub fn build_tool_router<S>(catalog: &DocumentCatalog) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    catalog.iter().fold(ToolRouter::new(), |router, document| {
        router.with_route(GetDocumentTool::create_route(document.clone()))
    })
}
