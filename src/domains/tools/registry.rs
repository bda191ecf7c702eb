//! Tool Registry - tool metadata and HTTP dispatch.
//!
//! This module provides:
//! - The names and metadata of every retrieval tool
//! - HTTP dispatch for tool calls (when http feature is enabled)

use std::sync::Arc;
#[cfg(feature = "http")]
use tracing::warn;

use rmcp::model::Tool;

use super::definitions::GetDocumentTool;
use crate::domains::documents::DocumentCatalog;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - one retrieval tool per catalog document.
pub struct ToolRegistry {
    catalog: Arc<DocumentCatalog>,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(catalog: Arc<DocumentCatalog>) -> Self {
        Self { catalog }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        self.catalog
            .iter()
            .map(|document| document.tool_name.as_str())
            .collect()
    }

    /// Get all tools as Tool models (metadata).
    pub fn get_all_tools(&self) -> Vec<Tool> {
        self.catalog
            .iter()
            .map(|document| GetDocumentTool::to_tool(document))
            .collect()
    }

    /// Dispatch an HTTP tool call to the appropriate handler.
    ///
    /// This is used by the HTTP transport to call tools.
    #[cfg(feature = "http")]
    pub fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        match self.catalog.find_by_tool(name) {
            Some(document) => GetDocumentTool::http_handler(document, arguments),
            None => {
                warn!("Unknown tool requested: {}", name);
                Err(ToolError::not_found(name))
            }
        }
    }
}
