//! Document retrieval tool definition.
//!
//! One instance of this tool is registered per document (`docs.getSpec1`,
//! `docs.getSpec2`, ...). It takes no arguments and answers with the full
//! Markdown summary followed by pointers to the document's resources, so a
//! client that never lists resources still gets the content in one call.

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::info;

use crate::domains::documents::DocumentDefinition;
#[cfg(feature = "http")]
use crate::domains::tools::ToolError;

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the retrieval tool (none).
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct GetDocumentParams {}

// ============================================================================
// Tool Definition
// ============================================================================

/// Retrieval tool - returns a document summary plus its resource locations.
pub struct GetDocumentTool;

impl GetDocumentTool {
    /// Tool description shown to clients.
    pub fn description(document: &DocumentDefinition) -> String {
        format!(
            "Provides {} (Markdown summary plus the location of the original docx).",
            document.title
        )
    }

    /// Compose the tool answer for a document.
    ///
    /// The output starts with a heading and ends with the line naming the
    /// binary resource URI.
    pub fn render(document: &DocumentDefinition) -> String {
        format!(
            "### {title} (summary)\n\n\
             {body}\n\n\
             ---\n\n\
             The Markdown summary is also available as the resource:\n\
             - {text_uri}\n\n\
             The original Word document (docx) is available as the resource:\n\
             - {binary_uri}\n",
            title = document.title,
            body = document.text_content,
            text_uri = document.text_uri,
            binary_uri = document.binary_uri,
        )
    }

    /// Execute the tool logic.
    pub fn execute(document: &DocumentDefinition) -> CallToolResult {
        info!("Retrieval tool called: {}", document.tool_name);
        CallToolResult::success(vec![Content::text(Self::render(document))])
    }

    /// HTTP handler for this tool (for HTTP transport).
    #[cfg(feature = "http")]
    pub fn http_handler(
        document: &DocumentDefinition,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        if !(arguments.is_null() || arguments.is_object()) {
            return Err(ToolError::invalid_arguments(
                "arguments must be an object or omitted",
            ));
        }

        let result = Self::execute(document);

        Ok(serde_json::json!({
            "content": result.content,
            "isError": result.is_error.unwrap_or(false)
        }))
    }

    /// Create a Tool model for a document (metadata).
    pub fn to_tool(document: &DocumentDefinition) -> Tool {
        Tool {
            name: document.tool_name.clone().into(),
            description: Some(Self::description(document).into()),
            input_schema: cached_schema_for_type::<GetDocumentParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: Some(document.title.clone()),
        }
    }

    /// Create a ToolRoute for a document.
    pub fn create_route<S>(document: Arc<DocumentDefinition>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(&document), move |_ctx: ToolCallContext<'_, S>| {
            let document = document.clone();
            async move { Ok::<_, McpError>(Self::execute(&document)) }.boxed()
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
