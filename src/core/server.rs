//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the resources and tools domains.
//!
//! ## Registration
//!
//! Construction is the single registration pass: the document catalog is
//! validated, every document's binary and text resources are registered in
//! the `ResourceService`, and its retrieval tool is added to the `ToolRouter`.
//! Any identifier collision fails construction, so the transport is never
//! started with an inconsistent table.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use super::error::Error;
use crate::domains::{
    documents::DocumentCatalog,
    resources::{ResourceError, ResourceService},
    tools::build_tool_router,
};

#[cfg(feature = "http")]
use crate::domains::tools::{ToolError, ToolRegistry};

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp and coordinates
/// between the domain services to handle MCP protocol messages.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// The validated document set.
    catalog: Arc<DocumentCatalog>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server serving the built-in documents.
    pub fn new(config: Config) -> crate::Result<Self> {
        let catalog = DocumentCatalog::builtin(&config.documents)?;
        Self::with_catalog(config, catalog)
    }

    /// Create a new MCP server serving the given catalog.
    pub fn with_catalog(config: Config, catalog: DocumentCatalog) -> crate::Result<Self> {
        if catalog.is_empty() {
            return Err(Error::config("no documents configured"));
        }

        let resource_service = Arc::new(ResourceService::new(&catalog)?);
        let tool_router = build_tool_router::<Self>(&catalog);

        info!(
            "Registered {} resources and {} tools for {} documents",
            resource_service.uris().len(),
            tool_router.list_all().len(),
            catalog.len()
        );

        Ok(Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
            resource_service,
            tool_router,
        })
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the document catalog.
    pub fn catalog(&self) -> &Arc<DocumentCatalog> {
        &self.catalog
    }

    /// Instructions advertised to clients on initialize.
    pub fn instructions(&self) -> String {
        format!(
            "Serves {} API specification documents. Each document is available as its \
             original Word file (resource://{ns}/<doc>.docx, base64 blob), as a Markdown \
             summary (resource://{ns}/<doc>.md), and through a docs.get<Doc> tool that \
             returns the summary together with both resource URIs.",
            self.catalog.len(),
            ns = self.config.documents.namespace,
        )
    }

    // ========================================================================
    // HTTP Transport Support Methods
    // ========================================================================

    /// List all available tools (for HTTP transport).
    pub fn list_tools(&self) -> Vec<serde_json::Value> {
        self.tool_router
            .list_all()
            .into_iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "title": t.title,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect()
    }

    /// Call a tool by name (for HTTP transport).
    #[cfg(feature = "http")]
    pub async fn call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<serde_json::Value, ToolError> {
        let registry = ToolRegistry::new(self.catalog.clone());
        registry.call_tool(name, arguments)
    }

    /// List all available resources (for HTTP transport).
    pub async fn list_resources(&self) -> Vec<serde_json::Value> {
        let resources = self.resource_service.list_resources().await;

        resources
            .into_iter()
            .map(|r| {
                serde_json::json!({
                    "uri": r.raw.uri,
                    "name": r.raw.name,
                    "description": r.raw.description,
                    "mimeType": r.raw.mime_type
                })
            })
            .collect()
    }

    /// Read a resource by URI (for HTTP transport).
    pub async fn read_resource(
        &self,
        uri: &str,
    ) -> Result<serde_json::Value, ResourceError> {
        let result = self.resource_service.read_resource(uri).await?;
        Ok(serde_json::json!({
            "contents": result.contents
        }))
    }
}

/// Map a resource failure onto the MCP error space.
///
/// Unknown URIs are reported as "resource not found"; read failures as
/// internal errors carrying the URI, so the client can tell them apart.
fn resource_error_to_mcp(err: ResourceError) -> McpError {
    let data = Some(serde_json::json!({ "uri": err.uri() }));
    match err {
        ResourceError::NotFound(_) => McpError::resource_not_found(err.to_string(), data),
        _ => McpError::internal_error(err.to_string(), data),
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(self.instructions()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(resource_error_to_mcp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::DocumentsConfig;
    use crate::domains::documents::DocumentDefinition;
    use rmcp::service::serve_directly;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn server_in(dir: &Path) -> McpServer {
        let mut config = Config::default();
        config.documents = DocumentsConfig {
            base_path: dir.to_path_buf(),
            namespace: "cyber".to_string(),
        };
        McpServer::new(config).unwrap()
    }

    #[test]
    fn test_server_registers_three_handlers_per_document() {
        let temp_dir = TempDir::new().unwrap();
        let server = server_in(temp_dir.path());

        let documents = server.catalog().len();
        assert_eq!(tokio_test::block_on(server.list_resources()).len(), documents * 2);
        assert_eq!(server.list_tools().len(), documents);
    }

    #[test]
    fn test_server_rejects_colliding_catalog() {
        let dir = Path::new("spec");
        let first = DocumentDefinition::new("cyber", "a", "A", dir, "a");
        let second = DocumentDefinition {
            tool_name: first.tool_name.clone(),
            ..DocumentDefinition::new("cyber", "b", "B", dir, "b")
        };

        let result = DocumentCatalog::new(vec![first, second])
            .map_err(Error::from)
            .and_then(|catalog| McpServer::with_catalog(Config::default(), catalog));
        assert!(matches!(result, Err(Error::Catalog(_))));
    }

    #[test]
    fn test_server_rejects_empty_catalog() {
        let catalog = DocumentCatalog::new(vec![]).unwrap();
        let result = McpServer::with_catalog(Config::default(), catalog);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[tokio::test]
    async fn test_read_resource_json() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("spec-1.docx"), b"docx bytes").unwrap();
        let server = server_in(temp_dir.path());

        let value = server
            .read_resource("resource://cyber/spec-1.docx")
            .await
            .unwrap();
        let content = &value["contents"][0];
        assert_eq!(content["uri"], "resource://cyber/spec-1.docx");
        assert_eq!(
            content["mimeType"],
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
        assert_eq!(content["blob"], "ZG9jeCBieXRlcw==");

        let value = server
            .read_resource("resource://cyber/spec-2.md")
            .await
            .unwrap();
        assert_eq!(value["contents"][0]["mimeType"], "text/markdown");
        assert!(
            value["contents"][0]["text"]
                .as_str()
                .unwrap()
                .starts_with("# API Spec #2")
        );
    }

    #[tokio::test]
    async fn test_read_resource_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let server = server_in(temp_dir.path());

        let result = server.read_resource("resource://cyber/spec-2.docx").await;
        assert!(matches!(result, Err(ResourceError::Read { .. })));
    }

    #[test]
    fn test_resource_error_mapping() {
        let not_found = resource_error_to_mcp(ResourceError::not_found("resource://cyber/x.md"));
        assert_eq!(not_found.code, ErrorCode::RESOURCE_NOT_FOUND);

        let read = resource_error_to_mcp(ResourceError::read(
            "resource://cyber/spec-1.docx",
            "spec/spec-1.docx",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        ));
        assert_eq!(read.code, ErrorCode::INTERNAL_ERROR);
        assert_eq!(
            read.data,
            Some(serde_json::json!({ "uri": "resource://cyber/spec-1.docx" }))
        );
    }

    fn request_context(peer: rmcp::Peer<RoleServer>) -> RequestContext<RoleServer> {
        RequestContext {
            ct: Default::default(),
            id: NumberOrString::Number(1),
            meta: Meta::default(),
            extensions: Extensions::default(),
            peer,
        }
    }

    fn tool_request(name: &'static str) -> CallToolRequestParam {
        CallToolRequestParam {
            name: name.into(),
            arguments: None,
        }
    }

    #[tokio::test]
    async fn test_call_tool_through_router() {
        let temp_dir = TempDir::new().unwrap();
        let server = server_in(temp_dir.path());
        let (server_io, _client_io) = tokio::io::duplex(4096);
        let running =
            serve_directly::<RoleServer, _, _, _, _>(server.clone(), server_io, None);

        let result = ServerHandler::call_tool(
            &server,
            tool_request("docs.getSpec2"),
            request_context(running.peer().clone()),
        )
        .await
        .unwrap();

        assert!(!result.is_error.unwrap_or(false));
        let text = match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            _ => panic!("Expected text content"),
        };
        assert!(text.starts_with("### API Spec #2"));
        assert!(text.ends_with("- resource://cyber/spec-2.docx\n"));
        assert!(!text.contains("\n\n\n---"));
    }

    #[tokio::test]
    async fn test_call_unknown_tool() {
        let temp_dir = TempDir::new().unwrap();
        let server = server_in(temp_dir.path());
        let (server_io, _client_io) = tokio::io::duplex(4096);
        let running =
            serve_directly::<RoleServer, _, _, _, _>(server.clone(), server_io, None);

        let err = ServerHandler::call_tool(
            &server,
            tool_request("docs.getSpec9"),
            request_context(running.peer().clone()),
        )
        .await
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
    }

    #[test]
    fn test_get_info() {
        let temp_dir = TempDir::new().unwrap();
        let server = server_in(temp_dir.path());
        let info = server.get_info();
        assert_eq!(info.server_info.name, "cyber-mcp-docs");
        assert!(info.instructions.unwrap().contains("resource://cyber/<doc>.docx"));
    }
}
