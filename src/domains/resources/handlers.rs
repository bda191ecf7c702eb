//! Resource handlers module.
//!
//! A handler binds one URI to the function that produces its content. Every
//! document contributes two handlers: one for the binary original and one
//! for the Markdown summary.

use async_trait::async_trait;
use base64::{Engine, engine::general_purpose::STANDARD};
use rmcp::model::{AnnotateAble, RawResource, Resource, ResourceContents};
use std::sync::Arc;
use tracing::{debug, instrument};

use super::error::ResourceError;
use crate::domains::documents::{DocumentDefinition, MIME_TYPE_DOCX, MIME_TYPE_MARKDOWN};

/// Trait for content producers registered in the resource service.
#[async_trait]
pub trait ResourceHandler: Send + Sync {
    /// The exact URI this handler answers.
    fn uri(&self) -> &str;

    /// Metadata advertised in `resources/list`.
    fn resource(&self) -> Resource;

    /// Produce a fresh content attachment for this resource.
    async fn read(&self) -> Result<ResourceContents, ResourceError>;
}

// ============================================================================
// Binary original
// ============================================================================

/// Serves the `.docx` original of a document as a base64 blob.
///
/// The file is read from disk on every call. Nothing is cached, so a file
/// that is replaced or restored is picked up by the next request.
pub struct BinaryDocumentHandler {
    document: Arc<DocumentDefinition>,
}

impl BinaryDocumentHandler {
    pub fn new(document: Arc<DocumentDefinition>) -> Self {
        Self { document }
    }
}

#[async_trait]
impl ResourceHandler for BinaryDocumentHandler {
    fn uri(&self) -> &str {
        &self.document.binary_uri
    }

    fn resource(&self) -> Resource {
        let mut raw = RawResource::new(self.uri(), self.document.binary_resource_name());
        raw.description = Some(format!("{} (original Word document)", self.document.title));
        raw.mime_type = Some(MIME_TYPE_DOCX.to_string());
        raw.no_annotation()
    }

    #[instrument(skip(self), fields(uri = %self.document.binary_uri))]
    async fn read(&self) -> Result<ResourceContents, ResourceError> {
        let path = &self.document.binary_location;

        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ResourceError::read(self.uri(), path, e))?;

        debug!("Read {} bytes from {}", bytes.len(), path.display());

        Ok(ResourceContents::BlobResourceContents {
            uri: self.uri().to_string(),
            mime_type: Some(MIME_TYPE_DOCX.to_string()),
            blob: STANDARD.encode(&bytes),
            meta: None,
        })
    }
}

// ============================================================================
// Text summary
// ============================================================================

/// Serves the in-memory Markdown summary of a document.
pub struct TextDocumentHandler {
    document: Arc<DocumentDefinition>,
}

impl TextDocumentHandler {
    pub fn new(document: Arc<DocumentDefinition>) -> Self {
        Self { document }
    }
}

#[async_trait]
impl ResourceHandler for TextDocumentHandler {
    fn uri(&self) -> &str {
        &self.document.text_uri
    }

    fn resource(&self) -> Resource {
        let mut raw = RawResource::new(self.uri(), self.document.text_resource_name());
        raw.description = Some(format!("{} (Markdown summary)", self.document.title));
        raw.mime_type = Some(MIME_TYPE_MARKDOWN.to_string());
        raw.no_annotation()
    }

    async fn read(&self) -> Result<ResourceContents, ResourceError> {
        Ok(ResourceContents::TextResourceContents {
            uri: self.uri().to_string(),
            mime_type: Some(MIME_TYPE_MARKDOWN.to_string()),
            text: self.document.text_content.clone(),
            meta: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn document(dir: &Path) -> Arc<DocumentDefinition> {
        Arc::new(DocumentDefinition::new(
            "cyber",
            "spec-1",
            "API Spec #1",
            dir,
            "# Spec 1\n\nbody",
        ))
    }

    #[test]
    fn test_binary_resource_metadata() {
        let handler = BinaryDocumentHandler::new(document(Path::new("spec")));
        let resource = handler.resource();
        assert_eq!(resource.raw.uri, "resource://cyber/spec-1.docx");
        assert_eq!(resource.raw.name, "spec-1-docx");
        assert_eq!(resource.raw.mime_type.as_deref(), Some(MIME_TYPE_DOCX));
    }

    #[test]
    fn test_text_resource_metadata() {
        let handler = TextDocumentHandler::new(document(Path::new("spec")));
        let resource = handler.resource();
        assert_eq!(resource.raw.uri, "resource://cyber/spec-1.md");
        assert_eq!(resource.raw.name, "spec-1-md");
        assert_eq!(resource.raw.mime_type.as_deref(), Some("text/markdown"));
    }

    #[test]
    fn test_text_read_returns_content_verbatim() {
        let handler = TextDocumentHandler::new(document(Path::new("spec")));

        for _ in 0..3 {
            match tokio_test::block_on(handler.read()).unwrap() {
                ResourceContents::TextResourceContents {
                    uri,
                    mime_type,
                    text,
                    ..
                } => {
                    assert_eq!(uri, "resource://cyber/spec-1.md");
                    assert_eq!(mime_type.as_deref(), Some("text/markdown"));
                    assert_eq!(text, "# Spec 1\n\nbody");
                }
                _ => panic!("Expected text contents"),
            }
        }
    }

    #[tokio::test]
    async fn test_binary_read_encodes_file_bytes() {
        let temp_dir = TempDir::new().unwrap();
        let bytes = vec![0x50, 0x4b, 0x03, 0x04, 0x00, 0xff, 0x10];
        fs::write(temp_dir.path().join("spec-1.docx"), &bytes).unwrap();

        let handler = BinaryDocumentHandler::new(document(temp_dir.path()));
        match handler.read().await.unwrap() {
            ResourceContents::BlobResourceContents {
                uri,
                mime_type,
                blob,
                ..
            } => {
                assert_eq!(uri, "resource://cyber/spec-1.docx");
                assert_eq!(mime_type.as_deref(), Some(MIME_TYPE_DOCX));
                assert_eq!(STANDARD.decode(blob).unwrap(), bytes);
            }
            _ => panic!("Expected blob contents"),
        }
    }

    #[tokio::test]
    async fn test_binary_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let handler = BinaryDocumentHandler::new(document(temp_dir.path()));

        let err = handler.read().await.unwrap_err();
        match err {
            ResourceError::Read { uri, path, source } => {
                assert_eq!(uri, "resource://cyber/spec-1.docx");
                assert_eq!(path, temp_dir.path().join("spec-1.docx"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("Expected read error, got {other:?}"),
        }
    }
}
