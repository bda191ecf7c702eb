//! Document catalog - the validated, immutable set of served documents.
//!
//! The catalog is assembled once at startup. Construction fails if any two
//! definitions collide on a logical name, a resource URI or a tool name, so a
//! misconfigured server never reaches the point of accepting requests.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, info};

use super::definition::DocumentDefinition;
use super::error::CatalogError;
use crate::core::config::DocumentsConfig;

const SPEC_1_MD: &str = include_str!("content/spec-1.md");
const SPEC_2_MD: &str = include_str!("content/spec-2.md");

/// The validated set of document definitions.
#[derive(Debug, Clone)]
pub struct DocumentCatalog {
    documents: Vec<Arc<DocumentDefinition>>,
}

impl DocumentCatalog {
    /// Build a catalog from definitions, checking identifier uniqueness.
    pub fn new(definitions: Vec<DocumentDefinition>) -> Result<Self, CatalogError> {
        let mut names: HashSet<&str> = HashSet::new();
        let mut uris: HashMap<&str, &str> = HashMap::new();
        let mut tools: HashMap<&str, &str> = HashMap::new();

        for doc in &definitions {
            let name = doc.logical_name.as_str();

            if !names.insert(name) {
                return Err(CatalogError::DuplicateName(name.to_string()));
            }

            // Binary and text URIs share a single namespace.
            for uri in [doc.binary_uri.as_str(), doc.text_uri.as_str()] {
                if let Some(first) = uris.insert(uri, name) {
                    return Err(CatalogError::DuplicateUri {
                        uri: uri.to_string(),
                        first: first.to_string(),
                        second: name.to_string(),
                    });
                }
            }

            if let Some(first) = tools.insert(doc.tool_name.as_str(), name) {
                return Err(CatalogError::DuplicateToolName {
                    tool: doc.tool_name.clone(),
                    first: first.to_string(),
                    second: name.to_string(),
                });
            }

            debug!(
                document = name,
                binary_uri = %doc.binary_uri,
                text_uri = %doc.text_uri,
                tool = %doc.tool_name,
                "Document definition accepted"
            );
        }

        info!("Document catalog built with {} documents", definitions.len());

        Ok(Self {
            documents: definitions.into_iter().map(Arc::new).collect(),
        })
    }

    /// The built-in document set, rooted at the configured directory.
    pub fn builtin(config: &DocumentsConfig) -> Result<Self, CatalogError> {
        let namespace = config.namespace.as_str();
        let docs_dir = config.base_path.as_path();

        Self::new(vec![
            DocumentDefinition::new(namespace, "spec-1", "API Spec #1", docs_dir, SPEC_1_MD),
            DocumentDefinition::new(namespace, "spec-2", "API Spec #2", docs_dir, SPEC_2_MD),
        ])
    }

    /// Iterate over the documents in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<DocumentDefinition>> {
        self.documents.iter()
    }

    /// Number of documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Look up a document by logical name.
    pub fn get(&self, logical_name: &str) -> Option<&Arc<DocumentDefinition>> {
        self.documents
            .iter()
            .find(|doc| doc.logical_name == logical_name)
    }

    /// Look up a document by the name of its retrieval tool.
    pub fn find_by_tool(&self, tool_name: &str) -> Option<&Arc<DocumentDefinition>> {
        self.documents.iter().find(|doc| doc.tool_name == tool_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn doc(name: &str) -> DocumentDefinition {
        DocumentDefinition::new("test", name, name, Path::new("docs"), "body")
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = DocumentCatalog::builtin(&DocumentsConfig::default()).unwrap();
        assert_eq!(catalog.len(), 2);

        let spec_1 = catalog.get("spec-1").unwrap();
        assert_eq!(spec_1.binary_uri, "resource://cyber/spec-1.docx");
        assert_eq!(spec_1.text_uri, "resource://cyber/spec-1.md");
        assert_eq!(spec_1.tool_name, "docs.getSpec1");
        assert!(spec_1.text_content.contains("/svc/mcp/apipath"));

        let spec_2 = catalog.find_by_tool("docs.getSpec2").unwrap();
        assert_eq!(spec_2.logical_name, "spec-2");
        assert!(spec_2.text_content.starts_with("# API Spec #2"));
    }

    #[test]
    fn test_builtin_text_has_no_trailing_newline() {
        let catalog = DocumentCatalog::builtin(&DocumentsConfig::default()).unwrap();
        for doc in catalog.iter() {
            assert!(!doc.text_content.ends_with('\n'), "{}", doc.logical_name);
        }

        let spec_2 = catalog.get("spec-2").unwrap();
        let expected = [
            "# API Spec #2",
            "",
            "이 문서는 두 번째 API 스펙 문서입니다.",
            "두 번째 문서 내용에 맞게 이 텍스트를 수정해 주세요.",
        ]
        .join("\n");
        assert_eq!(spec_2.text_content, expected);
    }

    #[test]
    fn test_builtin_uris_pairwise_distinct() {
        let catalog = DocumentCatalog::builtin(&DocumentsConfig::default()).unwrap();

        let mut seen = HashSet::new();
        for doc in catalog.iter() {
            assert!(seen.insert(doc.binary_uri.clone()));
            assert!(seen.insert(doc.text_uri.clone()));
        }
        assert_eq!(seen.len(), catalog.len() * 2);
    }

    #[test]
    fn test_builtin_follows_config() {
        let config = DocumentsConfig {
            base_path: "/srv/docs".into(),
            namespace: "acme".to_string(),
        };
        let catalog = DocumentCatalog::builtin(&config).unwrap();
        let spec_1 = catalog.get("spec-1").unwrap();
        assert_eq!(spec_1.binary_uri, "resource://acme/spec-1.docx");
        assert_eq!(spec_1.binary_location, Path::new("/srv/docs/spec-1.docx"));
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = DocumentCatalog::new(vec![doc("a"), doc("a")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateName("a".to_string()));
    }

    #[test]
    fn test_duplicate_tool_name_rejected() {
        let err = DocumentCatalog::new(vec![
            doc("a"),
            DocumentDefinition {
                tool_name: "docs.getA".to_string(),
                ..doc("b")
            },
        ])
        .unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateToolName { ref tool, .. } if tool == "docs.getA"));
    }

    #[test]
    fn test_duplicate_uri_rejected() {
        let mut clash = doc("b");
        clash.text_uri = "resource://test/a.md".to_string();

        let err = DocumentCatalog::new(vec![doc("a"), clash]).unwrap_err();
        assert_eq!(
            err,
            CatalogError::DuplicateUri {
                uri: "resource://test/a.md".to_string(),
                first: "a".to_string(),
                second: "b".to_string(),
            }
        );
    }

    #[test]
    fn test_binary_and_text_uri_share_namespace() {
        let mut clash = doc("b");
        clash.binary_uri = "resource://test/a.md".to_string();

        let result = DocumentCatalog::new(vec![doc("a"), clash]);
        assert!(matches!(result, Err(CatalogError::DuplicateUri { .. })));
    }

    #[test]
    fn test_self_colliding_uris_rejected() {
        let mut broken = doc("a");
        broken.text_uri = broken.binary_uri.clone();

        let result = DocumentCatalog::new(vec![broken]);
        assert!(matches!(result, Err(CatalogError::DuplicateUri { .. })));
    }
}
