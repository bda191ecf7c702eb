//! Document definition - the unit of configuration for the server.
//!
//! A definition describes one logical document and the stable identifiers
//! under which its two representations and its retrieval tool are exposed.

use std::path::{Path, PathBuf};

/// MIME type of the binary original (Word document).
pub const MIME_TYPE_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// MIME type of the text summary.
pub const MIME_TYPE_MARKDOWN: &str = "text/markdown";

/// URI scheme shared by every document resource.
pub const URI_SCHEME: &str = "resource://";

/// An immutable description of one served document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentDefinition {
    /// Unique human-readable identifier (e.g. `spec-1`).
    pub logical_name: String,

    /// Display title used in resource metadata and tool output.
    pub title: String,

    /// Filesystem path of the binary original.
    pub binary_location: PathBuf,

    /// URI under which the binary form is addressable.
    pub binary_uri: String,

    /// URI under which the text form is addressable.
    pub text_uri: String,

    /// Name of the retrieval tool for this document.
    pub tool_name: String,

    /// Full text-form document body.
    pub text_content: String,
}

impl DocumentDefinition {
    /// Create a definition with identifiers derived from the logical name.
    ///
    /// For `spec-1` in namespace `cyber` this yields
    /// `resource://cyber/spec-1.docx`, `resource://cyber/spec-1.md`,
    /// `<docs_dir>/spec-1.docx` and the tool `docs.getSpec1`.
    pub fn new(
        namespace: &str,
        logical_name: impl Into<String>,
        title: impl Into<String>,
        docs_dir: &Path,
        text_content: impl Into<String>,
    ) -> Self {
        let logical_name = logical_name.into();

        Self {
            binary_location: docs_dir.join(format!("{logical_name}.docx")),
            binary_uri: format!("{URI_SCHEME}{namespace}/{logical_name}.docx"),
            text_uri: format!("{URI_SCHEME}{namespace}/{logical_name}.md"),
            tool_name: format!("docs.get{}", pascal_case(&logical_name)),
            title: title.into(),
            text_content: text_content.into(),
            logical_name,
        }
    }

    /// Resource name of the binary representation (e.g. `spec-1-docx`).
    pub fn binary_resource_name(&self) -> String {
        format!("{}-docx", self.logical_name)
    }

    /// Resource name of the text representation (e.g. `spec-1-md`).
    pub fn text_resource_name(&self) -> String {
        format!("{}-md", self.logical_name)
    }
}

/// Convert a kebab/snake case name to PascalCase (`spec-1` -> `Spec1`).
fn pascal_case(name: &str) -> String {
    name.split(['-', '_', ' '])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect()
}
