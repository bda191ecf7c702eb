//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod get_document;

pub use get_document::{GetDocumentParams, GetDocumentTool};
