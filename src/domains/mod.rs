//! Domains module containing business logic organized by bounded contexts.
//!
//! - **documents**: the document definitions and their validated catalog
//! - **resources**: binary and text representations addressable by URI
//! - **tools**: per-document retrieval tools

pub mod documents;
pub mod resources;
pub mod tools;
