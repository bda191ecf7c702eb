//! Resource service implementation.
//!
//! The ResourceService owns the URI -> handler dispatch table. It is filled
//! once from the document catalog at startup and never mutated afterwards;
//! every read goes straight to the registered handler.

use rmcp::model::{ReadResourceResult, Resource};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

use super::error::ResourceError;
use super::handlers::ResourceHandler;
use super::registry::get_all_resources;
use crate::domains::documents::DocumentCatalog;

/// Service for managing and accessing resources.
pub struct ResourceService {
    /// Registered handlers keyed by URI.
    handlers: BTreeMap<String, Arc<dyn ResourceHandler>>,
}

impl ResourceService {
    /// Create a new ResourceService exposing every document in the catalog.
    pub fn new(catalog: &DocumentCatalog) -> Result<Self, ResourceError> {
        info!("Initializing ResourceService");

        let mut service = Self {
            handlers: BTreeMap::new(),
        };

        for handler in get_all_resources(catalog) {
            service.register_handler(handler)?;
        }

        info!("Registered {} resources", service.handlers.len());

        Ok(service)
    }

    /// Register a handler under its URI.
    ///
    /// Fails if the URI is already taken.
    pub fn register_handler(
        &mut self,
        handler: Arc<dyn ResourceHandler>,
    ) -> Result<(), ResourceError> {
        let uri = handler.uri().to_string();
        if self.handlers.contains_key(&uri) {
            return Err(ResourceError::already_registered(uri));
        }

        info!("Registering resource: {}", uri);
        self.handlers.insert(uri, handler);
        Ok(())
    }

    /// All registered URIs, sorted.
    pub fn uris(&self) -> Vec<&str> {
        self.handlers.keys().map(String::as_str).collect()
    }

    /// List all available resources.
    pub async fn list_resources(&self) -> Vec<Resource> {
        self.handlers
            .values()
            .map(|handler| handler.resource())
            .collect()
    }

    /// Read a resource by URI.
    pub async fn read_resource(&self, uri: &str) -> Result<ReadResourceResult, ResourceError> {
        let handler = self
            .handlers
            .get(uri)
            .ok_or_else(|| ResourceError::not_found(uri))?;

        let content = handler.read().await.inspect_err(|e| {
            warn!("{}", e);
        })?;

        Ok(ReadResourceResult {
            contents: vec![content],
        })
    }
}
