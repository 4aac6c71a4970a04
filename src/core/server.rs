//! API server assembly.
//!
//! This module wires configuration, the document store and the domain
//! controllers together. The HTTP transport mounts the resulting router.

use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error::{Error, Result};
use crate::domains::real_estate::RealEstateController;
use crate::domains::store::{self, DocumentStore};

/// The assembled API server.
///
/// Cheap to clone; all state lives behind `Arc`s.
#[derive(Clone)]
pub struct ApiServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Shared document store handle.
    store: Arc<dyn DocumentStore>,

    /// Controller for the real estate resource.
    real_estate: Arc<RealEstateController>,
}

impl ApiServer {
    /// Create a server over an already connected store.
    pub fn new(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        let config = Arc::new(config);

        let real_estate = Arc::new(RealEstateController::new(
            store.clone(),
            config.store.collection.clone(),
            config.request.timeout,
        ));

        Self {
            config,
            store,
            real_estate,
        }
    }

    /// Connect the configured store and create the server.
    pub async fn from_config(config: Config) -> Result<Self> {
        if config.store.collection.trim().is_empty() {
            return Err(Error::config("store collection name must not be empty"));
        }
        if config.request.timeout.is_zero() {
            return Err(Error::config("request timeout must be greater than zero"));
        }

        let store = store::connect(&config.store).await?;
        info!(
            "Server initialized with {} store (request timeout {:?})",
            store.backend(),
            config.request.timeout
        );

        Ok(Self::new(config, store))
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

    /// Get the shared store handle.
    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// Get the real estate controller.
    pub fn real_estate(&self) -> &Arc<RealEstateController> {
        &self.real_estate
    }
}
