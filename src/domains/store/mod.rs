//! Document store domain module.
//!
//! A document store keeps self-describing JSON documents in named
//! collections, addressed by a store-assigned [`RecordId`]. Business code
//! only sees the [`DocumentStore`] trait; the backend is picked from
//! configuration at startup and injected as an `Arc<dyn DocumentStore>`.
//!
//! ## Backends
//!
//! - `memory.rs` - process-local store, always available
//! - `mongo.rs` - MongoDB through the official driver - feature: `mongodb`

mod config;
mod error;
mod id;
mod memory;

#[cfg(feature = "mongodb")]
mod mongo;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

pub use config::{StoreBackend, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use id::{InvalidRecordId, RecordId};
pub use memory::InMemoryStore;

#[cfg(feature = "mongodb")]
pub use config::MongoConfig;

#[cfg(feature = "mongodb")]
pub use mongo::MongoStore;

/// A document as exchanged with a store: a JSON object.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Key under which a stored document carries its identifier.
///
/// Documents returned by [`DocumentStore::find_one`] hold the id here as
/// its hex text.
pub const ID_KEY: &str = "_id";

/// Outcome of inserting a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsertOneResult {
    /// Identifier the store assigned to the new document.
    #[serde(rename = "InsertedID")]
    pub inserted_id: RecordId,
}

/// Outcome of a partial-set update of a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateResult {
    /// Number of documents matching the id (0 or 1).
    #[serde(rename = "MatchedCount")]
    pub matched_count: u64,

    /// Number of documents whose content actually changed.
    #[serde(rename = "ModifiedCount")]
    pub modified_count: u64,

    /// Always 0: updates never insert.
    #[serde(rename = "UpsertedCount")]
    pub upserted_count: u64,

    /// Always `None`: updates never insert.
    #[serde(rename = "UpsertedID")]
    pub upserted_id: Option<RecordId>,
}

/// Outcome of deleting a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResult {
    /// Number of documents removed (0 or 1).
    #[serde(rename = "DeletedCount")]
    pub deleted_count: u64,
}

impl UpdateResult {
    /// An update that touched `matched` documents, `modified` of which changed.
    pub fn new(matched_count: u64, modified_count: u64) -> Self {
        Self {
            matched_count,
            modified_count,
            upserted_count: 0,
            upserted_id: None,
        }
    }
}

/// A collection-oriented store keyed by [`RecordId`].
///
/// Implementations must be safe to share between concurrent requests.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend name, used in logs and health reports.
    fn backend(&self) -> &'static str;

    /// Check that the backend answers.
    async fn ping(&self) -> StoreResult<()>;

    /// Insert a document and assign it a fresh id.
    ///
    /// Any [`ID_KEY`] entry in `document` is ignored.
    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> StoreResult<InsertOneResult>;

    /// Fetch the document with the given id, if any.
    async fn find_one(&self, collection: &str, id: &RecordId) -> StoreResult<Option<Document>>;

    /// Overwrite the fields present in `set` on the document with the given id.
    ///
    /// Fields absent from `set` are left untouched and [`ID_KEY`] is never
    /// modified. A missing document yields `matched_count == 0`, not an error.
    async fn update_one(
        &self,
        collection: &str,
        id: &RecordId,
        set: Document,
    ) -> StoreResult<UpdateResult>;

    /// Remove the document with the given id.
    ///
    /// A missing document yields `deleted_count == 0`, not an error.
    async fn delete_one(&self, collection: &str, id: &RecordId) -> StoreResult<DeleteResult>;
}

/// Build the configured store backend.
pub async fn connect(config: &StoreConfig) -> StoreResult<Arc<dyn DocumentStore>> {
    info!("Connecting document store: {}", config.description());

    match &config.backend {
        StoreBackend::Memory => Ok(Arc::new(InMemoryStore::new())),
        #[cfg(feature = "mongodb")]
        StoreBackend::MongoDb(cfg) => Ok(Arc::new(MongoStore::connect(cfg).await?)),
    }
}
