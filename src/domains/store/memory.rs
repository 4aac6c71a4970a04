//! In-memory document store.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

use super::{
    DeleteResult, Document, DocumentStore, ID_KEY, InsertOneResult, RecordId, StoreResult,
    UpdateResult,
};

type Collection = HashMap<RecordId, Document>;

/// Process-local [`DocumentStore`] guarded by an async read-write lock.
///
/// Documents are kept without their [`ID_KEY`]; it is re-attached on read.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<String, Collection>>,
}

impl InMemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of documents currently held in `collection`.
    pub async fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map_or(0, HashMap::len)
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }

    #[instrument(skip(self, document))]
    async fn insert_one(
        &self,
        collection: &str,
        mut document: Document,
    ) -> StoreResult<InsertOneResult> {
        document.remove(ID_KEY);
        let id = RecordId::generate();

        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(id, document);

        debug!("Inserted document {}", id);
        Ok(InsertOneResult { inserted_id: id })
    }

    #[instrument(skip(self))]
    async fn find_one(&self, collection: &str, id: &RecordId) -> StoreResult<Option<Document>> {
        let collections = self.collections.read().await;
        let found = collections
            .get(collection)
            .and_then(|docs| docs.get(id))
            .map(|doc| {
                let mut doc = doc.clone();
                doc.insert(ID_KEY.to_string(), id.to_string().into());
                doc
            });

        Ok(found)
    }

    #[instrument(skip(self, set))]
    async fn update_one(
        &self,
        collection: &str,
        id: &RecordId,
        set: Document,
    ) -> StoreResult<UpdateResult> {
        let mut collections = self.collections.write().await;
        let Some(doc) = collections.get_mut(collection).and_then(|docs| docs.get_mut(id)) else {
            return Ok(UpdateResult::new(0, 0));
        };

        let mut changed = false;
        for (key, value) in set {
            if key == ID_KEY {
                continue;
            }
            if doc.get(&key) != Some(&value) {
                doc.insert(key, value);
                changed = true;
            }
        }

        Ok(UpdateResult::new(1, u64::from(changed)))
    }

    #[instrument(skip(self))]
    async fn delete_one(&self, collection: &str, id: &RecordId) -> StoreResult<DeleteResult> {
        let removed = self
            .collections
            .write()
            .await
            .get_mut(collection)
            .and_then(|docs| docs.remove(id));

        Ok(DeleteResult {
            deleted_count: u64::from(removed.is_some()),
        })
    }
}
