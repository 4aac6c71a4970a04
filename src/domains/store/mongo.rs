//! MongoDB document store.
//!
//! Documents cross this boundary as JSON objects and are stored as BSON.
//! The id is kept as a native ObjectId under `_id`.

use async_trait::async_trait;
use bson::{Bson, doc};
use mongodb::{Client, Collection, Database};
use tracing::{info, instrument};

use super::config::MongoConfig;
use super::{
    DeleteResult, Document, DocumentStore, ID_KEY, InsertOneResult, RecordId, StoreError,
    StoreResult, UpdateResult,
};

/// [`DocumentStore`] backed by a MongoDB database.
#[derive(Clone)]
pub struct MongoStore {
    database: Database,
}

impl MongoStore {
    /// Connect to the configured server and database.
    ///
    /// The driver connects lazily; this only validates the connection string.
    pub async fn connect(config: &MongoConfig) -> StoreResult<Self> {
        let client = Client::with_uri_str(&config.uri).await?;
        info!("MongoDB client ready (database '{}')", config.database);

        Ok(Self {
            database: client.database(&config.database),
        })
    }

    fn collection(&self, name: &str) -> Collection<bson::Document> {
        self.database.collection(name)
    }
}

/// Convert a JSON object into BSON, dropping any `_id`.
fn to_bson(document: &Document) -> StoreResult<bson::Document> {
    let mut converted = bson::to_document(document)?;
    converted.remove(ID_KEY);
    Ok(converted)
}

/// Convert a stored BSON document back into JSON with a hex `_id`.
fn from_bson(mut document: bson::Document) -> StoreResult<Document> {
    let id = match document.remove(ID_KEY) {
        Some(Bson::ObjectId(oid)) => RecordId::from(oid),
        other => {
            return Err(StoreError::corrupt(format!(
                "expected ObjectId in '{}', found {:?}",
                ID_KEY, other
            )));
        }
    };

    let serde_json::Value::Object(mut converted) = Bson::Document(document).into_relaxed_extjson()
    else {
        return Err(StoreError::corrupt("document did not convert to a JSON object"));
    };

    converted.insert(ID_KEY.to_string(), id.to_string().into());
    Ok(converted)
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn backend(&self) -> &'static str {
        "mongodb"
    }

    async fn ping(&self) -> StoreResult<()> {
        self.database.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }

    #[instrument(skip(self, document))]
    async fn insert_one(
        &self,
        collection: &str,
        document: Document,
    ) -> StoreResult<InsertOneResult> {
        let mut converted = to_bson(&document)?;
        let id = RecordId::generate();
        converted.insert(ID_KEY, id.as_object_id());

        self.collection(collection).insert_one(converted).await?;

        Ok(InsertOneResult { inserted_id: id })
    }

    #[instrument(skip(self))]
    async fn find_one(&self, collection: &str, id: &RecordId) -> StoreResult<Option<Document>> {
        self.collection(collection)
            .find_one(doc! { "_id": id.as_object_id() })
            .await?
            .map(from_bson)
            .transpose()
    }

    #[instrument(skip(self, set))]
    async fn update_one(
        &self,
        collection: &str,
        id: &RecordId,
        set: Document,
    ) -> StoreResult<UpdateResult> {
        let set = to_bson(&set)?;
        let result = self
            .collection(collection)
            .update_one(doc! { "_id": id.as_object_id() }, doc! { "$set": set })
            .await?;

        Ok(UpdateResult::new(result.matched_count, result.modified_count))
    }

    #[instrument(skip(self))]
    async fn delete_one(&self, collection: &str, id: &RecordId) -> StoreResult<DeleteResult> {
        let result = self
            .collection(collection)
            .delete_one(doc! { "_id": id.as_object_id() })
            .await?;

        Ok(DeleteResult {
            deleted_count: result.deleted_count,
        })
    }
}
