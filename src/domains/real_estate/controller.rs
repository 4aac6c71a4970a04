//! Real estate controller.
//!
//! Maps each listing operation onto exactly one document store call,
//! bounded by the request deadline. The store and the deadline are injected
//! at construction so tests can substitute both.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, instrument, warn};

use super::error::RealEstateError;
use super::model::{RealEstate, RealEstateDetails};
use super::validation::validate_details;
use crate::domains::store::{
    DeleteResult, DocumentStore, InsertOneResult, RecordId, StoreError, StoreResult, UpdateResult,
};

/// Result type for controller operations.
pub type RealEstateResult<T> = Result<T, RealEstateError>;

/// Create, read, update and delete listings in one store collection.
pub struct RealEstateController {
    /// Shared store handle.
    store: Arc<dyn DocumentStore>,

    /// Collection holding the listings.
    collection: String,

    /// Upper bound on each store round-trip.
    timeout: Duration,
}

impl RealEstateController {
    /// Create a controller over `collection` in `store`.
    pub fn new(
        store: Arc<dyn DocumentStore>,
        collection: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            store,
            collection: collection.into(),
            timeout,
        }
    }

    /// The request deadline applied to every operation.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Validate and insert a new listing.
    #[instrument(skip_all)]
    pub async fn create(&self, details: RealEstateDetails) -> RealEstateResult<InsertOneResult> {
        validate_details(&details)?;
        let document = details.to_document().map_err(StoreError::from)?;

        let result = self
            .bounded(self.store.insert_one(&self.collection, document))
            .await?;

        info!("Created real estate {}", result.inserted_id);
        Ok(result)
    }

    /// Fetch one listing by the id text taken from the request path.
    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: &str) -> RealEstateResult<RealEstate> {
        let id: RecordId = id.parse()?;

        let document = self
            .bounded(self.store.find_one(&self.collection, &id))
            .await?
            .ok_or(RealEstateError::NotFound(id))?;

        Ok(RealEstate::from_document(document)?)
    }

    /// Validate a listing and overwrite the updatable fields of `id` with it.
    ///
    /// The stored identifier is never changed, whatever the body contains.
    #[instrument(skip(self, details))]
    pub async fn update_by_id(
        &self,
        id: &str,
        details: RealEstateDetails,
    ) -> RealEstateResult<UpdateResult> {
        validate_details(&details)?;
        let id: RecordId = id.parse()?;
        let set = details.update_set().map_err(StoreError::from)?;

        let result = self
            .bounded(self.store.update_one(&self.collection, &id, set))
            .await?;

        if result.matched_count == 0 {
            return Err(RealEstateError::NotFound(id));
        }

        info!(
            "Updated real estate {} (modified: {})",
            id, result.modified_count
        );
        Ok(result)
    }

    /// Remove one listing by the id text taken from the request path.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: &str) -> RealEstateResult<DeleteResult> {
        let id: RecordId = id.parse()?;

        let result = self
            .bounded(self.store.delete_one(&self.collection, &id))
            .await?;

        if result.deleted_count == 0 {
            return Err(RealEstateError::NotFound(id));
        }

        info!("Deleted real estate {}", id);
        Ok(result)
    }

    /// Run one store call under the request deadline.
    async fn bounded<T>(&self, call: impl Future<Output = StoreResult<T>>) -> RealEstateResult<T> {
        match tokio::time::timeout(self.timeout, call).await {
            Ok(result) => Ok(result?),
            Err(_) => {
                warn!(
                    "{} store call exceeded {:?}",
                    self.store.backend(),
                    self.timeout
                );
                Err(RealEstateError::Timeout(self.timeout))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::real_estate::model::fixtures;
    use crate::domains::store::{Document, InMemoryStore};
    use async_trait::async_trait;

    const COLLECTION: &str = "real_estate";

    fn controller() -> (Arc<InMemoryStore>, RealEstateController) {
        let store = Arc::new(InMemoryStore::new());
        let controller =
            RealEstateController::new(store.clone(), COLLECTION, Duration::from_secs(10));
        (store, controller)
    }

    /// Store that never answers in time.
    struct StalledStore;

    #[async_trait]
    impl DocumentStore for StalledStore {
        fn backend(&self) -> &'static str {
            "stalled"
        }

        async fn ping(&self) -> StoreResult<()> {
            Ok(())
        }

        async fn insert_one(&self, _: &str, _: Document) -> StoreResult<InsertOneResult> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(InsertOneResult {
                inserted_id: RecordId::generate(),
            })
        }

        async fn find_one(&self, _: &str, _: &RecordId) -> StoreResult<Option<Document>> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(None)
        }

        async fn update_one(
            &self,
            _: &str,
            _: &RecordId,
            _: Document,
        ) -> StoreResult<UpdateResult> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(UpdateResult::new(1, 1))
        }

        async fn delete_one(&self, _: &str, _: &RecordId) -> StoreResult<DeleteResult> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(DeleteResult { deleted_count: 1 })
        }
    }

    /// Store whose every call fails.
    struct BrokenStore;

    #[async_trait]
    impl DocumentStore for BrokenStore {
        fn backend(&self) -> &'static str {
            "broken"
        }

        async fn ping(&self) -> StoreResult<()> {
            Err(StoreError::unavailable("connection refused"))
        }

        async fn insert_one(&self, _: &str, _: Document) -> StoreResult<InsertOneResult> {
            Err(StoreError::unavailable("connection refused"))
        }

        async fn find_one(&self, _: &str, _: &RecordId) -> StoreResult<Option<Document>> {
            Err(StoreError::unavailable("connection refused"))
        }

        async fn update_one(
            &self,
            _: &str,
            _: &RecordId,
            _: Document,
        ) -> StoreResult<UpdateResult> {
            Err(StoreError::unavailable("connection refused"))
        }

        async fn delete_one(&self, _: &str, _: &RecordId) -> StoreResult<DeleteResult> {
            Err(StoreError::unavailable("connection refused"))
        }
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (_, controller) = controller();

        let created = controller.create(fixtures::springfield()).await.unwrap();
        let id = created.inserted_id.to_string();
        assert!(!id.is_empty());

        let listing = controller.get_by_id(&id).await.unwrap();
        assert_eq!(listing.id, created.inserted_id);
        assert_eq!(listing.details, fixtures::springfield());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_without_writing() {
        let (store, controller) = controller();

        let mut details = fixtures::springfield();
        details.address.clear();

        let err = controller.create(details).await.unwrap_err();
        assert!(matches!(err, RealEstateError::ValidationFailed(ref v) if v.has_field("address")));
        assert_eq!(store.len(COLLECTION).await, 0);
    }

    #[tokio::test]
    async fn test_full_lifecycle() {
        let (_, controller) = controller();

        let id = controller
            .create(fixtures::springfield())
            .await
            .unwrap()
            .inserted_id
            .to_string();

        let mut details = fixtures::springfield();
        details.market_price = 525_000.0;
        let updated = controller.update_by_id(&id, details).await.unwrap();
        assert_eq!(updated.matched_count, 1);
        assert_eq!(updated.modified_count, 1);

        let listing = controller.get_by_id(&id).await.unwrap();
        assert_eq!(listing.details.market_price, 525_000.0);
        assert_eq!(listing.id.to_string(), id);

        let deleted = controller.delete_by_id(&id).await.unwrap();
        assert_eq!(deleted.deleted_count, 1);

        let err = controller.get_by_id(&id).await.unwrap_err();
        assert!(matches!(err, RealEstateError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_without_writing() {
        let (_, controller) = controller();
        let id = controller
            .create(fixtures::springfield())
            .await
            .unwrap()
            .inserted_id
            .to_string();

        let mut details = fixtures::springfield();
        details.city.clear();
        details.market_price = 1.0;

        let err = controller.update_by_id(&id, details).await.unwrap_err();
        assert!(matches!(err, RealEstateError::ValidationFailed(_)));

        let listing = controller.get_by_id(&id).await.unwrap();
        assert_eq!(listing.details, fixtures::springfield());
    }

    #[tokio::test]
    async fn test_missing_listing_is_not_found() {
        let (_, controller) = controller();
        let id = RecordId::generate().to_string();

        assert!(matches!(
            controller.get_by_id(&id).await,
            Err(RealEstateError::NotFound(_))
        ));
        assert!(matches!(
            controller.update_by_id(&id, fixtures::springfield()).await,
            Err(RealEstateError::NotFound(_))
        ));
        assert!(matches!(
            controller.delete_by_id(&id).await,
            Err(RealEstateError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_unparsable_id_is_malformed() {
        let (_, controller) = controller();

        for id in ["", "123", "not-a-real-object-id-000"] {
            assert!(matches!(
                controller.get_by_id(id).await,
                Err(RealEstateError::MalformedInput(_))
            ));
            assert!(matches!(
                controller.delete_by_id(id).await,
                Err(RealEstateError::MalformedInput(_))
            ));
            assert!(matches!(
                controller.update_by_id(id, fixtures::springfield()).await,
                Err(RealEstateError::MalformedInput(_))
            ));
        }
    }

    #[tokio::test]
    async fn test_slow_store_times_out() {
        let store = Arc::new(StalledStore);
        let controller = RealEstateController::new(store, COLLECTION, Duration::from_millis(20));
        let id = RecordId::generate().to_string();

        assert!(matches!(
            controller.create(fixtures::springfield()).await,
            Err(RealEstateError::Timeout(_))
        ));
        assert!(matches!(
            controller.get_by_id(&id).await,
            Err(RealEstateError::Timeout(_))
        ));
        assert!(matches!(
            controller.update_by_id(&id, fixtures::springfield()).await,
            Err(RealEstateError::Timeout(_))
        ));
        assert!(matches!(
            controller.delete_by_id(&id).await,
            Err(RealEstateError::Timeout(_))
        ));
    }

    #[tokio::test]
    async fn test_store_failure_is_store_unavailable() {
        let controller =
            RealEstateController::new(Arc::new(BrokenStore), COLLECTION, Duration::from_secs(1));

        let err = controller.create(fixtures::springfield()).await.unwrap_err();
        assert!(matches!(err, RealEstateError::StoreUnavailable(_)));
        assert!(err.to_string().contains("connection refused"));
    }
}
