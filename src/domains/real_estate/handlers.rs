//! HTTP handlers for the real estate resource.
//!
//! | Method        | Path                | Operation    |
//! |---------------|---------------------|--------------|
//! | POST          | `/real-estate`      | create       |
//! | GET           | `/real-estate/{id}` | get by id    |
//! | PUT / PATCH   | `/real-estate/{id}` | update by id |
//! | DELETE        | `/real-estate/{id}` | delete by id |

use axum::{
    Json, Router,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    routing::{get, post},
};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, instrument};

use super::controller::RealEstateController;
use super::error::RealEstateError;
use super::model::{RealEstate, RealEstateDetails};
use crate::domains::store::{DeleteResult, InsertOneResult, UpdateResult};

/// Collection route.
pub const COLLECTION_PATH: &str = "/real-estate";

/// Member route.
pub const MEMBER_PATH: &str = "/real-estate/{id}";

/// Success envelope shared by all four operations.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Human-readable outcome.
    pub message: &'static str,

    /// Operation payload.
    pub result: T,
}

impl<T> ApiResponse<T> {
    fn json(message: &'static str, result: T) -> Json<Self> {
        Json(Self { message, result })
    }
}

type HandlerResult<T> = Result<Json<ApiResponse<T>>, RealEstateError>;

/// Build the router for the real estate resource.
pub fn router(controller: Arc<RealEstateController>) -> Router {
    Router::new()
        .route(COLLECTION_PATH, post(create_real_estate))
        .route(
            MEMBER_PATH,
            get(get_real_estate)
                .put(update_real_estate)
                .patch(update_real_estate)
                .delete(delete_real_estate),
        )
        .with_state(controller)
}

/// POST /real-estate
#[instrument(skip_all)]
async fn create_real_estate(
    State(controller): State<Arc<RealEstateController>>,
    body: Result<Json<RealEstateDetails>, JsonRejection>,
) -> HandlerResult<InsertOneResult> {
    info!("Received create request");
    let Json(details) = body?;

    let result = controller.create(details).await?;
    Ok(ApiResponse::json("Real estate created successfully", result))
}

/// GET /real-estate/{id}
#[instrument(skip_all)]
async fn get_real_estate(
    State(controller): State<Arc<RealEstateController>>,
    path: Result<Path<String>, PathRejection>,
) -> HandlerResult<RealEstate> {
    let Path(id) = path?;

    let listing = controller.get_by_id(&id).await?;
    Ok(ApiResponse::json("Real estate found successfully", listing))
}

/// PUT or PATCH /real-estate/{id}
#[instrument(skip_all)]
async fn update_real_estate(
    State(controller): State<Arc<RealEstateController>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<RealEstateDetails>, JsonRejection>,
) -> HandlerResult<UpdateResult> {
    let Json(details) = body?;
    let Path(id) = path?;

    let result = controller.update_by_id(&id, details).await?;
    Ok(ApiResponse::json("Real estate updated successfully", result))
}

/// DELETE /real-estate/{id}
#[instrument(skip_all)]
async fn delete_real_estate(
    State(controller): State<Arc<RealEstateController>>,
    path: Result<Path<String>, PathRejection>,
) -> HandlerResult<DeleteResult> {
    let Path(id) = path?;

    let result = controller.delete_by_id(&id).await?;
    Ok(ApiResponse::json("Real estate deleted successfully", result))
}
