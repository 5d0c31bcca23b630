//! Catalog administration routes
//!
//! Create/delete for every catalog record plus the stock toggle.
//! Deletions cascade through the store so no dependency or conditional
//! price edge survives its endpoints.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;

use crate::models::catalog::{
    ConditionalPrice, ConditionalPriceDraft, OptionDependency, OptionDependencyDraft, PartOption,
    PartOptionDraft, PartType, PartTypeDraft, Product, ProductDraft,
};
use crate::models::{OptionId, PartTypeId, ProductId};

use super::{store_error, AppState};

#[derive(Debug, Deserialize)]
pub struct StockQuery {
    pub in_stock: bool,
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST /api/v1/admin/products
async fn create_product(
    State(store): State<AppState>,
    Json(draft): Json<ProductDraft>,
) -> (StatusCode, Json<Product>) {
    (StatusCode::CREATED, Json(store.insert_product(draft)))
}

/// POST /api/v1/admin/products/:id/part-types
async fn create_part_type(
    State(store): State<AppState>,
    Path(product_id): Path<ProductId>,
    Json(draft): Json<PartTypeDraft>,
) -> Result<(StatusCode, Json<PartType>), (StatusCode, String)> {
    let part_type = store.insert_part_type(product_id, draft).map_err(store_error)?;
    Ok((StatusCode::CREATED, Json(part_type)))
}

/// POST /api/v1/admin/part-types/:id/options
async fn create_option(
    State(store): State<AppState>,
    Path(part_type_id): Path<PartTypeId>,
    Json(draft): Json<PartOptionDraft>,
) -> Result<(StatusCode, Json<PartOption>), (StatusCode, String)> {
    let option = store.insert_part_option(part_type_id, draft).map_err(store_error)?;
    Ok((StatusCode::CREATED, Json(option)))
}

/// POST /api/v1/admin/options/:id/dependencies
async fn create_dependency(
    State(store): State<AppState>,
    Path(option_id): Path<OptionId>,
    Json(draft): Json<OptionDependencyDraft>,
) -> Result<(StatusCode, Json<OptionDependency>), (StatusCode, String)> {
    let edge = store.insert_dependency(option_id, draft).map_err(store_error)?;
    Ok((StatusCode::CREATED, Json(edge)))
}

/// POST /api/v1/admin/options/:id/conditional-prices
async fn create_conditional_price(
    State(store): State<AppState>,
    Path(option_id): Path<OptionId>,
    Json(draft): Json<ConditionalPriceDraft>,
) -> Result<(StatusCode, Json<ConditionalPrice>), (StatusCode, String)> {
    let edge = store
        .insert_conditional_price(option_id, draft)
        .map_err(store_error)?;
    Ok((StatusCode::CREATED, Json(edge)))
}

/// PUT /api/v1/admin/options/:id/stock
async fn set_option_stock(
    State(store): State<AppState>,
    Path(option_id): Path<OptionId>,
    Query(query): Query<StockQuery>,
) -> Result<Json<PartOption>, (StatusCode, String)> {
    let option = store
        .set_option_stock(option_id, query.in_stock)
        .map_err(store_error)?;
    Ok(Json(option))
}

/// DELETE /api/v1/admin/part-types/:id
async fn delete_part_type(
    State(store): State<AppState>,
    Path(part_type_id): Path<PartTypeId>,
) -> Result<StatusCode, (StatusCode, String)> {
    store.delete_part_type(part_type_id).map_err(store_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/admin/part-types/:ptid/options/:oid
async fn delete_option(
    State(store): State<AppState>,
    Path((part_type_id, option_id)): Path<(PartTypeId, OptionId)>,
) -> Result<StatusCode, (StatusCode, String)> {
    store
        .delete_part_option(part_type_id, option_id)
        .map_err(store_error)?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/admin/products/:id/dependencies
async fn product_dependencies(
    State(store): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> Result<Json<Vec<OptionDependency>>, (StatusCode, String)> {
    let edges = store.product_dependencies(product_id).map_err(store_error)?;
    Ok(Json(edges))
}

pub fn create_admin_router(store: AppState) -> Router {
    Router::new()
        .route("/api/v1/admin/products", post(create_product))
        .route(
            "/api/v1/admin/products/:id/part-types",
            post(create_part_type),
        )
        .route(
            "/api/v1/admin/products/:id/dependencies",
            get(product_dependencies),
        )
        .route("/api/v1/admin/part-types/:id/options", post(create_option))
        .route("/api/v1/admin/part-types/:id", delete(delete_part_type))
        .route(
            "/api/v1/admin/part-types/:ptid/options/:oid",
            delete(delete_option),
        )
        .route(
            "/api/v1/admin/options/:id/dependencies",
            post(create_dependency),
        )
        .route(
            "/api/v1/admin/options/:id/conditional-prices",
            post(create_conditional_price),
        )
        .route("/api/v1/admin/options/:id/stock", put(set_option_stock))
        .with_state(store)
}
