//! Catalog and compatibility routes
//!
//! The two POST endpoints accept the product id or infer it from the
//! first resolvable selected option, so configurator clients never have
//! to track which product they are pricing.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::catalog::{Product, ProductDetail, ProductDraft};
use crate::models::compatibility::{ComponentAvailability, ProductCompatibilityView};
use crate::models::{OptionId, ProductId};
use crate::resolver::{self, AppliedConditionalPrice};
use crate::store::CatalogStore;

use super::{store_error, AppState};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub skip: usize,
    #[serde(default = "default_page_size")]
    pub limit: usize,
}

#[derive(Debug, Deserialize)]
pub struct FeaturedQuery {
    #[serde(default = "default_featured_limit")]
    pub limit: usize,
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub items: Vec<Product>,
    pub total: usize,
}

#[derive(Debug, Deserialize)]
pub struct OptionsQuery {
    /// Comma-separated option ids of the current selection.
    #[serde(default)]
    pub selected: String,
}

#[derive(Debug, Deserialize)]
pub struct ValidateCompatibilityRequest {
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default, alias = "selected_option_ids")]
    pub selected_options: Vec<OptionId>,
}

#[derive(Debug, Deserialize)]
pub struct CalculatePriceRequest {
    #[serde(default)]
    pub product_id: Option<ProductId>,
    #[serde(default, alias = "selected_options")]
    pub selected_option_ids: Vec<OptionId>,
}

#[derive(Debug, Serialize)]
pub struct CalculatePriceResponse {
    pub total_price: Decimal,
    pub conditional_prices: Vec<AppliedConditionalPrice>,
}

fn default_page_size() -> usize {
    20
}

fn default_featured_limit() -> usize {
    3
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/v1/products
async fn list_products(
    State(store): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<ProductListResponse> {
    let (items, total) = store.list_products(query.skip, query.limit);
    Json(ProductListResponse { items, total })
}

/// GET /api/v1/products/featured
async fn featured_products(
    State(store): State<AppState>,
    Query(query): Query<FeaturedQuery>,
) -> Json<Vec<Product>> {
    Json(store.featured_products(query.limit))
}

/// GET /api/v1/products/:id
async fn get_product(
    State(store): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> Result<Json<ProductDetail>, (StatusCode, String)> {
    let detail = store.product_detail(product_id).map_err(store_error)?;
    Ok(Json(detail))
}

/// GET /api/v1/products/:id/options
async fn product_options(
    State(store): State<AppState>,
    Path(product_id): Path<ProductId>,
    Query(query): Query<OptionsQuery>,
) -> Result<Json<Vec<ComponentAvailability>>, (StatusCode, String)> {
    let selected = parse_id_list(&query.selected);
    let components =
        resolver::available_options(store.as_ref(), product_id, &selected).map_err(store_error)?;
    Ok(Json(components))
}

/// POST /api/v1/products/validate-compatibility
async fn validate_compatibility(
    State(store): State<AppState>,
    Json(req): Json<ValidateCompatibilityRequest>,
) -> Result<Json<ProductCompatibilityView>, (StatusCode, String)> {
    let product_id = infer_product(store.as_ref(), req.product_id, &req.selected_options)?;
    let view =
        resolver::resolve(store.as_ref(), product_id, &req.selected_options).map_err(store_error)?;
    Ok(Json(view))
}

/// POST /api/v1/products/calculate-price
///
/// Rejects selections the resolver marks incompatible: a broken build
/// has no meaningful price.
async fn calculate_price(
    State(store): State<AppState>,
    Json(req): Json<CalculatePriceRequest>,
) -> Result<Json<CalculatePriceResponse>, (StatusCode, String)> {
    let product_id = infer_product(store.as_ref(), req.product_id, &req.selected_option_ids)?;
    let view = resolver::resolve(store.as_ref(), product_id, &req.selected_option_ids)
        .map_err(store_error)?;
    if let Some(offender) = view.first_selected_conflict() {
        return Err((
            StatusCode::BAD_REQUEST,
            format!("selection is incompatible: option '{}'", offender.name),
        ));
    }

    let product = store.get_product(product_id).map_err(store_error)?;
    let options_price = resolver::calculate_price(store.as_ref(), &view.effective_selection);
    let conditional_prices =
        resolver::applied_overrides(store.as_ref(), &view.effective_selection);
    Ok(Json(CalculatePriceResponse {
        total_price: product.base_price + options_price,
        conditional_prices,
    }))
}

/// PUT /api/v1/products/:id
async fn update_product(
    State(store): State<AppState>,
    Path(product_id): Path<ProductId>,
    Json(draft): Json<ProductDraft>,
) -> Result<Json<Product>, (StatusCode, String)> {
    let product = store.update_product(product_id, draft).map_err(store_error)?;
    Ok(Json(product))
}

/// DELETE /api/v1/products/:id
async fn delete_product(
    State(store): State<AppState>,
    Path(product_id): Path<ProductId>,
) -> Result<StatusCode, (StatusCode, String)> {
    store.delete_product(product_id).map_err(store_error)?;
    Ok(StatusCode::NO_CONTENT)
}

// ============================================================================
// Helpers
// ============================================================================

fn infer_product(
    store: &dyn CatalogStore,
    explicit: Option<ProductId>,
    selection: &[OptionId],
) -> Result<ProductId, (StatusCode, String)> {
    explicit
        .or_else(|| store.product_id_for_options(selection))
        .ok_or((
            StatusCode::BAD_REQUEST,
            "product_id missing and not inferrable from the selected options".to_string(),
        ))
}

/// Lenient CSV id parsing; non-numeric tokens are dropped.
fn parse_id_list(raw: &str) -> Vec<OptionId> {
    raw.split(',')
        .filter_map(|token| token.trim().parse().ok())
        .collect()
}

pub fn create_product_router(store: AppState) -> Router {
    Router::new()
        .route("/api/v1/products", get(list_products))
        .route("/api/v1/products/featured", get(featured_products))
        .route("/api/v1/products/:id", get(get_product))
        .route("/api/v1/products/:id", put(update_product))
        .route("/api/v1/products/:id", delete(delete_product))
        .route("/api/v1/products/:id/options", get(product_options))
        .route(
            "/api/v1/products/validate-compatibility",
            post(validate_compatibility),
        )
        .route("/api/v1/products/calculate-price", post(calculate_price))
        .with_state(store)
}
