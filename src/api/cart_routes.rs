//! Cart routes
//!
//! Carts are addressed by an explicit `cart_id` query parameter; when
//! it is absent the cart is looked up (or created) for the given
//! `user_id`, and every response carries the cart id so clients can
//! hold on to it.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post, put},
    Router,
};
use serde::Deserialize;

use crate::models::cart::{CartDetail, CartItem};
use crate::models::{CartId, CartItemId, OptionId, ProductId};
use crate::services::CartService;

use super::{cart_error, AppState};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CartQuery {
    #[serde(default)]
    pub cart_id: Option<CartId>,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AddItemRequest {
    pub product_id: ProductId,
    #[serde(default, alias = "selected_options")]
    pub selected_option_ids: Vec<OptionId>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

#[derive(Debug, Deserialize)]
pub struct UpdateItemRequest {
    pub quantity: u32,
}

fn default_quantity() -> u32 {
    1
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/v1/cart
async fn get_cart(
    State(store): State<AppState>,
    Query(query): Query<CartQuery>,
) -> Result<Json<CartDetail>, (StatusCode, String)> {
    let service = CartService::new(store.as_ref());
    let cart_id = match query.cart_id {
        Some(id) => id,
        None => service.get_or_create_cart(query.user_id).id,
    };
    let detail = service.cart_detail(cart_id).map_err(cart_error)?;
    Ok(Json(detail))
}

/// POST /api/v1/cart/items
///
/// Validates the configuration through the resolver before anything is
/// persisted, then returns the whole updated cart.
async fn add_item(
    State(store): State<AppState>,
    Query(query): Query<CartQuery>,
    Json(req): Json<AddItemRequest>,
) -> Result<(StatusCode, Json<CartDetail>), (StatusCode, String)> {
    let service = CartService::new(store.as_ref());
    let cart_id = match query.cart_id {
        Some(id) => id,
        None => service.get_or_create_cart(query.user_id).id,
    };
    service
        .add_to_cart(cart_id, req.product_id, &req.selected_option_ids, req.quantity)
        .map_err(cart_error)?;
    let detail = service.cart_detail(cart_id).map_err(cart_error)?;
    Ok((StatusCode::CREATED, Json(detail)))
}

/// PUT /api/v1/cart/items/:id
async fn update_item(
    State(store): State<AppState>,
    Path(item_id): Path<CartItemId>,
    Json(req): Json<UpdateItemRequest>,
) -> Result<Json<CartItem>, (StatusCode, String)> {
    let service = CartService::new(store.as_ref());
    let item = service
        .update_item_quantity(item_id, req.quantity)
        .map_err(cart_error)?;
    Ok(Json(item))
}

/// DELETE /api/v1/cart/items/:id
async fn remove_item(
    State(store): State<AppState>,
    Path(item_id): Path<CartItemId>,
) -> Result<StatusCode, (StatusCode, String)> {
    let service = CartService::new(store.as_ref());
    service.remove_item(item_id).map_err(cart_error)?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn create_cart_router(store: AppState) -> Router {
    Router::new()
        .route("/api/v1/cart", get(get_cart))
        .route("/api/v1/cart/items", post(add_item))
        .route("/api/v1/cart/items/:id", put(update_item))
        .route("/api/v1/cart/items/:id", delete(remove_item))
        .with_state(store)
}
