//! REST API layer
//!
//! Thin axum routes over the store, resolver and cart service. Handlers
//! translate between the JSON wire contract and the library types and
//! map domain errors to status codes; no business logic lives here.

pub mod admin_routes;
pub mod cart_routes;
pub mod product_routes;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Router;

use crate::error::{CartError, StoreError};
use crate::store::MemoryStore;

/// Shared application state: one in-memory store behind an `Arc`.
pub type AppState = Arc<MemoryStore>;

/// Full API router, everything under `/api/v1`.
pub fn create_router(store: AppState) -> Router {
    Router::new()
        .merge(product_routes::create_product_router(store.clone()))
        .merge(admin_routes::create_admin_router(store.clone()))
        .merge(cart_routes::create_cart_router(store))
}

/// Every store error is a missing record.
pub(crate) fn store_error(err: StoreError) -> (StatusCode, String) {
    (StatusCode::NOT_FOUND, err.to_string())
}

pub(crate) fn cart_error(err: CartError) -> (StatusCode, String) {
    match err {
        CartError::Store(inner) => store_error(inner),
        CartError::IncompatibleSelection { .. }
        | CartError::OptionUnavailable { .. }
        | CartError::InvalidQuantity => (StatusCode::BAD_REQUEST, err.to_string()),
    }
}
