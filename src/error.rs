//! Error types for the bikeshop backend
//!
//! Idiomatic thiserror enums with `#[from]` chaining. Only structural
//! problems are errors: a missing product, a missing cart record, an
//! out-of-stock option at cart time. Compatibility conflicts are never
//! errors - the resolver reports them as data and callers decide.

use thiserror::Error;

use crate::models::{CartId, CartItemId, OptionId, PartTypeId, ProductId};

/// Errors raised by the record store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("product {0} not found")]
    ProductNotFound(ProductId),

    #[error("part type {0} not found")]
    PartTypeNotFound(PartTypeId),

    #[error("option {0} not found")]
    OptionNotFound(OptionId),

    #[error("cart {0} not found")]
    CartNotFound(CartId),

    #[error("cart item {0} not found")]
    CartItemNotFound(CartItemId),
}

/// Errors raised by the cart workflow.
#[derive(Error, Debug)]
pub enum CartError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The selection contains at least one conflicted option. Carries
    /// the first offending option so callers can surface the cause.
    #[error("{message}")]
    IncompatibleSelection {
        option_id: OptionId,
        option_name: String,
        message: String,
    },

    #[error("option '{name}' is not available")]
    OptionUnavailable { id: OptionId, name: String },

    #[error("quantity must be at least 1")]
    InvalidQuantity,
}

/// Result type aliases for convenience
pub type StoreResult<T> = Result<T, StoreError>;
pub type CartResult<T> = Result<T, CartError>;
