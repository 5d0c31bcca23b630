//! Cart records and view DTOs
//!
//! Price snapshots are taken at add-to-cart time so later catalog edits
//! never reprice existing carts.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::compatibility::OptionRef;
use super::{CartId, CartItemId, OptionId, ProductId};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub id: CartId,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One configured product in a cart. `price_snapshot` already includes
/// the product base price plus the priced options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItem {
    pub id: CartItemId,
    pub cart_id: CartId,
    pub product_id: ProductId,
    pub price_snapshot: Decimal,
    pub quantity: u32,
}

/// Join row between a cart item and a selected part option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemOption {
    pub id: i64,
    pub cart_item_id: CartItemId,
    pub part_option_id: OptionId,
}

/// Cart item enriched for API responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemDetail {
    pub id: CartItemId,
    pub product_id: ProductId,
    pub product_name: String,
    pub price_snapshot: Decimal,
    pub quantity: u32,
    pub options: Vec<OptionRef>,
}

/// Full cart with line items and the running total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartDetail {
    pub id: CartId,
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub items: Vec<CartItemDetail>,
    pub total: Decimal,
}
