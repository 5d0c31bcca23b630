//! Record store collaborator
//!
//! The resolver and cart workflow only ever read through these trait
//! seams; admin mutations live on the concrete `MemoryStore`. Reads are
//! synchronous and each call observes a consistent snapshot.

use std::collections::BTreeSet;

use crate::error::StoreResult;
use crate::models::cart::{Cart, CartItem};
use crate::models::catalog::{ConditionalPrice, OptionDependency, PartOption, PartType, Product};
use crate::models::{CartId, CartItemId, OptionId, PartTypeId, ProductId};

mod memory;

pub use memory::MemoryStore;

/// Read interface over the product catalog.
pub trait CatalogStore: Send + Sync {
    fn get_product(&self, product_id: ProductId) -> StoreResult<Product>;

    /// One page of products plus the total count (for pagination).
    fn list_products(&self, skip: usize, limit: usize) -> (Vec<Product>, usize);

    fn featured_products(&self, limit: usize) -> Vec<Product>;

    /// Part types of a product, ordered by id.
    fn get_part_types(&self, product_id: ProductId) -> StoreResult<Vec<PartType>>;

    /// Options of a part type, ordered by id.
    fn get_options(&self, part_type_id: PartTypeId) -> Vec<PartOption>;

    fn get_options_by_ids(&self, ids: &BTreeSet<OptionId>) -> Vec<PartOption>;

    /// Dependency edges touching any of `ids` as source or target,
    /// ordered by edge id.
    fn get_dependencies_for(&self, ids: &BTreeSet<OptionId>) -> Vec<OptionDependency>;

    /// Conditional-price edges touching any of `ids` as priced option
    /// or as condition, ordered by edge id.
    fn get_conditional_prices_for(&self, ids: &BTreeSet<OptionId>) -> Vec<ConditionalPrice>;

    /// Product owning the first resolvable option in `ids`, if any.
    /// Lets the API layer infer the product when a client omits it.
    fn product_id_for_options(&self, ids: &[OptionId]) -> Option<ProductId>;
}

/// Persistence interface for the cart subsystem.
pub trait CartStore: Send + Sync {
    fn create_cart(&self, user_id: Option<String>) -> Cart;

    fn get_cart(&self, cart_id: CartId) -> StoreResult<Cart>;

    fn find_cart_by_user(&self, user_id: &str) -> Option<Cart>;

    fn insert_cart_item(
        &self,
        cart_id: CartId,
        product_id: ProductId,
        price_snapshot: rust_decimal::Decimal,
        quantity: u32,
        option_ids: &[OptionId],
    ) -> StoreResult<CartItem>;

    /// Items of a cart with their selected option ids, ordered by item id.
    fn get_cart_items(&self, cart_id: CartId) -> StoreResult<Vec<(CartItem, Vec<OptionId>)>>;

    fn update_item_quantity(&self, item_id: CartItemId, quantity: u32) -> StoreResult<CartItem>;

    fn remove_item(&self, item_id: CartItemId) -> StoreResult<()>;
}
