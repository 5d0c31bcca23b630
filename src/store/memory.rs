//! In-memory record store
//!
//! Ordered maps behind one `RwLock`; every read clones out of a single
//! guard acquisition, so one resolver call sees one snapshot. Ids are
//! allocated sequentially per table, which also gives the "lowest edge
//! id wins" tie-break its meaning.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::Utc;
use rust_decimal::Decimal;

use crate::error::{StoreError, StoreResult};
use crate::models::cart::{Cart, CartItem, CartItemOption};
use crate::models::catalog::{
    ConditionalPrice, ConditionalPriceDraft, OptionDependency, OptionDependencyDraft, PartOption,
    PartOptionDetail, PartOptionDraft, PartType, PartTypeDetail, PartTypeDraft, Product,
    ProductDetail, ProductDraft,
};
use crate::models::{CartId, CartItemId, EdgeId, OptionId, PartTypeId, ProductId};

use super::{CartStore, CatalogStore};

#[derive(Debug, Default)]
struct IdSeq(i64);

impl IdSeq {
    fn next(&mut self) -> i64 {
        self.0 += 1;
        self.0
    }
}

#[derive(Debug, Default)]
struct Inner {
    products: BTreeMap<ProductId, Product>,
    part_types: BTreeMap<PartTypeId, PartType>,
    options: BTreeMap<OptionId, PartOption>,
    dependencies: BTreeMap<EdgeId, OptionDependency>,
    conditional_prices: BTreeMap<EdgeId, ConditionalPrice>,
    carts: BTreeMap<CartId, Cart>,
    cart_items: BTreeMap<CartItemId, CartItem>,
    cart_item_options: BTreeMap<i64, CartItemOption>,
    product_seq: IdSeq,
    part_type_seq: IdSeq,
    option_seq: IdSeq,
    dependency_seq: IdSeq,
    conditional_price_seq: IdSeq,
    cart_seq: IdSeq,
    cart_item_seq: IdSeq,
    cart_item_option_seq: IdSeq,
}

/// Thread-safe in-memory implementation of both store seams.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Inner> {
        self.inner.read().expect("store lock poisoned")
    }

    fn write(&self) -> RwLockWriteGuard<'_, Inner> {
        self.inner.write().expect("store lock poisoned")
    }

    /// True when no catalog data has been loaded yet.
    pub fn is_empty(&self) -> bool {
        self.read().products.is_empty()
    }

    // ------------------------------------------------------------------
    // Admin mutations (external to the core; the resolver never calls these)
    // ------------------------------------------------------------------

    pub fn insert_product(&self, draft: ProductDraft) -> Product {
        let mut inner = self.write();
        let product = Product {
            id: inner.product_seq.next(),
            name: draft.name,
            category: draft.category,
            is_active: draft.is_active,
            featured: draft.featured,
            base_price: draft.base_price,
            image_url: draft.image_url,
        };
        inner.products.insert(product.id, product.clone());
        product
    }

    pub fn update_product(&self, product_id: ProductId, draft: ProductDraft) -> StoreResult<Product> {
        let mut inner = self.write();
        let product = inner
            .products
            .get_mut(&product_id)
            .ok_or(StoreError::ProductNotFound(product_id))?;
        product.name = draft.name;
        product.category = draft.category;
        product.is_active = draft.is_active;
        product.featured = draft.featured;
        product.base_price = draft.base_price;
        product.image_url = draft.image_url;
        Ok(product.clone())
    }

    pub fn delete_product(&self, product_id: ProductId) -> StoreResult<()> {
        let mut inner = self.write();
        if inner.products.remove(&product_id).is_none() {
            return Err(StoreError::ProductNotFound(product_id));
        }
        let part_type_ids: Vec<PartTypeId> = inner
            .part_types
            .values()
            .filter(|pt| pt.product_id == product_id)
            .map(|pt| pt.id)
            .collect();
        for pt_id in part_type_ids {
            Self::remove_part_type_locked(&mut inner, pt_id);
        }
        Ok(())
    }

    pub fn insert_part_type(
        &self,
        product_id: ProductId,
        draft: PartTypeDraft,
    ) -> StoreResult<PartType> {
        let mut inner = self.write();
        if !inner.products.contains_key(&product_id) {
            return Err(StoreError::ProductNotFound(product_id));
        }
        let part_type = PartType {
            id: inner.part_type_seq.next(),
            product_id,
            name: draft.name,
        };
        inner.part_types.insert(part_type.id, part_type.clone());
        Ok(part_type)
    }

    pub fn delete_part_type(&self, part_type_id: PartTypeId) -> StoreResult<()> {
        let mut inner = self.write();
        if !inner.part_types.contains_key(&part_type_id) {
            return Err(StoreError::PartTypeNotFound(part_type_id));
        }
        Self::remove_part_type_locked(&mut inner, part_type_id);
        Ok(())
    }

    pub fn insert_part_option(
        &self,
        part_type_id: PartTypeId,
        draft: PartOptionDraft,
    ) -> StoreResult<PartOption> {
        let mut inner = self.write();
        if !inner.part_types.contains_key(&part_type_id) {
            return Err(StoreError::PartTypeNotFound(part_type_id));
        }
        let option = PartOption {
            id: inner.option_seq.next(),
            part_type_id,
            name: draft.name,
            base_price: draft.base_price,
            in_stock: draft.in_stock,
        };
        inner.options.insert(option.id, option.clone());
        Ok(option)
    }

    pub fn delete_part_option(
        &self,
        part_type_id: PartTypeId,
        option_id: OptionId,
    ) -> StoreResult<()> {
        let mut inner = self.write();
        match inner.options.get(&option_id) {
            Some(option) if option.part_type_id == part_type_id => {}
            _ => return Err(StoreError::OptionNotFound(option_id)),
        }
        Self::remove_option_locked(&mut inner, option_id);
        Ok(())
    }

    pub fn set_option_stock(&self, option_id: OptionId, in_stock: bool) -> StoreResult<PartOption> {
        let mut inner = self.write();
        let option = inner
            .options
            .get_mut(&option_id)
            .ok_or(StoreError::OptionNotFound(option_id))?;
        option.in_stock = in_stock;
        Ok(option.clone())
    }

    pub fn insert_dependency(
        &self,
        option_id: OptionId,
        draft: OptionDependencyDraft,
    ) -> StoreResult<OptionDependency> {
        let mut inner = self.write();
        if !inner.options.contains_key(&option_id) {
            return Err(StoreError::OptionNotFound(option_id));
        }
        if !inner.options.contains_key(&draft.depends_on_option_id) {
            return Err(StoreError::OptionNotFound(draft.depends_on_option_id));
        }
        let edge = OptionDependency {
            id: inner.dependency_seq.next(),
            option_id,
            depends_on_option_id: draft.depends_on_option_id,
            kind: draft.kind,
        };
        inner.dependencies.insert(edge.id, edge.clone());
        Ok(edge)
    }

    pub fn insert_conditional_price(
        &self,
        option_id: OptionId,
        draft: ConditionalPriceDraft,
    ) -> StoreResult<ConditionalPrice> {
        let mut inner = self.write();
        if !inner.options.contains_key(&option_id) {
            return Err(StoreError::OptionNotFound(option_id));
        }
        if !inner.options.contains_key(&draft.condition_option_id) {
            return Err(StoreError::OptionNotFound(draft.condition_option_id));
        }
        let edge = ConditionalPrice {
            id: inner.conditional_price_seq.next(),
            option_id,
            condition_option_id: draft.condition_option_id,
            price: draft.price,
        };
        inner.conditional_prices.insert(edge.id, edge.clone());
        Ok(edge)
    }

    /// All dependency edges whose source option belongs to the product.
    pub fn product_dependencies(&self, product_id: ProductId) -> StoreResult<Vec<OptionDependency>> {
        let inner = self.read();
        if !inner.products.contains_key(&product_id) {
            return Err(StoreError::ProductNotFound(product_id));
        }
        let option_ids = Self::product_option_ids_locked(&inner, product_id);
        Ok(inner
            .dependencies
            .values()
            .filter(|d| option_ids.contains(&d.option_id))
            .cloned()
            .collect())
    }

    /// Product with its full part-type/option/edge tree.
    pub fn product_detail(&self, product_id: ProductId) -> StoreResult<ProductDetail> {
        let inner = self.read();
        let product = inner
            .products
            .get(&product_id)
            .cloned()
            .ok_or(StoreError::ProductNotFound(product_id))?;
        let part_types = inner
            .part_types
            .values()
            .filter(|pt| pt.product_id == product_id)
            .map(|pt| PartTypeDetail {
                part_type: pt.clone(),
                options: inner
                    .options
                    .values()
                    .filter(|o| o.part_type_id == pt.id)
                    .map(|o| PartOptionDetail {
                        option: o.clone(),
                        dependencies: inner
                            .dependencies
                            .values()
                            .filter(|d| d.option_id == o.id)
                            .cloned()
                            .collect(),
                        conditional_prices: inner
                            .conditional_prices
                            .values()
                            .filter(|cp| cp.option_id == o.id)
                            .cloned()
                            .collect(),
                    })
                    .collect(),
            })
            .collect();
        Ok(ProductDetail {
            product,
            part_types,
        })
    }

    // ------------------------------------------------------------------
    // Locked helpers
    // ------------------------------------------------------------------

    fn remove_part_type_locked(inner: &mut Inner, part_type_id: PartTypeId) {
        inner.part_types.remove(&part_type_id);
        let option_ids: Vec<OptionId> = inner
            .options
            .values()
            .filter(|o| o.part_type_id == part_type_id)
            .map(|o| o.id)
            .collect();
        for option_id in option_ids {
            Self::remove_option_locked(inner, option_id);
        }
    }

    /// Removes an option and every edge touching it, so the graph never
    /// holds dangling endpoints.
    fn remove_option_locked(inner: &mut Inner, option_id: OptionId) {
        inner.options.remove(&option_id);
        inner
            .dependencies
            .retain(|_, d| d.option_id != option_id && d.depends_on_option_id != option_id);
        inner
            .conditional_prices
            .retain(|_, cp| cp.option_id != option_id && cp.condition_option_id != option_id);
    }

    fn product_option_ids_locked(inner: &Inner, product_id: ProductId) -> BTreeSet<OptionId> {
        let part_type_ids: BTreeSet<PartTypeId> = inner
            .part_types
            .values()
            .filter(|pt| pt.product_id == product_id)
            .map(|pt| pt.id)
            .collect();
        inner
            .options
            .values()
            .filter(|o| part_type_ids.contains(&o.part_type_id))
            .map(|o| o.id)
            .collect()
    }
}

impl CatalogStore for MemoryStore {
    fn get_product(&self, product_id: ProductId) -> StoreResult<Product> {
        self.read()
            .products
            .get(&product_id)
            .cloned()
            .ok_or(StoreError::ProductNotFound(product_id))
    }

    fn list_products(&self, skip: usize, limit: usize) -> (Vec<Product>, usize) {
        let inner = self.read();
        let total = inner.products.len();
        let items = inner
            .products
            .values()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect();
        (items, total)
    }

    fn featured_products(&self, limit: usize) -> Vec<Product> {
        self.read()
            .products
            .values()
            .filter(|p| p.featured)
            .take(limit)
            .cloned()
            .collect()
    }

    fn get_part_types(&self, product_id: ProductId) -> StoreResult<Vec<PartType>> {
        let inner = self.read();
        if !inner.products.contains_key(&product_id) {
            return Err(StoreError::ProductNotFound(product_id));
        }
        Ok(inner
            .part_types
            .values()
            .filter(|pt| pt.product_id == product_id)
            .cloned()
            .collect())
    }

    fn get_options(&self, part_type_id: PartTypeId) -> Vec<PartOption> {
        self.read()
            .options
            .values()
            .filter(|o| o.part_type_id == part_type_id)
            .cloned()
            .collect()
    }

    fn get_options_by_ids(&self, ids: &BTreeSet<OptionId>) -> Vec<PartOption> {
        let inner = self.read();
        ids.iter()
            .filter_map(|id| inner.options.get(id).cloned())
            .collect()
    }

    fn get_dependencies_for(&self, ids: &BTreeSet<OptionId>) -> Vec<OptionDependency> {
        self.read()
            .dependencies
            .values()
            .filter(|d| ids.contains(&d.option_id) || ids.contains(&d.depends_on_option_id))
            .cloned()
            .collect()
    }

    fn get_conditional_prices_for(&self, ids: &BTreeSet<OptionId>) -> Vec<ConditionalPrice> {
        self.read()
            .conditional_prices
            .values()
            .filter(|cp| ids.contains(&cp.option_id) || ids.contains(&cp.condition_option_id))
            .cloned()
            .collect()
    }

    fn product_id_for_options(&self, ids: &[OptionId]) -> Option<ProductId> {
        let inner = self.read();
        ids.iter().find_map(|id| {
            let option = inner.options.get(id)?;
            let part_type = inner.part_types.get(&option.part_type_id)?;
            Some(part_type.product_id)
        })
    }
}

impl CartStore for MemoryStore {
    fn create_cart(&self, user_id: Option<String>) -> Cart {
        let mut inner = self.write();
        let cart = Cart {
            id: inner.cart_seq.next(),
            user_id,
            created_at: Utc::now(),
        };
        inner.carts.insert(cart.id, cart.clone());
        cart
    }

    fn get_cart(&self, cart_id: CartId) -> StoreResult<Cart> {
        self.read()
            .carts
            .get(&cart_id)
            .cloned()
            .ok_or(StoreError::CartNotFound(cart_id))
    }

    fn find_cart_by_user(&self, user_id: &str) -> Option<Cart> {
        self.read()
            .carts
            .values()
            .find(|c| c.user_id.as_deref() == Some(user_id))
            .cloned()
    }

    fn insert_cart_item(
        &self,
        cart_id: CartId,
        product_id: ProductId,
        price_snapshot: Decimal,
        quantity: u32,
        option_ids: &[OptionId],
    ) -> StoreResult<CartItem> {
        let mut inner = self.write();
        if !inner.carts.contains_key(&cart_id) {
            return Err(StoreError::CartNotFound(cart_id));
        }
        if !inner.products.contains_key(&product_id) {
            return Err(StoreError::ProductNotFound(product_id));
        }
        let item = CartItem {
            id: inner.cart_item_seq.next(),
            cart_id,
            product_id,
            price_snapshot,
            quantity,
        };
        inner.cart_items.insert(item.id, item.clone());
        for &option_id in option_ids {
            let row = CartItemOption {
                id: inner.cart_item_option_seq.next(),
                cart_item_id: item.id,
                part_option_id: option_id,
            };
            inner.cart_item_options.insert(row.id, row);
        }
        Ok(item)
    }

    fn get_cart_items(&self, cart_id: CartId) -> StoreResult<Vec<(CartItem, Vec<OptionId>)>> {
        let inner = self.read();
        if !inner.carts.contains_key(&cart_id) {
            return Err(StoreError::CartNotFound(cart_id));
        }
        Ok(inner
            .cart_items
            .values()
            .filter(|item| item.cart_id == cart_id)
            .map(|item| {
                let options = inner
                    .cart_item_options
                    .values()
                    .filter(|row| row.cart_item_id == item.id)
                    .map(|row| row.part_option_id)
                    .collect();
                (item.clone(), options)
            })
            .collect())
    }

    fn update_item_quantity(&self, item_id: CartItemId, quantity: u32) -> StoreResult<CartItem> {
        let mut inner = self.write();
        let item = inner
            .cart_items
            .get_mut(&item_id)
            .ok_or(StoreError::CartItemNotFound(item_id))?;
        item.quantity = quantity;
        Ok(item.clone())
    }

    fn remove_item(&self, item_id: CartItemId) -> StoreResult<()> {
        let mut inner = self.write();
        if inner.cart_items.remove(&item_id).is_none() {
            return Err(StoreError::CartItemNotFound(item_id));
        }
        inner
            .cart_item_options
            .retain(|_, row| row.cart_item_id != item_id);
        Ok(())
    }
}
