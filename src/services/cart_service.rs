//! Cart workflow
//!
//! Adding a configured product validates the selection through the
//! resolver, re-checks stock, and snapshots the price (product base
//! plus priced options) so later catalog edits never reprice the cart.

use std::collections::BTreeSet;

use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::{CartError, CartResult};
use crate::models::cart::{Cart, CartDetail, CartItem, CartItemDetail};
use crate::models::compatibility::{CompatibilityDetail, OptionRef};
use crate::models::{CartId, CartItemId, OptionId, ProductId};
use crate::resolver;
use crate::store::{CartStore, CatalogStore};

pub struct CartService<'a, S: CatalogStore + CartStore> {
    store: &'a S,
}

impl<'a, S: CatalogStore + CartStore> CartService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Returns the user's cart, creating one when needed. Anonymous
    /// callers get a generated session id so the cart stays reachable.
    pub fn get_or_create_cart(&self, user_id: Option<String>) -> Cart {
        if let Some(uid) = user_id.as_deref() {
            if let Some(cart) = self.store.find_cart_by_user(uid) {
                return cart;
            }
        }
        let uid = user_id.unwrap_or_else(|| format!("anon-{}", Uuid::new_v4()));
        let cart = self.store.create_cart(Some(uid));
        tracing::info!(cart_id = cart.id, "created cart");
        cart
    }

    /// Adds a configured product to a cart.
    ///
    /// Rejects selections where any selected option is in conflict,
    /// carrying the first offending option's reason. The persisted
    /// option rows and the price snapshot both use the effective
    /// selection, so an unambiguous prerequisite the resolver pulled in
    /// is priced and listed.
    pub fn add_to_cart(
        &self,
        cart_id: CartId,
        product_id: ProductId,
        selected_option_ids: &[OptionId],
        quantity: u32,
    ) -> CartResult<CartItem> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }

        let view = resolver::resolve(self.store, product_id, selected_option_ids)?;
        if let Some(offender) = view.first_selected_conflict() {
            let message = describe_conflict(&offender.name, offender.compatibility_details.as_ref());
            return Err(CartError::IncompatibleSelection {
                option_id: offender.id,
                option_name: offender.name.clone(),
                message,
            });
        }

        let ids: BTreeSet<OptionId> = view.effective_selection.iter().copied().collect();
        for option in self.store.get_options_by_ids(&ids) {
            if !option.in_stock {
                return Err(CartError::OptionUnavailable {
                    id: option.id,
                    name: option.name,
                });
            }
        }

        let product = self.store.get_product(product_id)?;
        let options_price = resolver::calculate_price(self.store, &view.effective_selection);
        let price_snapshot = product.base_price + options_price;

        tracing::info!(
            cart_id,
            product_id,
            %price_snapshot,
            options = view.effective_selection.len(),
            "adding configured product to cart"
        );

        let item = self.store.insert_cart_item(
            cart_id,
            product_id,
            price_snapshot,
            quantity,
            &view.effective_selection,
        )?;
        Ok(item)
    }

    /// Cart with enriched line items and the running total.
    pub fn cart_detail(&self, cart_id: CartId) -> CartResult<CartDetail> {
        let cart = self.store.get_cart(cart_id)?;
        let mut items = Vec::new();
        let mut total = Decimal::ZERO;
        for (item, option_ids) in self.store.get_cart_items(cart_id)? {
            let product_name = self
                .store
                .get_product(item.product_id)
                .map(|p| p.name)
                .unwrap_or_else(|_| format!("product {}", item.product_id));
            let id_set: BTreeSet<OptionId> = option_ids.iter().copied().collect();
            let options = self
                .store
                .get_options_by_ids(&id_set)
                .into_iter()
                .map(|o| OptionRef {
                    id: o.id,
                    name: o.name,
                })
                .collect();
            total += item.price_snapshot * Decimal::from(item.quantity);
            items.push(CartItemDetail {
                id: item.id,
                product_id: item.product_id,
                product_name,
                price_snapshot: item.price_snapshot,
                quantity: item.quantity,
                options,
            });
        }
        Ok(CartDetail {
            id: cart.id,
            user_id: cart.user_id,
            created_at: cart.created_at,
            items,
            total,
        })
    }

    pub fn update_item_quantity(&self, item_id: CartItemId, quantity: u32) -> CartResult<CartItem> {
        if quantity == 0 {
            return Err(CartError::InvalidQuantity);
        }
        Ok(self.store.update_item_quantity(item_id, quantity)?)
    }

    pub fn remove_item(&self, item_id: CartItemId) -> CartResult<()> {
        Ok(self.store.remove_item(item_id)?)
    }
}

/// Human-readable conflict message for configurator clients.
fn describe_conflict(option_name: &str, detail: Option<&CompatibilityDetail>) -> String {
    match detail {
        Some(CompatibilityDetail::Requires {
            dependency_name, ..
        }) => format!("Option '{option_name}' requires '{dependency_name}'"),
        Some(CompatibilityDetail::Excludes {
            dependency_name, ..
        })
        | Some(CompatibilityDetail::ExcludedBy {
            dependency_name, ..
        }) => format!("Option '{option_name}' is not compatible with '{dependency_name}'"),
        _ => format!("There is an incompatibility with option '{option_name}'"),
    }
}
