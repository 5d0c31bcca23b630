//! Catalog records: products, part types, options and their edges
//!
//! Field names follow the shop's JSON wire contract, so
//! `OptionDependency.kind` serializes as `"type"` and
//! `ConditionalPrice.price` as `"conditional_price"`.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{EdgeId, OptionId, PartTypeId, ProductId};

/// A configurable product. Owns an ordered collection of part types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub is_active: bool,
    pub featured: bool,
    pub base_price: Decimal,
    pub image_url: Option<String>,
}

/// Creation payload for a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub featured: bool,
    pub base_price: Decimal,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A "slot" of a product (e.g. Frame) with mutually-exclusive options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartType {
    pub id: PartTypeId,
    pub product_id: ProductId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartTypeDraft {
    pub name: String,
}

/// A concrete choice within a slot. `base_price` is signed: negative
/// values represent discounts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartOption {
    pub id: OptionId,
    pub part_type_id: PartTypeId,
    pub name: String,
    pub base_price: Decimal,
    pub in_stock: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartOptionDraft {
    pub name: String,
    pub base_price: Decimal,
    #[serde(default = "default_true")]
    pub in_stock: bool,
}

/// Directed compatibility constraint kinds.
///
/// `excludes(A, B)` does not imply `excludes(B, A)`; rule sets encode
/// each direction explicitly and the resolver checks the full edge set
/// in both directions when marking conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DependencyKind {
    Requires,
    Excludes,
}

impl DependencyKind {
    /// Canonical string projection, used at every serialization boundary.
    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyKind::Requires => "requires",
            DependencyKind::Excludes => "excludes",
        }
    }
}

impl fmt::Display for DependencyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Directed dependency edge between two options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionDependency {
    pub id: EdgeId,
    pub option_id: OptionId,
    pub depends_on_option_id: OptionId,
    #[serde(rename = "type")]
    pub kind: DependencyKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionDependencyDraft {
    pub depends_on_option_id: OptionId,
    #[serde(rename = "type")]
    pub kind: DependencyKind,
}

/// Price override for `option_id` that applies only while
/// `condition_option_id` is co-selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionalPrice {
    pub id: EdgeId,
    pub option_id: OptionId,
    pub condition_option_id: OptionId,
    #[serde(rename = "conditional_price")]
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionalPriceDraft {
    pub condition_option_id: OptionId,
    #[serde(rename = "conditional_price")]
    pub price: Decimal,
}

/// Full product detail: part types with options and their edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDetail {
    #[serde(flatten)]
    pub product: Product,
    pub part_types: Vec<PartTypeDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartTypeDetail {
    #[serde(flatten)]
    pub part_type: PartType,
    pub options: Vec<PartOptionDetail>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartOptionDetail {
    #[serde(flatten)]
    pub option: PartOption,
    pub dependencies: Vec<OptionDependency>,
    pub conditional_prices: Vec<ConditionalPrice>,
}

fn default_true() -> bool {
    true
}
