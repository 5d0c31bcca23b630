//! Data types shared across the backend
//!
//! Catalog records are owned by the store and read-only for the
//! resolver; compatibility views are the resolver's output shape; cart
//! records belong to the cart subsystem.

pub mod cart;
pub mod catalog;
pub mod compatibility;

pub use cart::{Cart, CartDetail, CartItem, CartItemDetail, CartItemOption};
pub use catalog::{
    ConditionalPrice, ConditionalPriceDraft, DependencyKind, OptionDependency,
    OptionDependencyDraft, PartOption, PartOptionDetail, PartOptionDraft, PartType,
    PartTypeDetail, PartTypeDraft, Product, ProductDetail, ProductDraft,
};
pub use compatibility::{
    AvailableOption, CompatibilityDetail, ComponentAvailability, ComponentView, OptionRef,
    OptionView, ProductCompatibilityView,
};

/// Record identifiers. The store allocates them sequentially per table.
pub type ProductId = i64;
pub type PartTypeId = i64;
pub type OptionId = i64;
pub type EdgeId = i64;
pub type CartId = i64;
pub type CartItemId = i64;
