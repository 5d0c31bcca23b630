//! Bikeshop - configurable-product e-commerce backend
//!
//! This crate implements the backend for a shop selling configurable
//! products (bicycles, skis, surfboards). Each product is built from
//! part-type "slots" (Frame, Wheels, ...), each slot offers several
//! options, and options interact through directed `requires`/`excludes`
//! rules and conditional price overrides.
//!
//! The heart of the crate is the compatibility resolver:
//! selection -> product graph -> per-option verdicts -> effective selection -> price
//!
//! ## Quick Start
//!
//! ```rust
//! use bikeshop::store::MemoryStore;
//! use bikeshop::{resolver, seed};
//!
//! let store = MemoryStore::new();
//! seed::load_demo_catalog(&store).unwrap();
//!
//! // Resolve an empty selection for the first product: every in-stock
//! // option is selectable.
//! let view = resolver::resolve(&store, 1, &[]).unwrap();
//! assert!(!view.has_incompatibilities);
//! ```

// Core error handling
pub mod error;

// Catalog, cart and compatibility-view data types
pub mod models;

// Record store: trait seam plus the in-memory implementation
pub mod store;

// Compatibility resolver, price calculator, availability probe
pub mod resolver;

// Cart workflow on top of the resolver
pub mod services;

// Demo catalog fixtures
pub mod seed;

// REST API layer (when enabled)
#[cfg(feature = "server")]
pub mod api;

// Public re-exports for the common call paths
pub use error::{CartError, CartResult, StoreError, StoreResult};
pub use models::compatibility::{
    CompatibilityDetail, ComponentView, OptionView, ProductCompatibilityView,
};
pub use resolver::{available_options, calculate_price, resolve, ProductGraph};
pub use services::CartService;
pub use store::{CartStore, CatalogStore, MemoryStore};
