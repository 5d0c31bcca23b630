//! Business workflows on top of the store and resolver

pub mod cart_service;

pub use cart_service::CartService;
