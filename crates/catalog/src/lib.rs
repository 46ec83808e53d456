//! Product catalog module (in-memory).
//!
//! This crate contains the catalog store and its search rules, implemented purely
//! as deterministic domain logic (no IO, no HTTP, no storage).

pub mod catalog;
pub mod config;
pub mod product;
pub mod shared;
pub mod shop;

pub use catalog::Catalog;
pub use config::{CatalogConfig, DEFAULT_RESULT_LIMIT, RESULT_LIMIT_ENV};
pub use product::Product;
pub use shared::SharedCatalog;
pub use shop::Shop;
pub use storefront_core::ProductId;
