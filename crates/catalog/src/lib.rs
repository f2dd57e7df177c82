//! Catalog domain module.
//!
//! The static product catalog, the search/filter engine over it, and the
//! session-local favorites and cart collections. Deterministic logic only (no
//! IO, no rendering).

pub mod cart;
pub mod favorites;
pub mod filter;
pub mod product;
pub mod seed;
pub mod store;

pub use cart::{Cart, CartError, CartLine};
pub use favorites::Favorites;
pub use filter::{CategoryFilter, ProductQuery};
pub use product::{Category, ImageRef, Product};
pub use store::Catalog;
