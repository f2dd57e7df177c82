//! `marketplace-storefront`
//!
//! **Responsibility:** the browser storefront.
//!
//! This crate provides:
//! - Client routes and navigation entries
//! - Session state (favorites, cart) and the product-card intent reducer
//! - Presentation models for cards, listing headers and cart rows
//! - The Leptos CSR frontend (compiled for `wasm32` only)
//!
//! Everything outside [`frontend`] is plain Rust and is tested natively.

pub mod config;
pub mod presentation;
pub mod routes;
pub mod session;

#[cfg(target_arch = "wasm32")]
pub mod frontend;

pub use config::StorefrontConfig;
pub use presentation::{CartRow, ListingHeader, ProductCardView};
pub use routes::{AppRoute, NavItem};
pub use session::{IntentOutcome, ProductIntent, Session};
