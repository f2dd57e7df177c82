//! `marketplace-core`: shared domain building blocks.
//!
//! Pure value types shared by the catalog, the listing form and the
//! storefront UI. Nothing here touches the browser.

pub mod entity;
pub mod error;
pub mod id;
pub mod price;
pub mod rating;
pub mod value_object;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{DraftId, ProductId};
pub use price::Price;
pub use rating::Rating;
pub use value_object::ValueObject;
