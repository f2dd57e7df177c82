//! Session state owned at the top of the app, and the intents cards emit.

use serde::{Deserialize, Serialize};

use marketplace_catalog::{Cart, Favorites};
use marketplace_core::ProductId;

use crate::routes::AppRoute;

/// What a product card asks its owner to do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductIntent {
    AddToCart(ProductId),
    ToggleFavorite(ProductId),
    OpenDetail(ProductId),
}

impl ProductIntent {
    pub fn product_id(&self) -> &ProductId {
        match self {
            ProductIntent::AddToCart(id)
            | ProductIntent::ToggleFavorite(id)
            | ProductIntent::OpenDetail(id) => id,
        }
    }
}

/// Result of applying an intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntentOutcome {
    FavoriteChanged { id: ProductId, is_favorite: bool },
    AddedToCart { id: ProductId, quantity: u32 },
    Navigate(AppRoute),
}

impl IntentOutcome {
    /// Navigation target, if the intent leaves the current page.
    pub fn into_route(self) -> Option<AppRoute> {
        match self {
            IntentOutcome::Navigate(route) => Some(route),
            _ => None,
        }
    }
}

/// Favorites and cart for one page view. Discarded on reload.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    favorites: Favorites,
    cart: Cart,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn favorites(&self) -> &Favorites {
        &self.favorites
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    pub fn is_favorite(&self, id: &ProductId) -> bool {
        self.favorites.contains(id)
    }

    pub fn apply(&mut self, intent: ProductIntent) -> IntentOutcome {
        match intent {
            ProductIntent::ToggleFavorite(id) => {
                let is_favorite = self.favorites.toggle(id.clone());
                tracing::info!(product_id = %id, is_favorite, "favorite toggled");
                IntentOutcome::FavoriteChanged { id, is_favorite }
            }
            ProductIntent::AddToCart(id) => {
                let quantity = self.cart.add(id.clone());
                tracing::info!(product_id = %id, quantity, cart_items = self.cart.item_count(), "added to cart");
                IntentOutcome::AddedToCart { id, quantity }
            }
            ProductIntent::OpenDetail(id) => {
                tracing::info!(product_id = %id, "opening product detail");
                IntentOutcome::Navigate(AppRoute::ProductDetail(id))
            }
        }
    }
}
