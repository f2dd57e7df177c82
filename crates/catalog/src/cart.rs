//! Session-local shopping cart.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use marketplace_core::{DomainError, Price, ProductId};

use crate::store::Catalog;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    /// Always at least 1; lines at zero are removed.
    pub quantity: u32,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("cart references a product that is not in the catalog: {0}")]
    UnknownProduct(ProductId),

    #[error("cart total overflowed")]
    Overflow,
}

impl From<CartError> for DomainError {
    fn from(value: CartError) -> Self {
        match value {
            CartError::UnknownProduct(_) => DomainError::not_found(),
            CartError::Overflow => DomainError::invariant(value.to_string()),
        }
    }
}

/// Cart lines in the order products were first added.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit; repeated adds increment the existing line.
    pub fn add(&mut self, product_id: ProductId) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }
        self.lines.push(CartLine {
            product_id,
            quantity: 1,
        });
        1
    }

    /// Set a line's quantity; zero removes the line.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
        } else if let Some(line) = self.lines.iter_mut().find(|l| &l.product_id == product_id) {
            line.quantity = quantity;
        }
    }

    /// Take one unit off a line, removing it at zero. Returns the new quantity.
    pub fn decrement(&mut self, product_id: &ProductId) -> u32 {
        let remaining = self.quantity_of(product_id).saturating_sub(1);
        self.set_quantity(product_id, remaining);
        remaining
    }

    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| &l.product_id != product_id);
        self.lines.len() != before
    }

    pub fn quantity_of(&self, product_id: &ProductId) -> u32 {
        self.lines
            .iter()
            .find(|l| &l.product_id == product_id)
            .map_or(0, |l| l.quantity)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Total units across all lines (navigation badge).
    pub fn item_count(&self) -> u32 {
        self.lines.iter().fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of price × quantity, priced from `catalog`.
    pub fn total(&self, catalog: &Catalog) -> Result<Price, CartError> {
        self.lines.iter().try_fold(Price::ZERO, |acc, line| {
            let product = catalog
                .get(&line.product_id)
                .ok_or_else(|| CartError::UnknownProduct(line.product_id.clone()))?;
            product
                .price()
                .checked_mul(line.quantity)
                .and_then(|subtotal| acc.checked_add(subtotal))
                .ok_or(CartError::Overflow)
        })
    }
}
