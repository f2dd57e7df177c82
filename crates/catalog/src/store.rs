//! In-memory catalog store.

use std::collections::HashSet;

use marketplace_core::{DomainError, DomainResult, Entity, ProductId};

use crate::filter::ProductQuery;
use crate::product::Product;

/// The static product list for one page view.
///
/// Ids are unique; insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate product ids.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id()) {
                return Err(DomainError::invariant(format!(
                    "duplicate product id in catalog: {}",
                    product.id()
                )));
            }
        }
        Ok(Self { products })
    }

    /// The six demo products shown on the home page.
    pub fn mock() -> Self {
        Self {
            products: crate::seed::mock_products(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Lookup that treats a miss as an error (detail page, cart totals).
    pub fn require(&self, id: &ProductId) -> DomainResult<&Product> {
        self.get(id).ok_or_else(DomainError::not_found)
    }

    /// Products matching `query`, in catalog order.
    pub fn search(&self, query: &ProductQuery) -> Vec<&Product> {
        let found = if query.is_unfiltered() {
            self.products.iter().collect()
        } else {
            query.apply(&self.products)
        };
        tracing::debug!(
            query = %query.text(),
            category = %query.category(),
            matched = found.len(),
            total = self.products.len(),
            "catalog search"
        );
        found
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::mock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Category, ImageRef};
    use marketplace_core::Price;

    fn product(id: &str) -> Product {
        Product::new(
            ProductId::new(id).unwrap(),
            format!("Item {id}"),
            Price::from_cents(100),
            ImageRef::new("/x.jpg"),
            Category::Books,
        )
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let err = Catalog::new(vec![product("a"), product("b"), product("a")]).unwrap_err();
        match err {
            DomainError::InvariantViolation(msg) => assert!(msg.contains("a")),
            _ => panic!("Expected InvariantViolation for duplicate id"),
        }
    }

    #[test]
    fn get_and_require() {
        let catalog = Catalog::new(vec![product("a"), product("b")]).unwrap();
        let b = ProductId::new("b").unwrap();
        let z = ProductId::new("z").unwrap();
        assert_eq!(catalog.get(&b).map(|p| p.title()), Some("Item b"));
        assert!(catalog.get(&z).is_none());
        assert_eq!(catalog.require(&z).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn mock_catalog_has_six_unique_products() {
        let catalog = Catalog::mock();
        assert_eq!(catalog.len(), 6);
        assert!(Catalog::new(catalog.products().to_vec()).is_ok());
    }
}
