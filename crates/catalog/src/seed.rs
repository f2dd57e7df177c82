//! Mock catalog data.

use marketplace_core::{Price, ProductId, Rating};

use crate::product::{Category, ImageRef, Product};

struct Seed {
    id: &'static str,
    title: &'static str,
    cents: u64,
    image: &'static str,
    category: Category,
    rating_tenths: u8,
    is_new: bool,
}

const SEEDS: [Seed; 6] = [
    Seed {
        id: "1",
        title: "Wireless Bluetooth Headphones",
        cents: 8999,
        image: "/assets/product-headphones.jpg",
        category: Category::Electronics,
        rating_tenths: 45,
        is_new: true,
    },
    Seed {
        id: "2",
        title: "Vintage Leather Jacket",
        cents: 15999,
        image: "/assets/product-jacket.jpg",
        category: Category::Fashion,
        rating_tenths: 48,
        is_new: false,
    },
    Seed {
        id: "3",
        title: "Smart Home Security Camera",
        cents: 12999,
        image: "/assets/product-camera.jpg",
        category: Category::Electronics,
        rating_tenths: 43,
        is_new: true,
    },
    Seed {
        id: "4",
        title: "Minimalist Coffee Table",
        cents: 29999,
        image: "/assets/product-table.jpg",
        category: Category::Home,
        rating_tenths: 46,
        is_new: false,
    },
    Seed {
        id: "5",
        title: "Running Shoes - Ultra Comfort",
        cents: 11999,
        image: "/assets/product-shoes.jpg",
        category: Category::Sports,
        rating_tenths: 47,
        is_new: false,
    },
    Seed {
        id: "6",
        title: "Programming Fundamentals Book",
        cents: 3999,
        image: "/assets/product-book.jpg",
        category: Category::Books,
        rating_tenths: 44,
        is_new: false,
    },
];

/// Build the demo product list.
///
/// Seed ids are non-blank and ratings are within range, so construction
/// cannot fail; entries that somehow would are skipped and logged.
pub fn mock_products() -> Vec<Product> {
    SEEDS
        .iter()
        .filter_map(|seed| {
            let built = ProductId::new(seed.id).and_then(|id| {
                let rating = Rating::from_tenths(seed.rating_tenths)?;
                let product = Product::new(
                    id,
                    seed.title,
                    Price::from_cents(seed.cents),
                    ImageRef::new(seed.image),
                    seed.category,
                )
                .with_rating(rating);
                Ok(if seed.is_new { product.mark_new() } else { product })
            });
            match built {
                Ok(product) => Some(product),
                Err(e) => {
                    tracing::error!(id = seed.id, error = %e, "invalid catalog seed");
                    None
                }
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketplace_core::Entity;

    #[test]
    fn seeds_match_the_demo_catalog() {
        let products = mock_products();
        assert_eq!(products.len(), 6);

        let headphones = &products[0];
        assert_eq!(headphones.id().as_str(), "1");
        assert_eq!(headphones.price(), Price::from_cents(8999));
        assert!(headphones.is_new());
        assert_eq!(headphones.rating().map(|r| r.to_string()), Some("4.5".to_string()));

        let new_ids: Vec<&str> = products
            .iter()
            .filter(|p| p.is_new())
            .map(|p| p.id().as_str())
            .collect();
        assert_eq!(new_ids, vec!["1", "3"]);
    }
}
