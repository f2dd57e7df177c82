//! Display models. Components render these; formatting rules live here so
//! they are testable without a browser.

use marketplace_catalog::{Cart, Catalog, CategoryFilter, Product, ProductQuery};
use marketplace_core::{Entity, ProductId};

/// Everything a product card shows, pre-formatted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCardView {
    pub id: ProductId,
    pub title: String,
    pub image_src: String,
    pub price_label: String,
    /// `None` when the product is unrated or rated 0.
    pub rating_label: Option<String>,
    pub category_label: &'static str,
    pub is_new: bool,
}

impl ProductCardView {
    pub fn from_product(product: &Product, currency_symbol: &str) -> Self {
        Self {
            id: product.id().clone(),
            title: product.title().to_string(),
            image_src: product.image().as_str().to_string(),
            price_label: product.price().with_symbol(currency_symbol),
            rating_label: product
                .rating()
                .filter(|r| r.is_visible())
                .map(|r| r.to_string()),
            category_label: product.category().label(),
            is_new: product.is_new(),
        }
    }
}

/// Heading and result count above the product grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingHeader {
    pub heading: String,
    pub count_label: String,
    pub is_empty: bool,
}

impl ListingHeader {
    pub fn new(query: &ProductQuery, found: usize) -> Self {
        let heading = match query.category() {
            CategoryFilter::All => "All Products".to_string(),
            CategoryFilter::Only(category) => category.label().to_string(),
        };
        Self {
            heading,
            count_label: format!("{found} products found"),
            is_empty: found == 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub product_id: ProductId,
    pub title: String,
    pub image_src: String,
    pub unit_price_label: String,
    pub quantity: u32,
    pub subtotal_label: String,
}

/// Cart lines joined with catalog data. Lines whose product is missing from
/// the catalog are skipped.
pub fn cart_rows(cart: &Cart, catalog: &Catalog, currency_symbol: &str) -> Vec<CartRow> {
    cart.lines()
        .iter()
        .filter_map(|line| {
            let Some(product) = catalog.get(&line.product_id) else {
                tracing::warn!(product_id = %line.product_id, "cart line without catalog product");
                return None;
            };
            let subtotal = product.price().checked_mul(line.quantity)?;
            Some(CartRow {
                product_id: line.product_id.clone(),
                title: product.title().to_string(),
                image_src: product.image().as_str().to_string(),
                unit_price_label: product.price().with_symbol(currency_symbol),
                quantity: line.quantity,
                subtotal_label: subtotal.with_symbol(currency_symbol),
            })
        })
        .collect()
}

/// Cart total label, or `None` when the cart cannot be priced.
pub fn cart_total_label(cart: &Cart, catalog: &Catalog, currency_symbol: &str) -> Option<String> {
    match cart.total(catalog) {
        Ok(total) => Some(total.with_symbol(currency_symbol)),
        Err(e) => {
            tracing::warn!(error = %e, "cart total unavailable");
            None
        }
    }
}

/// CSS `animation-delay` that staggers grid cards.
pub fn stagger_delay(index: usize) -> String {
    format!("animation-delay: {}.{}s", index / 10, index % 10)
}

#[cfg(test)]
mod tests {
    use super::*;
    use marketplace_catalog::{Category, ImageRef};
    use marketplace_core::{Price, Rating};

    fn id(s: &str) -> ProductId {
        ProductId::new(s).unwrap()
    }

    #[test]
    fn card_formats_price_rating_and_badges() {
        let catalog = Catalog::mock();
        let headphones = catalog.get(&id("1")).unwrap();
        let card = ProductCardView::from_product(headphones, "$");
        assert_eq!(card.price_label, "$89.99");
        assert_eq!(card.rating_label.as_deref(), Some("4.5"));
        assert_eq!(card.category_label, "Electronics");
        assert!(card.is_new);
    }

    #[test]
    fn zero_or_missing_rating_is_hidden() {
        let base = Product::new(
            id("x"),
            "Mug",
            Price::from_cents(500),
            ImageRef::new("/mug.jpg"),
            Category::Home,
        );
        assert_eq!(ProductCardView::from_product(&base, "$").rating_label, None);

        let zero = base.with_rating(Rating::from_tenths(0).unwrap());
        assert_eq!(ProductCardView::from_product(&zero, "$").rating_label, None);
    }

    #[test]
    fn header_names_category_and_count() {
        let all = ListingHeader::new(&ProductQuery::default(), 6);
        assert_eq!(all.heading, "All Products");
        assert_eq!(all.count_label, "6 products found");
        assert!(!all.is_empty);

        let books = ListingHeader::new(&ProductQuery::new("", CategoryFilter::Only(Category::Books)), 0);
        assert_eq!(books.heading, "Books");
        assert!(books.is_empty);
    }

    #[test]
    fn cart_rows_join_catalog_and_skip_unknown() {
        let catalog = Catalog::mock();
        let mut cart = Cart::new();
        cart.add(id("6"));
        cart.add(id("6"));
        cart.add(id("ghost"));

        let rows = cart_rows(&cart, &catalog, "$");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].title, "Programming Fundamentals Book");
        assert_eq!(rows[0].quantity, 2);
        assert_eq!(rows[0].subtotal_label, "$79.98");

        assert_eq!(cart_total_label(&cart, &catalog, "$"), None);
        cart.remove(&id("ghost"));
        assert_eq!(cart_total_label(&cart, &catalog, "$").as_deref(), Some("$79.98"));
    }

    #[test]
    fn stagger_steps_by_a_tenth_of_a_second() {
        assert_eq!(stagger_delay(0), "animation-delay: 0.0s");
        assert_eq!(stagger_delay(3), "animation-delay: 0.3s");
        assert_eq!(stagger_delay(12), "animation-delay: 1.2s");
    }
}
