//! Search/filter engine: (query text, category) × catalog → matching products.
//!
//! A product matches when its category equals the selected one (or the
//! selection is [`CategoryFilter::All`]) **and** its title contains the query
//! text, compared case-insensitively. There is no ranking and no paging;
//! results keep catalog order and an empty result is a normal outcome.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use marketplace_core::DomainError;

use crate::product::{Category, Product};

/// Category selection, with the `All` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    /// Chips in display order: `All` first, then every category.
    pub fn chips() -> impl Iterator<Item = CategoryFilter> {
        core::iter::once(CategoryFilter::All).chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }

    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(c) => c.label(),
        }
    }

    pub fn admits(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }
}

impl core::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_LABEL {
            Ok(CategoryFilter::All)
        } else {
            s.parse().map(CategoryFilter::Only)
        }
    }
}

/// Filter criteria owned by the listing page.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductQuery {
    text: String,
    category: CategoryFilter,
}

impl ProductQuery {
    pub fn new(text: impl Into<String>, category: CategoryFilter) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn category(&self) -> CategoryFilter {
        self.category
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    /// Reset to empty text and `All` ("Clear Filters").
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// True when nothing narrows the catalog.
    pub fn is_unfiltered(&self) -> bool {
        self.text.is_empty() && self.category == CategoryFilter::All
    }

    pub fn matches(&self, product: &Product) -> bool {
        self.category.admits(product.category()) && title_contains(product.title(), &self.text.to_lowercase())
    }

    /// Keep the matching products, preserving input order.
    pub fn apply<'a, I>(&self, products: I) -> Vec<&'a Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        products.into_iter().filter(|p| self.matches(p)).collect()
    }
}

fn title_contains(title: &str, lowercase_needle: &str) -> bool {
    lowercase_needle.is_empty() || title.to_lowercase().contains(lowercase_needle)
}
