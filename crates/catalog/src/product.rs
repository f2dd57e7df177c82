use core::str::FromStr;

use serde::{Deserialize, Serialize};

use marketplace_core::{DomainError, Entity, Price, ProductId, Rating};

/// Browsing category shown as a chip on the home page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Fashion,
    Home,
    Sports,
    Books,
}

impl Category {
    /// All categories in chip order.
    pub const ALL: [Category; 5] = [
        Category::Electronics,
        Category::Fashion,
        Category::Home,
        Category::Sports,
        Category::Books,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Fashion => "Fashion",
            Category::Home => "Home",
            Category::Sports => "Sports",
            Category::Books => "Books",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    /// Exact label match; labels are what the chips and the URL carry.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown category: {s}")))
    }
}

/// Opaque image handle (asset URL or data URL).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(src: impl Into<String>) -> Self {
        Self(src.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A catalog record. Immutable for the session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    title: String,
    price: Price,
    image: ImageRef,
    category: Category,
    rating: Option<Rating>,
    is_new: bool,
}

impl Product {
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        price: Price,
        image: ImageRef,
        category: Category,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price,
            image,
            category,
            rating: None,
            is_new: false,
        }
    }

    pub fn with_rating(mut self, rating: Rating) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn mark_new(mut self) -> Self {
        self.is_new = true;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn rating(&self) -> Option<Rating> {
        self.rating
    }

    pub fn is_new(&self) -> bool {
        self.is_new
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
