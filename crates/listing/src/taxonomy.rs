//! Select-box vocabularies for the creation form.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use marketplace_core::DomainError;

/// Seller-facing category list (broader than the home page chips).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingCategory {
    Electronics,
    Fashion,
    HomeAndGarden,
    SportsAndOutdoors,
    BooksAndMedia,
    HealthAndBeauty,
    Automotive,
    ToysAndGames,
    ArtsAndCrafts,
    Other,
}

impl ListingCategory {
    pub const ALL: [ListingCategory; 10] = [
        ListingCategory::Electronics,
        ListingCategory::Fashion,
        ListingCategory::HomeAndGarden,
        ListingCategory::SportsAndOutdoors,
        ListingCategory::BooksAndMedia,
        ListingCategory::HealthAndBeauty,
        ListingCategory::Automotive,
        ListingCategory::ToysAndGames,
        ListingCategory::ArtsAndCrafts,
        ListingCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ListingCategory::Electronics => "Electronics",
            ListingCategory::Fashion => "Fashion",
            ListingCategory::HomeAndGarden => "Home & Garden",
            ListingCategory::SportsAndOutdoors => "Sports & Outdoors",
            ListingCategory::BooksAndMedia => "Books & Media",
            ListingCategory::HealthAndBeauty => "Health & Beauty",
            ListingCategory::Automotive => "Automotive",
            ListingCategory::ToysAndGames => "Toys & Games",
            ListingCategory::ArtsAndCrafts => "Arts & Crafts",
            ListingCategory::Other => "Other",
        }
    }
}

impl FromStr for ListingCategory {
    type Err = DomainError;

    /// Accepts the display label (what the `<select>` options carry).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ListingCategory::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown listing category: {s}")))
    }
}

/// Item condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Condition {
    New,
    LikeNew,
    Good,
    Fair,
    Poor,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Condition::New,
        Condition::LikeNew,
        Condition::Good,
        Condition::Fair,
        Condition::Poor,
    ];

    /// Option value in the form (`like-new`).
    pub fn slug(&self) -> &'static str {
        match self {
            Condition::New => "new",
            Condition::LikeNew => "like-new",
            Condition::Good => "good",
            Condition::Fair => "fair",
            Condition::Poor => "poor",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Condition::New => "New",
            Condition::LikeNew => "Like New",
            Condition::Good => "Good",
            Condition::Fair => "Fair",
            Condition::Poor => "Poor",
        }
    }
}

impl FromStr for Condition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Condition::ALL
            .into_iter()
            .find(|c| c.slug() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown condition: {s}")))
    }
}
