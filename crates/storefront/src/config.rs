//! Storefront configuration.
//!
//! A browser bundle has no process environment, so values are read from the
//! build environment (`option_env!`) and baked in at compile time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Name shown next to the logo.
    pub brand: String,
    /// Prefix for rendered prices.
    pub currency_symbol: String,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_directive: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            brand: "MarketPlace".to_string(),
            currency_symbol: "$".to_string(),
            log_directive: marketplace_observability::DEFAULT_DIRECTIVE.to_string(),
        }
    }
}

impl StorefrontConfig {
    /// `MARKETPLACE_BRAND`, `MARKETPLACE_CURRENCY`, `MARKETPLACE_LOG` at build time.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("MARKETPLACE_BRAND"),
            option_env!("MARKETPLACE_CURRENCY"),
            option_env!("MARKETPLACE_LOG"),
        )
    }

    /// Overlay the given values on the defaults; blank values are ignored.
    pub fn from_values(brand: Option<&str>, currency_symbol: Option<&str>, log_directive: Option<&str>) -> Self {
        let defaults = Self::default();
        let pick = |value: Option<&str>, fallback: String| {
            value
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map_or(fallback, str::to_string)
        };
        Self {
            brand: pick(brand, defaults.brand),
            currency_symbol: pick(currency_symbol, defaults.currency_symbol),
            log_directive: pick(log_directive, defaults.log_directive),
        }
    }
}
