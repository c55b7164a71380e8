use serde::{Deserialize, Serialize};

/// A structured filter plus free-text phrase, one per ranking request.
///
/// The wire format inherits a sentinel convention from the upstream service:
/// `0` (or `false`, or a non-positive rating) means "unspecified". This makes
/// it impossible to ask for e.g. `priceMax == 0`; the limitation is kept for
/// wire compatibility and confined here by [`Query::filters`], which turns
/// sentinels into proper `Option`s before any scoring logic sees them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    /// Minimum price, `0.0` = unspecified.
    #[serde(default)]
    pub price_min: f64,
    /// Maximum price, `0.0` = unspecified.
    #[serde(default)]
    pub price_max: f64,
    /// Only free-shipping products qualify.
    #[serde(default)]
    pub free_shipping_only: bool,
    /// Maximum shipping time in days, `0` = unspecified.
    #[serde(default)]
    pub max_shipping_time: u32,
    /// Only in-stock products qualify.
    #[serde(default)]
    pub available_only: bool,
    /// Minimum rating, `<= 0.0` = unspecified.
    #[serde(default)]
    pub min_rating: f64,
    /// Free text matched against product text fields. May be empty.
    #[serde(default)]
    pub phrase: String,
}

/// Hard constraints with the sentinel convention already resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Filters {
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub free_shipping_only: bool,
    pub max_shipping_time: Option<u32>,
    pub available_only: bool,
    pub min_rating: Option<f64>,
}

impl Query {
    /// Translate wire sentinels into explicit optional constraints.
    #[must_use]
    pub fn filters(&self) -> Filters {
        Filters {
            price_min: (self.price_min > 0.0).then_some(self.price_min),
            price_max: (self.price_max > 0.0).then_some(self.price_max),
            free_shipping_only: self.free_shipping_only,
            max_shipping_time: (self.max_shipping_time > 0).then_some(self.max_shipping_time),
            available_only: self.available_only,
            min_rating: (self.min_rating > 0.0).then_some(self.min_rating),
        }
    }
}
