use std::cmp::Ordering;

use crate::product::Product;
use crate::query::Query;
use crate::scorer::score;

/// Scores a catalog against a query and returns the top results.
///
/// `minimum_utility` and `limit` are operator configuration, validated at the
/// service boundary, not query fields. A threshold of `0` also excludes every
/// disqualified (`-1`) product. The engine holds no state between calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingEngine {
    minimum_utility: f64,
    limit: usize,
}

impl RankingEngine {
    #[inline]
    #[must_use]
    pub fn new(minimum_utility: f64, limit: usize) -> Self {
        Self { minimum_utility, limit }
    }

    #[inline]
    #[must_use]
    pub fn minimum_utility(&self) -> f64 {
        self.minimum_utility
    }

    #[inline]
    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Rank a catalog: score every product, keep those meeting the minimum
    /// utility, sort by utility descending, and truncate to `limit`.
    ///
    /// The sort is stable, so products with equal utility keep their input
    /// order. The catalog is consumed; the only change to its entries is the
    /// derived `utility` field.
    #[must_use]
    pub fn rank(&self, products: Vec<Product>, query: &Query) -> Vec<Product> {
        let mut ranked: Vec<Product> = products
            .into_iter()
            .map(|mut product| {
                product.utility = score(&product, query);
                product
            })
            .filter(|product| product.utility >= self.minimum_utility)
            .collect();

        ranked.sort_by(|a, b| {
            b.utility.partial_cmp(&a.utility).unwrap_or(Ordering::Equal)
        });
        ranked.truncate(self.limit);
        ranked
    }
}
