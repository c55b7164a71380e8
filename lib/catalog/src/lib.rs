//! # rankx Catalog
//!
//! Demo-catalog loading for the rankx ranking engine.
//!
//! The ranking service is stateless: every request carries its own product
//! list. For demos and smoke tests the server can instead preload a catalog
//! from a JSON file at startup and rank that against bare queries. This crate
//! owns that loading step; the catalog is immutable once loaded.

use std::fs;
use std::path::Path;

use rankx_core::{Error, Product, Result};
use tracing::info;

/// An immutable product catalog preloaded from a JSON file.
#[derive(Debug, Clone, Default)]
pub struct DemoCatalog {
    products: Vec<Product>,
}

impl DemoCatalog {
    /// Load a catalog from a file holding a JSON array of products.
    ///
    /// Fails on unreadable files or malformed JSON; an empty array is legal
    /// (ranking it just returns no results).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let products: Vec<Product> = serde_json::from_str(&raw)
            .map_err(|e| Error::Serialization(format!("{}: {e}", path.display())))?;

        info!(
            "Loaded demo catalog from {} ({} products)",
            path.display(),
            products.len()
        );

        Ok(Self { products })
    }

    #[inline]
    #[must_use]
    pub fn from_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    #[inline]
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Clone the catalog entries for a ranking pass. Ranking consumes its
    /// input, so each request gets its own copy.
    #[inline]
    #[must_use]
    pub fn to_products(&self) -> Vec<Product> {
        self.products.clone()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
