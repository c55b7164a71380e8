//! # rankx Core
//!
//! Core library for the rankx product ranking engine.
//!
//! This crate provides the scoring and ranking primitives:
//!
//! - [`normalize`] - Diacritic folding and case normalization
//! - [`Product`] - A catalog record with request-scoped derived utility
//! - [`Query`] - Structured hard filters plus a free-text phrase
//! - [`score`] - The utility scorer: (product, query) -> utility
//! - [`RankingEngine`] - Filter, sort, and truncate a whole catalog
//!
//! Scoring is a pure function with no shared state: a product either fails a
//! hard filter (utility [`DISQUALIFIED`]) or accumulates `+1` for every
//! query token contained in one of its text fields, compared
//! case- and diacritic-insensitively.
//!
//! ## Example
//!
//! ```rust
//! use rankx_core::{Product, Query, RankingEngine};
//!
//! let catalog = vec![
//!     Product {
//!         name: Some("Café Mug".to_string()),
//!         kind: Some("mug".to_string()),
//!         brand: Some("Acme".to_string()),
//!         description: Some("ceramic cup".to_string()),
//!         price: 10.0,
//!         stock: 2,
//!         rating: 4.5,
//!         shipping_time: 1,
//!         ..Product::default()
//!     },
//! ];
//!
//! let query = Query {
//!     phrase: "cafe mug".to_string(),
//!     min_rating: 4.0,
//!     ..Query::default()
//! };
//!
//! let engine = RankingEngine::new(0.0, 10);
//! let ranked = engine.rank(catalog, &query);
//! assert_eq!(ranked.len(), 1);
//! ```

pub mod engine;
pub mod error;
pub mod normalize;
pub mod product;
pub mod query;
pub mod scorer;

pub use engine::RankingEngine;
pub use error::{Error, Result};
pub use product::Product;
pub use query::{Filters, Query};
pub use scorer::{score, DISQUALIFIED};
