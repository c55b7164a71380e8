//! # rankx
//!
//! A small, fast product ranking engine: hard eligibility filters plus
//! free-text relevance scoring over an in-memory catalog.
//!
//! Each request supplies a structured [`Query`] and a product list; every
//! product is scored by a pure utility function, filtered against an
//! operator-configured minimum utility, sorted by utility descending, and
//! truncated to the top K.
//!
//! ## Quick Start
//!
//! ### As a Server
//!
//! ```bash
//! cargo install rankx
//! rankx --minimum-utility 0 --limit 10 --http-port 8080
//! ```
//!
//! ### As a Library
//!
//! ```rust
//! use rankx::prelude::*;
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
//!
//! ## Crate Structure
//!
//! rankx is composed of several crates:
//!
//! - [`rankx-core`](https://docs.rs/rankx-core) - Normalization, scoring, ranking
//! - [`rankx-catalog`](https://docs.rs/rankx-catalog) - Demo catalog loading
//! - [`rankx-api`](https://docs.rs/rankx-api) - REST API
//!
//! ## Features
//!
//! - **Hard Filters**: price range, free shipping, shipping time,
//!   availability, and minimum rating disqualify outright
//! - **Text Relevance**: additive token containment over name, type, brand,
//!   and description, diacritic- and case-insensitive
//! - **Stable Ranking**: descending utility, input order kept among ties
//! - **Stateless Service**: catalog and configuration are plain arguments

// Re-export core types
pub use rankx_core::{
    score, Error, Filters, Product, Query, RankingEngine, Result, DISQUALIFIED,
};

// Re-export catalog loading
pub use rankx_catalog::DemoCatalog;

// Re-export API
pub use rankx_api::{ProductList, RankRequest, RestApi};

/// Text normalization helpers
pub mod normalize {
    pub use rankx_core::normalize::{fold_diacritics, to_comparable};
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        score, DemoCatalog, Error, Filters, Product, ProductList, Query,
        RankRequest, RankingEngine, RestApi, Result, DISQUALIFIED,
    };
}
