//! # rankx API
//!
//! REST surface for the rankx product ranking engine.
//!
//! The service is stateless: `POST /rank/process` carries both the query and
//! the catalog to rank, mirroring how the upstream orchestrator feeds the
//! engine. A preloaded demo catalog (see `rankx-catalog`) optionally backs
//! `POST /rank/catalog` and `GET /catalog` for demos and smoke tests.

pub mod rest;

pub use rest::{ProductList, RankRequest, RestApi};
