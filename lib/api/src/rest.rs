use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use rankx_catalog::DemoCatalog;
use rankx_core::{Product, Query, RankingEngine};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info};

/// Body of `POST /rank/process`: one query plus the catalog to rank.
#[derive(Debug, Deserialize)]
pub struct RankRequest {
    pub query: Query,
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Ranked results envelope. Products serialize without their utility.
#[derive(Debug, Serialize)]
pub struct ProductList {
    pub products: Vec<Product>,
}

struct AppState {
    engine: RankingEngine,
    catalog: Option<Arc<DemoCatalog>>,
}

pub struct RestApi;

impl RestApi {
    /// Run the HTTP server until shutdown.
    ///
    /// `catalog` is the optional preloaded demo catalog; without it the
    /// `/rank/catalog` and `/catalog` routes answer with an error.
    pub async fn start(
        engine: RankingEngine,
        catalog: Option<Arc<DemoCatalog>>,
        port: u16,
    ) -> std::io::Result<()> {
        let state = web::Data::new(AppState { engine, catalog });

        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(state.clone())
                .route("/health", web::get().to(health))
                .route("/rank/process", web::post().to(rank_process))
                .route("/rank/catalog", web::post().to(rank_catalog))
                .route("/catalog", web::get().to(get_catalog))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

async fn health() -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

async fn rank_process(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> ActixResult<HttpResponse> {
    let RankRequest { query, products } = req.into_inner();
    info!(
        "Received rank request: {} products, phrase {:?}",
        products.len(),
        query.phrase
    );

    let ranked = state.engine.rank(products, &query);
    for product in &ranked {
        debug!(utility = product.utility, name = ?product.name, "ranked");
    }
    info!("Query processed: {} results", ranked.len());

    Ok(HttpResponse::Ok().json(ProductList { products: ranked }))
}

async fn rank_catalog(
    state: web::Data<AppState>,
    req: web::Json<Query>,
) -> ActixResult<HttpResponse> {
    let Some(catalog) = state.catalog.as_ref() else {
        return Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "No demo catalog loaded"
        })));
    };

    let query = req.into_inner();
    info!(
        "Received catalog rank request over {} products, phrase {:?}",
        catalog.len(),
        query.phrase
    );

    let ranked = state.engine.rank(catalog.to_products(), &query);
    info!("Query processed: {} results", ranked.len());

    Ok(HttpResponse::Ok().json(ProductList { products: ranked }))
}

async fn get_catalog(state: web::Data<AppState>) -> ActixResult<HttpResponse> {
    match state.catalog.as_ref() {
        Some(catalog) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "count": catalog.len(),
            "products": catalog.products(),
        }))),
        None => Ok(HttpResponse::NotFound().json(serde_json::json!({
            "error": "No demo catalog loaded"
        }))),
    }
}
