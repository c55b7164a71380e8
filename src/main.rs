use clap::Parser;
use rankx_api::RestApi;
use rankx_catalog::DemoCatalog;
use rankx_core::RankingEngine;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// A small, fast product ranking service
#[derive(Parser, Debug)]
#[command(name = "rankx")]
#[command(about = "Ranks product catalogs against structured queries", long_about = None)]
struct Args {
    /// Minimum utility a product must reach to appear in results
    #[arg(long)]
    minimum_utility: i64,

    /// Maximum number of ranked products returned per request
    #[arg(long)]
    limit: usize,

    /// HTTP API port
    #[arg(long, default_value_t = 8080)]
    http_port: u16,

    /// Optional demo catalog (JSON array of products) to preload
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // The engine assumes validated configuration; reject bad values here.
    if args.minimum_utility < 0 {
        return Err(rankx_core::Error::InvalidConfig(
            "--minimum-utility must be non-negative".to_string(),
        )
        .into());
    }

    info!("Starting rankx v{}", env!("CARGO_PKG_VERSION"));
    info!("Minimum utility: {}", args.minimum_utility);
    info!("Result limit: {}", args.limit);
    info!("HTTP API port: {}", args.http_port);

    let engine = RankingEngine::new(args.minimum_utility as f64, args.limit);

    let catalog = match &args.catalog {
        Some(path) => {
            let catalog = Arc::new(DemoCatalog::load(path)?);
            info!("Demo catalog: {:?} ({} products)", path, catalog.len());
            Some(catalog)
        }
        None => None,
    };

    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(engine, catalog, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("rankx started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
