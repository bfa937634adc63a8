// src/main.rs
use std::{env, path::Path, sync::Arc};

use nichehunter::{catalog, server};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

/// Default keyword export served when NICHE_DATA_FILE is not set.
const DEFAULT_DATA_FILE: &str = "US_AMAZON_magnet__2025-06-05.csv";

#[tokio::main]
async fn main() {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env_filter).init();
    info!("startup");

    // ─── 2) one-shot catalog load ────────────────────────────────────
    let data_file =
        env::var("NICHE_DATA_FILE").unwrap_or_else(|_| DEFAULT_DATA_FILE.to_string());
    let catalog = Arc::new(catalog::load_catalog(Path::new(&data_file)));
    if catalog.is_empty() {
        warn!("catalog is empty; serving degraded (every query returns no niches)");
    }

    // ─── 3) serve ────────────────────────────────────────────────────
    let port: u16 = env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse()
        .unwrap_or(5000);
    info!(port, "listening");

    warp::serve(server::routes(catalog))
        .run(([0, 0, 0, 0], port))
        .await;
}
