// src/server/mod.rs
//! HTTP surface. Thin by design: handlers translate a request into one
//! selector call over the shared catalog and serialize the result. All
//! selection logic lives in `select`.

use std::convert::Infallible;
use std::sync::Arc;

use chrono::{Datelike, Utc};
use serde::Deserialize;
use warp::{Filter, Rejection, Reply};

use crate::catalog::NicheCatalog;
use crate::select::select_niches;

#[derive(Debug, Deserialize)]
struct TrendsQuery {
    #[serde(rename = "bookType")]
    book_type: Option<String>,
}

/// Build the route tree: `GET /api/trends` and the `/` health line,
/// with permissive CORS so browser frontends on other origins can call us.
pub fn routes(
    catalog: Arc<NicheCatalog>,
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let with_catalog = warp::any().map(move || catalog.clone());

    let trends = warp::path!("api" / "trends")
        .and(warp::get())
        .and(warp::query::<TrendsQuery>())
        .and(with_catalog.clone())
        .and_then(get_trends);

    let health = warp::path::end()
        .and(warp::get())
        .and(with_catalog)
        .and_then(health_line);

    let cors = warp::cors().allow_any_origin();

    trends.or(health).with(cors)
}

async fn get_trends(
    query: TrendsQuery,
    catalog: Arc<NicheCatalog>,
) -> Result<impl Reply, Infallible> {
    // Read the clock per request; the rotation must advance with real time.
    let week = Utc::now().iso_week().week();
    let filter = query.book_type.as_deref().unwrap_or("all");
    let picks = select_niches(&catalog, filter, week);
    Ok(warp::reply::json(&picks))
}

async fn health_line(catalog: Arc<NicheCatalog>) -> Result<impl Reply, Infallible> {
    let body = if catalog.is_empty() {
        "Niche hunter backend is running, but data is NOT loaded. Check the CSV and logs."
            .to_string()
    } else {
        format!(
            "Niche hunter backend is running. {} keywords loaded.",
            catalog.len()
        )
    };
    Ok(body)
}
