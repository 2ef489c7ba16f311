mod financials;
mod health;
mod swagger;
mod valuation;
use crate::external::Screener;
use health::health_checker_handler;
use tracing::info;
use tower_http::trace::TraceLayer;

use crate::{models::Error, AppState, Config};

use axum::{http::StatusCode, routing::get, Router};
use std::sync::Arc;

pub async fn make_app() -> anyhow::Result<(Router, Config)> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();
    let config = Config::init();
    info!("Scraping statements from {}", config.screener_base_url);

    let screener = Screener::new(&config.screener_base_url);
    let state = Arc::new(AppState {
        screener,
        config: config.clone(),
    });
    let ret = Router::new()
        .route("/api", get(health_checker_handler))
        .route("/api/health", get(health_checker_handler))
        .nest("/api/financials", financials::financials_routes(state.clone()))
        .nest("/api/valuation", valuation::valuation_routes(state.clone()))
        .merge(swagger::build_documentation())
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    Ok((ret, config))
}

/// Tickers arrive however the user typed them; the upstream URL scheme
/// wants them trimmed and upper-cased.
pub(crate) fn normalize_ticker(raw: &str) -> Result<String, Error> {
    let ticker = raw.trim().to_uppercase();
    if ticker.is_empty() {
        return Err(Error::new(StatusCode::BAD_REQUEST, "Ticker must not be empty"));
    }
    Ok(ticker)
}
