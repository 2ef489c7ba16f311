use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use utoipa::OpenApi;

use crate::{
    models::{dto::FinancialSummaryResponse, Error},
    valuation, AppState,
};

use super::normalize_ticker;

#[derive(OpenApi)]
#[openapi(paths(get_financials_handler))]
/// Defines the OpenAPI spec for the financial summary endpoint
pub struct FinancialsApi;

/// Used to group financial summary endpoints together in the OpenAPI documentation
pub const FINANCIALS_API_GROUP: &str = "FINANCIALS";

/// Builds a router for the financial summary routes
pub fn financials_routes(_state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new().route("/:ticker", get(get_financials_handler))
}

#[utoipa::path(
    get,
    path = "/api/financials/{ticker}",
    tag = FINANCIALS_API_GROUP,
    responses(
        (status = 200, description = "Financial summary for the ticker", body = FinancialSummaryResponse),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Statement section or row not found on the page"),
        (status = 502, description = "Upstream fetch failed or page was malformed"),
    ),
    params(
        ("ticker" = String, Path, description = "NSE ticker symbol, e.g. TCS")
    )
)]
pub async fn get_financials_handler(
    State(state): State<Arc<AppState>>,
    Path(ticker): Path<String>,
) -> Result<Json<FinancialSummaryResponse>, Error> {
    let ticker = normalize_ticker(&ticker)?;
    let document = state.screener.fetch_consolidated(&ticker).await?;
    let summary = state.screener.summarize(&document)?;

    let revenue_growth_pct = valuation::average_growth_rate(&summary.revenue)?;
    let earnings_growth_pct = valuation::average_growth_rate(&summary.earnings)?;
    let fcf_margin_pct = valuation::fcf_margin_pct(&summary.free_cash_flow, &summary.revenue)?;

    Ok(Json(FinancialSummaryResponse {
        ticker,
        years: summary.years,
        revenue: summary.revenue,
        earnings: summary.earnings,
        free_cash_flow: summary.free_cash_flow,
        revenue_growth_pct,
        earnings_growth_pct,
        fcf_margin_pct,
        fetched_at: chrono::Utc::now().to_rfc3339(),
    }))
}
