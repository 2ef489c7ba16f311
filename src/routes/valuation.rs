use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use utoipa::OpenApi;

use crate::{
    models::{
        dto::{ValuationRequest, ValuationResponse},
        Error,
    },
    valuation::{self, DcfAssumptions, TERMINAL_GROWTH_RATE},
    AppState,
};

use super::normalize_ticker;

#[derive(OpenApi)]
#[openapi(paths(calculate_valuation_handler))]
/// Defines the OpenAPI spec for the DCF valuation endpoint
pub struct ValuationApi;

/// Used to group valuation endpoints together in the OpenAPI documentation
pub const VALUATION_API_GROUP: &str = "VALUATION";

/// Builds a router for the valuation routes
pub fn valuation_routes(_state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new().route("/", post(calculate_valuation_handler))
}

/// Fetches the ticker's statements fresh and discounts projected cash
/// flows under the supplied assumptions.
#[utoipa::path(
    post,
    path = "/api/valuation",
    tag = VALUATION_API_GROUP,
    request_body = ValuationRequest,
    responses(
        (status = 200, description = "Intrinsic value computed", body = ValuationResponse),
        (status = 400, description = "Bad request"),
        (status = 404, description = "Statement section or row not found on the page"),
        (status = 422, description = "Assumptions make the valuation undefined"),
        (status = 502, description = "Upstream fetch failed or page was malformed"),
    )
)]
pub async fn calculate_valuation_handler(
    State(state): State<Arc<AppState>>,
    Json(body): Json<ValuationRequest>,
) -> Result<Json<ValuationResponse>, Error> {
    let ticker = normalize_ticker(&body.ticker)?;
    let assumptions = DcfAssumptions {
        revenue_growth_rate_pct: body.revenue_growth_rate_pct,
        fcf_margin_pct: body.fcf_margin_pct,
        discount_rate_pct: body.discount_rate_pct,
    };

    let document = state.screener.fetch_consolidated(&ticker).await?;
    let summary = state.screener.summarize(&document)?;
    let last_revenue = summary
        .revenue
        .last()
        .copied()
        .ok_or((StatusCode::BAD_GATEWAY, "No revenue history on the statements page"))?;

    let intrinsic_value = valuation::compute_dcf(&assumptions, last_revenue)?;

    Ok(Json(ValuationResponse {
        ticker,
        intrinsic_value,
        currency_unit: "INR crores".to_string(),
        revenue_growth_rate_pct: assumptions.revenue_growth_rate_pct,
        fcf_margin_pct: assumptions.fcf_margin_pct,
        discount_rate_pct: assumptions.discount_rate_pct,
        terminal_growth_rate_pct: TERMINAL_GROWTH_RATE * 100.0,
    }))
}
