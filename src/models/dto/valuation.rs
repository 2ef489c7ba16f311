use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// DCF inputs: the ticker to value plus the three assumptions, in percent.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ValuationRequest {
    pub ticker: String,
    pub revenue_growth_rate_pct: f64,
    pub fcf_margin_pct: f64,
    pub discount_rate_pct: f64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValuationResponse {
    pub ticker: String,
    /// Intrinsic value in the reporting unit of the source statements
    /// (INR crores for screener.in).
    pub intrinsic_value: f64,
    pub currency_unit: String,
    pub revenue_growth_rate_pct: f64,
    pub fcf_margin_pct: f64,
    pub discount_rate_pct: f64,
    pub terminal_growth_rate_pct: f64,
}
