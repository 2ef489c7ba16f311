use serde::Serialize;
use utoipa::ToSchema;

/// Summary of the scraped statements, trailing five fiscal years.
/// Growth and margin fields are null when the history is too short to
/// compute them.
#[derive(Debug, Serialize, ToSchema)]
pub struct FinancialSummaryResponse {
    pub ticker: String,
    pub years: Vec<String>,
    pub revenue: Vec<f64>,
    pub earnings: Vec<f64>,
    pub free_cash_flow: Vec<f64>,
    pub revenue_growth_pct: Option<f64>,
    pub earnings_growth_pct: Option<f64>,
    pub fcf_margin_pct: Option<f64>,
    pub fetched_at: String,
}
