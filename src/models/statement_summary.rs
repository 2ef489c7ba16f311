use serde::Serialize;

/// Trailing-period slice of the statements used for display and valuation:
/// fiscal years, revenue, earnings and derived free cash flow, aligned by
/// index with the most recent period last.
#[derive(Debug, Clone, Serialize)]
pub struct StatementSummary {
    pub years: Vec<String>,
    pub revenue: Vec<f64>,
    pub earnings: Vec<f64>,
    pub free_cash_flow: Vec<f64>,
}
