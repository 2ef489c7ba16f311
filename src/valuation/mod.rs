//! Growth, free-cash-flow and discounted-cash-flow arithmetic.
//!
//! Everything in here is a pure function over numeric series; fetching and
//! extraction live in [`crate::external`].

use crate::models::ValuationError;

/// Perpetual growth rate applied beyond the explicit projection horizon.
pub const TERMINAL_GROWTH_RATE: f64 = 0.025;

/// Years of explicitly projected cash flows before the terminal value.
pub const PROJECTION_YEARS: i32 = 5;

/// User-supplied inputs for a DCF valuation, all expressed in percent.
#[derive(Debug, Clone, Copy)]
pub struct DcfAssumptions {
    pub revenue_growth_rate_pct: f64,
    pub fcf_margin_pct: f64,
    pub discount_rate_pct: f64,
}

/// Element-wise free cash flow: operating cash flow minus the investing
/// cash flow used as a capital-expenditure proxy.
pub fn free_cash_flow(
    operating_cash_flow: &[f64],
    investing_cash_flow: &[f64],
) -> Result<Vec<f64>, ValuationError> {
    if operating_cash_flow.len() != investing_cash_flow.len() {
        return Err(ValuationError::LengthMismatch {
            left: operating_cash_flow.len(),
            right: investing_cash_flow.len(),
        });
    }
    Ok(operating_cash_flow
        .iter()
        .zip(investing_cash_flow)
        .map(|(ocf, capex)| ocf - capex)
        .collect())
}

/// Period-over-period growth in percent, `(v[i] - v[i-1]) / |v[i-1]| * 100`.
/// A zero baseline period is an error rather than a silent infinity.
pub fn growth_rates(values: &[f64]) -> Result<Vec<f64>, ValuationError> {
    values
        .windows(2)
        .map(|pair| {
            if pair[0] == 0.0 {
                Err(ValuationError::ZeroBaseline)
            } else {
                Ok((pair[1] - pair[0]) / pair[0].abs() * 100.0)
            }
        })
        .collect()
}

/// Mean of [`growth_rates`]; `None` when fewer than two periods exist.
pub fn average_growth_rate(values: &[f64]) -> Result<Option<f64>, ValuationError> {
    let rates = growth_rates(values)?;
    if rates.is_empty() {
        return Ok(None);
    }
    Ok(Some(rates.iter().sum::<f64>() / rates.len() as f64))
}

/// Mean of per-period `fcf / revenue`, in percent; `None` on empty input.
pub fn fcf_margin_pct(fcf: &[f64], revenue: &[f64]) -> Result<Option<f64>, ValuationError> {
    if fcf.len() != revenue.len() {
        return Err(ValuationError::LengthMismatch {
            left: fcf.len(),
            right: revenue.len(),
        });
    }
    if fcf.is_empty() {
        return Ok(None);
    }
    let mut total = 0.0;
    for (f, r) in fcf.iter().zip(revenue) {
        if *r == 0.0 {
            return Err(ValuationError::ZeroBaseline);
        }
        total += f / r * 100.0;
    }
    Ok(Some(total / fcf.len() as f64))
}

/// Trailing `n` entries of a series, or the whole series when shorter.
pub fn last_n<T>(values: &[T], n: usize) -> &[T] {
    &values[values.len().saturating_sub(n)..]
}

/// Intrinsic value from a five-year FCF projection plus a discounted
/// terminal value.
///
/// Revenue compounds at the assumed growth rate from `last_revenue`, each
/// projected year converts to FCF at the assumed margin, and the terminal
/// value capitalizes year five's FCF at [`TERMINAL_GROWTH_RATE`]. The
/// discount rate must exceed the terminal growth rate; at or below it the
/// perpetuity denominator is zero or negative and the result would be
/// meaningless.
pub fn compute_dcf(
    assumptions: &DcfAssumptions,
    last_revenue: f64,
) -> Result<f64, ValuationError> {
    let growth = assumptions.revenue_growth_rate_pct / 100.0;
    let margin = assumptions.fcf_margin_pct / 100.0;
    let discount = assumptions.discount_rate_pct / 100.0;

    if discount - TERMINAL_GROWTH_RATE <= 0.0 {
        return Err(ValuationError::DiscountBelowTerminalGrowth);
    }

    let projected_fcf: Vec<f64> = (1..=PROJECTION_YEARS)
        .map(|year| last_revenue * (1.0 + growth).powi(year) * margin)
        .collect();

    let discounted_fcf: f64 = projected_fcf
        .iter()
        .enumerate()
        .map(|(i, fcf)| fcf / (1.0 + discount).powi(i as i32 + 1))
        .sum();

    // projected_fcf is never empty: PROJECTION_YEARS is a positive constant.
    let final_year_fcf = projected_fcf[projected_fcf.len() - 1];
    let terminal_value =
        final_year_fcf * (1.0 + TERMINAL_GROWTH_RATE) / (discount - TERMINAL_GROWTH_RATE);
    let discounted_terminal_value = terminal_value / (1.0 + discount).powi(PROJECTION_YEARS);

    Ok(discounted_fcf + discounted_terminal_value)
}
