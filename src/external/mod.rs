pub mod extract;

use reqwest::Client;
use scraper::Html;
use tracing::info;

use crate::models::{StatementSummary, ValuationError};
use crate::valuation;
use extract::{HeadingTableExtractor, TableExtractor};

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const CASH_FLOW_SECTION: &str = "Cash Flows";
pub const PROFIT_LOSS_SECTION: &str = "Profit & Loss";

const OPERATING_CASH_FLOW_ROW: &str = "cash from operating activity";
const INVESTING_CASH_FLOW_ROW: &str = "cash from investing activity";
const REVENUE_ROW: &str = "sales";
const EARNINGS_ROW: &str = "net profit";

/// Trailing fiscal years kept in the summary.
pub const SUMMARY_PERIODS: usize = 5;

/// Client for the screener.in consolidated-statements pages.
pub struct Screener {
    client: Client,
    base_url: String,
    extractor: Box<dyn TableExtractor + Send + Sync>,
}

impl Screener {
    pub fn new(base_url: &str) -> Self {
        Self::with_extractor(base_url, Box::new(HeadingTableExtractor))
    }

    /// Swap in a different extraction strategy, e.g. for another page layout.
    pub fn with_extractor(
        base_url: &str,
        extractor: Box<dyn TableExtractor + Send + Sync>,
    ) -> Self {
        Screener {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            extractor,
        }
    }

    /// GET the consolidated statements page for `ticker` and parse the
    /// markup. The site refuses requests without a browser user-agent.
    pub async fn fetch_consolidated(&self, ticker: &str) -> Result<Html, ValuationError> {
        let url = format!("{}/company/{}/consolidated/", self.base_url, ticker);
        info!("Fetching {}", url);
        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ValuationError::BadStatus(status.as_u16()));
        }
        let body = response.text().await?;
        Ok(Html::parse_document(&body))
    }

    /// Reduce a statements page to the trailing-period summary: pull the
    /// Cash Flows and Profit & Loss tables, pick the four fixed rows,
    /// derive free cash flow and keep the last [`SUMMARY_PERIODS`] years.
    pub fn summarize(&self, document: &Html) -> Result<StatementSummary, ValuationError> {
        let cash_flow = self.extractor.extract(document, CASH_FLOW_SECTION)?;
        let profit_loss = self.extractor.extract(document, PROFIT_LOSS_SECTION)?;

        let operating = cash_flow.series(OPERATING_CASH_FLOW_ROW)?;
        let investing = cash_flow.series(INVESTING_CASH_FLOW_ROW)?;
        let revenue = profit_loss.series(REVENUE_ROW)?;
        let earnings = profit_loss.series(EARNINGS_ROW)?;

        let fcf = valuation::free_cash_flow(operating, investing)?;

        Ok(StatementSummary {
            years: valuation::last_n(cash_flow.periods(), SUMMARY_PERIODS).to_vec(),
            revenue: valuation::last_n(revenue, SUMMARY_PERIODS).to_vec(),
            earnings: valuation::last_n(earnings, SUMMARY_PERIODS).to_vec(),
            free_cash_flow: valuation::last_n(&fcf, SUMMARY_PERIODS).to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Six fiscal years so the summary has to drop the oldest one.
    const SAMPLE_PAGE: &str = r#"
        <html><body>
          <h1>Sample Industries Ltd</h1>
          <section id="profit-loss">
            <h2>Profit &amp; Loss</h2>
            <div class="responsive-holder">
              <table class="data-table">
                <tr><th></th><th>Mar 2019</th><th>Mar 2020</th><th>Mar 2021</th><th>Mar 2022</th><th>Mar 2023</th><th>Mar 2024</th></tr>
                <tr><td>Sales +</td><td>900</td><td>1,000</td><td>1,100</td><td>1,210</td><td>1,331</td><td>1,464</td></tr>
                <tr><td>Expenses +</td><td>700</td><td>780</td><td>850</td><td>930</td><td>1,020</td><td>1,110</td></tr>
                <tr><td>Net Profit +</td><td>90</td><td>100</td><td>110</td><td>121</td><td>133</td><td>146</td></tr>
                <tr><td>Adjusted Net Profit</td><td>85</td><td>95</td><td>105</td><td>116</td><td>128</td><td>141</td></tr>
              </table>
            </div>
          </section>
          <section id="cash-flow">
            <h2>Cash Flows</h2>
            <div class="responsive-holder">
              <table class="data-table">
                <tr><th></th><th>Mar 2019</th><th>Mar 2020</th><th>Mar 2021</th><th>Mar 2022</th><th>Mar 2023</th><th>Mar 2024</th></tr>
                <tr><td>Cash from Operating Activity +</td><td>150</td><td>170</td><td>190</td><td>210</td><td>230</td><td>250</td></tr>
                <tr><td>Cash from Investing Activity +</td><td>-40</td><td>-50</td><td>-60</td><td>-70</td><td>-80</td><td>-90</td></tr>
                <tr><td>Cash from Financing Activity +</td><td>-30</td><td>-35</td><td>-40</td><td>-45</td><td>-50</td><td>-55</td></tr>
                <tr><td>Net Cash Flow</td><td>80</td><td>85</td><td>90</td><td>95</td><td>100</td><td>105</td></tr>
              </table>
            </div>
          </section>
        </body></html>
    "#;

    fn screener() -> Screener {
        Screener::new("https://www.screener.in")
    }

    #[test]
    fn summarize_reproduces_expected_trailing_series() {
        let document = Html::parse_document(SAMPLE_PAGE);
        let summary = screener().summarize(&document).unwrap();

        assert_eq!(
            summary.years,
            vec!["Mar 2020", "Mar 2021", "Mar 2022", "Mar 2023", "Mar 2024"]
        );
        assert_eq!(summary.revenue, vec![1000.0, 1100.0, 1210.0, 1331.0, 1464.0]);
        assert_eq!(summary.earnings, vec![100.0, 110.0, 121.0, 133.0, 146.0]);
        // fcf = operating - investing, trailing five of six years
        assert_eq!(
            summary.free_cash_flow,
            vec![220.0, 250.0, 280.0, 310.0, 340.0]
        );
    }

    #[test]
    fn summarize_feeds_growth_metrics() {
        let document = Html::parse_document(SAMPLE_PAGE);
        let summary = screener().summarize(&document).unwrap();

        let revenue_growth = valuation::average_growth_rate(&summary.revenue)
            .unwrap()
            .unwrap();
        assert!((revenue_growth - 10.0).abs() < 0.05, "got {revenue_growth}");
    }

    #[test]
    fn summarize_keeps_short_histories_short() {
        let html = r#"
            <html><body>
              <h2>Profit &amp; Loss</h2>
              <table class="data-table">
                <tr><th></th><th>Mar 2023</th><th>Mar 2024</th></tr>
                <tr><td>Sales +</td><td>100</td><td>120</td></tr>
                <tr><td>Net Profit +</td><td>10</td><td>14</td></tr>
              </table>
              <h2>Cash Flows</h2>
              <table class="data-table">
                <tr><th></th><th>Mar 2023</th><th>Mar 2024</th></tr>
                <tr><td>Cash from Operating Activity +</td><td>12</td><td>15</td></tr>
                <tr><td>Cash from Investing Activity +</td><td>-2</td><td>-3</td></tr>
              </table>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let summary = screener().summarize(&document).unwrap();
        assert_eq!(summary.years.len(), 2);
        assert_eq!(summary.free_cash_flow, vec![14.0, 18.0]);
    }

    #[test]
    fn summarize_requires_both_sections() {
        let html = r#"
            <html><body>
              <h2>Cash Flows</h2>
              <table class="data-table">
                <tr><th></th><th>Mar 2024</th></tr>
                <tr><td>Cash from Operating Activity +</td><td>15</td></tr>
                <tr><td>Cash from Investing Activity +</td><td>-3</td></tr>
              </table>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let err = screener().summarize(&document).unwrap_err();
        assert!(
            matches!(err, ValuationError::SectionNotFound(title) if title == "Profit & Loss")
        );
    }

    #[test]
    fn summarize_requires_the_fixed_rows() {
        let html = r#"
            <html><body>
              <h2>Cash Flows</h2>
              <table class="data-table">
                <tr><th></th><th>Mar 2024</th></tr>
                <tr><td>Net Cash Flow</td><td>15</td></tr>
              </table>
              <h2>Profit &amp; Loss</h2>
              <table class="data-table">
                <tr><th></th><th>Mar 2024</th></tr>
                <tr><td>Sales +</td><td>100</td></tr>
              </table>
            </body></html>
        "#;
        let document = Html::parse_document(html);
        let err = screener().summarize(&document).unwrap_err();
        assert!(
            matches!(err, ValuationError::RowNotFound(label)
                if label == "cash from operating activity")
        );
    }
}
