use serde::Serialize;

use super::ValuationError;

/// One statement row: its label cell plus the numeric values for each period.
#[derive(Debug, Clone, Serialize)]
pub struct TableRow {
    pub label: String,
    pub values: Vec<f64>,
}

/// A statement table lifted out of the page markup. The first column header
/// names the label column; the rest are period labels (fiscal years).
/// Every row carries exactly one value per period column.
#[derive(Debug, Clone, Serialize)]
pub struct FinancialTable {
    pub columns: Vec<String>,
    pub rows: Vec<TableRow>,
}

impl FinancialTable {
    /// Period labels, i.e. the header minus the label column.
    pub fn periods(&self) -> &[String] {
        self.columns.get(1..).unwrap_or(&[])
    }

    /// Numeric series of the first row whose label contains
    /// `label_substring`, compared case-insensitively. Rows are checked in
    /// document order, so with duplicate labels the first one wins.
    pub fn series(&self, label_substring: &str) -> Result<&[f64], ValuationError> {
        let needle = label_substring.to_lowercase();
        self.rows
            .iter()
            .find(|row| row.label.to_lowercase().contains(&needle))
            .map(|row| row.values.as_slice())
            .ok_or_else(|| ValuationError::RowNotFound(label_substring.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> FinancialTable {
        FinancialTable {
            columns: vec![
                "".to_string(),
                "Mar 2022".to_string(),
                "Mar 2023".to_string(),
            ],
            rows: vec![
                TableRow {
                    label: "Sales +".to_string(),
                    values: vec![500.0, 550.0],
                },
                TableRow {
                    label: "Net Profit".to_string(),
                    values: vec![50.0, 60.0],
                },
                TableRow {
                    label: "Adjusted Net Profit".to_string(),
                    values: vec![48.0, 58.0],
                },
            ],
        }
    }

    #[test]
    fn series_match_is_case_insensitive() {
        let table = sample_table();
        assert_eq!(table.series("SALES").unwrap(), &[500.0, 550.0]);
        assert_eq!(table.series("net profit").unwrap(), &[50.0, 60.0]);
    }

    #[test]
    fn first_matching_row_wins() {
        // Both "Net Profit" and "Adjusted Net Profit" contain the needle;
        // the one earlier in document order is returned.
        let table = sample_table();
        assert_eq!(table.series("net profit").unwrap(), &[50.0, 60.0]);
    }

    #[test]
    fn missing_row_is_an_error() {
        let table = sample_table();
        let err = table.series("dividends").unwrap_err();
        assert!(matches!(err, ValuationError::RowNotFound(label) if label == "dividends"));
    }

    #[test]
    fn periods_skip_the_label_column() {
        let table = sample_table();
        assert_eq!(table.periods(), &["Mar 2022", "Mar 2023"]);
    }
}
