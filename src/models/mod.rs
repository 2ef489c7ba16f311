pub mod dto;
pub mod error;
pub mod financial_table;
pub mod statement_summary;
pub use error::Error;
pub use error::ValuationError;
pub use financial_table::FinancialTable;
pub use financial_table::TableRow;
pub use statement_summary::StatementSummary;
