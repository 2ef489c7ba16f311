use core::fmt;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;

use super::dto::Message;

#[derive(Debug)]
pub struct Error {
    pub code: StatusCode,
    pub body: Json<Message>,
}

impl Error {
    pub fn new(code: StatusCode, message: &str) -> Self {
        Self {
            code,
            body: Json(Message::new(message)),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        (self.code, self.body).into_response()
    }
}

impl From<(StatusCode, &str)> for Error {
    fn from((code, msg): (StatusCode, &str)) -> Self {
        Self::new(code, msg)
    }
}

/// Everything that can go wrong between a ticker and an intrinsic value:
/// fetching the statements page, extracting its tables, and the valuation
/// arithmetic itself.
#[derive(Debug)]
pub enum ValuationError {
    Fetch(reqwest::Error),
    BadStatus(u16),
    SectionNotFound(String),
    TableNotFound(String),
    RowNotFound(String),
    MalformedCell { row: String, cell: String },
    RaggedRow { row: String, expected: usize, got: usize },
    LengthMismatch { left: usize, right: usize },
    ZeroBaseline,
    DiscountBelowTerminalGrowth,
    Selector(String),
}

impl fmt::Display for ValuationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValuationError::Fetch(e) => write!(f, "Failed to retrieve the stock data: {}", e),
            ValuationError::BadStatus(code) => {
                write!(f, "Failed to retrieve the stock data: HTTP {}", code)
            }
            ValuationError::SectionNotFound(title) => write!(f, "{} section not found", title),
            ValuationError::TableNotFound(title) => write!(f, "{} table not found", title),
            ValuationError::RowNotFound(label) => {
                write!(f, "No statement row matching \"{}\"", label)
            }
            ValuationError::MalformedCell { row, cell } => {
                write!(f, "Non-numeric value \"{}\" in row \"{}\"", cell, row)
            }
            ValuationError::RaggedRow { row, expected, got } => write!(
                f,
                "Row \"{}\" has {} values, expected {}",
                row, got, expected
            ),
            ValuationError::LengthMismatch { left, right } => {
                write!(f, "Series lengths differ: {} vs {}", left, right)
            }
            ValuationError::ZeroBaseline => {
                write!(f, "Growth rate is undefined over a zero baseline value")
            }
            ValuationError::DiscountBelowTerminalGrowth => write!(
                f,
                "Discount rate must exceed the 2.5% terminal growth rate"
            ),
            ValuationError::Selector(e) => write!(f, "Selector error: {}", e),
        }
    }
}

impl std::error::Error for ValuationError {}

impl From<reqwest::Error> for ValuationError {
    fn from(error: reqwest::Error) -> Self {
        ValuationError::Fetch(error)
    }
}

impl From<ValuationError> for Error {
    fn from(error: ValuationError) -> Self {
        let code = match &error {
            // Upstream unreachable or returned garbage
            ValuationError::Fetch(_)
            | ValuationError::BadStatus(_)
            | ValuationError::MalformedCell { .. }
            | ValuationError::RaggedRow { .. } => StatusCode::BAD_GATEWAY,
            // The page loaded but lacked the expected section/table/row
            ValuationError::SectionNotFound(_)
            | ValuationError::TableNotFound(_)
            | ValuationError::RowNotFound(_) => StatusCode::NOT_FOUND,
            // Arithmetic preconditions on the extracted data
            ValuationError::LengthMismatch { .. }
            | ValuationError::ZeroBaseline
            | ValuationError::DiscountBelowTerminalGrowth => StatusCode::UNPROCESSABLE_ENTITY,
            ValuationError::Selector(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self::new(code, &error.to_string())
    }
}
