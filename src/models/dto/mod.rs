pub mod message;
pub mod financials;
pub mod valuation;
pub use message::Message;
pub use financials::*;
pub use valuation::*;

use utoipa::OpenApi;
#[derive(OpenApi)]
#[openapi(components(schemas(
    Message,
    FinancialSummaryResponse,
    ValuationRequest,
    ValuationResponse,
)))]
/// Captures OpenAPI schemas and canned responses defined in the DTO module
pub struct OpenApiSchemas;
