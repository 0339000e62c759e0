//! OpenAPI document and Swagger UI

use super::handlers;
use super::types::{ConvertResponse, HealthResponse, IndexResponse, RangesPayload};
use crate::error::ErrorBody;
use roman_core::{NumberRange, NumeralEntry};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Where the Swagger UI is served
pub const SWAGGER_UI_PATH: &str = "/swagger";

/// Where the OpenAPI JSON document is served
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Decimal to Roman Numerals Converter",
        description = "Converts decimal numbers and ranges in 1-3999 to Roman numerals."
    ),
    paths(
        handlers::index,
        handlers::health,
        handlers::convert_numbers,
        handlers::convert_ranges,
    ),
    components(
        schemas(
            ConvertResponse,
            NumeralEntry,
            RangesPayload,
            NumberRange,
            ErrorBody,
            HealthResponse,
            IndexResponse,
        )
    ),
    tags(
        (name = "Conversion", description = "Decimal to Roman numeral conversion"),
        (name = "Service", description = "Service discovery and health"),
    ),
)]
pub struct ApiDoc;

/// Swagger UI serving the generated document
pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi())
}
