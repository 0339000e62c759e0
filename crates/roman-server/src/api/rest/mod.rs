//! REST API implementation
//!
//! Modular REST API with clean separation of concerns:
//! - types: Request/response type definitions
//! - extractors: Custom request extractors
//! - handlers: API endpoint handlers
//! - middleware: CORS, security headers and request metrics
//! - openapi: OpenAPI document and Swagger UI
//! - router: Router creation and configuration
//! - tests: Unit tests for all components

mod extractors;
mod handlers;
pub mod middleware;
pub mod openapi;
mod router;
mod tests;
pub mod types;

// Re-export public API
pub use extractors::{QueryPairs, RawBody};
pub use router::{create_router, create_router_with_state, API_V1_PREFIX};
pub use types::{AppState, ConvertResponse, HealthResponse, IndexResponse, RangesPayload};
