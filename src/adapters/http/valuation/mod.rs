//! Valuation HTTP adapter module.
//!
//! Provides REST API endpoints for computing and retrieving valuations.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::{CreateValuationRequest, ErrorResponse, HealthResponse};
pub use handlers::{ValuationApiError, ValuationAppState};
pub use routes::valuation_routes;
