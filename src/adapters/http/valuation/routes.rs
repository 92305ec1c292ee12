//! HTTP routes for valuation endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    create_valuation, get_industry, get_valuation, health, ValuationAppState,
};

/// Creates the valuation router with all routes.
pub fn valuation_routes(state: ValuationAppState) -> Router {
    Router::new()
        .route("/health", get(health))
        // POST /api/valuations
        .route("/api/valuations", post(create_valuation))
        // GET /api/valuations/:id
        .route("/api/valuations/:id", get(get_valuation))
        // GET /api/industries/:naics
        .route("/api/industries/:naics", get(get_industry))
        .with_state(state)
}
