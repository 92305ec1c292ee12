//! HTTP handlers for valuation endpoints.
//!
//! These handlers connect Axum routes to application layer handlers.

use std::fmt;
use std::sync::Arc;

use axum::extract::{Json, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use tracing::error;

use crate::application::handlers::{
    ComputeValuationCommand, ComputeValuationHandler, GetValuationHandler, GetValuationQuery,
    ResolveIndustryHandler, ResolveIndustryQuery, ValuationCommandError, ValuationQueryError,
};
use crate::domain::foundation::{ErrorCode, ValuationId};
use crate::domain::valuation::{IndustryMultiplier, MultiplierTables, ValuationError};
use crate::ports::{ValuationRecord, ValuationRepository};

use super::dto::{CreateValuationRequest, ErrorResponse, HealthResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Error Type
// ════════════════════════════════════════════════════════════════════════════════

/// Valuation API error that implements IntoResponse.
#[derive(Debug)]
pub enum ValuationApiError {
    BadRequest(String),
    NoDriverData(String),
    NotFound(ErrorCode, &'static str, String),
    Internal(String),
}

impl IntoResponse for ValuationApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error) = match self {
            ValuationApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(msg))
            }
            ValuationApiError::NoDriverData(msg) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorResponse::no_driver_data(msg))
            }
            ValuationApiError::NotFound(code, resource, id) => {
                (StatusCode::NOT_FOUND, ErrorResponse::not_found(code, resource, &id))
            }
            ValuationApiError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, ErrorResponse::internal(msg))
            }
        };
        (status, Json(error)).into_response()
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing valuation dependencies.
#[derive(Clone)]
pub struct ValuationAppState {
    pub repository: Arc<dyn ValuationRepository>,
    pub tables: Arc<MultiplierTables>,
    /// Store computed valuations.
    pub persist_results: bool,
    /// Expose internal error details to clients.
    pub verbose_errors: bool,
}

impl ValuationAppState {
    pub fn new(repository: Arc<dyn ValuationRepository>, tables: Arc<MultiplierTables>) -> Self {
        Self {
            repository,
            tables,
            persist_results: true,
            verbose_errors: false,
        }
    }

    pub fn compute_valuation_handler(&self) -> ComputeValuationHandler {
        ComputeValuationHandler::new(self.tables.clone(), self.repository.clone())
            .with_persistence(self.persist_results)
    }

    pub fn get_valuation_handler(&self) -> GetValuationHandler {
        GetValuationHandler::new(self.repository.clone())
    }

    pub fn resolve_industry_handler(&self) -> ResolveIndustryHandler {
        ResolveIndustryHandler::new(self.tables.clone())
    }

    /// Logs an internal failure and builds the client-facing error.
    fn internal_error(&self, detail: impl fmt::Display) -> ValuationApiError {
        error!(error = %detail, "Valuation request failed");
        if self.verbose_errors {
            ValuationApiError::Internal(detail.to_string())
        } else {
            ValuationApiError::Internal("An internal error occurred".to_string())
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

/// POST /api/valuations
///
/// Computes a valuation and returns the stored record.
pub async fn create_valuation(
    State(state): State<ValuationAppState>,
    Json(request): Json<CreateValuationRequest>,
) -> Result<(StatusCode, Json<ValuationRecord>), ValuationApiError> {
    let input = request
        .into_input()
        .map_err(|e| ValuationApiError::BadRequest(e.to_string()))?;

    let handler = state.compute_valuation_handler();
    let record = handler
        .handle(ComputeValuationCommand { input })
        .await
        .map_err(|e| match e {
            ValuationCommandError::Valuation(ValuationError::NoDriverData) => {
                ValuationApiError::NoDriverData(e.to_string())
            }
            ValuationCommandError::Repository(_) => state.internal_error(&e),
        })?;

    Ok((StatusCode::CREATED, Json(record)))
}

/// GET /api/valuations/:id
///
/// Returns a stored valuation.
pub async fn get_valuation(
    State(state): State<ValuationAppState>,
    Path(id_str): Path<String>,
) -> Result<Json<ValuationRecord>, ValuationApiError> {
    let id: ValuationId = id_str
        .parse()
        .map_err(|_| ValuationApiError::BadRequest("Invalid valuation ID format".to_string()))?;

    let handler = state.get_valuation_handler();
    let record = handler
        .handle(GetValuationQuery { id })
        .await
        .map_err(|e| match e {
            ValuationQueryError::NotFound(id) => {
                ValuationApiError::NotFound(ErrorCode::ValuationNotFound, "Valuation", id.to_string())
            }
            ValuationQueryError::Repository(_) => state.internal_error(&e),
        })?;

    Ok(Json(record))
}

/// GET /api/industries/:naics
///
/// Returns the industry band a NAICS code resolves to.
pub async fn get_industry(
    State(state): State<ValuationAppState>,
    Path(naics_code): Path<String>,
) -> Result<Json<IndustryMultiplier>, ValuationApiError> {
    let handler = state.resolve_industry_handler();
    let query = ResolveIndustryQuery {
        naics_code: naics_code.clone(),
    };

    handler.handle(&query).map(Json).ok_or(ValuationApiError::NotFound(
        ErrorCode::IndustryNotFound,
        "Industry",
        naics_code,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryValuationRepository;

    fn state() -> ValuationAppState {
        ValuationAppState::new(
            Arc::new(InMemoryValuationRepository::new()),
            Arc::new(MultiplierTables::builtin()),
        )
    }

    #[test]
    fn internal_error_hides_details_by_default() {
        let err = state().internal_error("disk on fire");
        assert!(matches!(err, ValuationApiError::Internal(msg) if msg == "An internal error occurred"));
    }

    #[test]
    fn internal_error_exposes_details_when_verbose() {
        let mut state = state();
        state.verbose_errors = true;
        let err = state.internal_error("disk on fire");
        assert!(matches!(err, ValuationApiError::Internal(msg) if msg == "disk on fire"));
    }

    #[test]
    fn api_errors_map_to_status_codes() {
        let cases = vec![
            (ValuationApiError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (ValuationApiError::NoDriverData("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (
                ValuationApiError::NotFound(ErrorCode::ValuationNotFound, "Valuation", "x".into()),
                StatusCode::NOT_FOUND,
            ),
            (ValuationApiError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[tokio::test]
    async fn get_industry_returns_not_found_for_unknown_code() {
        let result = get_industry(State(state()), Path("00".to_string())).await;
        assert!(matches!(
            result,
            Err(ValuationApiError::NotFound(ErrorCode::IndustryNotFound, _, _))
        ));
    }
}
