//! Integration tests for valuation HTTP endpoints.
//!
//! These tests drive the full axum router in-process:
//! 1. Request bodies deserialize in both accepted shapes
//! 2. Responses carry the stored record
//! 3. Errors map to the documented status codes and error codes

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use business_valuation::adapters::http::{app_router, ValuationAppState};
use business_valuation::adapters::memory::InMemoryValuationRepository;
use business_valuation::config::ServerConfig;
use business_valuation::domain::foundation::ValuationId;
use business_valuation::domain::valuation::MultiplierTables;
use business_valuation::ports::{RepositoryError, ValuationRecord, ValuationRepository};

// =============================================================================
// Test Infrastructure
// =============================================================================

/// Repository whose storage is always unavailable.
struct UnavailableRepository;

#[async_trait]
impl ValuationRepository for UnavailableRepository {
    async fn save(&self, _record: &ValuationRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Storage("connection refused".to_string()))
    }

    async fn find_by_id(&self, _id: ValuationId) -> Result<Option<ValuationRecord>, RepositoryError> {
        Err(RepositoryError::Storage("connection refused".to_string()))
    }
}

fn router_with(repository: Arc<dyn ValuationRepository>, verbose_errors: bool) -> Router {
    let mut state = ValuationAppState::new(repository, Arc::new(MultiplierTables::builtin()));
    state.verbose_errors = verbose_errors;
    app_router(state, &ServerConfig::default())
}

fn router() -> Router {
    router_with(Arc::new(InMemoryValuationRepository::new()), false)
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn reference_responses() -> Value {
    json!([
        {"id": "q1", "valueDriver": "financial-strength", "weight": 5},
        {"id": "q2", "valueDriver": "financial-strength", "weight": 4},
        {"id": "q3", "valueDriver": "financial-strength", "weight": 5},
        {"id": "financial-1", "value": 1000000},
        {"id": "financial-2", "value": 400000},
        {"id": "financial-3", "value": 300000},
        {"id": "adjustments-1", "value": 50000}
    ])
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = send(router(), get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

// =============================================================================
// Create Valuation
// =============================================================================

#[tokio::test]
async fn create_from_response_list() {
    let request = post_json("/api/valuations", json!({"responses": reference_responses()}));
    let (status, body) = send(router(), request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_string());
    assert!(body["createdAt"].is_string());
    assert_eq!(body["result"]["overallScore"], 93);
    assert_eq!(body["result"]["ebitda"], 350000.0);
    assert_eq!(body["result"]["valuation"]["low"], 2275000.0);
    assert_eq!(body["result"]["valuation"]["mean"], 2975000.0);
    assert_eq!(body["result"]["valuation"]["high"], 3675000.0);
    assert_eq!(body["result"]["recommendations"], json!([]));
}

#[tokio::test]
async fn create_from_typed_collections_with_grade() {
    let request = post_json(
        "/api/valuations",
        json!({
            "drivers": [{"id": "q1", "valueDriver": "growth", "weight": 2}],
            "financials": [{"id": "financial-1", "value": 500000}],
            "grade": "b"
        }),
    );
    let (status, body) = send(router(), request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["grade"], "B");
    assert_eq!(body["result"]["multiplierSource"]["kind"], "grade");
    assert_eq!(body["result"]["valuation"]["low"], 2850000.0);
    assert_eq!(body["result"]["valuation"]["high"], 2850000.0);
    assert_eq!(
        body["result"]["recommendations"][0],
        "Improve your growth to increase attractiveness to buyers."
    );
}

#[tokio::test]
async fn create_with_naics_code_uses_industry_band() {
    let request = post_json(
        "/api/valuations",
        json!({"responses": reference_responses(), "naicsCode": "238220"}),
    );
    let (status, body) = send(router(), request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["naicsCode"], "238220");
    assert_eq!(body["result"]["multiplierSource"]["naicsCode"], "23");
    assert_eq!(body["result"]["valuation"]["low"], 875000.0);
    assert_eq!(body["result"]["valuation"]["high"], 1750000.0);
}

#[tokio::test]
async fn create_without_drivers_is_unprocessable() {
    let request = post_json(
        "/api/valuations",
        json!({"responses": [{"id": "financial-1", "value": 1000}]}),
    );
    let (status, body) = send(router(), request).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["code"], "NO_DRIVER_DATA");
}

#[tokio::test]
async fn create_with_unknown_grade_is_bad_request() {
    let request = post_json(
        "/api/valuations",
        json!({"responses": reference_responses(), "grade": "E"}),
    );
    let (status, body) = send(router(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn create_hides_storage_errors_by_default() {
    let router = router_with(Arc::new(UnavailableRepository), false);
    let request = post_json("/api/valuations", json!({"responses": reference_responses()}));
    let (status, body) = send(router, request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "INTERNAL_ERROR");
    assert_eq!(body["message"], "An internal error occurred");
}

#[tokio::test]
async fn create_exposes_storage_errors_when_verbose() {
    let router = router_with(Arc::new(UnavailableRepository), true);
    let request = post_json("/api/valuations", json!({"responses": reference_responses()}));
    let (_, body) = send(router, request).await;

    assert!(body["message"].as_str().unwrap().contains("connection refused"));
}

// =============================================================================
// Get Valuation
// =============================================================================

#[tokio::test]
async fn get_returns_created_record() {
    let router = router();
    let request = post_json("/api/valuations", json!({"responses": reference_responses()}));
    let (_, created) = send(router.clone(), request).await;

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = send(router, get(&format!("/api/valuations/{}", id))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
async fn get_unknown_valuation_is_not_found() {
    let uri = format!("/api/valuations/{}", ValuationId::new());
    let (status, body) = send(router(), get(&uri)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn get_malformed_id_is_bad_request() {
    let (status, body) = send(router(), get("/api/valuations/not-a-uuid")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST");
}

// =============================================================================
// Industries
// =============================================================================

#[tokio::test]
async fn get_industry_resolves_subsector_code() {
    let (status, body) = send(router(), get("/api/industries/541511")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["naicsCode"], "5415");
}

#[tokio::test]
async fn get_industry_unknown_code_is_not_found() {
    let (status, body) = send(router(), get("/api/industries/99")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NOT_FOUND");
}
