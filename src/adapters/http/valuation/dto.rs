//! Data Transfer Objects for valuation HTTP endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ErrorCode, ValidationError};
use crate::domain::valuation::{
    DriverResponse, FinancialLineItem, Grade, ResponseRecord, ValuationInput,
};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request body for POST /api/valuations.
///
/// Accepts the heterogeneous `responses` list, the typed `drivers` and
/// `financials` collections, or both. Typed entries follow list entries, so a
/// typed financial item overrides a listed one with the same id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateValuationRequest {
    #[serde(default)]
    pub responses: Vec<ResponseRecord>,
    #[serde(default)]
    pub drivers: Vec<DriverResponse>,
    #[serde(default)]
    pub financials: Vec<FinancialLineItem>,
    pub naics_code: Option<String>,
    /// Letter grade, case-insensitive.
    pub grade: Option<String>,
}

impl CreateValuationRequest {
    /// Converts the request into engine input.
    ///
    /// Blank NAICS codes and blank grades are treated as absent.
    pub fn into_input(self) -> Result<ValuationInput, ValidationError> {
        let grade = match self.grade.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => Some(raw.parse::<Grade>()?),
            _ => None,
        };

        let records: Vec<ResponseRecord> = self
            .responses
            .into_iter()
            .chain(self.drivers.into_iter().map(ResponseRecord::Driver))
            .chain(self.financials.into_iter().map(ResponseRecord::Financial))
            .collect();

        let mut input = ValuationInput::from_records(&records);
        if let Some(code) = self.naics_code.filter(|c| !c.trim().is_empty()) {
            input = input.with_naics_code(code);
        }
        if let Some(grade) = grade {
            input = input.with_grade(grade);
        }
        Ok(input)
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response body for GET /health.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::BadRequest, message)
    }

    pub fn no_driver_data(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NoDriverData, message)
    }

    pub fn not_found(code: ErrorCode, resource_type: &str, id: &str) -> Self {
        Self::new(code, format!("{} not found: {}", resource_type, id))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::valuation::LineItem;

    #[test]
    fn request_accepts_response_list() {
        let json = r#"{
            "responses": [
                {"id": "q1", "valueDriver": "growth", "weight": 4},
                {"id": "financial-1", "value": 1000}
            ],
            "naicsCode": "5415",
            "grade": "b"
        }"#;

        let request: CreateValuationRequest = serde_json::from_str(json).unwrap();
        let input = request.into_input().unwrap();

        assert_eq!(input.drivers.len(), 1);
        assert_eq!(input.financials.get(LineItem::Revenue), 1000.0);
        assert_eq!(input.naics_code.as_deref(), Some("5415"));
        assert_eq!(input.grade, Some(Grade::B));
    }

    #[test]
    fn request_accepts_typed_collections() {
        let json = r#"{
            "drivers": [{"id": "q1", "valueDriver": "growth", "weight": 4}],
            "financials": [{"id": "adjustments-2", "value": 75}]
        }"#;

        let request: CreateValuationRequest = serde_json::from_str(json).unwrap();
        let input = request.into_input().unwrap();

        assert_eq!(input.drivers[0].value_driver, "growth");
        assert_eq!(input.financials.get(LineItem::Adjustment2), 75.0);
        assert!(input.grade.is_none());
    }

    #[test]
    fn request_rejects_unknown_grade() {
        let request = CreateValuationRequest {
            grade: Some("E".to_string()),
            ..Default::default()
        };
        assert!(request.into_input().is_err());
    }

    #[test]
    fn request_treats_blank_context_as_absent() {
        let request = CreateValuationRequest {
            naics_code: Some("  ".to_string()),
            grade: Some(String::new()),
            ..Default::default()
        };
        let input = request.into_input().unwrap();
        assert!(input.naics_code.is_none());
        assert!(input.grade.is_none());
    }

    #[test]
    fn error_response_uses_wire_codes() {
        assert_eq!(ErrorResponse::no_driver_data("x").code, "NO_DRIVER_DATA");
        assert_eq!(
            ErrorResponse::not_found(ErrorCode::ValuationNotFound, "Valuation", "abc").message,
            "Valuation not found: abc"
        );
    }
}
