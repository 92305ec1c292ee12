//! Valuation Repository Port - Persistence of computed valuations.
//!
//! The persistence collaborator stores each `ValuationResult` verbatim,
//! together with the context it was computed under.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, ValuationId};
use crate::domain::valuation::{Grade, ValuationResult};

/// A stored valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationRecord {
    pub id: ValuationId,
    pub created_at: Timestamp,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub naics_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<Grade>,
    pub result: ValuationResult,
}

impl ValuationRecord {
    /// Wraps a freshly computed result in a new record.
    pub fn new(result: ValuationResult, naics_code: Option<String>, grade: Option<Grade>) -> Self {
        Self {
            id: ValuationId::new(),
            created_at: Timestamp::now(),
            naics_code,
            grade,
            result,
        }
    }
}

/// Errors that can occur during repository operations
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Valuation already exists: {0}")]
    Conflict(ValuationId),

    #[error("Storage error: {0}")]
    Storage(String),
}

/// Port for persisting computed valuations.
///
/// # Contract
///
/// Implementations must:
/// - Store the record verbatim (no recomputation)
/// - Reject a second save with the same id
/// - Return `Ok(None)` for unknown ids
#[async_trait]
pub trait ValuationRepository: Send + Sync {
    /// Persists a new valuation record.
    async fn save(&self, record: &ValuationRecord) -> Result<(), RepositoryError>;

    /// Loads a valuation record by id.
    async fn find_by_id(&self, id: ValuationId) -> Result<Option<ValuationRecord>, RepositoryError>;
}
