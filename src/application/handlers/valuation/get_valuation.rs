//! GetValuationHandler - Query handler for stored valuations.

use std::sync::Arc;

use crate::domain::foundation::ValuationId;
use crate::ports::{RepositoryError, ValuationRecord, ValuationRepository};

/// Query for a stored valuation.
#[derive(Debug, Clone)]
pub struct GetValuationQuery {
    pub id: ValuationId,
}

/// Result of a successful valuation query.
pub type GetValuationResult = ValuationRecord;

/// Errors from valuation queries.
#[derive(Debug, thiserror::Error)]
pub enum ValuationQueryError {
    #[error("Valuation not found: {0}")]
    NotFound(ValuationId),

    #[error("Failed to load valuation: {0}")]
    Repository(#[from] RepositoryError),
}

/// Handler for loading stored valuations.
pub struct GetValuationHandler {
    repository: Arc<dyn ValuationRepository>,
}

impl GetValuationHandler {
    pub fn new(repository: Arc<dyn ValuationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetValuationQuery,
    ) -> Result<GetValuationResult, ValuationQueryError> {
        self.repository
            .find_by_id(query.id)
            .await?
            .ok_or(ValuationQueryError::NotFound(query.id))
    }
}
