//! ComputeValuationHandler - Command handler for running the valuation engine.
//!
//! Runs the pure engine over the submitted input, then hands the result to
//! the persistence collaborator.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::valuation::{
    MultiplierTables, ValuationEngine, ValuationError, ValuationInput,
};
use crate::ports::{RepositoryError, ValuationRecord, ValuationRepository};

/// Command to compute (and optionally persist) a valuation.
#[derive(Debug, Clone)]
pub struct ComputeValuationCommand {
    pub input: ValuationInput,
}

/// Result of a successful valuation command.
pub type ComputeValuationResult = ValuationRecord;

/// Errors from the compute valuation command.
#[derive(Debug, thiserror::Error)]
pub enum ValuationCommandError {
    #[error(transparent)]
    Valuation(#[from] ValuationError),

    #[error("Failed to persist valuation: {0}")]
    Repository(#[from] RepositoryError),
}

/// Handler for computing valuations.
pub struct ComputeValuationHandler {
    tables: Arc<MultiplierTables>,
    repository: Arc<dyn ValuationRepository>,
    persist: bool,
}

impl ComputeValuationHandler {
    pub fn new(tables: Arc<MultiplierTables>, repository: Arc<dyn ValuationRepository>) -> Self {
        Self {
            tables,
            repository,
            persist: true,
        }
    }

    /// Enables or disables persisting results.
    pub fn with_persistence(mut self, persist: bool) -> Self {
        self.persist = persist;
        self
    }

    pub async fn handle(
        &self,
        command: ComputeValuationCommand,
    ) -> Result<ComputeValuationResult, ValuationCommandError> {
        let ComputeValuationCommand { input } = command;

        let result = ValuationEngine::new(&self.tables).evaluate(&input)?;
        let record = ValuationRecord::new(result, input.naics_code, input.grade);

        if self.persist {
            self.repository.save(&record).await?;
            info!(
                valuation_id = %record.id,
                overall_score = record.result.overall_score,
                "Valuation stored"
            );
        } else {
            debug!(valuation_id = %record.id, "Persistence disabled, valuation not stored");
        }

        Ok(record)
    }
}
