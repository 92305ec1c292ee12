//! In-Memory Valuation Repository Adapter
//!
//! Stores valuation records in a process-local map. Used for development,
//! tests, and deployments where another service owns durable storage.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::ValuationId;
use crate::ports::{RepositoryError, ValuationRecord, ValuationRepository};

/// In-memory storage for valuation records
#[derive(Debug, Clone, Default)]
pub struct InMemoryValuationRepository {
    records: Arc<RwLock<HashMap<ValuationId, ValuationRecord>>>,
}

impl InMemoryValuationRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored records
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Returns true if nothing has been stored
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }

    /// Clear all stored records (useful for tests)
    pub async fn clear(&self) {
        self.records.write().await.clear();
    }
}

#[async_trait]
impl ValuationRepository for InMemoryValuationRepository {
    async fn save(&self, record: &ValuationRecord) -> Result<(), RepositoryError> {
        let mut records = self.records.write().await;
        if records.contains_key(&record.id) {
            return Err(RepositoryError::Conflict(record.id));
        }
        records.insert(record.id, record.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ValuationId) -> Result<Option<ValuationRecord>, RepositoryError> {
        Ok(self.records.read().await.get(&id).cloned())
    }
}
