//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ValuationRepository` - Persistence collaborator for computed valuations
//!
//! Report rendering, CRM webhooks and authentication are owned by other
//! services and have no port here.

mod valuation_repository;

pub use valuation_repository::{RepositoryError, ValuationRecord, ValuationRepository};
