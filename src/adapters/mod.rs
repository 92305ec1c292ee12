//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory repository for tests and single-process deployments
//! - `http` - Axum REST API

pub mod http;
pub mod memory;

pub use memory::InMemoryValuationRepository;
