//! In-memory adapters for development and testing.

mod valuation_repository;

pub use valuation_repository::InMemoryValuationRepository;
