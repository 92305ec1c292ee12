//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `valuation` - Pure valuation engine (scores, multiples, EBITDA, ranges)

pub mod foundation;
pub mod valuation;
