//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod valuation;

pub use valuation::{
    ComputeValuationCommand, ComputeValuationHandler, ComputeValuationResult,
    GetValuationHandler, GetValuationQuery, GetValuationResult, ResolveIndustryHandler,
    ResolveIndustryQuery, ValuationCommandError, ValuationQueryError,
};
