//! Valuation command and query handlers.

mod compute_valuation;
mod get_valuation;
mod resolve_industry;

pub use compute_valuation::{
    ComputeValuationCommand, ComputeValuationHandler, ComputeValuationResult,
    ValuationCommandError,
};
pub use get_valuation::{
    GetValuationHandler, GetValuationQuery, GetValuationResult, ValuationQueryError,
};
pub use resolve_industry::{ResolveIndustryHandler, ResolveIndustryQuery};
