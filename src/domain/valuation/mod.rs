//! Valuation Module - Rules-based business valuation engine.
//!
//! Turns qualitative value-driver answers and raw financial figures into an
//! EBITDA-multiple valuation range plus improvement recommendations.
//!
//! # Components
//!
//! - `MultiplierTables` - Grade, NAICS industry and score-band reference data
//! - `IndustryResolver` - NAICS lookup with exact, prefix and range matching
//! - `ScoreAggregator` - Per-driver 0-100 scores and the overall score
//! - `MultiplierSelector` - Grade > industry > score band selection policy
//! - `EbitdaCalculator` - Base and adjusted EBITDA reconstruction
//! - `ValuationRangeCalculator` - Low/mean/high from EBITDA and a band
//! - `RecommendationGenerator` - Guidance for drivers scoring below 60
//! - `ValuationEngine` - The pipeline tying the stages together
//!
//! # Design Philosophy
//!
//! Every stage is a pure function of its inputs. The only shared data is the
//! read-only reference tables, borrowed by the engine. No I/O happens here.

mod ebitda_calculator;
mod engine;
mod errors;
mod grade;
mod industry_resolver;
mod input;
mod multiplier_selector;
mod recommendations;
mod rounding;
mod score_aggregator;
mod tables;
mod valuation_range;

// Re-export all public types
pub use ebitda_calculator::{
    EbitdaBreakdown, EbitdaCalculator, FinancialLineItem, FinancialStatement, LineItem,
};
pub use engine::{ValuationEngine, ValuationResult};
pub use errors::{TableError, ValuationError};
pub use grade::Grade;
pub use industry_resolver::IndustryResolver;
pub use input::{ResponseRecord, ValuationInput};
pub use multiplier_selector::{MultiplierSelection, MultiplierSelector, MultiplierSource};
pub use recommendations::{RecommendationGenerator, UNDERPERFORMING_THRESHOLD};
pub use rounding::round_half_up;
pub use score_aggregator::{AggregatedScores, DriverResponse, DriverScore, ScoreAggregator, MAX_WEIGHT};
pub use tables::{
    GradeMultiplier, IndustryMultiplier, MultiplierBand, MultiplierTables, ScoreBand,
    DEFAULT_TABLES,
};
pub use valuation_range::{ValuationRange, ValuationRangeCalculator};
