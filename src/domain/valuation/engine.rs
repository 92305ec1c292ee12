//! Valuation Engine - The four-stage valuation pipeline.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{
    DriverScore, EbitdaBreakdown, EbitdaCalculator, IndustryResolver, MultiplierBand,
    MultiplierSelector, MultiplierSource, MultiplierTables, RecommendationGenerator,
    ScoreAggregator, ValuationError, ValuationInput, ValuationRange, ValuationRangeCalculator,
    DEFAULT_TABLES,
};

/// The complete, immutable output of one valuation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationResult {
    pub overall_score: i64,
    pub driver_scores: Vec<DriverScore>,
    /// Adjusted EBITDA the range was computed from.
    pub ebitda: f64,
    pub valuation: ValuationRange,
    pub recommendations: Vec<String>,
    /// The band that was applied.
    pub multiplier: MultiplierBand,
    pub multiplier_source: MultiplierSource,
    pub financials: EbitdaBreakdown,
}

/// Runs aggregate → select multiplier → EBITDA → range, with recommendations
/// branching off the aggregation stage.
///
/// The engine borrows its reference tables and holds no other state, so one
/// instance can serve any number of concurrent evaluations.
#[derive(Debug, Clone, Copy)]
pub struct ValuationEngine<'t> {
    tables: &'t MultiplierTables,
}

impl<'t> ValuationEngine<'t> {
    /// Creates an engine over the given reference tables.
    pub fn new(tables: &'t MultiplierTables) -> Self {
        Self { tables }
    }

    /// Returns the reference tables in use.
    pub fn tables(&self) -> &'t MultiplierTables {
        self.tables
    }

    /// Computes a valuation.
    ///
    /// # Errors
    /// - `ValuationError::NoDriverData` if `input.drivers` is empty
    pub fn evaluate(&self, input: &ValuationInput) -> Result<ValuationResult, ValuationError> {
        let scores = ScoreAggregator::aggregate(&input.drivers)?;

        let industry = input.naics_code.as_deref().and_then(|code| {
            let resolved = IndustryResolver::resolve(self.tables, code);
            if resolved.is_none() {
                debug!(naics_code = code, "No industry match, using score bands");
            }
            resolved
        });

        let selection =
            MultiplierSelector::select(self.tables, scores.overall_score, industry, input.grade);
        let financials = EbitdaCalculator::calculate(&input.financials);
        let valuation =
            ValuationRangeCalculator::calculate(financials.adjusted_ebitda, &selection.band);
        let recommendations = RecommendationGenerator::generate(&scores.driver_scores);

        debug!(
            overall_score = scores.overall_score,
            drivers = scores.driver_scores.len(),
            ebitda = financials.adjusted_ebitda,
            low = valuation.low,
            high = valuation.high,
            "Valuation computed"
        );

        Ok(ValuationResult {
            overall_score: scores.overall_score,
            driver_scores: scores.driver_scores,
            ebitda: financials.adjusted_ebitda,
            valuation,
            recommendations,
            multiplier: selection.band,
            multiplier_source: selection.source,
            financials,
        })
    }
}

impl Default for ValuationEngine<'static> {
    fn default() -> Self {
        Self::new(&DEFAULT_TABLES)
    }
}
