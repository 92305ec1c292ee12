//! Score Aggregator - Normalizes questionnaire responses into driver scores.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::rounding::round_half_up;
use super::ValuationError;

/// Upper end of the response weight scale.
pub const MAX_WEIGHT: f64 = 5.0;

/// One answer to one qualitative question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverResponse {
    pub id: String,
    /// The value driver (category) this answer belongs to.
    pub value_driver: String,
    /// Answer weight on a 1-5 scale. Not clamped.
    pub weight: f64,
}

impl DriverResponse {
    /// Creates a new driver response.
    pub fn new(id: impl Into<String>, value_driver: impl Into<String>, weight: f64) -> Self {
        Self {
            id: id.into(),
            value_driver: value_driver.into(),
            weight,
        }
    }
}

/// Normalized 0-100 score for one value driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriverScore {
    pub driver: String,
    pub score: i64,
}

/// Output of the aggregation stage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregatedScores {
    /// Per-driver scores in order of first appearance.
    pub driver_scores: Vec<DriverScore>,
    /// Rounded mean of all driver scores.
    pub overall_score: i64,
}

/// Converts raw responses into driver scores and an overall score.
pub struct ScoreAggregator;

impl ScoreAggregator {
    /// Aggregates responses per value driver.
    ///
    /// # Algorithm
    /// For each driver: score = round((Σ weight / count) / 5 * 100)
    /// Overall: round(mean(driver scores))
    ///
    /// # Edge Cases
    /// - Empty input: Returns `ValuationError::NoDriverData`
    /// - Weights outside 1-5: Used as-is, so scores may leave 0-100
    pub fn aggregate(responses: &[DriverResponse]) -> Result<AggregatedScores, ValuationError> {
        let driver_scores = Self::driver_scores(responses);
        let overall_score = Self::overall_score(&driver_scores)?;

        Ok(AggregatedScores {
            driver_scores,
            overall_score,
        })
    }

    /// Computes one score per distinct driver, in order of first appearance.
    pub fn driver_scores(responses: &[DriverResponse]) -> Vec<DriverScore> {
        let mut order: Vec<&str> = Vec::new();
        let mut totals: HashMap<&str, (f64, usize)> = HashMap::new();

        for response in responses {
            let driver = response.value_driver.as_str();
            let entry = totals.entry(driver).or_insert_with(|| {
                order.push(driver);
                (0.0, 0)
            });
            entry.0 += response.weight;
            entry.1 += 1;
        }

        order
            .into_iter()
            .filter_map(|driver| {
                let (sum, count) = totals.get(driver).copied()?;
                (count > 0).then(|| DriverScore {
                    driver: driver.to_string(),
                    score: Self::normalize(sum / count as f64),
                })
            })
            .collect()
    }

    /// Normalizes an average weight onto the 0-100 scale.
    pub fn normalize(average_weight: f64) -> i64 {
        round_half_up((average_weight / MAX_WEIGHT) * 100.0) as i64
    }

    /// Rounded arithmetic mean of driver scores.
    ///
    /// Summed in `f64` so saturated scores from huge weights cannot overflow.
    pub fn overall_score(driver_scores: &[DriverScore]) -> Result<i64, ValuationError> {
        if driver_scores.is_empty() {
            return Err(ValuationError::NoDriverData);
        }

        let total: f64 = driver_scores.iter().map(|d| d.score as f64).sum();
        let mean = total / driver_scores.len() as f64;
        Ok(round_half_up(mean) as i64)
    }
}
