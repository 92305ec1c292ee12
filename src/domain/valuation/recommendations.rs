//! Recommendation Generator - Guidance for underperforming value drivers.

use super::DriverScore;

/// Driver scores strictly below this are underperforming.
pub const UNDERPERFORMING_THRESHOLD: i64 = 60;

/// Produces improvement recommendations from driver scores.
pub struct RecommendationGenerator;

impl RecommendationGenerator {
    /// One recommendation per underperforming driver, in the given order.
    pub fn generate(driver_scores: &[DriverScore]) -> Vec<String> {
        driver_scores
            .iter()
            .filter(|d| Self::is_underperforming(d.score))
            .map(|d| Self::recommendation_for(&d.driver))
            .collect()
    }

    /// Returns true if a score is below the underperforming threshold.
    pub fn is_underperforming(score: i64) -> bool {
        score < UNDERPERFORMING_THRESHOLD
    }

    /// Renders the recommendation text for a driver.
    pub fn recommendation_for(driver: &str) -> String {
        format!("Improve your {} to increase attractiveness to buyers.", driver)
    }
}
