//! Valuation Range Calculator - Applies a multiple band to EBITDA.

use serde::{Deserialize, Serialize};

use super::rounding::round_half_up;
use super::MultiplierBand;

/// Low, mean and high value estimates in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValuationRange {
    pub low: f64,
    pub mean: f64,
    pub high: f64,
}

/// Valuation range arithmetic.
pub struct ValuationRangeCalculator;

impl ValuationRangeCalculator {
    /// Computes the range for an EBITDA figure and a band.
    ///
    /// # Algorithm
    /// - low = round(ebitda * band.low)
    /// - high = round(ebitda * band.high)
    /// - mean = round((low + high) / 2)
    ///
    /// # Edge Cases
    /// - Negative EBITDA: low and high swap order (low > high); not clamped
    /// - Degenerate band: low = mean = high
    pub fn calculate(ebitda: f64, band: &MultiplierBand) -> ValuationRange {
        let low = round_half_up(ebitda * band.low);
        let high = round_half_up(ebitda * band.high);
        let mean = round_half_up((low + high) / 2.0);

        ValuationRange { low, mean, high }
    }
}
