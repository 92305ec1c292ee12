//! Error types for the valuation engine and its reference tables.

use thiserror::Error;

use super::Grade;

/// Errors raised while computing a valuation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValuationError {
    /// No driver responses were supplied, so no overall score exists.
    #[error("At least one value driver response is required to compute a valuation")]
    NoDriverData,
}

/// Errors raised while loading or validating multiplier reference tables.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("Invalid multiplier band for {context}: low {low} must be >= 0 and <= high {high}")]
    InvalidBand { context: String, low: f64, high: f64 },

    #[error("Industry {naics_code}: average multiple {average} lies outside its band")]
    AverageOutsideBand { naics_code: String, average: f64 },

    #[error("Industry entry has an empty NAICS code")]
    EmptyNaicsCode,

    #[error("Duplicate NAICS code in industry table: {0}")]
    DuplicateNaicsCode(String),

    #[error("Grade table is missing grade {0}")]
    MissingGrade(Grade),

    #[error("Grade table lists grade {0} more than once")]
    DuplicateGrade(Grade),

    #[error("Grade multiples must strictly decrease: {higher} ({higher_multiple}) <= {lower} ({lower_multiple})")]
    GradesNotDecreasing {
        higher: Grade,
        higher_multiple: f64,
        lower: Grade,
        lower_multiple: f64,
    },

    #[error("Score band table is empty")]
    EmptyScoreBands,

    #[error("Score band thresholds must strictly decrease: {previous} then {next}")]
    ScoreBandsNotContiguous { previous: i64, next: i64 },

    #[error("Lowest score band starts at {0}; it must start at 0")]
    ScoreBandsIncomplete(i64),

    #[error("Failed to read multiplier tables from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse multiplier tables: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_driver_data_displays_correctly() {
        assert_eq!(
            ValuationError::NoDriverData.to_string(),
            "At least one value driver response is required to compute a valuation"
        );
    }

    #[test]
    fn grades_not_decreasing_names_both_grades() {
        let err = TableError::GradesNotDecreasing {
            higher: Grade::B,
            higher_multiple: 4.0,
            lower: Grade::C,
            lower_multiple: 4.5,
        };
        let message = err.to_string();
        assert!(message.contains("B (4)"));
        assert!(message.contains("C (4.5)"));
    }
}
