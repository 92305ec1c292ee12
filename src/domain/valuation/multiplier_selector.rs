//! Multiplier Selector - Chooses the EBITDA multiple band for a valuation.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{Grade, IndustryMultiplier, MultiplierBand, MultiplierTables};

/// Which selection rule produced the applied band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MultiplierSource {
    /// Explicit letter grade, single-point multiple.
    Grade { grade: Grade },
    /// NAICS industry band.
    #[serde(rename_all = "camelCase")]
    Industry { naics_code: String, sector: String },
    /// Overall-score band.
    #[serde(rename_all = "camelCase")]
    ScoreBand { min_score: i64 },
}

/// A selected band together with the rule that chose it.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiplierSelection {
    pub band: MultiplierBand,
    pub source: MultiplierSource,
}

/// Multiplier selection policy.
pub struct MultiplierSelector;

impl MultiplierSelector {
    /// Selects a band; first matching rule wins.
    ///
    /// 1. Explicit grade: degenerate band `{multiple, multiple}`
    /// 2. Resolved industry: `{industry.low, industry.high}`
    /// 3. Score band for `overall_score`
    ///
    /// A grade missing from an unvalidated table falls through to the next rule.
    pub fn select(
        tables: &MultiplierTables,
        overall_score: i64,
        industry: Option<&IndustryMultiplier>,
        grade: Option<Grade>,
    ) -> MultiplierSelection {
        if let Some(grade) = grade {
            match tables.grade_multiple(grade) {
                Some(multiple) => {
                    return MultiplierSelection {
                        band: MultiplierBand::point(multiple),
                        source: MultiplierSource::Grade { grade },
                    };
                }
                None => warn!(%grade, "Grade missing from multiplier table, ignoring override"),
            }
        }

        if let Some(industry) = industry {
            return MultiplierSelection {
                band: industry.band(),
                source: MultiplierSource::Industry {
                    naics_code: industry.naics_code.clone(),
                    sector: industry.sector.clone(),
                },
            };
        }

        Self::score_band(tables, overall_score)
    }

    /// Selects the score band whose threshold is the highest one `<= overall_score`.
    ///
    /// # Edge Cases
    /// - Score below every threshold (only possible with out-of-range weights):
    ///   the lowest band applies
    /// - Empty score band table: a zero band, so the valuation degrades to 0
    pub fn score_band(tables: &MultiplierTables, overall_score: i64) -> MultiplierSelection {
        let selected = tables
            .score_bands
            .iter()
            .find(|band| overall_score >= band.min_score)
            .or_else(|| tables.score_bands.last());

        match selected {
            Some(band) => MultiplierSelection {
                band: band.band(),
                source: MultiplierSource::ScoreBand {
                    min_score: band.min_score,
                },
            },
            None => {
                warn!("Score band table is empty, using a zero multiple");
                MultiplierSelection {
                    band: MultiplierBand::point(0.0),
                    source: MultiplierSource::ScoreBand { min_score: 0 },
                }
            }
        }
    }
}
