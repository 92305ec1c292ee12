//! Multiplier Tables - Static reference data for multiple selection.
//!
//! Three tables drive multiplier selection:
//! - Letter-grade multiples (A to F, strictly decreasing)
//! - NAICS industry bands (sector and sub-sector codes)
//! - Score bands (overall score thresholds to EBITDA multiple ranges)
//!
//! The built-in tables are available through [`DEFAULT_TABLES`]. Deployments
//! can override them with a YAML document parsed by
//! [`MultiplierTables::from_yaml_str`] or [`MultiplierTables::from_yaml_file`];
//! every loaded table is validated before use.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::{Grade, TableError};

/// Built-in reference tables, loaded once per process.
pub static DEFAULT_TABLES: Lazy<MultiplierTables> = Lazy::new(MultiplierTables::builtin);

/// A low/high pair of EBITDA multiples.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MultiplierBand {
    pub low: f64,
    pub high: f64,
}

impl MultiplierBand {
    /// Creates a band without validation.
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Creates a degenerate band where low and high are the same multiple.
    pub const fn point(multiple: f64) -> Self {
        Self {
            low: multiple,
            high: multiple,
        }
    }

    /// Returns true if `0 <= low <= high`.
    pub fn is_valid(&self) -> bool {
        self.low >= 0.0 && self.low <= self.high
    }

    /// Returns true if the band is a single-point multiple.
    pub fn is_degenerate(&self) -> bool {
        self.low == self.high
    }

    fn validate(&self, context: impl Into<String>) -> Result<(), TableError> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(TableError::InvalidBand {
                context: context.into(),
                low: self.low,
                high: self.high,
            })
        }
    }
}

/// Multiple assigned to a letter grade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeMultiplier {
    pub grade: Grade,
    pub multiple: f64,
}

/// Industry-specific multiple band keyed by NAICS code.
///
/// `naics_code` is either a plain code prefix (`"52"`, `"5415"`) or a
/// two-digit sector range (`"31-33"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndustryMultiplier {
    pub naics_code: String,
    pub sector: String,
    pub low: f64,
    pub average: f64,
    pub high: f64,
}

impl IndustryMultiplier {
    /// Creates an industry entry.
    pub fn new(
        naics_code: impl Into<String>,
        sector: impl Into<String>,
        low: f64,
        average: f64,
        high: f64,
    ) -> Self {
        Self {
            naics_code: naics_code.into(),
            sector: sector.into(),
            low,
            average,
            high,
        }
    }

    /// Returns the low/high band of this industry.
    pub fn band(&self) -> MultiplierBand {
        MultiplierBand::new(self.low, self.high)
    }

    /// Returns the inclusive two-digit sector range for range codes like `"31-33"`.
    pub fn sector_range(&self) -> Option<(u32, u32)> {
        let (start, end) = self.naics_code.split_once('-')?;
        let start: u32 = start.trim().parse().ok()?;
        let end: u32 = end.trim().parse().ok()?;
        (start <= end).then_some((start, end))
    }

    /// Returns true if the code is a sector range rather than a plain prefix.
    pub fn is_range(&self) -> bool {
        self.sector_range().is_some()
    }
}

/// Score threshold and the band it selects.
///
/// A band applies to every overall score `>= min_score` that is below the
/// next higher band's threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBand {
    pub min_score: i64,
    pub low: f64,
    pub high: f64,
}

impl ScoreBand {
    /// Creates a score band.
    pub const fn new(min_score: i64, low: f64, high: f64) -> Self {
        Self {
            min_score,
            low,
            high,
        }
    }

    /// Returns the multiple band for this score range.
    pub fn band(&self) -> MultiplierBand {
        MultiplierBand::new(self.low, self.high)
    }
}

/// The complete set of reference tables used by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiplierTables {
    /// Grade multiples, best grade first.
    pub grades: Vec<GradeMultiplier>,
    /// NAICS industry bands.
    #[serde(default)]
    pub industries: Vec<IndustryMultiplier>,
    /// Score bands, highest threshold first.
    pub score_bands: Vec<ScoreBand>,
}

impl MultiplierTables {
    /// Returns the built-in reference tables.
    pub fn builtin() -> Self {
        Self {
            grades: vec![
                GradeMultiplier { grade: Grade::A, multiple: 7.2 },
                GradeMultiplier { grade: Grade::B, multiple: 5.7 },
                GradeMultiplier { grade: Grade::C, multiple: 4.3 },
                GradeMultiplier { grade: Grade::D, multiple: 3.0 },
                GradeMultiplier { grade: Grade::F, multiple: 1.5 },
            ],
            industries: builtin_industries(),
            score_bands: vec![
                ScoreBand::new(80, 6.5, 10.5),
                ScoreBand::new(60, 3.0, 6.5),
                ScoreBand::new(40, 1.0, 3.0),
                ScoreBand::new(0, 0.1, 1.0),
            ],
        }
    }

    /// Parses tables from YAML and validates them.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, TableError> {
        let tables: Self = serde_yaml::from_str(yaml)?;
        tables.validate()?;
        Ok(tables)
    }

    /// Reads, parses and validates tables from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Returns the multiple for a grade, if the table lists it.
    pub fn grade_multiple(&self, grade: Grade) -> Option<f64> {
        self.grades
            .iter()
            .find(|g| g.grade == grade)
            .map(|g| g.multiple)
    }

    /// Checks the structural invariants of all three tables.
    ///
    /// - Every band satisfies `0 <= low <= high`
    /// - Each grade appears once and multiples strictly decrease from A to F
    /// - NAICS codes are non-empty and unique, averages lie inside their band
    /// - Score thresholds strictly decrease and the lowest band starts at 0
    pub fn validate(&self) -> Result<(), TableError> {
        self.validate_grades()?;
        self.validate_industries()?;
        self.validate_score_bands()
    }

    fn validate_grades(&self) -> Result<(), TableError> {
        let mut seen = HashSet::new();
        for entry in &self.grades {
            if !seen.insert(entry.grade) {
                return Err(TableError::DuplicateGrade(entry.grade));
            }
            MultiplierBand::point(entry.multiple).validate(format!("grade {}", entry.grade))?;
        }

        let mut previous: Option<(Grade, f64)> = None;
        for grade in Grade::ALL {
            let multiple = self
                .grade_multiple(grade)
                .ok_or(TableError::MissingGrade(grade))?;
            if let Some((higher, higher_multiple)) = previous {
                if higher_multiple <= multiple {
                    return Err(TableError::GradesNotDecreasing {
                        higher,
                        higher_multiple,
                        lower: grade,
                        lower_multiple: multiple,
                    });
                }
            }
            previous = Some((grade, multiple));
        }
        Ok(())
    }

    fn validate_industries(&self) -> Result<(), TableError> {
        let mut seen = HashSet::new();
        for industry in &self.industries {
            let code = industry.naics_code.trim();
            if code.is_empty() {
                return Err(TableError::EmptyNaicsCode);
            }
            if !seen.insert(code) {
                return Err(TableError::DuplicateNaicsCode(code.to_string()));
            }
            industry
                .band()
                .validate(format!("industry {}", industry.naics_code))?;
            if industry.average < industry.low || industry.average > industry.high {
                return Err(TableError::AverageOutsideBand {
                    naics_code: industry.naics_code.clone(),
                    average: industry.average,
                });
            }
        }
        Ok(())
    }

    fn validate_score_bands(&self) -> Result<(), TableError> {
        let lowest = self.score_bands.last().ok_or(TableError::EmptyScoreBands)?;

        for band in &self.score_bands {
            band.band()
                .validate(format!("score band starting at {}", band.min_score))?;
        }
        for pair in self.score_bands.windows(2) {
            if pair[1].min_score >= pair[0].min_score {
                return Err(TableError::ScoreBandsNotContiguous {
                    previous: pair[0].min_score,
                    next: pair[1].min_score,
                });
            }
        }
        if lowest.min_score != 0 {
            return Err(TableError::ScoreBandsIncomplete(lowest.min_score));
        }
        Ok(())
    }
}

impl Default for MultiplierTables {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_industries() -> Vec<IndustryMultiplier> {
    vec![
        IndustryMultiplier::new("11", "Agriculture, Forestry, Fishing and Hunting", 2.5, 4.0, 5.5),
        IndustryMultiplier::new("21", "Mining, Quarrying, and Oil and Gas Extraction", 3.0, 4.5, 6.0),
        IndustryMultiplier::new("22", "Utilities", 5.0, 7.0, 9.0),
        IndustryMultiplier::new("23", "Construction", 2.5, 3.8, 5.0),
        IndustryMultiplier::new("31-33", "Manufacturing", 3.5, 5.0, 6.5),
        IndustryMultiplier::new("42", "Wholesale Trade", 3.0, 4.5, 6.0),
        IndustryMultiplier::new("44-45", "Retail Trade", 2.5, 3.8, 5.0),
        IndustryMultiplier::new("48-49", "Transportation and Warehousing", 3.0, 4.5, 6.0),
        IndustryMultiplier::new("51", "Information", 5.0, 7.5, 10.0),
        IndustryMultiplier::new("5112", "Software Publishers", 7.0, 10.0, 13.0),
        IndustryMultiplier::new("52", "Finance and Insurance", 4.0, 6.0, 8.0),
        IndustryMultiplier::new("53", "Real Estate and Rental and Leasing", 4.0, 6.0, 8.0),
        IndustryMultiplier::new("54", "Professional, Scientific, and Technical Services", 3.0, 4.8, 6.5),
        IndustryMultiplier::new("5415", "Computer Systems Design and Related Services", 4.5, 6.5, 8.5),
        IndustryMultiplier::new("55", "Management of Companies and Enterprises", 3.5, 5.0, 6.5),
        IndustryMultiplier::new("56", "Administrative and Support and Waste Management", 2.5, 4.0, 5.5),
        IndustryMultiplier::new("61", "Educational Services", 3.0, 4.5, 6.0),
        IndustryMultiplier::new("62", "Health Care and Social Assistance", 4.0, 6.0, 8.0),
        IndustryMultiplier::new("71", "Arts, Entertainment, and Recreation", 2.5, 3.8, 5.0),
        IndustryMultiplier::new("72", "Accommodation and Food Services", 2.0, 3.0, 4.0),
        IndustryMultiplier::new("81", "Other Services (except Public Administration)", 2.0, 3.0, 4.0),
    ]
}
