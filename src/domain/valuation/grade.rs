//! Letter grades used by the grade-based valuation view.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Letter grade from A (best) to F (worst).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// All grades, best first.
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    /// Returns the single-letter label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }

    /// Derives a letter grade from a 0-100 score.
    ///
    /// Thresholds are inclusive lower bounds: 90, 80, 70, 60.
    pub fn from_score(score: i64) -> Self {
        match score {
            s if s >= 90 => Grade::A,
            s if s >= 80 => Grade::B,
            s if s >= 70 => Grade::C,
            s if s >= 60 => Grade::D,
            _ => Grade::F,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Grade {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::empty_field("grade"));
        }
        match trimmed.to_ascii_uppercase().as_str() {
            "A" => Ok(Grade::A),
            "B" => Ok(Grade::B),
            "C" => Ok(Grade::C),
            "D" => Ok(Grade::D),
            "F" => Ok(Grade::F),
            _ => Err(ValidationError::unknown_value("grade", trimmed)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_parses_case_insensitively() {
        assert_eq!("b".parse::<Grade>().unwrap(), Grade::B);
        assert_eq!(" F ".parse::<Grade>().unwrap(), Grade::F);
    }

    #[test]
    fn grade_rejects_unknown_letters() {
        assert!(matches!(
            "E".parse::<Grade>(),
            Err(ValidationError::UnknownValue { .. })
        ));
        assert!(matches!(
            "".parse::<Grade>(),
            Err(ValidationError::EmptyField { .. })
        ));
    }

    #[test]
    fn grade_from_score_uses_inclusive_thresholds() {
        assert_eq!(Grade::from_score(100), Grade::A);
        assert_eq!(Grade::from_score(90), Grade::A);
        assert_eq!(Grade::from_score(89), Grade::B);
        assert_eq!(Grade::from_score(80), Grade::B);
        assert_eq!(Grade::from_score(70), Grade::C);
        assert_eq!(Grade::from_score(60), Grade::D);
        assert_eq!(Grade::from_score(59), Grade::F);
        assert_eq!(Grade::from_score(0), Grade::F);
    }

    #[test]
    fn grade_ordering_is_best_first() {
        assert!(Grade::A < Grade::B);
        assert!(Grade::D < Grade::F);
    }

    #[test]
    fn grade_serializes_as_letter() {
        assert_eq!(serde_json::to_string(&Grade::C).unwrap(), "\"C\"");
        let grade: Grade = serde_json::from_str("\"A\"").unwrap();
        assert_eq!(grade, Grade::A);
    }
}
