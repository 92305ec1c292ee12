//! Engine input - Typed driver and financial collections.
//!
//! Submissions arrive either as two typed collections or as a single
//! heterogeneous list of response records. The list form is split here, at
//! the engine boundary, so nothing downstream parses ids.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{DriverResponse, FinancialLineItem, FinancialStatement, Grade};

/// One record of a heterogeneous response list.
///
/// Records with `valueDriver` and `weight` are driver responses; records with
/// `value` are financial line items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseRecord {
    Driver(DriverResponse),
    Financial(FinancialLineItem),
}

/// Everything the engine needs for one valuation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValuationInput {
    pub drivers: Vec<DriverResponse>,
    pub financials: FinancialStatement,
    pub naics_code: Option<String>,
    pub grade: Option<Grade>,
}

impl ValuationInput {
    /// Creates an input from typed collections.
    pub fn new(drivers: Vec<DriverResponse>, financials: FinancialStatement) -> Self {
        Self {
            drivers,
            financials,
            naics_code: None,
            grade: None,
        }
    }

    /// Splits a heterogeneous record list into typed collections.
    ///
    /// Driver order is preserved. Financial records with unknown ids are
    /// dropped; for repeated ids the last value wins.
    pub fn from_records(records: &[ResponseRecord]) -> Self {
        let mut drivers = Vec::new();
        let mut line_items = Vec::new();

        for record in records {
            match record {
                ResponseRecord::Driver(response) => drivers.push(response.clone()),
                ResponseRecord::Financial(item) => line_items.push(item),
            }
        }

        let (financials, unknown) = FinancialStatement::from_line_items(line_items);
        if !unknown.is_empty() {
            debug!(ids = ?unknown, "Ignoring financial records with unknown ids");
        }

        Self::new(drivers, financials)
    }

    /// Sets the NAICS code used for industry multiple selection.
    pub fn with_naics_code(mut self, naics_code: impl Into<String>) -> Self {
        self.naics_code = Some(naics_code.into());
        self
    }

    /// Sets an explicit grade, overriding all other multiple selection.
    pub fn with_grade(mut self, grade: Grade) -> Self {
        self.grade = Some(grade);
        self
    }
}
