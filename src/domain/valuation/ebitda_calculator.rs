//! EBITDA Calculator - Reconstructs base and adjusted EBITDA from line items.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

const LINE_ITEM_COUNT: usize = 7;

/// Known financial line items and their wire identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineItem {
    Revenue,
    CostOfGoodsSold,
    OperatingExpenses,
    Adjustment1,
    Adjustment2,
    Adjustment3,
    Adjustment4,
}

impl LineItem {
    /// All line items in statement order.
    pub const ALL: [LineItem; LINE_ITEM_COUNT] = [
        LineItem::Revenue,
        LineItem::CostOfGoodsSold,
        LineItem::OperatingExpenses,
        LineItem::Adjustment1,
        LineItem::Adjustment2,
        LineItem::Adjustment3,
        LineItem::Adjustment4,
    ];

    /// Returns the wire identifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            LineItem::Revenue => "financial-1",
            LineItem::CostOfGoodsSold => "financial-2",
            LineItem::OperatingExpenses => "financial-3",
            LineItem::Adjustment1 => "adjustments-1",
            LineItem::Adjustment2 => "adjustments-2",
            LineItem::Adjustment3 => "adjustments-3",
            LineItem::Adjustment4 => "adjustments-4",
        }
    }

    /// Returns true for the addback slots.
    pub fn is_adjustment(&self) -> bool {
        matches!(
            self,
            LineItem::Adjustment1
                | LineItem::Adjustment2
                | LineItem::Adjustment3
                | LineItem::Adjustment4
        )
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LineItem {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LineItem::ALL
            .into_iter()
            .find(|item| item.as_str() == s.trim())
            .ok_or_else(|| ValidationError::unknown_value("id", s))
    }
}

/// One numeric financial input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialLineItem {
    pub id: String,
    pub value: f64,
}

impl FinancialLineItem {
    /// Creates a line item for a known identifier.
    pub fn new(item: LineItem, value: f64) -> Self {
        Self {
            id: item.as_str().to_string(),
            value,
        }
    }
}

/// Typed financial inputs. Every item absent from the submission reads as 0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FinancialStatement {
    values: [f64; LINE_ITEM_COUNT],
}

impl FinancialStatement {
    /// Creates an empty statement (all items 0).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with(mut self, item: LineItem, value: f64) -> Self {
        self.set(item, value);
        self
    }

    /// Sets an item, replacing any earlier value.
    pub fn set(&mut self, item: LineItem, value: f64) {
        self.values[item.index()] = value;
    }

    /// Returns an item's value, 0 when never set.
    pub fn get(&self, item: LineItem) -> f64 {
        self.values[item.index()]
    }

    /// Builds a statement from loose line items.
    ///
    /// Returns the statement and the ids that matched no known line item.
    /// Later duplicates overwrite earlier ones.
    pub fn from_line_items<'a>(
        items: impl IntoIterator<Item = &'a FinancialLineItem>,
    ) -> (Self, Vec<String>) {
        let mut statement = Self::new();
        let mut unknown = Vec::new();

        for item in items {
            match item.id.parse::<LineItem>() {
                Ok(line_item) => statement.set(line_item, item.value),
                Err(_) => unknown.push(item.id.clone()),
            }
        }

        (statement, unknown)
    }

    /// Sum of the four addback slots.
    pub fn total_adjustments(&self) -> f64 {
        LineItem::ALL
            .iter()
            .filter(|item| item.is_adjustment())
            .map(|item| self.get(*item))
            .sum()
    }
}

/// Intermediate and final EBITDA figures. Nothing here is rounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EbitdaBreakdown {
    pub revenue: f64,
    pub cost_of_goods_sold: f64,
    pub gross_profit: f64,
    pub operating_expenses: f64,
    pub base_ebitda: f64,
    pub adjustments: f64,
    pub adjusted_ebitda: f64,
}

/// EBITDA reconstruction.
pub struct EbitdaCalculator;

impl EbitdaCalculator {
    /// Computes base and adjusted EBITDA.
    ///
    /// # Algorithm
    /// - gross profit = revenue - COGS
    /// - base EBITDA = gross profit - opex
    /// - adjusted EBITDA = base EBITDA + Σ adjustments
    ///
    /// # Edge Cases
    /// - Missing items: Treated as 0
    /// - Negative results: Propagated, never clamped
    pub fn calculate(statement: &FinancialStatement) -> EbitdaBreakdown {
        let revenue = statement.get(LineItem::Revenue);
        let cost_of_goods_sold = statement.get(LineItem::CostOfGoodsSold);
        let operating_expenses = statement.get(LineItem::OperatingExpenses);

        let gross_profit = revenue - cost_of_goods_sold;
        let base_ebitda = gross_profit - operating_expenses;
        let adjustments = statement.total_adjustments();

        EbitdaBreakdown {
            revenue,
            cost_of_goods_sold,
            gross_profit,
            operating_expenses,
            base_ebitda,
            adjustments,
            adjusted_ebitda: base_ebitda + adjustments,
        }
    }
}
