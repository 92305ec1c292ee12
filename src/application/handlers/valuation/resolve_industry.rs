//! ResolveIndustryHandler - Query handler for NAICS industry lookups.

use std::sync::Arc;

use crate::domain::valuation::{IndustryMultiplier, IndustryResolver, MultiplierTables};

/// Query for the industry band matching a NAICS code.
#[derive(Debug, Clone)]
pub struct ResolveIndustryQuery {
    pub naics_code: String,
}

/// Handler for industry lookups against the loaded reference tables.
pub struct ResolveIndustryHandler {
    tables: Arc<MultiplierTables>,
}

impl ResolveIndustryHandler {
    pub fn new(tables: Arc<MultiplierTables>) -> Self {
        Self { tables }
    }

    /// Returns the matching industry, or None when the code is unknown.
    pub fn handle(&self, query: &ResolveIndustryQuery) -> Option<IndustryMultiplier> {
        IndustryResolver::resolve(&self.tables, &query.naics_code).cloned()
    }
}
