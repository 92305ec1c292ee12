//! Industry Resolver - NAICS code lookup against the industry table.

use super::{IndustryMultiplier, MultiplierTables};

/// Resolves NAICS codes to industry multiplier bands.
pub struct IndustryResolver;

impl IndustryResolver {
    /// Looks up a NAICS code.
    ///
    /// # Algorithm
    /// 1. Exact match on the trimmed code (`"31-33"`, `"5415"`)
    /// 2. Longest plain table code that prefixes the input (`"541511"` -> `"5415"`)
    /// 3. Sector range containing the input's two leading digits (`"312"` -> `"31-33"`)
    ///
    /// # Edge Cases
    /// - Blank code: Returns None
    /// - No match: Returns None, the caller falls back to score bands
    pub fn resolve<'t>(tables: &'t MultiplierTables, naics_code: &str) -> Option<&'t IndustryMultiplier> {
        let code = naics_code.trim();
        if code.is_empty() {
            return None;
        }

        Self::exact_match(tables, code)
            .or_else(|| Self::prefix_match(tables, code))
            .or_else(|| Self::range_match(tables, code))
    }

    fn exact_match<'t>(tables: &'t MultiplierTables, code: &str) -> Option<&'t IndustryMultiplier> {
        tables
            .industries
            .iter()
            .find(|industry| industry.naics_code.trim() == code)
    }

    fn prefix_match<'t>(tables: &'t MultiplierTables, code: &str) -> Option<&'t IndustryMultiplier> {
        tables
            .industries
            .iter()
            .filter(|industry| !industry.is_range())
            .filter(|industry| code.starts_with(industry.naics_code.trim()))
            .max_by_key(|industry| industry.naics_code.trim().len())
    }

    fn range_match<'t>(tables: &'t MultiplierTables, code: &str) -> Option<&'t IndustryMultiplier> {
        let sector: u32 = code.get(..2)?.parse().ok()?;
        tables.industries.iter().find(|industry| {
            industry
                .sector_range()
                .is_some_and(|(start, end)| (start..=end).contains(&sector))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::valuation::DEFAULT_TABLES;

    #[test]
    fn resolve_exact_sector_code() {
        let industry = IndustryResolver::resolve(&DEFAULT_TABLES, "52").unwrap();
        assert_eq!(industry.sector, "Finance and Insurance");
    }

    #[test]
    fn resolve_exact_range_code() {
        let industry = IndustryResolver::resolve(&DEFAULT_TABLES, "31-33").unwrap();
        assert_eq!(industry.sector, "Manufacturing");
    }

    #[test]
    fn resolve_prefix_into_range() {
        let industry = IndustryResolver::resolve(&DEFAULT_TABLES, "312").unwrap();
        assert_eq!(industry.naics_code, "31-33");

        let retail = IndustryResolver::resolve(&DEFAULT_TABLES, "445110").unwrap();
        assert_eq!(retail.naics_code, "44-45");
    }

    #[test]
    fn resolve_prefers_most_specific_prefix() {
        let industry = IndustryResolver::resolve(&DEFAULT_TABLES, "541511").unwrap();
        assert_eq!(industry.naics_code, "5415");

        let sector = IndustryResolver::resolve(&DEFAULT_TABLES, "541110").unwrap();
        assert_eq!(sector.naics_code, "54");
    }

    #[test]
    fn resolve_trims_whitespace() {
        let industry = IndustryResolver::resolve(&DEFAULT_TABLES, "  23 ").unwrap();
        assert_eq!(industry.sector, "Construction");
    }

    #[test]
    fn resolve_unknown_code_is_none() {
        assert!(IndustryResolver::resolve(&DEFAULT_TABLES, "99").is_none());
        assert!(IndustryResolver::resolve(&DEFAULT_TABLES, "9").is_none());
        assert!(IndustryResolver::resolve(&DEFAULT_TABLES, "abc").is_none());
    }

    #[test]
    fn resolve_blank_code_is_none() {
        assert!(IndustryResolver::resolve(&DEFAULT_TABLES, "").is_none());
        assert!(IndustryResolver::resolve(&DEFAULT_TABLES, "   ").is_none());
    }

    #[test]
    fn resolve_against_empty_table_is_none() {
        let mut tables = MultiplierTables::builtin();
        tables.industries.clear();
        assert!(IndustryResolver::resolve(&tables, "52").is_none());
    }
}
