//! Valuation engine configuration

use serde::Deserialize;
use std::path::Path;
use tracing::info;

use super::error::{ConfigError, ValidationError};
use crate::domain::valuation::{MultiplierTables, DEFAULT_TABLES};

/// Valuation engine configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValuationConfig {
    /// YAML file replacing the built-in multiplier tables
    pub tables_path: Option<String>,
}

impl ValuationConfig {
    /// Loads the reference tables, falling back to the built-in set
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::TablesLoad` if the file cannot be read, parsed
    /// or fails table validation.
    pub fn load_tables(&self) -> Result<MultiplierTables, ConfigError> {
        match &self.tables_path {
            Some(path) => {
                let tables = MultiplierTables::from_yaml_file(path)?;
                info!(
                    path = %path,
                    industries = tables.industries.len(),
                    score_bands = tables.score_bands.len(),
                    "Loaded multiplier tables"
                );
                Ok(tables)
            }
            None => {
                info!("Using built-in multiplier tables");
                Ok(DEFAULT_TABLES.clone())
            }
        }
    }

    /// Validate valuation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(path) = &self.tables_path {
            if path.trim().is_empty() {
                return Err(ValidationError::EmptyTablesPath);
            }
            if !Path::new(path).is_file() {
                return Err(ValidationError::TablesFileNotFound(path.clone()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::valuation::Grade;
    use std::io::Write;

    const TABLES_YAML: &str = r#"
grades:
  - { grade: A, multiple: 9.0 }
  - { grade: B, multiple: 7.0 }
  - { grade: C, multiple: 5.0 }
  - { grade: D, multiple: 3.0 }
  - { grade: F, multiple: 1.0 }
scoreBands:
  - { minScore: 50, low: 4.0, high: 8.0 }
  - { minScore: 0, low: 1.0, high: 4.0 }
"#;

    fn tables_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_default_uses_builtin_tables() {
        let config = ValuationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.load_tables().unwrap(), MultiplierTables::builtin());
    }

    #[test]
    fn test_load_tables_from_file() {
        let file = tables_file(TABLES_YAML);
        let config = ValuationConfig {
            tables_path: Some(file.path().display().to_string()),
        };

        assert!(config.validate().is_ok());
        let tables = config.load_tables().unwrap();
        assert_eq!(tables.grade_multiple(Grade::A), Some(9.0));
        assert_eq!(tables.score_bands.len(), 2);
        assert!(tables.industries.is_empty());
    }

    #[test]
    fn test_load_tables_rejects_invalid_tables() {
        let file = tables_file(&TABLES_YAML.replace("minScore: 0", "minScore: 10"));
        let config = ValuationConfig {
            tables_path: Some(file.path().display().to_string()),
        };

        assert!(matches!(config.load_tables(), Err(ConfigError::TablesLoad(_))));
    }

    #[test]
    fn test_validate_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = ValuationConfig {
            tables_path: Some(dir.path().join("nope.yaml").display().to_string()),
        };

        assert!(matches!(
            config.validate(),
            Err(ValidationError::TablesFileNotFound(_))
        ));
    }

    #[test]
    fn test_validate_empty_path() {
        let config = ValuationConfig {
            tables_path: Some("  ".to_string()),
        };
        assert!(matches!(config.validate(), Err(ValidationError::EmptyTablesPath)));
    }
}
