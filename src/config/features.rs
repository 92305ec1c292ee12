//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureFlags {
    /// Store computed valuations in the repository
    #[serde(default = "default_persist_results")]
    pub persist_results: bool,

    /// Show detailed error messages (disable in production!)
    #[serde(default)]
    pub verbose_errors: bool,

    /// Emit logs as JSON lines
    #[serde(default)]
    pub log_json: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            persist_results: default_persist_results(),
            verbose_errors: false,
            log_json: false,
        }
    }
}

fn default_persist_results() -> bool {
    true
}
