use crate::DEFAULT_SEED_ENABLED;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Load demo data when the store starts out completely empty
    pub enabled: bool,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            enabled: DEFAULT_SEED_ENABLED,
        }
    }
}
