use crate::error::{ItemzError, Result};
use crate::store::IdFormat;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_DATA_FILENAME: &str = "items.json";

/// Configuration for itemz, stored as config.json beside the data file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemzConfig {
    /// How ids for new items are generated ("timestamp" or "uuid")
    #[serde(default)]
    pub id_format: IdFormat,

    /// Pretty-print the data file
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for ItemzConfig {
    fn default() -> Self {
        Self {
            id_format: IdFormat::default(),
            pretty: default_pretty(),
        }
    }
}

impl ItemzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        serde_json::from_str(&content).map_err(|e| {
            ItemzError::Config(format!("invalid {}: {}", config_path.display(), e))
        })
    }

    #[cfg(test)]
    pub(crate) fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }
}
