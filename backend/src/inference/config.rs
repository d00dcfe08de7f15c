use serde::{Deserialize, Serialize};
use shared::analysis::SCAN_ID_PREFIX;
use std::path::Path;

use crate::config::ConfigError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningConfig {
    #[serde(default = "default_version")]
    pub version: f32,
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    #[serde(default = "default_prefix")]
    pub scan_id_prefix: String,
    #[serde(default = "default_true")]
    pub log_digests: bool,
}

fn default_version() -> f32 {
    1.0
}

fn default_prefix() -> String {
    SCAN_ID_PREFIX.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            scan_id_prefix: default_prefix(),
            log_digests: true,
        }
    }
}

impl Default for ScreeningConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            analyzer: AnalyzerConfig::default(),
        }
    }
}

impl ScreeningConfig {
    /// A missing file yields the compiled defaults; a file that exists but
    /// does not parse is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::warn!(
                "Screening config {} not found, using defaults",
                path.display()
            );
            return Ok(Self::default());
        }

        let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&config_str).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_yaml(config_str: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(config_str)
    }
}
