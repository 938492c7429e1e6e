//! Project configuration
//!
//! An optional `rulestat.toml` in the working directory can change the rules
//! directory and the sentinel recorded for missing keys:
//!
//! ```toml
//! rules_dir = "RuleSets"
//! missing_value = "none"
//! ```
//!
//! Command-line flags take precedence over the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CombineError, Result};
use crate::paths;

/// Contents of `rulestat.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directory whose entries name the rules
    #[serde(default = "default_rules_dir")]
    pub rules_dir: PathBuf,
    /// Value recorded when a result file lacks the key
    #[serde(default = "default_missing_value")]
    pub missing_value: String,
}

fn default_rules_dir() -> PathBuf {
    PathBuf::from(paths::RULES_DIR)
}

fn default_missing_value() -> String {
    paths::MISSING_VALUE.to_string()
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            rules_dir: default_rules_dir(),
            missing_value: default_missing_value(),
        }
    }
}

impl ProjectConfig {
    /// Load `rulestat.toml` from `dir`, falling back to defaults if absent.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = paths::config_file(dir);
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let content = fs::read_to_string(&path).map_err(|source| CombineError::Config {
            path: path.clone(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| CombineError::ConfigParse {
            path: path.clone(),
            source,
        })?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse config from a TOML string
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply a command-line override for the rules directory
    #[must_use]
    pub fn with_rules_dir(mut self, rules_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = rules_dir {
            self.rules_dir = dir;
        }
        self
    }
}
