//! Snapshot configuration
//!
//! Parsed from YAML with serde. Every field has a default, so an empty file
//! is a valid configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// How the channel `banlist` field is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BanlistMode {
    /// Bans are collected into the member accumulator after `memberlist` has
    /// already been emitted, so `banlist` is always `""`. Matches what
    /// existing scripts have always seen.
    #[default]
    Legacy,
    /// Bans are joined from their own accumulator.
    Separate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotConfig {
    /// Separator between entries of list-valued fields.
    #[serde(default = "default_list_delimiter")]
    pub list_delimiter: char,

    #[serde(default)]
    pub banlist: BanlistMode,

    /// Emit `results` as `""` for games flagged bad.
    #[serde(default)]
    pub suppress_bad_results: bool,

    /// Fallback tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_list_delimiter() -> char {
    ','
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for SnapshotConfig {
    fn default() -> Self {
        Self {
            list_delimiter: default_list_delimiter(),
            banlist: BanlistMode::default(),
            suppress_bad_results: false,
            log_filter: default_log_filter(),
        }
    }
}

impl SnapshotConfig {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: SnapshotConfig = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse YAML in {}", path.display()))?;

        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from a YAML string
    pub fn from_str(contents: &str) -> Result<Self> {
        // serde_yaml reads an empty document as unit, not an empty map.
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: SnapshotConfig = serde_yaml::from_str(contents)
            .context("Failed to parse YAML")?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        anyhow::ensure!(
            !self.list_delimiter.is_control(),
            "list_delimiter cannot be a control character: {:?}",
            self.list_delimiter
        );
        anyhow::ensure!(!self.log_filter.is_empty(), "log_filter cannot be empty");

        Ok(())
    }

    /// Save configuration to a YAML file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let yaml = serde_yaml::to_string(&self)
            .context("Failed to serialize config to YAML")?;

        fs::write(path.as_ref(), yaml)
            .with_context(|| format!("Failed to write config to {}", path.as_ref().display()))?;

        Ok(())
    }
}
