//! TOML configuration file support.
//!
//! Output layout can be kept in a config file instead of repeated CLI flags:
//!
//! ```toml
//! # ctml2yaml.toml
//! [output]
//! compact = false
//! multiline_strings = true
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

use ctml2yaml::yaml::EmitterConfig;

/// Root configuration structure for ctml2yaml.toml files.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Output layout settings.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Layout of the written YAML document.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Start mappings inside sequences on the `-` line.
    pub compact: Option<bool>,

    /// Write multi-line strings as literal blocks.
    pub multiline_strings: Option<bool>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse TOML configuration")
    }

    /// Emitter layout with command-line overrides applied on top of this file.
    pub fn emitter_config(&self, expanded: bool, multiline_strings: bool) -> EmitterConfig {
        let defaults = EmitterConfig::default();
        EmitterConfig {
            compact: !expanded && self.output.compact.unwrap_or(defaults.compact),
            multiline_strings: multiline_strings
                || self
                    .output
                    .multiline_strings
                    .unwrap_or(defaults.multiline_strings),
        }
    }
}
