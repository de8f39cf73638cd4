//! Configuration module

use anyhow::{Context, Result};
use recase_core::CaseKind;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::CliError;
use crate::output::OutputFormat;
use crate::selection::SelectionMode;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Conversion configuration
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Conversion-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ConversionConfig {
    /// Case style used when `--case` is not given
    pub default_case: Option<CaseKind>,

    /// How sources are cut into selections
    pub selection_mode: SelectionMode,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Load a configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Load the given file, or fall back to the defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::debug!("Loading configuration from {}", path.display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Commented configuration file with every option at its default
    pub fn template() -> String {
        let cases = CaseKind::ALL
            .iter()
            .map(|kind| format!("\"{}\"", kind.code()))
            .collect::<Vec<_>>()
            .join(", ");

        format!(
            r#"# recase configuration

[conversion]
# Case style used when --case is not given
# One of: {cases}
# default_case = "camel"

# How input is cut into selections: "whole" or "line"
selection_mode = "whole"

[output]
# Default output format: "text" or "json"
default_format = "text"

# Pretty print JSON output
pretty_json = true

[performance]
# Number of worker threads (0 = one per CPU)
worker_threads = 0
"#
        )
    }
}
