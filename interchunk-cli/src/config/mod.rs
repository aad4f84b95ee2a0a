//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use interchunk_core::{Config, HeadPolicy};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default suffix appended to output files in directory mode
pub const DEFAULT_SUFFIX: &str = ".inter-chunk";

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
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
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ConversionConfig {
    /// Policy for chunks without exactly one head token
    pub head_policy: HeadPolicy,

    /// Rewrite double quotes in sentence headers as single quotes
    pub normalize_header_quotes: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            head_policy: HeadPolicy::Strict,
            normalize_header_quotes: true,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Suffix appended to each file name in directory mode
    pub suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceConfig {
    /// Convert the files of a directory in parallel
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub threads: usize,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an optional path, falling back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Check values that TOML typing alone cannot rule out
    pub fn validate(&self) -> Result<(), CliError> {
        if self.output.suffix.is_empty() {
            return Err(CliError::ConfigError(
                "output suffix must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Core conversion configuration
    pub fn core_config(&self) -> Config {
        Config::builder()
            .head_policy(self.conversion.head_policy)
            .normalize_header_quotes(self.conversion.normalize_header_quotes)
            .build()
    }

    /// Thread count for rayon, if one was requested
    pub fn threads(&self) -> Option<usize> {
        match self.performance.threads {
            0 => None,
            n => Some(n),
        }
    }
}
