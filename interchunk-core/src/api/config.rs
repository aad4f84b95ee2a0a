//! Conversion configuration

use crate::application::HeadPolicy;

/// Conversion configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub(crate) head_policy: HeadPolicy,
    pub(crate) normalize_header_quotes: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            head_policy: HeadPolicy::Strict,
            normalize_header_quotes: true,
        }
    }
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Policy for chunks without exactly one head token
    pub fn head_policy(&self) -> HeadPolicy {
        self.head_policy
    }

    /// Whether double quotes in sentence headers become single quotes
    pub fn normalize_header_quotes(&self) -> bool {
        self.normalize_header_quotes
    }
}

/// Fluent builder for [`Config`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    head_policy: Option<HeadPolicy>,
    normalize_header_quotes: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the head policy
    pub fn head_policy(mut self, policy: HeadPolicy) -> Self {
        self.head_policy = Some(policy);
        self
    }

    /// Enable or disable header quote normalization
    pub fn normalize_header_quotes(mut self, enabled: bool) -> Self {
        self.normalize_header_quotes = Some(enabled);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Config {
        let defaults = Config::default();
        Config {
            head_policy: self.head_policy.unwrap_or(defaults.head_policy),
            normalize_header_quotes: self
                .normalize_header_quotes
                .unwrap_or(defaults.normalize_header_quotes),
        }
    }
}
