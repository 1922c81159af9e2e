//! Shared configuration loader for the toc toolchain.
//!
//! `defaults/toc.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`TocConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use toc_babel::{ExtractOptions, FormatError, Selector};
use toc_outline::OutlineBuilder;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/toc.default.toml");

/// Top-level configuration consumed by toc applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TocConfig {
    pub extract: ExtractConfig,
    pub ids: IdsConfig,
    pub output: OutputConfig,
}

/// Which headings are collected from a document.
#[derive(Debug, Clone, Deserialize)]
pub struct ExtractConfig {
    pub min_level: usize,
    pub max_level: usize,
    pub exclude_classes: Vec<String>,
    pub exclude_ids: Vec<String>,
    pub scope: Vec<String>,
}

impl ExtractConfig {
    /// Resolve into extraction options, parsing the scope selectors.
    pub fn to_options(&self) -> Result<ExtractOptions, FormatError> {
        let scope = self
            .scope
            .iter()
            .map(|raw| raw.parse::<Selector>())
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ExtractOptions {
            min_level: self.min_level,
            max_level: self.max_level,
            exclude_classes: self.exclude_classes.clone(),
            exclude_ids: self.exclude_ids.clone(),
            scope,
        })
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdsConfig {
    pub fallback_prefix: String,
}

impl IdsConfig {
    pub fn builder(&self) -> OutlineBuilder {
        OutlineBuilder::new().with_fallback_prefix(self.fallback_prefix.as_str())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: String,
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TocConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TocConfig, ConfigError> {
    Loader::new().build()
}
