//! Shared configuration loader for sortlines.
//!
//! `defaults/sortlines.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`SortLinesConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/sortlines.default.toml");

/// Top-level configuration consumed by sortlines hosts.
#[derive(Debug, Clone, Deserialize)]
pub struct SortLinesConfig {
    pub pipeline: PipelineConfig,
    pub selection: SelectionConfig,
    #[serde(default)]
    pub shuffle: ShuffleConfig,
}

/// Knobs read by the pipeline executor before any transformer runs.
#[derive(Debug, Clone, Deserialize)]
pub struct PipelineConfig {
    pub filter_blank_lines: bool,
}

/// How a host turns an editor selection into the block of lines to transform.
#[derive(Debug, Clone, Deserialize)]
pub struct SelectionConfig {
    pub sort_entire_file: bool,
    pub ignore_unselected_last_line: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShuffleConfig {
    #[serde(default)]
    pub seed: Option<u64>,
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

    /// Apply a single key/value override (useful for CLI flags).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<SortLinesConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<SortLinesConfig, ConfigError> {
    Loader::new().build()
}
