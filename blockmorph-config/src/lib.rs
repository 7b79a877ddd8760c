//! Shared configuration loader for the blockmorph toolchain.
//!
//! `defaults/blockmorph.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`BlockmorphConfig`].

use blockmorph_babel::rules::TransformRules;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/blockmorph.default.toml");

/// Top-level configuration consumed by blockmorph applications.
#[derive(Debug, Clone, Deserialize)]
pub struct BlockmorphConfig {
    pub transform: TransformRulesConfig,
    pub output: OutputConfig,
}

/// Mirrors the knobs exposed by [`TransformRules`].
#[derive(Debug, Clone, Deserialize)]
pub struct TransformRulesConfig {
    pub paragraph_tag: String,
    pub marker: MarkerConfig,
}

/// Shape of the citation-break marker element.
#[derive(Debug, Clone, Deserialize)]
pub struct MarkerConfig {
    pub tag: String,
    pub class_attribute: String,
    pub class: String,
}

impl From<TransformRulesConfig> for TransformRules {
    fn from(config: TransformRulesConfig) -> Self {
        TransformRules {
            marker_tag: config.marker.tag,
            marker_class_attribute: config.marker.class_attribute,
            marker_class: config.marker.class,
            paragraph_tag: config.paragraph_tag,
        }
    }
}

impl From<&TransformRulesConfig> for TransformRules {
    fn from(config: &TransformRulesConfig) -> Self {
        TransformRules {
            marker_tag: config.marker.tag.clone(),
            marker_class_attribute: config.marker.class_attribute.clone(),
            marker_class: config.marker.class.clone(),
            paragraph_tag: config.paragraph_tag.clone(),
        }
    }
}

/// Controls how converted blocks are written.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub pretty: bool,
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
    pub fn build(self) -> Result<BlockmorphConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<BlockmorphConfig, ConfigError> {
    Loader::new().build()
}
