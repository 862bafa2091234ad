//! Shared configuration loader for mdview.
//!
//! `defaults/mdview.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`MdViewConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use mdview_render::{HtmlOptions, RenderOptions};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_TOML: &str = include_str!("../defaults/mdview.default.toml");

/// Top-level configuration consumed by mdview applications.
#[derive(Debug, Clone, Deserialize)]
pub struct MdViewConfig {
    pub render: RenderConfig,
    pub document: DocumentConfig,
    pub output: OutputConfig,
}

/// Line renderer knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub default_language: String,
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        RenderOptions {
            default_language: config.default_language.clone(),
        }
    }
}

/// Page skeleton knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct DocumentConfig {
    pub default_title: String,
    pub title_suffix: String,
    pub footer: String,
    pub timestamp_format: String,
    /// Path to a stylesheet appended after the built-in one.
    pub custom_css: Option<String>,
}

impl From<&DocumentConfig> for HtmlOptions {
    /// Carries the textual options only; `custom_css` is a path the caller reads.
    fn from(config: &DocumentConfig) -> Self {
        HtmlOptions {
            title_suffix: config.title_suffix.clone(),
            footer: config.footer.clone(),
            custom_css: None,
        }
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
    pub fn build(self) -> Result<MdViewConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<MdViewConfig, ConfigError> {
    Loader::new().build()
}
