//! Shared configuration loader for the tgmd toolchain.
//!
//! `defaults/tgmd.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files on top
//! of those defaults via [`Loader`] before deserializing into [`TgmdConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use tgmd_render::options::{MathOptions, TableOptions};
use tgmd_render::RenderOptions;

const DEFAULT_TOML: &str = include_str!("../defaults/tgmd.default.toml");

/// Top-level configuration consumed by tgmd applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TgmdConfig {
    pub render: RenderConfig,
}

/// Mirrors the knobs exposed by the MarkdownV2 renderer.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    pub indent_size: usize,
    pub headings: HeadingsConfig,
    pub table: TableConfig,
    pub math: MathConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HeadingsConfig {
    pub markers: Vec<String>,
    pub default_marker: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    pub min_column_width: usize,
    /// `0` disables truncation.
    pub max_column_width: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MathConfig {
    pub normalize_blocks: bool,
    pub min_detect_length: usize,
}

impl From<&RenderConfig> for RenderOptions {
    fn from(config: &RenderConfig) -> Self {
        RenderOptions {
            indent_size: config.indent_size,
            heading_markers: config.headings.markers.clone(),
            default_heading_marker: config.headings.default_marker.clone(),
            table: TableOptions {
                min_column_width: config.table.min_column_width,
                max_column_width: match config.table.max_column_width {
                    0 => None,
                    max => Some(max),
                },
            },
            math: MathOptions {
                normalize_blocks: config.math.normalize_blocks,
                min_detect_length: config.math.min_detect_length,
            },
        }
    }
}

impl From<RenderConfig> for RenderOptions {
    fn from(config: RenderConfig) -> Self {
        RenderOptions::from(&config)
    }
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
    pub fn build(self) -> Result<TgmdConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TgmdConfig, ConfigError> {
    Loader::new().build()
}
