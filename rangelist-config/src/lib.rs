//! Output and input settings for the `rangelist` binary.
//!
//! The baseline lives in `defaults/rangelist.default.toml` and is compiled in. A
//! [`Loader`] stacks a local `rangelist.toml`, an explicit `--config` file and flag
//! overrides on top of it, then deserializes the result into [`RangelistConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, File, FileFormat, ValueKind};
use rangelist_parser::range::{Format, RenderOptions};
use serde::Deserialize;
use std::path::Path;

pub use config::ConfigError;

const DEFAULT_TOML: &str = include_str!("../defaults/rangelist.default.toml");

/// Name of the optional per-directory configuration file.
pub const LOCAL_CONFIG_FILE: &str = "rangelist.toml";

/// Every setting, one table per concern.
#[derive(Debug, Clone, Deserialize)]
pub struct RangelistConfig {
    pub output: OutputConfig,
    pub expand: ExpandConfig,
    pub compress: CompressConfig,
}

/// `[output]`: format for interval and flat-list output.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Format,
    pub pretty: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpandConfig {
    pub separator: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CompressConfig {
    pub input_separators: String,
}

impl RangelistConfig {
    /// Separator and pretty-printing as `render` wants them.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            list_separator: self.expand.separator.clone(),
            pretty: self.output.pretty,
        }
    }
}

/// Layers configuration sources over the embedded defaults, later sources winning.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let defaults = File::from_str(DEFAULT_TOML, FileFormat::Toml);
        Self {
            builder: Config::builder().add_source(defaults),
        }
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let source = File::from(path)
            .format(FileFormat::Toml)
            .required(required);
        self.builder = self.builder.add_source(source);
        self
    }

    /// A TOML file that must exist; `build` fails otherwise.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// A TOML file that is skipped when absent, e.g. [`LOCAL_CONFIG_FILE`].
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Sets one dotted key, e.g. `output.pretty`.
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Forces `output.format`, whatever the files say.
    pub fn with_format(self, format: Format) -> Result<Self, ConfigError> {
        self.set_override("output.format", format.name())
    }

    pub fn build(self) -> Result<RangelistConfig, ConfigError> {
        let merged = self.builder.build()?;
        merged.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// The embedded defaults alone.
pub fn load_defaults() -> Result<RangelistConfig, ConfigError> {
    Loader::new().build()
}
