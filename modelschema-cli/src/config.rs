//! Configuration file loading for modelschema.
//!
//! Discovers and loads `modelschema.toml` from the working directory.
//! Merges config file settings with CLI arguments (CLI takes precedence).

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use fs_err as fs;
use serde::Deserialize;
use tracing::debug;

/// The config file name to search for.
pub const CONFIG_FILE_NAME: &str = "modelschema.toml";

/// Output format for rendered schemas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

/// Top-level configuration from modelschema.toml.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ModelschemaConfig {
    /// Output settings for `inspect`.
    pub output: OutputConfig,

    /// Settings for `check`.
    pub check: CheckConfig,
}

/// Output section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given.
    pub format: OutputFormat,
}

/// Check section of the config.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Stop at the first file that fails to load or build.
    pub fail_fast: bool,
}

/// Discover the modelschema.toml config file.
///
/// Returns `None` if no config file is found in `dir`.
pub fn discover_config(dir: &Utf8Path) -> Option<Utf8PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        debug!("found config file at {}", config_path);
        Some(config_path)
    } else {
        debug!("no config file found at {}", config_path);
        None
    }
}

/// Load and parse a modelschema.toml config file.
pub fn load_config(path: &Utf8Path) -> anyhow::Result<ModelschemaConfig> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("read config file {}", path))?;
    parse_config(&contents).with_context(|| format!("parse config file {}", path))
}

/// Parse a config file from a string.
pub fn parse_config(contents: &str) -> anyhow::Result<ModelschemaConfig> {
    let config: ModelschemaConfig = toml::from_str(contents).context("invalid TOML")?;
    Ok(config)
}

/// Load the explicit config file if given, else discover one in `dir`, else defaults.
pub fn load_or_default(
    explicit: Option<&Utf8Path>,
    dir: &Utf8Path,
) -> anyhow::Result<ModelschemaConfig> {
    if let Some(path) = explicit {
        return load_config(path);
    }
    match discover_config(dir) {
        Some(path) => load_config(&path),
        None => Ok(ModelschemaConfig::default()),
    }
}

/// Merged configuration combining config file and CLI arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedConfig {
    pub format: OutputFormat,
    pub fail_fast: bool,
}

/// Builder for merging config file with CLI arguments.
pub struct ConfigMerger {
    config: ModelschemaConfig,
}

impl ConfigMerger {
    pub fn new(config: ModelschemaConfig) -> Self {
        Self { config }
    }

    /// Merge with inspect command CLI arguments.
    ///
    /// An explicit `--format` replaces the configured format.
    pub fn merge_inspect_args(self, cli_format: Option<OutputFormat>) -> MergedConfig {
        MergedConfig {
            format: cli_format.unwrap_or(self.config.output.format),
            fail_fast: self.config.check.fail_fast,
        }
    }

    /// Merge with check command CLI arguments.
    ///
    /// `--fail-fast` can only turn fail-fast on.
    pub fn merge_check_args(self, cli_fail_fast: bool) -> MergedConfig {
        MergedConfig {
            format: self.config.output.format,
            fail_fast: cli_fail_fast || self.config.check.fail_fast,
        }
    }
}
