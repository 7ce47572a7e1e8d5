//! User configuration loaded from `config.toml`.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// How the displays are written to stdout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Equation line plus right-aligned value.
    #[default]
    Plain,
    /// One JSON object per render.
    Json,
}

/// Settings for the terminal front end.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub format: OutputFormat,
    pub show_equation: bool,
    /// Copy each successful result to the clipboard.
    pub copy_on_equals: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            show_equation: true,
            copy_on_equals: false,
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid configuration")
    }
}

/// Default location: `$XDG_CONFIG_HOME/keycalc/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("keycalc").join("config.toml"))
}

/// Load the configuration.
///
/// An explicit path must exist. The default path is optional and falls back
/// to [`Config::default`] when missing.
pub fn load(explicit: Option<&Path>) -> Result<Config> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match config_path() {
            Some(path) if path.exists() => path,
            _ => {
                tracing::debug!("No config file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file {}", path.display()))?;
    let config = Config::from_toml_str(&content)
        .with_context(|| format!("Failed to parse config file {}", path.display()))?;

    tracing::debug!(path = %path.display(), ?config, "Loaded config");
    Ok(config)
}
