//! User configuration loaded from `config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::calculator::NumberFormat;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Decimal places shown for every result.
    pub precision: usize,
    /// Group thousands with commas.
    pub thousands_separator: bool,
    /// Show the failure reason next to lines that do not evaluate.
    pub show_errors: bool,
    /// Text placed before every successful result.
    pub result_prefix: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: 2,
            thousands_separator: true,
            show_errors: true,
            result_prefix: "= ".to_string(),
        }
    }
}

impl Config {
    /// Load the configuration.
    ///
    /// An explicit `path` must exist. Without one, the default location is
    /// used if present, otherwise defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn number_format(&self) -> NumberFormat {
        NumberFormat {
            precision: self.precision,
            thousands_separator: self.thousands_separator,
        }
    }
}

/// `$XDG_CONFIG_HOME/linecalc/config.toml`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("linecalc").join("config.toml"))
}
