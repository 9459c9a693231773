//! Optional TOML configuration
//!
//! ```toml
//! [bindings]
//! name = "World"
//!
//! [output]
//! color = true
//! trailing_newline = true
//! ```

use anyhow::{Context, Result};
use fstr::Bindings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Contents of `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Default bindings, lowest precedence
    pub bindings: Bindings,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Color error messages
    pub color: bool,
    /// Print a newline after the rendered template
    pub trailing_newline: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            trailing_newline: true,
        }
    }
}

/// Default location: `<config dir>/fstr/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("fstr").join("config.toml"))
}

impl Config {
    /// Parse a config document
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Invalid config file")
    }

    /// Load an explicitly requested config file, which must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("In config file: {}", path.display()))
    }

    /// Load the default config file, falling back to defaults when absent
    pub fn load_default() -> Result<Self> {
        match default_config_path() {
            Some(path) if path.exists() => {
                log::debug!("Loading config from {}", path.display());
                Self::load(&path)
            }
            Some(path) => {
                log::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            None => {
                log::warn!("Could not determine config directory, using defaults");
                Ok(Self::default())
            }
        }
    }
}
