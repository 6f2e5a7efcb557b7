//! Configuration file support
//!
//! Loads settings from ~/.yaml-colors.toml (or %USERPROFILE%\.yaml-colors.toml on Windows)
//!
//! Example:
//! ```text
//! # yaml-colors configuration
//! enabled = true
//! custom-colors = ["#e5c07b", "#c678dd", "#61afef"]
//! tab-size = 2
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ColorsError, Result};
use crate::palette::Palette;
use crate::syntax::parse_tab_size;

const CONFIG_FILE_NAME: &str = ".yaml-colors.toml";

/// Configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Whether colorizing is on
    pub enabled: bool,
    /// User palette as hex colors; see [`Palette::from_custom`]
    pub custom_colors: Vec<String>,
    /// Tab size to use when the host doesn't supply one
    #[serde(
        deserialize_with = "deserialize_tab_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub tab_size: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enabled: true,
            custom_colors: Vec::new(),
            tab_size: None,
        }
    }
}

/// Accept a number or a numeric string. Zero, negatives and anything
/// else mean unset.
fn deserialize_tab_size<'de, D>(deserializer: D) -> std::result::Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = toml::Value::deserialize(deserializer)?;
    let size = match value {
        toml::Value::Integer(n) => usize::try_from(n).unwrap_or(0),
        toml::Value::String(s) => parse_tab_size(&s),
        _ => 0,
    };
    Ok((size > 0).then_some(size))
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(CONFIG_FILE_NAME))
        }
    }

    /// Load configuration from the default path.
    ///
    /// A missing file gives the defaults. A file that can't be read or
    /// parsed also gives the defaults, with a warning.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            log::info!("No home directory, using default config");
            return Config::default();
        };

        if !path.exists() {
            log::debug!("No config file at {:?}, using defaults", path);
            return Config::default();
        }

        match Self::load_from(&path) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Ignoring config file {:?}: {}", path, e);
                Config::default()
            }
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        log::info!("Loading config from {:?}", path);
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse config file contents
    fn parse(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Save current configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().ok_or(ColorsError::NoConfigPath)?;
        self.save_to(&path)
    }

    /// Save current configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let body = toml::to_string(self)?;
        let contents = format!(
            "# yaml-colors configuration\n\
             # Generated automatically\n\n\
             {body}"
        );
        fs::write(path, contents)?;
        log::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Flip `enabled`, returning the new value
    pub fn toggle_enabled(&mut self) -> bool {
        self.enabled = !self.enabled;
        self.enabled
    }

    /// Palette for these settings
    pub fn palette(&self) -> Palette {
        Palette::from_custom(&self.custom_colors)
    }
}
