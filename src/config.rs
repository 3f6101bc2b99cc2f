//! Configuration loader/writer plus strongly typed settings structures.
//!
//! `config.toml` lives in the guide's base directory and is extracted from the
//! embedded default on first run. Every field has a serde default so partial
//! files still load.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Embed default configuration at compile time
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Environment variable overriding the base directory
pub const DIR_ENV_VAR: &str = "TIMEKEEPING_GUIDE_DIR";

/// Built-in theme names
pub const THEME_NAMES: [&str; 2] = ["dark", "light"];

/// Top-level configuration object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default = "default_theme_name")]
    pub active_theme: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_poll_timeout_ms")]
    pub poll_timeout_ms: u64, // Event poll timeout in milliseconds
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
    #[serde(default = "default_max_toasts")]
    pub max_toasts: usize,
    #[serde(default = "default_mouse_capture")]
    pub mouse_capture: bool,
    #[serde(default = "default_max_content_width")]
    pub max_content_width: u16,
}

fn default_theme_name() -> String {
    "dark".to_string()
}

fn default_poll_timeout_ms() -> u64 {
    16 // ~60 FPS
}

fn default_toast_duration_ms() -> u64 {
    3000
}

fn default_max_toasts() -> usize {
    3
}

fn default_mouse_capture() -> bool {
    true
}

fn default_max_content_width() -> u16 {
    120
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            poll_timeout_ms: default_poll_timeout_ms(),
            toast_duration_ms: default_toast_duration_ms(),
            max_toasts: default_max_toasts(),
            mouse_capture: default_mouse_capture(),
            max_content_width: default_max_content_width(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            active_theme: default_theme_name(),
        }
    }
}

impl Config {
    /// Load the config from the base directory, extracting defaults if missing
    pub fn load() -> Result<Self> {
        Self::extract_defaults()?;
        let path = Self::config_path()?;
        Self::load_from_path(&path)
    }

    /// Load config from a custom file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents =
            fs::read_to_string(path).context(format!("Failed to read config file: {:?}", path))?;
        let config =
            Self::parse(&contents).context(format!("Failed to parse config file: {:?}", path))?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Parse TOML text and normalize unknown values
    pub fn parse(contents: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(contents)?;
        config.normalize();
        Ok(config)
    }

    /// Config parsed from the embedded default file
    pub fn embedded_default() -> Result<Self> {
        Self::parse(DEFAULT_CONFIG).context("Embedded default config is invalid")
    }

    fn normalize(&mut self) {
        if !THEME_NAMES.contains(&self.active_theme.as_str()) {
            tracing::warn!(
                "Unknown theme '{}', falling back to 'dark'",
                self.active_theme
            );
            self.active_theme = default_theme_name();
        }
    }

    /// Override the active theme (e.g. from the command line)
    pub fn set_theme(&mut self, name: &str) {
        self.active_theme = name.to_string();
        self.normalize();
    }

    /// Write the embedded default config if none exists yet
    fn extract_defaults() -> Result<()> {
        let path = Self::config_path()?;
        if path.exists() {
            return Ok(());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .context(format!("Failed to create config directory: {:?}", parent))?;
        }
        fs::write(&path, DEFAULT_CONFIG)
            .context(format!("Failed to write default config: {:?}", path))?;
        tracing::info!("Extracted default config to {:?}", path);
        Ok(())
    }

    /// Get the base directory (~/.timekeeping-guide/)
    /// Can be overridden with TIMEKEEPING_GUIDE_DIR environment variable
    pub fn base_dir() -> Result<PathBuf> {
        if let Ok(custom_dir) = std::env::var(DIR_ENV_VAR) {
            return Ok(PathBuf::from(custom_dir));
        }

        let home = dirs::home_dir().context("Could not find home directory")?;
        Ok(home.join(".timekeeping-guide"))
    }

    /// Returns: ~/.timekeeping-guide/config.toml
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("config.toml"))
    }

    /// Returns: ~/.timekeeping-guide/timekeeping-guide.log
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::base_dir()?.join("timekeeping-guide.log"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_parses() {
        let config = Config::embedded_default().expect("default config parses");
        assert_eq!(config.active_theme, "dark");
        assert_eq!(config.ui.poll_timeout_ms, 16);
        assert_eq!(config.ui.toast_duration_ms, 3000);
        assert_eq!(config.ui.max_toasts, 3);
        assert!(config.ui.mouse_capture);
        assert_eq!(config.ui.max_content_width, 120);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::parse("[ui]\ntoast_duration_ms = 500\n").unwrap();
        assert_eq!(config.ui.toast_duration_ms, 500);
        assert_eq!(config.ui.max_toasts, 3);
        assert_eq!(config.active_theme, "dark");
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = Config::parse("").unwrap();
        assert_eq!(config.ui.poll_timeout_ms, UiConfig::default().poll_timeout_ms);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = Config::parse("active_theme = \"neon\"\n").unwrap();
        assert_eq!(config.active_theme, "dark");

        let mut config = Config::default();
        config.set_theme("light");
        assert_eq!(config.active_theme, "light");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(Config::parse("[ui\npoll_timeout_ms = ").is_err());
        assert!(Config::parse("[ui]\nmax_toasts = \"many\"\n").is_err());
    }

    #[test]
    fn test_config_serializes_back() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let reparsed = Config::parse(&text).unwrap();
        assert_eq!(reparsed.ui.max_content_width, config.ui.max_content_width);
    }
}
