//! Configuration loader plus strongly typed settings structures.
//!
//! Deserializes the TOML config, resolves the per-user data directory
//! (flag > `TALLY_DIR` env var > `~/.tally`), and extracts the embedded
//! default config on first run.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

// Embedded default configuration, extracted to the data directory on first run.
const DEFAULT_CONFIG: &str = include_str!("../defaults/config.toml");

/// Top-level configuration object.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
}

/// UI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Built-in theme name.
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Event poll interval in milliseconds.
    #[serde(default = "default_poll_ms")]
    pub poll_ms: u64,

    /// Capture mouse clicks for the buttons and the step field.
    #[serde(default = "default_mouse_enabled")]
    pub mouse_enabled: bool,

    /// Show the key-hint status line.
    #[serde(default = "default_show_status_bar")]
    pub show_status_bar: bool,

    /// Optional hex override for the high-threshold color.
    #[serde(default)]
    pub counter_high_color: Option<String>,

    /// Optional hex override for the low-threshold color.
    #[serde(default)]
    pub counter_low_color: Option<String>,
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_poll_ms() -> u64 {
    16
}

fn default_mouse_enabled() -> bool {
    true
}

fn default_show_status_bar() -> bool {
    true
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            poll_ms: default_poll_ms(),
            mouse_enabled: default_mouse_enabled(),
            show_status_bar: default_show_status_bar(),
            counter_high_color: None,
            counter_low_color: None,
        }
    }
}

impl Config {
    /// Resolve the data directory: explicit override, then the `TALLY_DIR`
    /// environment variable, then `~/.tally`.
    pub fn base_dir(override_dir: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(dir) = override_dir {
            return Ok(dir);
        }
        if let Ok(dir) = std::env::var("TALLY_DIR") {
            return Ok(PathBuf::from(dir));
        }
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".tally"))
    }

    /// Path of the config file within a data directory.
    pub fn config_path(base_dir: &Path) -> PathBuf {
        base_dir.join("config.toml")
    }

    /// Write the embedded default config on first run. Idempotent: only
    /// creates what is missing.
    fn extract_defaults(base_dir: &Path) -> Result<()> {
        fs::create_dir_all(base_dir)
            .context(format!("Failed to create data directory: {:?}", base_dir))?;

        let config_path = Self::config_path(base_dir);
        if !config_path.exists() {
            fs::write(&config_path, DEFAULT_CONFIG)
                .context(format!("Failed to write default config: {:?}", config_path))?;
            tracing::info!("Extracted default config to {:?}", config_path);
        }
        Ok(())
    }

    /// Load configuration.
    ///
    /// An explicit `--config` file is read as-is; otherwise the data
    /// directory is resolved, seeded with defaults on first run, and its
    /// `config.toml` is loaded.
    pub fn load(explicit: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<Self> {
        let config_path = match explicit {
            Some(path) => path,
            None => {
                let base_dir = Self::base_dir(data_dir)?;
                Self::extract_defaults(&base_dir)?;
                Self::config_path(&base_dir)
            }
        };

        let contents = fs::read_to_string(&config_path)
            .context(format!("Failed to read config file: {:?}", config_path))?;
        let config: Config = toml::from_str(&contents)
            .context(format!("Failed to parse config file: {:?}", config_path))?;

        tracing::debug!("Loaded config from {:?}", config_path);
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_defaults_parse_to_default_values() {
        let config: Config = toml::from_str(DEFAULT_CONFIG).expect("default config parses");
        assert_eq!(config.ui.theme, "dark");
        assert_eq!(config.ui.poll_ms, 16);
        assert!(config.ui.mouse_enabled);
        assert!(config.ui.show_status_bar);
        assert!(config.ui.counter_high_color.is_none());
        assert!(config.ui.counter_low_color.is_none());
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: Config = toml::from_str("[ui]\ntheme = \"light\"\n").unwrap();
        assert_eq!(config.ui.theme, "light");
        assert_eq!(config.ui.poll_ms, 16);
        assert!(config.ui.show_status_bar);
    }

    #[test]
    fn empty_config_is_valid() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.ui.theme, "dark");
    }

    #[test]
    fn explicit_dir_wins_base_dir_resolution() {
        let dir = Config::base_dir(Some(PathBuf::from("/tmp/tally-test"))).unwrap();
        assert_eq!(dir, PathBuf::from("/tmp/tally-test"));
    }

    #[test]
    fn threshold_overrides_parse() {
        let config: Config =
            toml::from_str("[ui]\ncounter_high_color = \"#00ff00\"\n").unwrap();
        assert_eq!(config.ui.counter_high_color.as_deref(), Some("#00ff00"));
    }
}
