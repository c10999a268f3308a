// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and
//! saving user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[demo]` - Demo animation settings (step period, auto-run, reveal threshold)
//! - `[effects]` - Decorative effect toggles
//!
//! # Examples
//!
//! ```no_run
//! use iced_stage::config::{self, Config};
//!
//! let mut config = config::load().unwrap_or_default();
//! config.general.language = Some("fr".to_string());
//! config::save(&config).expect("Failed to save config");
//! ```

use crate::error::Result;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedStage";

/// Default period between demo steps, in milliseconds.
pub const DEFAULT_STEP_MS: u64 = 500;

/// Default fraction of the demo section that must be visible before the
/// automatic first run fires.
pub const DEFAULT_REVEAL_THRESHOLD: f32 = 0.3;

/// General application settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,
}

/// Demo animation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DemoConfig {
    /// Period between animation steps, in milliseconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step_ms: Option<u64>,

    /// Whether the demo runs automatically the first time it scrolls into view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_run: Option<bool>,

    /// Visible fraction of a section required to count as "in view" (0–1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reveal_threshold: Option<f32>,
}

/// Decorative effect toggles.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EffectsConfig {
    /// Whether the hero particle field is rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub particles: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub demo: DemoConfig,
    #[serde(default)]
    pub effects: EffectsConfig,
}

impl Config {
    /// Step period as a `Duration`, falling back to the default.
    #[must_use]
    pub fn step_period(&self) -> Duration {
        Duration::from_millis(self.demo.step_ms.unwrap_or(DEFAULT_STEP_MS).max(1))
    }

    /// Reveal threshold clamped to the meaningful 0–1 range.
    #[must_use]
    pub fn reveal_threshold(&self) -> f32 {
        self.demo
            .reveal_threshold
            .unwrap_or(DEFAULT_REVEAL_THRESHOLD)
            .clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn auto_run(&self) -> bool {
        self.demo.auto_run.unwrap_or(true)
    }

    #[must_use]
    pub fn particles_enabled(&self) -> bool {
        self.effects.particles.unwrap_or(true)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    // A malformed file falls back to defaults rather than failing startup.
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Dark,
            },
            demo: DemoConfig {
                step_ms: Some(250),
                auto_run: Some(false),
                reveal_threshold: Some(0.5),
            },
            effects: EffectsConfig {
                particles: Some(false),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_returns_default_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let loaded = load_from_path(&config_path).expect("load should not error");
        assert!(loaded.general.language.is_none());
    }

    #[test]
    fn save_to_path_creates_parent_directories() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("deep").join("path").join("settings.toml");

        save_to_path(&Config::default(), &config_path).expect("save should create directories");
        assert!(config_path.exists());
    }

    #[test]
    fn defaults_match_demo_constants() {
        let config = Config::default();
        assert_eq!(config.step_period(), Duration::from_millis(DEFAULT_STEP_MS));
        assert_eq!(config.reveal_threshold(), DEFAULT_REVEAL_THRESHOLD);
        assert!(config.auto_run());
        assert!(config.particles_enabled());
    }

    #[test]
    fn reveal_threshold_is_clamped() {
        let config = Config {
            demo: DemoConfig {
                reveal_threshold: Some(4.2),
                ..DemoConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config.reveal_threshold(), 1.0);
    }

    #[test]
    fn zero_step_is_raised_to_one_millisecond() {
        let config = Config {
            demo: DemoConfig {
                step_ms: Some(0),
                ..DemoConfig::default()
            },
            ..Config::default()
        };
        assert_eq!(config.step_period(), Duration::from_millis(1));
    }

    #[test]
    fn partial_file_fills_missing_sections_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[demo]\nstep_ms = 100\n").expect("failed to write config");

        let loaded = load_from_path(&config_path).expect("failed to load config");
        assert_eq!(loaded.demo.step_ms, Some(100));
        assert_eq!(loaded.general.theme_mode, ThemeMode::System);
        assert!(loaded.particles_enabled());
    }
}
