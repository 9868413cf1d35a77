//! Game settings with persistence
//!
//! Settings are read from the path given on the command line, otherwise from
//! `~/.config/alpha/settings.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use alpha_core::{TimeConfig, TimeConfigError};
use alpha_game::{MotionConfig, ProjectileConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

/// Settings that would stall or never finish the simulation loop
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("Invalid time settings: {0}")]
    Time(#[from] TimeConfigError),

    #[error("demo.{field} must be positive and finite, got {value}")]
    Demo { field: &'static str, value: f32 },
}

/// All game settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    pub motion: MotionConfig,
    pub time: TimeConfig,
    pub projectiles: ProjectileConfig,
    pub world: WorldSettings,
    pub demo: DemoSettings,
}

impl GameSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("alpha"))
    }

    /// Get the default settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from `path` (or the default location), falling back to
    /// defaults if the file is missing or malformed
    pub fn load(path: Option<&Path>) -> Self {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::settings_path() {
                Some(path) => path,
                None => {
                    warn!("Could not determine config directory");
                    return Self::default();
                }
            },
        };

        if !path.exists() {
            info!("No settings file found at {:?}, using defaults", path);
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(settings) => {
                    info!("Loaded settings from {:?}", path);
                    settings
                }
                Err(e) => {
                    warn!("Failed to parse settings: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Check the clock and demo settings. Motion and world settings are
    /// checked by the systems built from them.
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.time.validate()?;
        self.demo.validate()
    }

    /// Save settings to `path`
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}

/// Day/night settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldSettings {
    pub hours_per_day: u32,
    /// Real seconds per in-game day
    pub day_length_seconds: f32,
    pub start_hour: f32,
    /// Sun intensity for each hour; must have `hours_per_day` entries
    pub sun_intensities: Vec<f32>,
}

impl Default for WorldSettings {
    fn default() -> Self {
        Self {
            hours_per_day: 24,
            day_length_seconds: 240.0,
            start_hour: 6.0,
            sun_intensities: vec![
                0.05, 0.05, 0.05, 0.05, 0.1, 0.2, // 00-05
                0.4, 0.6, 0.8, 0.9, 1.0, 1.0, // 06-11
                1.0, 1.0, 1.0, 0.9, 0.8, 0.6, // 12-17
                0.4, 0.2, 0.1, 0.05, 0.05, 0.05, // 18-23
            ],
        }
    }
}

/// Headless demo run settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    /// Simulated seconds to run
    pub duration_seconds: f32,
    /// Real frame delta fed to the clock
    pub frame_delta: f32,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            duration_seconds: 8.0,
            frame_delta: 1.0 / 60.0,
        }
    }
}

impl DemoSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        let fields = [
            ("duration_seconds", self.duration_seconds),
            ("frame_delta", self.frame_delta),
        ];
        for (field, value) in fields {
            if !(value > 0.0) || !value.is_finite() {
                return Err(SettingsError::Demo { field, value });
            }
        }
        Ok(())
    }
}
