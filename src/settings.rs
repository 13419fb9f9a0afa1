//! User settings persistence.
//!
//! This module handles loading and saving user preferences across sessions:
//! where the data lives, which chart preset to use, and the initial view.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::dataset::DatasetPaths;
use crate::state::{MetricType, TickMode, TimeUnit, ViewState};
use crate::view::{FeatureFlags, Preset};

/// User settings that persist across sessions
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Settings file version for migration support
    #[serde(default = "default_version")]
    pub version: u32,
    /// Directory holding MaleTemp.csv, FemTemp.csv, MaleAct.csv and FemAct.csv
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Named feature preset
    #[serde(default)]
    pub preset: Preset,
    /// Explicit flags; overrides `preset` when present
    #[serde(default)]
    pub features: Option<FeatureFlags>,
    /// Use the colour-blind palette for categorical colours
    #[serde(default)]
    pub color_blind_mode: bool,
    /// Metric shown at startup
    #[serde(default)]
    pub metric: MetricType,
    /// Time unit at startup
    #[serde(default)]
    pub time_unit: TimeUnit,
    /// Tick mode at startup
    #[serde(default)]
    pub tick_mode: TickMode,
}

fn default_version() -> u32 {
    1
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            version: 1,
            data_dir: default_data_dir(),
            preset: Preset::default(),
            features: None,
            color_blind_mode: false,
            metric: MetricType::default(),
            time_unit: TimeUnit::default(),
            tick_mode: TickMode::default(),
        }
    }
}

impl AppSettings {
    /// Get the config directory path for circaview
    pub fn get_config_dir() -> Option<PathBuf> {
        #[cfg(any(target_os = "macos", target_os = "windows"))]
        {
            dirs::config_dir().map(|p| p.join("CircaView"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            dirs::config_dir().map(|p| p.join("circaview"))
        }
    }

    /// Get the path to the settings JSON file
    pub fn get_settings_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|p| p.join("settings.json"))
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        let path = match Self::get_settings_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_json(&content),
            Err(e) => {
                tracing::warn!("Failed to read settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse settings JSON; invalid content yields the defaults
    pub fn from_json(content: &str) -> Self {
        serde_json::from_str(content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring invalid settings file: {}", e);
            Self::default()
        })
    }

    /// Save settings to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::get_settings_path().context("Could not determine config directory")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = serde_json::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(&path, content).context("Failed to write settings file")?;

        Ok(())
    }

    /// Effective feature flags
    pub fn feature_flags(&self) -> FeatureFlags {
        self.features.unwrap_or_else(|| self.preset.flags())
    }

    pub fn dataset_paths(&self) -> DatasetPaths {
        DatasetPaths::from_dir(&self.data_dir)
    }

    /// View state shown on first draw
    pub fn initial_view_state(&self) -> ViewState {
        ViewState {
            metric: self.metric,
            time_unit: self.time_unit,
            tick_mode: self.tick_mode,
            ..ViewState::default()
        }
    }
}
