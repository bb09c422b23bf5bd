//! Runtime-tunable settings.
//!
//! The constants in [`crate::constants`] are defaults; embedders can
//! override them through a JSON settings file in the platform config
//! directory, or construct a [`Settings`] value directly. A missing or
//! malformed file falls back to the defaults with a logged warning - bad
//! configuration never prevents the canvas from starting.

use crate::constants::{
    DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH, ERASE_RADIUS, MAX_ZOOM, MIN_ZOOM,
    SCROLL_MULTIPLIER,
};
use crate::types::Color;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Errors from reading or writing the settings file.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Lower zoom clamp; must stay above zero so the transform matrix is
    /// always invertible
    pub min_zoom: f64,
    /// Upper zoom clamp
    pub max_zoom: f64,
    /// Zoom change per unit of raw wheel delta
    pub scroll_multiplier: f64,
    /// Eraser hit radius in canvas units
    pub erase_radius: f64,
    /// Default stroke width for new paths
    pub stroke_width: f64,
    /// Default stroke color for new paths
    pub stroke_color: Color,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_zoom: MIN_ZOOM,
            max_zoom: MAX_ZOOM,
            scroll_multiplier: SCROLL_MULTIPLIER,
            erase_radius: ERASE_RADIUS,
            stroke_width: DEFAULT_STROKE_WIDTH,
            stroke_color: Color::from(DEFAULT_STROKE_COLOR),
        }
    }
}

impl Settings {
    /// Location of the settings file in the platform config directory.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("sketchboard").join("settings.json"))
    }

    /// Loads settings from the default location, falling back to defaults
    /// when the file is missing or unreadable.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            warn!("no config directory available, using default settings");
            return Self::default();
        };
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(settings) => settings,
            Err(error) => {
                warn!(path = %path.display(), %error, "failed to load settings, using defaults");
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
