use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rough::RoughOptions;

/// Environment variable the native binary reads the config path from.
pub const CONFIG_ENV_VAR: &str = "SKETCHBOARD_CONFIG";

/// Tunables for hit-testing, text layout and the hand-drawn style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing keys fall back to the defaults below
pub struct BoardConfig {
    /// Half-extent of the square hit box around each resize handle
    pub handle_size: f32,
    /// Max distance from a line segment that still counts as on the line
    pub line_tolerance: f32,
    pub font_size: f32,
    /// Height of one line of text, used for text bounding boxes
    pub text_height: f32,
    pub stroke_width: f32,
    /// Stay in the drawing tool after finishing a shape
    pub repeat_draw: bool,
    pub rough: RoughOptions,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            handle_size: 10.0,
            line_tolerance: 10.0,
            font_size: 15.0,
            text_height: 15.0,
            stroke_width: 1.5,
            repeat_draw: true,
            rough: RoughOptions::default(),
        }
    }
}

impl BoardConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded board config from {}", path.display());
        Ok(config)
    }

    /// Load from the path in [`CONFIG_ENV_VAR`], falling back to defaults.
    pub fn from_env() -> Self {
        let Ok(path) = std::env::var(CONFIG_ENV_VAR) else {
            return Self::default();
        };
        match Self::load(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Ignoring config {path}: {err}");
                Self::default()
            }
        }
    }

    pub fn tolerance(&self) -> crate::geometry::Tolerance {
        crate::geometry::Tolerance {
            handle_size: self.handle_size,
            line: self.line_tolerance,
        }
    }
}
