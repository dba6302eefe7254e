//! Game settings
//!
//! Read once at startup from an optional JSON file in the working directory.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::sim::Tuning;

/// Settings file looked up in the working directory
pub const SETTINGS_FILE: &str = "pong.json";

/// Errors reading a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Display ===
    /// Borderless fullscreen on the current monitor
    pub fullscreen: bool,
    /// Wait for vertical sync when presenting
    pub vsync: bool,
    /// Draw the score counters
    pub show_score: bool,

    // === Gameplay ===
    pub paddle_speed: f32,
    pub ball_speed_initial: f32,
    pub ball_speed_increase: f32,
    /// Fixed RNG seed (time-derived when absent)
    pub seed: Option<u64>,

    // === Colors (RGBA) ===
    pub clear_color: [f32; 4],
    pub paddle_color: [f32; 4],
    pub ball_color: [f32; 4],
    pub score_color: [f32; 4],
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fullscreen: true,
            vsync: true,
            show_score: true,

            paddle_speed: PADDLE_SPEED,
            ball_speed_initial: BALL_SPEED_INITIAL,
            ball_speed_increase: BALL_SPEED_INCREASE,
            seed: None,

            clear_color: [0.0, 0.0, 0.0, 1.0],
            paddle_color: [1.0, 1.0, 1.0, 1.0],
            ball_color: [1.0, 1.0, 1.0, 1.0],
            score_color: [0.6, 0.6, 0.6, 1.0],
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read settings from a file
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read settings from `path`, falling back to defaults.
    ///
    /// A missing file is normal; an unreadable or malformed one is logged.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No {} found, using default settings", path.display());
            return Self::default();
        }

        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Simulation speeds from these settings
    pub fn tuning(&self) -> Tuning {
        Tuning {
            paddle_speed: self.paddle_speed,
            ball_speed_initial: self.ball_speed_initial,
            ball_speed_increase: self.ball_speed_increase,
        }
    }

    /// Presentation mode for the swapchain
    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::AutoVsync
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}
