//! Game settings and preferences
//!
//! Persisted separately from the best score in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::storage;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Silence all cues
    pub muted: bool,

    // === HUD ===
    /// Show FPS counter
    pub show_fps: bool,

    // === Accessibility ===
    /// Reduced motion (no wing flapping, no drifting clouds)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            show_fps: false,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective cue volume (0 when muted)
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Whether wings should flap
    pub fn animate_wings(&self) -> bool {
        !self.reduced_motion
    }

    /// Whether decorative clouds are drawn
    pub fn draw_clouds(&self) -> bool {
        !self.reduced_motion
    }

    /// Flip mute. Returns the new state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }

    const STORAGE_KEY: &'static str = "dino_run_settings";

    /// Parse stored JSON, falling back to defaults
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|e| {
            log::warn!("Ignoring stored settings: {e}");
            Self::default()
        })
    }

    pub fn load() -> Self {
        match storage::read(Self::STORAGE_KEY) {
            Some(json) => Self::from_json(&json),
            None => Self::default(),
        }
    }

    pub fn save(&self) {
        let saved = serde_json::to_string(self)
            .map(|json| storage::write(Self::STORAGE_KEY, &json))
            .unwrap_or(false);
        if saved {
            log::debug!("Settings saved");
        }
    }
}
