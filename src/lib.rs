//! Dino Run - a side-scrolling desert runner
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, spawning, collisions, scoring)
//! - `renderer`: WebGPU rendering pipeline
//! - `tuning`: Data-driven game balance
//! - `settings`: Player preferences
//! - `best_score`: The single persisted best score
//! - `storage`: LocalStorage strings (empty off the web)
//! - `ui`: HUD projection of the game state
//! - `input`: Key codes to session inputs
//! - `audio`: Sound cues (Web Audio on wasm32)

pub mod audio;
pub mod best_score;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod storage;
pub mod tuning;
pub mod ui;

pub use best_score::BestScore;
pub use settings::Settings;
pub use tuning::Tuning;

/// Play field configuration constants
pub mod consts {
    /// Logical field size (the canvas is scaled to fit)
    pub const FIELD_WIDTH: f32 = 600.0;
    pub const FIELD_HEIGHT: f32 = 200.0;
    /// Ground line, in field units from the top (y grows downward)
    pub const GROUND_Y: f32 = FIELD_HEIGHT;

    /// Player box while standing or jumping
    pub const PLAYER_X: f32 = 50.0;
    pub const PLAYER_WIDTH: f32 = 44.0;
    pub const PLAYER_HEIGHT: f32 = 47.0;
    /// Player box while ducking (lower and longer)
    pub const PLAYER_DUCK_WIDTH: f32 = 59.0;
    pub const PLAYER_DUCK_HEIGHT: f32 = 26.0;

    /// Cloud vertical band and drift speed range
    pub const CLOUD_MIN_Y: f32 = 20.0;
    pub const CLOUD_Y_RANGE: f32 = 40.0;
    pub const CLOUD_MIN_SPEED: f32 = 0.5;
    pub const CLOUD_SPEED_RANGE: f32 = 0.5;
}

/// Zero-padded score text used by the HUD (`00042`)
#[inline]
pub fn pad_score(score: u64) -> String {
    format!("{score:05}")
}
