//! Data-driven game balance
//!
//! Every number that shapes difficulty lives here so a page can override
//! it with a JSON blob without touching the simulation.

use serde::{Deserialize, Serialize};

/// Inward margin shaved off a hitbox before overlap testing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Inset {
    pub x: f32,
    pub y: f32,
}

impl Inset {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Balance values for one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Speed ===
    /// Scroll speed at session start (field units per frame)
    pub initial_speed: f32,
    /// Hard cap for scroll speed
    pub max_speed: f32,
    /// Speed added at each speed milestone
    pub speed_step: f32,
    /// Score multiple that raises speed and plays the score cue
    pub speed_milestone: u64,
    /// Score multiple that toggles day/night
    pub day_night_milestone: u64,

    // === Clock ===
    /// Score timer period
    pub score_period_ms: f64,
    /// Simulation frame period
    pub frame_period_ms: f64,
    /// Longest stretch of time a single `advance` will simulate
    pub max_catchup_ms: f64,

    // === Obstacles ===
    /// Spawn attempt cadence, in frames
    pub spawn_every_frames: u64,
    /// Minimum gap between spawns at zero speed
    pub base_gap: f32,
    /// Extra gap per unit of speed
    pub gap_factor: f32,
    /// Obstacles left of this x are dropped
    pub despawn_x: f32,
    /// Frames per wing phase for flying obstacles
    pub flap_period_frames: u64,

    // === Clouds ===
    pub cloud_count: usize,
    /// Clouds left of this x wrap back to the right edge
    pub cloud_wrap_x: f32,

    // === Player ===
    pub jump_duration_ms: f64,
    /// Peak height of the jump arc
    pub jump_height: f32,

    // === Hitboxes ===
    pub player_inset: Inset,
    pub obstacle_inset: Inset,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_speed: 6.0,
            max_speed: 13.0,
            speed_step: 0.5,
            speed_milestone: 100,
            day_night_milestone: 700,

            score_period_ms: 100.0,
            frame_period_ms: 1000.0 / 60.0,
            max_catchup_ms: 250.0,

            spawn_every_frames: 90,
            base_gap: 200.0,
            gap_factor: 10.0,
            despawn_x: -50.0,
            flap_period_frames: 10,

            cloud_count: 5,
            cloud_wrap_x: -60.0,

            jump_duration_ms: 500.0,
            jump_height: 100.0,

            player_inset: Inset::new(10.0, 10.0),
            obstacle_inset: Inset::new(10.0, 5.0),
        }
    }
}

/// Shortest tick period accepted from an override
pub const MIN_PERIOD_MS: f64 = 1.0;

/// Non-positive or NaN periods fall back to `default`; tiny ones are raised
/// to `MIN_PERIOD_MS`
fn sane_period(period_ms: f64, default: f64) -> f64 {
    if period_ms.is_nan() || period_ms <= 0.0 {
        default
    } else {
        period_ms.max(MIN_PERIOD_MS)
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON override, falling back to defaults
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Tuning>(json) {
            Ok(tuning) => tuning.validate(),
            Err(e) => {
                log::warn!("Ignoring invalid tuning override: {e}");
                Self::default()
            }
        }
    }

    /// Clamp values that would stall or break the simulation
    pub fn validate(mut self) -> Self {
        let defaults = Self::default();
        if self.initial_speed < 0.0 {
            self.initial_speed = defaults.initial_speed;
        }
        if self.max_speed < self.initial_speed {
            self.max_speed = self.initial_speed;
        }
        if self.speed_step < 0.0 {
            self.speed_step = 0.0;
        }
        if self.speed_milestone == 0 {
            self.speed_milestone = defaults.speed_milestone;
        }
        if self.day_night_milestone == 0 {
            self.day_night_milestone = defaults.day_night_milestone;
        }
        self.score_period_ms = sane_period(self.score_period_ms, defaults.score_period_ms);
        self.frame_period_ms = sane_period(self.frame_period_ms, defaults.frame_period_ms);
        if self.max_catchup_ms < self.frame_period_ms {
            self.max_catchup_ms = self.frame_period_ms;
        }
        if self.spawn_every_frames == 0 {
            self.spawn_every_frames = defaults.spawn_every_frames;
        }
        if self.flap_period_frames == 0 {
            self.flap_period_frames = defaults.flap_period_frames;
        }
        self
    }

    /// Minimum distance from the right edge the newest obstacle must have
    /// travelled before another may spawn
    pub fn min_gap(&self, speed: f32) -> f32 {
        self.base_gap + speed * self.gap_factor
    }

    /// Load a tuning override embedded in the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let json = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("tuning"))
            .and_then(|el| el.text_content());

        match json {
            Some(json) if !json.trim().is_empty() => {
                log::info!("Loaded tuning override from page");
                Self::from_json(&json)
            }
            _ => Self::default(),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
