//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Clock-driven ticks only (no wall clock reads)
//! - Seeded RNG only
//! - Stable iteration order (obstacles by creation ID)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod clock;
pub mod collision;
pub mod session;
pub mod spawn;
pub mod state;
pub mod tick;

pub use clock::{GameClock, TickKind, Ticker};
pub use collision::{Rect, first_collision, player_hits};
pub use session::{InputAction, Session};
pub use spawn::spawn_obstacle;
pub use state::{Cloud, GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, Player, Posture};
pub use tick::{apply_score_effects, tick_frame, tick_score};
