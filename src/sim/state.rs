//! Game state and core simulation types
//!
//! Everything one run needs lives in `GameState`; each simulation phase
//! borrows it mutably and nothing else is shared.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::collision::Rect;
use crate::best_score::BestScore;
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Never started, start banner showing
    Idle,
    /// Active gameplay, clock running
    Playing,
    /// Run ended, everything frozen
    GameOver,
}

/// Something the platform layer may want to react to (audio, storage)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Player left the ground
    Jump,
    /// Score hit a speed milestone
    ScoreMilestone { score: u64 },
    /// Day/night flipped
    DayNightToggled { is_day: bool },
    /// Player hit an obstacle
    GameOver { score: u64 },
    /// Final score beat the stored best and must be persisted
    NewBest { score: u64 },
}

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    CactusSmall,
    CactusLarge,
    CactusDouble,
    /// Flies above a standing player's head
    PterodactylHigh,
    /// Flies at head height, must be ducked or jumped
    PterodactylLow,
}

impl ObstacleKind {
    /// Spawn table, drawn from uniformly
    pub const ALL: [ObstacleKind; 5] = [
        ObstacleKind::CactusSmall,
        ObstacleKind::CactusLarge,
        ObstacleKind::CactusDouble,
        ObstacleKind::PterodactylHigh,
        ObstacleKind::PterodactylLow,
    ];

    /// Width and height in field units
    pub fn size(self) -> (f32, f32) {
        match self {
            ObstacleKind::CactusSmall => (17.0, 35.0),
            ObstacleKind::CactusLarge => (25.0, 50.0),
            ObstacleKind::CactusDouble => (35.0, 50.0),
            ObstacleKind::PterodactylHigh | ObstacleKind::PterodactylLow => (46.0, 40.0),
        }
    }

    /// Height of the bottom edge above the ground
    pub fn altitude(self) -> f32 {
        match self {
            ObstacleKind::PterodactylHigh => 50.0,
            ObstacleKind::PterodactylLow => 20.0,
            _ => 0.0,
        }
    }

    pub fn is_flying(self) -> bool {
        matches!(
            self,
            ObstacleKind::PterodactylHigh | ObstacleKind::PterodactylLow
        )
    }

    /// Can be avoided by ducking
    pub fn is_duckable(self) -> bool {
        self == ObstacleKind::PterodactylLow
    }

    /// Drawn with two arms
    pub fn has_arms(self) -> bool {
        matches!(self, ObstacleKind::CactusLarge | ObstacleKind::CactusDouble)
    }
}

/// An obstacle entity
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Creation order
    pub id: u32,
    pub kind: ObstacleKind,
    pub width: f32,
    pub height: f32,
    /// Left edge, field units
    pub x: f32,
    /// Flight altitude (0 for ground obstacles)
    pub altitude: f32,
    pub duckable: bool,
}

impl Obstacle {
    pub fn new(id: u32, kind: ObstacleKind, x: f32) -> Self {
        let (width, height) = kind.size();
        Self {
            id,
            kind,
            width,
            height,
            x,
            altitude: kind.altitude(),
            duckable: kind.is_duckable(),
        }
    }

    pub fn is_flying(&self) -> bool {
        self.kind.is_flying()
    }

    /// Top edge, field units (y grows downward)
    pub fn top(&self) -> f32 {
        GROUND_Y - self.height - self.altitude
    }

    /// On-screen rectangle before any hitbox inset
    pub fn bounds(&self) -> Rect {
        Rect::from_xywh(self.x, self.top(), self.width, self.height)
    }

    /// Wing phase (0 or 1) for a flying obstacle
    pub fn wing_phase(frame: u64, period: u64) -> u8 {
        ((frame / period.max(1)) % 2) as u8
    }
}

/// Decorative cloud, no gameplay effect
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub pos: Vec2,
    pub speed: f32,
}

impl Cloud {
    /// Drift left, wrapping back to the right edge past `wrap_x`
    pub fn drift(&mut self, wrap_x: f32) {
        self.pos.x -= self.speed;
        if self.pos.x < wrap_x {
            self.pos.x = FIELD_WIDTH;
        }
    }
}

/// Player locomotion state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Posture {
    Running,
    /// Airborne from `started_ms` until `until_ms` (session clock)
    Jumping { started_ms: f64, until_ms: f64 },
    Ducking,
}

/// The player character
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub posture: Posture,
    /// Duck input is held down (it may be waiting for a landing)
    pub duck_held: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            posture: Posture::Running,
            duck_held: false,
        }
    }
}

impl Player {
    /// Land if the jump has run its course, straight into a duck if the
    /// duck input is still held
    pub fn settle(&mut self, now_ms: f64) {
        if let Posture::Jumping { until_ms, .. } = self.posture {
            if now_ms >= until_ms {
                self.posture = if self.duck_held {
                    Posture::Ducking
                } else {
                    Posture::Running
                };
            }
        }
    }

    pub fn is_jumping(&self) -> bool {
        matches!(self.posture, Posture::Jumping { .. })
    }

    pub fn is_ducking(&self) -> bool {
        self.posture == Posture::Ducking
    }

    /// Start a jump. Ignored while already airborne or ducking.
    pub fn try_jump(&mut self, now_ms: f64, duration_ms: f64) -> bool {
        self.settle(now_ms);
        if self.posture != Posture::Running {
            return false;
        }
        self.posture = Posture::Jumping {
            started_ms: now_ms,
            until_ms: now_ms + duration_ms,
        };
        true
    }

    /// Hold the duck input. Ducks now if grounded, otherwise on landing.
    /// Returns whether the player is ducking now.
    pub fn start_duck(&mut self, now_ms: f64) -> bool {
        self.duck_held = true;
        self.settle(now_ms);
        if self.is_jumping() {
            return false;
        }
        self.posture = Posture::Ducking;
        true
    }

    /// Release the duck input
    pub fn stop_duck(&mut self) {
        self.duck_held = false;
        if self.is_ducking() {
            self.posture = Posture::Running;
        }
    }

    /// Height above the ground at `now_ms` (parabolic arc)
    pub fn lift(&self, now_ms: f64, jump_height: f32) -> f32 {
        match self.posture {
            Posture::Jumping {
                started_ms,
                until_ms,
            } => {
                let span = (until_ms - started_ms).max(f64::EPSILON);
                let t = ((now_ms - started_ms) / span).clamp(0.0, 1.0) as f32;
                4.0 * jump_height * t * (1.0 - t)
            }
            _ => 0.0,
        }
    }

    /// On-screen rectangle at `now_ms`, before any hitbox inset
    pub fn bounds(&self, now_ms: f64, jump_height: f32) -> Rect {
        let (w, h) = if self.is_ducking() {
            (PLAYER_DUCK_WIDTH, PLAYER_DUCK_HEIGHT)
        } else {
            (PLAYER_WIDTH, PLAYER_HEIGHT)
        };
        let top = GROUND_Y - h - self.lift(now_ms, jump_height);
        Rect::from_xywh(PLAYER_X, top, w, h)
    }
}

/// Complete state of one game (shared by every simulation phase)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Obstacle and cloud RNG
    pub rng: Pcg32,
    /// Balance values
    pub tuning: Tuning,
    /// Current phase
    pub phase: GamePhase,
    /// Score of the current (or just-ended) session
    pub score: u64,
    /// Best score across sessions
    pub best: BestScore,
    /// Scroll speed, field units per frame
    pub speed: f32,
    pub is_day: bool,
    /// Frames simulated this session
    pub frame: u64,
    /// Session clock time of the tick being processed
    pub time_ms: f64,
    pub player: Player,
    /// Active obstacles, oldest first
    pub obstacles: Vec<Obstacle>,
    pub clouds: Vec<Cloud>,
    /// Events since the platform last drained them
    pub events: Vec<GameEvent>,
    /// Score value whose milestone effects were already applied
    pub(crate) effects_applied_for: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create an idle game with the given seed
    pub fn new(seed: u64, tuning: Tuning, best: BestScore) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            speed: tuning.initial_speed,
            tuning,
            phase: GamePhase::Idle,
            score: 0,
            best,
            is_day: true,
            frame: 0,
            time_ms: 0.0,
            player: Player::default(),
            obstacles: Vec::new(),
            clouds: Vec::new(),
            events: Vec::new(),
            effects_applied_for: 0,
            next_id: 1,
        };
        state.scatter_clouds();
        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Reset per-session values for a fresh run. Best score and the
    /// day/night mode carry over.
    pub fn reset_session(&mut self) {
        self.score = 0;
        self.speed = self.tuning.initial_speed;
        self.frame = 0;
        self.player = Player::default();
        self.obstacles.clear();
        self.effects_applied_for = 0;
        self.scatter_clouds();
    }

    /// Place clouds at random positions across the sky
    pub fn scatter_clouds(&mut self) {
        let count = self.tuning.cloud_count;
        self.clouds.clear();
        for _ in 0..count {
            let x = self.rng.random::<f32>() * FIELD_WIDTH;
            let y = CLOUD_MIN_Y + self.rng.random::<f32>() * CLOUD_Y_RANGE;
            let speed = CLOUD_MIN_SPEED + self.rng.random::<f32>() * CLOUD_SPEED_RANGE;
            self.clouds.push(Cloud {
                pos: Vec2::new(x, y),
                speed,
            });
        }
    }

    /// Most recently spawned obstacle
    pub fn newest_obstacle(&self) -> Option<&Obstacle> {
        self.obstacles.last()
    }

    /// Player rectangle at the current tick
    pub fn player_bounds(&self) -> Rect {
        self.player.bounds(self.time_ms, self.tuning.jump_height)
    }

    /// Whether the leg animation runs (not while ducking or frozen)
    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Playing && !self.player.is_ducking()
    }

    /// Final score equals the (just updated) best and is nonzero
    pub fn is_new_record(&self) -> bool {
        self.phase == GamePhase::GameOver && self.score > 0 && self.score == self.best.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_obstacle_table() {
        for kind in ObstacleKind::ALL {
            let o = Obstacle::new(1, kind, FIELD_WIDTH);
            assert_eq!(o.is_flying(), o.altitude > 0.0);
            assert_eq!(o.duckable, kind == ObstacleKind::PterodactylLow);
            assert!((o.top() + o.height + o.altitude - GROUND_Y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_wing_phase_alternates() {
        assert_eq!(Obstacle::wing_phase(0, 10), 0);
        assert_eq!(Obstacle::wing_phase(9, 10), 0);
        assert_eq!(Obstacle::wing_phase(10, 10), 1);
        assert_eq!(Obstacle::wing_phase(20, 10), 0);
    }

    #[test]
    fn test_cloud_wraps() {
        let mut cloud = Cloud {
            pos: Vec2::new(-59.5, 30.0),
            speed: 1.0,
        };
        cloud.drift(-60.0);
        assert_eq!(cloud.pos.x, FIELD_WIDTH);
        assert_eq!(cloud.pos.y, 30.0);
    }

    #[test]
    fn test_jump_lands_after_duration() {
        let mut player = Player::default();
        assert!(player.try_jump(1000.0, 500.0));
        assert!(!player.try_jump(1200.0, 500.0));
        assert!(player.lift(1250.0, 100.0) > 99.0);
        player.settle(1499.0);
        assert!(player.is_jumping());
        player.settle(1500.0);
        assert_eq!(player.posture, Posture::Running);
        assert!(player.try_jump(1500.0, 500.0));
    }

    #[test]
    fn test_duck_rules() {
        let mut player = Player::default();
        assert!(player.start_duck(0.0));
        // No jumping out of a duck
        assert!(!player.try_jump(10.0, 500.0));
        player.stop_duck();
        assert!(player.try_jump(20.0, 500.0));
        // No ducking mid-air
        assert!(!player.start_duck(30.0));
        assert!(player.is_jumping());
    }

    #[test]
    fn test_held_duck_applies_on_landing() {
        let mut player = Player::default();
        assert!(player.try_jump(0.0, 500.0));
        assert!(!player.start_duck(100.0));
        player.settle(499.0);
        assert!(player.is_jumping());
        player.settle(500.0);
        assert!(player.is_ducking());

        // Released mid-air: land running
        player.stop_duck();
        assert!(player.try_jump(600.0, 500.0));
        player.start_duck(700.0);
        player.stop_duck();
        player.settle(1100.0);
        assert_eq!(player.posture, Posture::Running);
    }

    #[test]
    fn test_ducking_lowers_bounds() {
        let mut player = Player::default();
        let standing = player.bounds(0.0, 100.0);
        player.start_duck(0.0);
        let ducking = player.bounds(0.0, 100.0);
        assert!(ducking.min.y > standing.min.y);
        assert_eq!(ducking.max.y, GROUND_Y);
        assert_eq!(standing.max.y, GROUND_Y);
    }

    #[test]
    fn test_reset_keeps_best_and_mode() {
        let mut state = GameState::new(7, Tuning::default(), BestScore::new(300));
        state.score = 420;
        state.speed = 9.0;
        state.frame = 1234;
        state.is_day = false;
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle::new(id, ObstacleKind::CactusSmall, 100.0));

        state.reset_session();
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, 6.0);
        assert_eq!(state.frame, 0);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.best.value, 300);
        assert!(!state.is_day);
        assert_eq!(state.clouds.len(), 5);
    }
}
