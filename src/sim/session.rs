//! Session lifecycle
//!
//! `Session` owns the game state and the clock and is the only place phase
//! transitions happen: inputs start, restart, jump and duck; `advance` runs
//! the ticking tasks and stops them the moment the run ends.

use super::clock::{GameClock, TickKind};
use super::state::{GameEvent, GamePhase, GameState};
use super::tick::{tick_frame, tick_score};
use crate::best_score::BestScore;
use crate::tuning::Tuning;

/// Logical inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Space / ArrowUp / tap: start, or jump while playing
    PrimaryPressed,
    /// ArrowDown: restart after a game over, or duck while playing
    SecondaryPressed,
    /// ArrowDown released: stop ducking
    SecondaryReleased,
    /// Restart button
    Restart,
}

/// One game: state plus the tasks that drive it
#[derive(Debug, Clone)]
pub struct Session {
    pub state: GameState,
    clock: GameClock,
}

impl Session {
    pub fn new(seed: u64, tuning: Tuning, best: BestScore) -> Self {
        let tuning = tuning.validate();
        let clock = GameClock::new(&tuning);
        Self {
            state: GameState::new(seed, tuning, best),
            clock,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    pub fn clock(&self) -> &GameClock {
        &self.clock
    }

    /// Dispatch a logical input
    pub fn handle_input(&mut self, action: InputAction) {
        match action {
            InputAction::PrimaryPressed => self.press_primary(),
            InputAction::SecondaryPressed => self.press_secondary(),
            InputAction::SecondaryReleased => self.release_secondary(),
            InputAction::Restart => self.restart(),
        }
    }

    /// Start if idle or over, otherwise jump
    pub fn press_primary(&mut self) {
        match self.state.phase {
            GamePhase::Idle | GamePhase::GameOver => self.start(),
            GamePhase::Playing => self.jump(),
        }
    }

    /// Restart if over, duck while playing
    pub fn press_secondary(&mut self) {
        match self.state.phase {
            GamePhase::GameOver => self.restart(),
            GamePhase::Playing => {
                let now = self.clock.now_ms();
                self.state.player.start_duck(now);
            }
            GamePhase::Idle => {}
        }
    }

    pub fn release_secondary(&mut self) {
        self.state.player.stop_duck();
    }

    /// Fresh run after a game over. Ignored mid-run.
    pub fn restart(&mut self) {
        if self.state.phase != GamePhase::Playing {
            self.start();
        }
    }

    fn start(&mut self) {
        let restart = self.state.phase == GamePhase::GameOver;
        self.state.reset_session();
        self.state.phase = GamePhase::Playing;
        self.state.time_ms = self.clock.now_ms();
        self.clock.start();
        log::info!(
            "{} (best {})",
            if restart { "Session restarted" } else { "Session started" },
            self.state.best.value
        );
    }

    fn jump(&mut self) {
        let now = self.clock.now_ms();
        let duration = self.state.tuning.jump_duration_ms;
        if self.state.player.try_jump(now, duration) {
            self.state.events.push(GameEvent::Jump);
        }
    }

    /// Advance the session clock by `dt_ms`, running every due tick
    pub fn advance(&mut self, dt_ms: f64) {
        let state = &mut self.state;
        self.clock.advance(dt_ms, |kind, at| {
            state.time_ms = at;
            match kind {
                TickKind::Frame => tick_frame(state),
                TickKind::Score => tick_score(state),
            }
            state.phase == GamePhase::Playing
        });
        if self.state.phase == GamePhase::Playing {
            self.state.time_ms = self.clock.now_ms();
        }
    }

    /// Take the events produced since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }
}
