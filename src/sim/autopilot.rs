//! Demo autopilot
//!
//! Plays the game with simple look-ahead rules. Used by the headless native
//! build; the browser build never enables it.

use super::session::InputAction;
use super::state::{GamePhase, GameState};
use crate::consts::*;

/// Frames of lead before a ground obstacle reaches the player
const JUMP_LEAD_FRAMES: f32 = 8.0;
/// Frames of lead before a low flyer reaches the player
const DUCK_LEAD_FRAMES: f32 = 4.0;

/// Pick the input for this frame, if any
pub fn decide(state: &GameState) -> Option<InputAction> {
    if state.phase != GamePhase::Playing {
        return None;
    }

    let player = &state.player;
    let speed = state.speed;
    let ahead = state
        .obstacles
        .iter()
        .find(|o| o.x + o.width > PLAYER_X);

    match ahead {
        Some(o) if o.duckable && o.x < PLAYER_X + PLAYER_DUCK_WIDTH + DUCK_LEAD_FRAMES * speed => {
            (!player.is_ducking() && !player.is_jumping()).then_some(InputAction::SecondaryPressed)
        }
        Some(o)
            if !o.is_flying()
                && !player.is_ducking()
                && o.x < PLAYER_X + PLAYER_WIDTH - 10.0 + JUMP_LEAD_FRAMES * speed =>
        {
            (!player.is_jumping()).then_some(InputAction::PrimaryPressed)
        }
        _ => player.is_ducking().then_some(InputAction::SecondaryReleased),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::best_score::BestScore;
    use crate::sim::state::{Obstacle, ObstacleKind};
    use crate::tuning::Tuning;

    fn playing() -> GameState {
        let mut state = GameState::new(9, Tuning::default(), BestScore::default());
        state.phase = GamePhase::Playing;
        state
    }

    fn with(kind: ObstacleKind, x: f32) -> GameState {
        let mut state = playing();
        let id = state.next_entity_id();
        state.obstacles.push(Obstacle::new(id, kind, x));
        state
    }

    #[test]
    fn test_idle_field_no_input() {
        assert_eq!(decide(&playing()), None);
        let mut idle = playing();
        idle.phase = GamePhase::Idle;
        assert_eq!(decide(&idle), None);
    }

    #[test]
    fn test_jumps_near_cactus_only() {
        assert_eq!(decide(&with(ObstacleKind::CactusSmall, 500.0)), None);
        assert_eq!(
            decide(&with(ObstacleKind::CactusSmall, 110.0)),
            Some(InputAction::PrimaryPressed)
        );
    }

    #[test]
    fn test_ducks_low_flyer_and_ignores_high() {
        assert_eq!(
            decide(&with(ObstacleKind::PterodactylLow, 120.0)),
            Some(InputAction::SecondaryPressed)
        );
        assert_eq!(decide(&with(ObstacleKind::PterodactylHigh, 120.0)), None);
    }

    #[test]
    fn test_releases_duck_when_clear() {
        let mut state = playing();
        state.player.start_duck(0.0);
        assert_eq!(decide(&state), Some(InputAction::SecondaryReleased));
    }
}
