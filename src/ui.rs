//! HUD projection
//!
//! Turns the game state into the strings and visibility flags the page
//! shows. Kept free of DOM calls so it can be tested natively.

use crate::pad_score;
use crate::sim::{GamePhase, GameState};

/// Everything the HUD displays for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HudView {
    /// `00042`
    pub score: String,
    /// `00731`
    pub best: String,
    /// `Day` / `Night`
    pub mode: &'static str,
    /// `6.5x`
    pub speed: String,
    pub show_start: bool,
    pub show_game_over: bool,
    /// Final score on the game over banner
    pub final_score: String,
    pub new_record: bool,
    /// CSS class for the page theme
    pub theme_class: &'static str,
}

impl HudView {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: pad_score(state.score),
            best: pad_score(state.best.value),
            mode: if state.is_day { "Day" } else { "Night" },
            speed: format!("{:.1}x", state.speed),
            show_start: state.phase == GamePhase::Idle,
            show_game_over: state.phase == GamePhase::GameOver,
            final_score: state.score.to_string(),
            new_record: state.is_new_record(),
            theme_class: if state.is_day { "day" } else { "night" },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::best_score::BestScore;
    use crate::tuning::Tuning;

    fn state() -> GameState {
        GameState::new(1, Tuning::default(), BestScore::new(731))
    }

    #[test]
    fn test_idle_hud() {
        let hud = HudView::from_state(&state());
        assert_eq!(hud.score, "00000");
        assert_eq!(hud.best, "00731");
        assert_eq!(hud.mode, "Day");
        assert_eq!(hud.speed, "6.0x");
        assert!(hud.show_start);
        assert!(!hud.show_game_over);
        assert!(!hud.new_record);
    }

    #[test]
    fn test_game_over_hud() {
        let mut state = state();
        state.phase = GamePhase::GameOver;
        state.score = 42;
        state.speed = 6.5;
        state.is_day = false;
        let hud = HudView::from_state(&state);
        assert!(hud.show_game_over);
        assert!(!hud.show_start);
        assert_eq!(hud.final_score, "42");
        assert_eq!(hud.speed, "6.5x");
        assert_eq!(hud.mode, "Night");
        assert_eq!(hud.theme_class, "night");
        assert!(!hud.new_record);

        state.score = 731;
        assert!(HudView::from_state(&state).new_record);
    }

    #[test]
    fn test_zero_score_is_never_a_record() {
        let mut state = GameState::new(1, Tuning::default(), BestScore::default());
        state.phase = GamePhase::GameOver;
        assert!(!HudView::from_state(&state).new_record);
    }
}
