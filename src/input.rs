//! Keyboard mapping
//!
//! Turns browser key codes into session inputs. Kept free of DOM types so the
//! repeat rules can be tested natively.

use crate::sim::{GamePhase, InputAction};

/// What a key asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Game(InputAction),
    ToggleMute,
}

/// Keys whose browser default (scrolling) is suppressed
pub fn is_game_key(code: &str) -> bool {
    matches!(code, "Space" | "ArrowUp" | "ArrowDown")
}

/// Command for a keydown. Auto-repeats of the jump key keep jumping while
/// playing, so a held key re-jumps after each landing. Other repeats are
/// dropped: they would restart a finished run or toggle mute repeatedly.
pub fn key_down(code: &str, repeat: bool, phase: GamePhase) -> Option<KeyCommand> {
    match code {
        "Space" | "ArrowUp" if !repeat || phase == GamePhase::Playing => {
            Some(KeyCommand::Game(InputAction::PrimaryPressed))
        }
        "ArrowDown" if !repeat => Some(KeyCommand::Game(InputAction::SecondaryPressed)),
        "KeyM" if !repeat => Some(KeyCommand::ToggleMute),
        _ => None,
    }
}

/// Command for a keyup
pub fn key_up(code: &str) -> Option<KeyCommand> {
    (code == "ArrowDown").then_some(KeyCommand::Game(InputAction::SecondaryReleased))
}
