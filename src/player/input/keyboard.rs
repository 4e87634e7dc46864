//! Keyboard input handling for the player.
//!
//! The player has exactly two controls: replay and quit.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::player::scheduler::AnimationScheduler;
use crate::player::state::InputResult;

/// Handle a keyboard event.
///
/// Replay keys are routed through the scheduler, which ignores them while
/// a run is active.
pub fn handle_key_event(key: KeyEvent, scheduler: &mut AnimationScheduler, now: Instant) -> InputResult {
    if key.kind == KeyEventKind::Release {
        return InputResult::Continue;
    }

    match key.code {
        // === Quit ===
        KeyCode::Char('q') | KeyCode::Esc => InputResult::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputResult::Quit,

        // === Replay ===
        KeyCode::Char('r') | KeyCode::Char(' ') | KeyCode::Enter => {
            match scheduler.request_replay(now) {
                Some(_) => InputResult::Replay,
                None => InputResult::Continue,
            }
        }

        _ => InputResult::Continue,
    }
}
