//! Input handling for the player.
//!
//! Dispatches terminal events to their handlers and returns control flow
//! signals to the main loop.

mod keyboard;

pub use keyboard::handle_key_event;

use std::time::Instant;

use crossterm::event::Event;

use crate::player::scheduler::AnimationScheduler;
use crate::player::state::InputResult;

/// Handle any input event, dispatching to the appropriate handler.
///
/// Resizes only need a redraw, which the loop does after every event.
pub fn handle_event(event: Event, scheduler: &mut AnimationScheduler, now: Instant) -> InputResult {
    match event {
        Event::Key(key) => handle_key_event(key, scheduler, now),
        _ => InputResult::Continue, // Ignore mouse, focus, paste and resize events
    }
}
