//! Play animation module
//!
//! Animates a single `PlayEvent` on a 2D field.
//!
//! # Architecture
//!
//! The player is organized into submodules:
//! - `state`: `AnimationState` and shared types (`InputResult`)
//! - `scheduler`: time-driven progress with restart/cancel semantics
//! - `input/`: Keyboard handling for the replay and quit controls
//! - `render/`: Field, trajectory and progress drawing onto any `Surface`
//! - `native`: the terminal host loop
//!
//! # Usage
//!
//! ```no_run
//! use playreel::event::{PlayEvent, PlayType};
//! use playreel::player::{play_event, PlaybackResult, PlayerOptions};
//!
//! let event = PlayEvent::new(PlayType::Receiving, 75, true);
//! match play_event(&event, &PlayerOptions::default()).unwrap() {
//!     PlaybackResult::Finished => println!("Done"),
//!     PlaybackResult::Interrupted => println!("Stopped mid-play"),
//! }
//! ```

pub(crate) mod input;
mod native;
pub mod render;
pub mod scheduler;
pub mod state;

pub use native::{play_event, PlaybackResult, PlayerOptions};
pub use scheduler::{AnimationScheduler, RunHandle, PLAY_DURATION};
pub use state::{AnimationState, InputResult};
