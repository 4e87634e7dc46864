//! playreel - animate the longest play from an NFL stats report
//!
//! A report returned by a stats query service is turned into a [`PlayEvent`]
//! (or a structured event is taken straight from the response envelope),
//! mapped onto a 120-yard field, and animated frame by frame on a terminal
//! canvas or exported as SVG.
//!
//! # Modules
//!
//! - [`event`]: the `PlayEvent` record
//! - [`extract`]: narrative extraction from report text
//! - [`envelope`]: query service responses and input loading
//! - [`field`]: field geometry and coordinate mapping
//! - [`player`]: scheduler, renderer and the terminal host loop
//! - [`tui`]: screen layout and themes
//! - [`config`], [`logging`], [`cli`]: ambient plumbing

pub mod cli;
pub mod config;
pub mod envelope;
pub mod event;
pub mod extract;
pub mod field;
pub mod logging;
pub mod player;
pub mod tui;

pub use config::Config;
pub use envelope::{EventSource, InputError, QueryEnvelope};
pub use event::{Direction, PlayEvent, PlayType};
pub use extract::{extract, is_longest_play_query, NarrativeExtractor};
