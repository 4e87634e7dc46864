//! Player state management
//!
//! Contains the `AnimationState` owned by a single playback, as well as
//! shared types used across player modules.

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the main loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Continue normal playback/rendering
    Continue,
    /// A replay was requested and accepted
    Replay,
    /// Exit the player normally
    Quit,
}

/// Progress of one playback.
///
/// Created idle at progress 0. A replay request moves it to playing at
/// progress 0; ticks advance progress until it reaches 1, which ends the run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    /// Fraction of the play shown, in [0, 1]
    pub progress: f64,
    /// Whether a run is active
    pub is_playing: bool,
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationState {
    pub fn new() -> Self {
        Self {
            progress: 0.0,
            is_playing: false,
        }
    }

    /// Begin a run from the start.
    pub fn restart(&mut self) {
        self.progress = 0.0;
        self.is_playing = true;
    }

    /// Advance to `progress`, never moving backwards.
    ///
    /// Returns the progress actually stored. Reaching 1 ends the run.
    pub fn advance(&mut self, progress: f64) -> f64 {
        let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
        self.progress = self.progress.max(progress);
        if self.progress >= 1.0 {
            self.is_playing = false;
        }
        self.progress
    }

    /// Whether the replay control should accept a request.
    pub fn can_replay(&self) -> bool {
        !self.is_playing
    }

    /// Progress as a whole percentage for the indicator.
    pub fn percent(&self) -> u8 {
        (self.progress * 100.0).round().clamp(0.0, 100.0) as u8
    }
}
