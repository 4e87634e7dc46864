//! Time-driven progress for one playback.
//!
//! The scheduler is cooperative: the host calls [`AnimationScheduler::tick`]
//! whenever it can draw, and the scheduler answers with the progress to draw
//! at, or `None` once the run is finished or was superseded. Each run is
//! identified by a [`RunHandle`]; starting a new run invalidates every older
//! handle, so a stale loop can never draw after a restart.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use super::state::AnimationState;

/// Length of a full play animation.
pub const PLAY_DURATION: Duration = Duration::from_millis(3000);

/// Token identifying one run of the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunHandle {
    generation: u64,
}

impl RunHandle {
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Drives `AnimationState` from 0 to 1 over a fixed duration.
#[derive(Debug)]
pub struct AnimationScheduler {
    duration: Duration,
    state: AnimationState,
    started_at: Option<Instant>,
    generation: u64,
    /// Progress of the last frame handed out in the current run
    last_frame: Option<f64>,
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::with_duration(PLAY_DURATION)
    }

    pub fn with_duration(duration: Duration) -> Self {
        Self {
            duration,
            state: AnimationState::new(),
            started_at: None,
            generation: 0,
            last_frame: None,
        }
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn state(&self) -> AnimationState {
        self.state
    }

    pub fn progress(&self) -> f64 {
        self.state.progress
    }

    pub fn is_playing(&self) -> bool {
        self.state.is_playing
    }

    /// Handle of the active run, if one is playing.
    pub fn current_run(&self) -> Option<RunHandle> {
        self.is_playing().then_some(RunHandle {
            generation: self.generation,
        })
    }

    /// Whether `run` is the active run and has frames left to produce.
    pub fn is_live(&self, run: RunHandle) -> bool {
        run.generation == self.generation && self.state.is_playing
    }

    /// Replay request from the user-facing control.
    ///
    /// Ignored while a run is active; otherwise starts a fresh run.
    pub fn request_replay(&mut self, now: Instant) -> Option<RunHandle> {
        if !self.state.can_replay() {
            debug!("replay requested while playing; ignored");
            return None;
        }
        Some(self.start(now))
    }

    /// Start a new run from progress 0, superseding any active run.
    pub fn start(&mut self, now: Instant) -> RunHandle {
        self.generation = self.generation.wrapping_add(1);
        self.started_at = Some(now);
        self.last_frame = None;
        self.state.restart();
        info!(
            generation = self.generation,
            duration_ms = self.duration.as_millis() as u64,
            "animation run started"
        );
        RunHandle {
            generation: self.generation,
        }
    }

    /// Stop the active run without completing it.
    pub fn cancel(&mut self) {
        if self.state.is_playing {
            debug!(generation = self.generation, "animation run cancelled");
        }
        self.generation = self.generation.wrapping_add(1);
        self.state.is_playing = false;
        self.started_at = None;
        self.last_frame = None;
    }

    /// Advance `run` to wall-clock `now`.
    ///
    /// Returns the progress of the frame to draw, or `None` when `run` is
    /// stale or already finished. Frames of a run strictly increase: a clock
    /// reading that would not move past the last frame yields `None` but
    /// leaves the run live (see [`is_live`](Self::is_live)). The frame that
    /// reaches 1 is returned; no frame follows it.
    pub fn tick(&mut self, run: RunHandle, now: Instant) -> Option<f64> {
        if run.generation != self.generation {
            debug!(stale = run.generation, current = self.generation, "dropping frame from stale run");
            return None;
        }
        if !self.state.is_playing {
            return None;
        }
        let started_at = self.started_at?;

        let t = if self.duration.is_zero() {
            1.0
        } else {
            let elapsed = now.saturating_duration_since(started_at);
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };

        if self.last_frame.is_some_and(|last| t <= last) {
            return None;
        }

        let progress = self.state.advance(t);
        self.last_frame = Some(progress);
        if !self.state.is_playing {
            info!(generation = self.generation, "animation run complete");
        }
        Some(progress)
    }

    /// Tick `run` at each instant `next_now` yields until the run ends,
    /// handing every frame's progress to `on_frame`. Instants that produce
    /// no new frame are skipped, so the clock must eventually advance.
    ///
    /// Returns the number of frames produced.
    pub fn drive<N, F>(&mut self, run: RunHandle, mut next_now: N, mut on_frame: F) -> usize
    where
        N: FnMut() -> Option<Instant>,
        F: FnMut(f64),
    {
        let mut frames = 0;
        while let Some(now) = next_now() {
            if let Some(t) = self.tick(run, now) {
                on_frame(t);
                frames += 1;
            } else if !self.is_live(run) {
                break;
            }
        }
        frames
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn fresh_scheduler_is_idle() {
        let scheduler = AnimationScheduler::new();
        assert_eq!(scheduler.duration(), ms(3000));
        assert_eq!(scheduler.progress(), 0.0);
        assert!(!scheduler.is_playing());
        assert!(scheduler.current_run().is_none());
    }

    #[test]
    fn tick_computes_elapsed_fraction() {
        let t0 = Instant::now();
        let mut scheduler = AnimationScheduler::new();
        let run = scheduler.start(t0);

        assert_eq!(scheduler.tick(run, t0), Some(0.0));
        assert_eq!(scheduler.tick(run, t0 + ms(1500)), Some(0.5));
        assert!(scheduler.is_playing());
        assert_eq!(scheduler.tick(run, t0 + ms(3000)), Some(1.0));
        assert!(!scheduler.is_playing());
    }

    #[test]
    fn no_frames_after_completion() {
        let t0 = Instant::now();
        let mut scheduler = AnimationScheduler::new();
        let run = scheduler.start(t0);

        assert_eq!(scheduler.tick(run, t0 + ms(5000)), Some(1.0));
        assert_eq!(scheduler.tick(run, t0 + ms(5016)), None);
        assert_eq!(scheduler.progress(), 1.0);
    }

    #[test]
    fn progress_never_decreases() {
        let t0 = Instant::now();
        let mut scheduler = AnimationScheduler::new();
        let run = scheduler.start(t0);

        assert_eq!(scheduler.tick(run, t0 + ms(1500)), Some(0.5));
        // an earlier or repeated clock reading produces no frame
        assert_eq!(scheduler.tick(run, t0 + ms(300)), None);
        assert_eq!(scheduler.tick(run, t0 + ms(1500)), None);
        assert_eq!(scheduler.progress(), 0.5);

        // but the run stays live and resumes once the clock moves on
        assert!(scheduler.is_live(run));
        assert_eq!(scheduler.tick(run, t0 + ms(2250)), Some(0.75));
    }

    #[test]
    fn first_frame_of_a_run_is_always_emitted() {
        let t0 = Instant::now();
        let mut scheduler = AnimationScheduler::new();
        let first = scheduler.start(t0);
        assert_eq!(scheduler.tick(first, t0 + ms(1500)), Some(0.5));

        let second = scheduler.start(t0 + ms(1500));
        assert_eq!(scheduler.tick(second, t0 + ms(1500)), Some(0.0));
        assert_eq!(scheduler.tick(second, t0 + ms(1500)), None);
    }

    #[test]
    fn clock_before_start_saturates_to_zero() {
        let t0 = Instant::now() + ms(1000);
        let mut scheduler = AnimationScheduler::new();
        let run = scheduler.start(t0);
        assert_eq!(scheduler.tick(run, t0 - ms(500)), Some(0.0));
    }

    #[test]
    fn zero_duration_completes_on_first_tick() {
        let t0 = Instant::now();
        let mut scheduler = AnimationScheduler::with_duration(Duration::ZERO);
        let run = scheduler.start(t0);
        assert_eq!(scheduler.tick(run, t0), Some(1.0));
        assert!(!scheduler.is_playing());
    }

    #[test]
    fn duplicate_replay_while_playing_is_a_no_op() {
        let t0 = Instant::now();
        let mut scheduler = AnimationScheduler::new();

        let first = scheduler.request_replay(t0).expect("idle scheduler accepts replay");
        scheduler.tick(first, t0 + ms(600));
        assert!(scheduler.request_replay(t0 + ms(650)).is_none());

        // the original run is still the only live one and keeps its progress
        assert_eq!(scheduler.current_run(), Some(first));
        assert_eq!(scheduler.tick(first, t0 + ms(1500)), Some(0.5));
    }

    #[test]
    fn replay_after_completion_restarts_from_zero() {
        let t0 = Instant::now();
        let mut scheduler = AnimationScheduler::new();
        let first = scheduler.start(t0);
        scheduler.tick(first, t0 + ms(3000));

        let second = scheduler.request_replay(t0 + ms(4000)).unwrap();
        assert_ne!(first, second);
        assert_eq!(scheduler.progress(), 0.0);
        assert!(scheduler.is_playing());
        assert_eq!(scheduler.tick(second, t0 + ms(4000)), Some(0.0));
    }

    #[test]
    fn restart_invalidates_stale_loop() {
        let t0 = Instant::now();
        let mut scheduler = AnimationScheduler::new();
        let stale = scheduler.start(t0);
        scheduler.tick(stale, t0 + ms(1000));

        let fresh = scheduler.start(t0 + ms(1100));
        assert_eq!(scheduler.tick(stale, t0 + ms(1200)), None);
        assert!(scheduler.tick(fresh, t0 + ms(1200)).is_some());
    }

    #[test]
    fn cancel_stops_the_run() {
        let t0 = Instant::now();
        let mut scheduler = AnimationScheduler::new();
        let run = scheduler.start(t0);
        scheduler.cancel();

        assert!(!scheduler.is_playing());
        assert_eq!(scheduler.tick(run, t0 + ms(100)), None);
        assert!(scheduler.request_replay(t0 + ms(200)).is_some());
    }

    #[test]
    fn drive_emits_increasing_frames_until_done() {
        let t0 = Instant::now();
        let mut scheduler = AnimationScheduler::new();
        let run = scheduler.start(t0);

        let mut clock = (0..).map(|i| t0 + ms(i * 500));
        let mut seen = Vec::new();
        let frames = scheduler.drive(run, || clock.next(), |t| seen.push(t));

        assert_eq!(frames, 7);
        assert_eq!(seen.first(), Some(&0.0));
        assert_eq!(seen.last(), Some(&1.0));
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn drive_skips_repeated_clock_readings() {
        let t0 = Instant::now();
        let mut scheduler = AnimationScheduler::new();
        let run = scheduler.start(t0);

        // every reading arrives twice
        let mut clock = (0..).map(|i: u64| t0 + ms((i / 2) * 750));
        let mut seen = Vec::new();
        let frames = scheduler.drive(run, || clock.next(), |t| seen.push(t));

        assert_eq!(frames, 5);
        assert_eq!(seen, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert!(!scheduler.is_live(run));
    }

    #[test]
    fn stale_run_is_not_live() {
        let t0 = Instant::now();
        let mut scheduler = AnimationScheduler::new();
        let stale = scheduler.start(t0);
        let fresh = scheduler.start(t0);
        assert!(!scheduler.is_live(stale));
        assert!(scheduler.is_live(fresh));
    }
}
