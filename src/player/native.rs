//! Terminal player for a single play.
//!
//! Owns the terminal for the duration of playback: raw mode, alternate
//! screen and hidden cursor, all restored on every exit path.

use std::io::{self, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event as term_event,
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use crate::event::PlayEvent;
use crate::logging;
use crate::tui::{render_player, PlayerView, Theme};

use super::input::handle_event;
use super::scheduler::{AnimationScheduler, RunHandle};
use super::state::InputResult;

/// Settings for one player session.
#[derive(Debug, Clone)]
pub struct PlayerOptions {
    /// Delay between frames while a run is active
    pub frame_interval: Duration,
    /// Issue one replay request when the player opens
    pub autoplay: bool,
    pub theme: Theme,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            frame_interval: Duration::from_millis(16),
            autoplay: true,
            theme: Theme::default(),
        }
    }
}

/// How the player session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackResult {
    /// The user quit with no run in progress
    Finished,
    /// The user quit while a run was still playing
    Interrupted,
}

/// Restores the terminal when dropped.
struct TerminalGuard;

impl TerminalGuard {
    fn enter(stdout: &mut Stdout) -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = TerminalGuard;
        execute!(stdout, EnterAlternateScreen, cursor::Hide)
            .context("Failed to enter alternate screen")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Play `event` in the terminal until the user quits.
pub fn play_event(event: &PlayEvent, options: &PlayerOptions) -> Result<PlaybackResult> {
    // Declared first so held logs are written after the screen is restored
    let _logs = logging::suspend_stderr();
    let mut stdout = io::stdout();
    let _guard = TerminalGuard::enter(&mut stdout)?;
    let mut terminal =
        Terminal::new(CrosstermBackend::new(stdout)).context("Failed to initialize terminal")?;

    info!(
        play_type = %event.play_type,
        yards = event.yards,
        autoplay = options.autoplay,
        "player opened"
    );

    // One scheduler per playback, dropped with it
    let mut scheduler = AnimationScheduler::new();
    let mut run: Option<RunHandle> = if options.autoplay {
        scheduler.request_replay(Instant::now())
    } else {
        None
    };
    let mut progress = 0.0;
    let mut needs_render = true;

    let result = loop {
        if let Some(handle) = run {
            match scheduler.tick(handle, Instant::now()) {
                Some(t) => {
                    progress = t;
                    needs_render = true;
                }
                None if !scheduler.is_live(handle) => run = None,
                None => {}
            }
        }

        if needs_render {
            let view = PlayerView {
                event,
                progress,
                can_replay: scheduler.state().can_replay(),
                theme: &options.theme,
            };
            terminal
                .draw(|frame| render_player(frame, &view))
                .context("Failed to draw frame")?;
            needs_render = false;
        }

        // Idle players only wake up for input
        let timeout = if run.is_some() {
            options.frame_interval
        } else {
            Duration::from_millis(250)
        };
        if term_event::poll(timeout).context("Failed to poll terminal events")? {
            let input = term_event::read().context("Failed to read terminal event")?;
            needs_render = true;
            match handle_event(input, &mut scheduler, Instant::now()) {
                InputResult::Quit => {
                    break if scheduler.is_playing() {
                        PlaybackResult::Interrupted
                    } else {
                        PlaybackResult::Finished
                    };
                }
                InputResult::Replay => {
                    debug!("replay accepted");
                    run = scheduler.current_run();
                }
                InputResult::Continue => {}
            }
        }
    };

    scheduler.cancel();
    info!(?result, "player closed");
    Ok(result)
}
