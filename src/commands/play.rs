//! Play command handler

use anyhow::{bail, Result};

use playreel::cli::InputArgs;
use playreel::player::{play_event, PlaybackResult, PlayerOptions};
use playreel::tui::current_theme;
use playreel::{Config, QueryEnvelope};

use super::resolve_input;

/// Animate the play, or print the report when there is nothing to animate.
#[cfg(not(tarpaulin_include))]
pub fn handle(input: &InputArgs, no_autoplay: bool, config: &Config) -> Result<()> {
    let (envelope, resolved) = resolve_input(input)?;
    let Some((event, _)) = resolved else {
        print_report(&envelope);
        return Ok(());
    };

    if !atty::is(atty::Stream::Stdout) {
        bail!("The player needs an interactive terminal; use `playreel frame` to export SVG frames");
    }

    let theme = current_theme();
    let options = PlayerOptions {
        frame_interval: config.player.frame_interval(),
        autoplay: config.player.autoplay && !no_autoplay,
        theme: theme.clone(),
    };

    match play_event(&event, &options)? {
        PlaybackResult::Finished => println!("{}", theme.primary_text(&event.title())),
        PlaybackResult::Interrupted => {
            println!("{}", theme.secondary_text(&format!("{} (interrupted)", event.title())))
        }
    }
    Ok(())
}

/// The report is shown as-is; a failed query shows its error instead.
fn print_report(envelope: &QueryEnvelope) {
    let theme = current_theme();
    if !envelope.success {
        let message = envelope
            .error
            .as_deref()
            .filter(|e| !e.trim().is_empty())
            .unwrap_or("Query failed");
        eprintln!("{}", theme.error_text(message));
        return;
    }
    let report = envelope.report_text();
    if report.trim().is_empty() {
        println!("{}", theme.secondary_text("(empty report)"));
    } else {
        println!("{}", report);
    }
}
