//! Subcommand handlers

pub mod config;
pub mod extract;
pub mod frame;
pub mod play;

use std::io;

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;

use playreel::cli::{Cli, InputArgs};
use playreel::{EventSource, NarrativeExtractor, PlayEvent, QueryEnvelope};

/// Load the input and resolve the play to animate.
///
/// Returns the envelope too, so callers can fall back to its report.
pub fn resolve_input(input: &InputArgs) -> Result<(QueryEnvelope, Option<(PlayEvent, EventSource)>)> {
    let envelope = input.source()?.load().context("Failed to load input")?;
    let resolved = envelope.resolve_event(&NarrativeExtractor::default());
    match &resolved {
        Some((event, source)) => tracing::info!(
            source = ?source,
            play_type = %event.play_type,
            yards = event.yards,
            "resolved play event"
        ),
        None => tracing::info!(query = %envelope.query, "no longest play in input"),
    }
    Ok((envelope, resolved))
}

/// Print shell completions to stdout.
#[cfg(not(tarpaulin_include))]
pub fn handle_completions(shell: Shell) -> Result<()> {
    clap_complete::generate(shell, &mut Cli::command(), "playreel", &mut io::stdout());
    Ok(())
}
