//! Extract command handler

use anyhow::{Context, Result};

use playreel::cli::InputArgs;
use playreel::tui::current_theme;

use super::resolve_input;

/// Print the resolved event as JSON. Returns `false` when there is none.
pub fn handle(input: &InputArgs, compact: bool) -> Result<bool> {
    let (_, resolved) = resolve_input(input)?;
    let Some((event, _)) = resolved else {
        eprintln!(
            "{}",
            current_theme().error_text("No longest play found in input")
        );
        return Ok(false);
    };

    let json = if compact {
        serde_json::to_string(&event)
    } else {
        serde_json::to_string_pretty(&event)
    }
    .context("Failed to serialize play event")?;
    println!("{}", json);
    Ok(true)
}
