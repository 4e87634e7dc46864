//! Progress bar rendering for the player.
//!
//! Displays animation progress as a 0-100% bar with a playhead.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::tui::theme::Theme;

/// Format progress in [0, 1] as a whole percentage.
pub fn format_percent(progress: f64) -> String {
    let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    format!("{:>3}%", (progress * 100.0).round() as u32)
}

/// Build the progress bar character array.
///
/// # Arguments
/// * `bar_width` - Width of the bar in characters
/// * `progress` - Animation progress in [0, 1]
///
/// # Returns
/// A tuple of (bar_chars, filled_count) where bar_chars contains the visual
/// representation and filled_count is the number of filled positions.
pub fn build_progress_bar_chars(bar_width: usize, progress: f64) -> (Vec<char>, usize) {
    let progress = if progress.is_nan() { 0.0 } else { progress.clamp(0.0, 1.0) };
    let filled = (bar_width as f64 * progress) as usize;

    let mut bar: Vec<char> = vec!['─'; bar_width];
    if filled < bar_width {
        bar[filled] = '⏺';
    }

    (bar, filled)
}

/// Styled progress line: filled bar, playhead, remaining bar, percentage.
pub fn progress_line(width: u16, progress: f64, theme: &Theme) -> Line<'static> {
    let percent = format_percent(progress);
    let bar_width = (width as usize).saturating_sub(percent.len() + 2);
    let (bar, filled) = build_progress_bar_chars(bar_width, progress);

    let filled_part: String = "━".repeat(filled.min(bar_width));
    let head: String = bar.iter().skip(filled).take(1).collect();
    let rest: String = bar.iter().skip(filled + 1).collect();

    Line::from(vec![
        Span::raw(" "),
        Span::styled(filled_part, Style::default().fg(theme.success)),
        Span::styled(head, Style::default().fg(theme.text_primary)),
        Span::styled(rest, Style::default().fg(theme.text_secondary)),
        Span::styled(format!(" {}", percent), theme.text_style()),
    ])
}
