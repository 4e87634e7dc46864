//! Status line and footer rendering for the player screen
//!
//! Provides rendering functions for the status line (game context) and the
//! footer bar (keybinding hints, some of which may be temporarily disabled).

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme::Theme;

/// One keybinding hint in the footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterKey<'a> {
    pub key: &'a str,
    pub desc: &'a str,
    /// Disabled hints are drawn dimmed
    pub enabled: bool,
}

impl<'a> FooterKey<'a> {
    pub fn new(key: &'a str, desc: &'a str) -> Self {
        Self {
            key,
            desc,
            enabled: true,
        }
    }

    pub fn enabled(self, enabled: bool) -> Self {
        Self { enabled, ..self }
    }
}

/// Render a status line with the given text in the secondary color.
pub fn render_status_line(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
    let status = Paragraph::new(text.to_string())
        .style(theme.text_secondary_style())
        .alignment(Alignment::Center);
    frame.render_widget(status, area);
}

/// Render a centered footer with keybinding hints.
///
/// Example: `[r: replay, q: quit]` renders as `"r: replay | q: quit"`.
pub fn render_footer(frame: &mut Frame, area: Rect, keys: &[FooterKey<'_>], theme: &Theme) {
    let spans = build_footer_spans(keys, theme);
    let footer = Paragraph::new(Line::from(spans))
        .style(theme.text_secondary_style())
        .alignment(Alignment::Center);
    frame.render_widget(footer, area);
}

/// Build styled spans for footer keybinding hints.
///
/// Enabled keys use the accent color; disabled keys and all descriptions
/// use the secondary color, disabled ones additionally dimmed.
fn build_footer_spans(keys: &[FooterKey<'_>], theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(keys.len() * 3);
    for (i, hint) in keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ".to_string(), theme.text_secondary_style()));
        }
        let (key_style, desc_style) = if hint.enabled {
            (theme.accent_style(), theme.text_secondary_style())
        } else {
            let dim = theme.text_secondary_style().add_modifier(Modifier::DIM);
            (dim, dim)
        };
        spans.push(Span::styled(hint.key.to_string(), key_style));
        spans.push(Span::styled(format!(": {}", hint.desc), desc_style));
    }
    spans
}

/// Footer hints for the player in its current state.
pub fn player_footer_keys(can_replay: bool) -> [FooterKey<'static>; 2] {
    [
        FooterKey::new("r", "replay").enabled(can_replay),
        FooterKey::new("q", "quit"),
    ]
}
