//! The player screen
//!
//! Composes one frame of the player: play title, game context, the animated
//! field, the progress bar, the verbatim play description and the footer.

pub mod status_footer;

use ratatui::{
    layout::Alignment,
    symbols::Marker,
    text::Line,
    widgets::{canvas::Canvas, Paragraph, Wrap},
    Frame,
};

use crate::event::PlayEvent;
use crate::field::FieldGeometry;
use crate::player::render::canvas::CanvasSurface;
use crate::player::render::{progress_line, render_with_palette};
use crate::tui::theme::Theme;
use crate::tui::ui::player_layout;

use status_footer::{player_footer_keys, render_footer, render_status_line};

/// Everything one player frame depends on.
#[derive(Debug, Clone, Copy)]
pub struct PlayerView<'a> {
    pub event: &'a PlayEvent,
    pub progress: f64,
    pub can_replay: bool,
    pub theme: &'a Theme,
}

/// Draw the full player screen.
pub fn render_player(frame: &mut Frame, view: &PlayerView<'_>) {
    let theme = view.theme;
    let layout = player_layout(frame.area());

    let title = Paragraph::new(Line::from(view.event.title()))
        .style(theme.accent_bold_style())
        .alignment(Alignment::Center);
    frame.render_widget(title, layout.title);

    let subtitle = view.event.subtitle().unwrap_or_default();
    render_status_line(frame, layout.status, &subtitle, theme);

    let geometry = FieldGeometry::default();
    let palette = theme.field;
    let field_rect = layout.field;
    let canvas = Canvas::default()
        .marker(Marker::HalfBlock)
        .x_bounds([0.0, geometry.width])
        .y_bounds([0.0, geometry.height])
        .background_color(palette.grass)
        .paint(|ctx| {
            let mut surface = CanvasSurface::new(ctx, &geometry, field_rect, palette.grass);
            render_with_palette(&mut surface, &geometry, view.event, view.progress, &palette);
        });
    frame.render_widget(canvas, field_rect);

    frame.render_widget(
        Paragraph::new(progress_line(layout.progress.width, view.progress, theme)),
        layout.progress,
    );

    let description = Paragraph::new(view.event.description.as_str())
        .style(theme.text_style())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(description, layout.description);

    render_footer(frame, layout.footer, &player_footer_keys(view.can_replay), theme);
}
