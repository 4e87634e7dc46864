//! Per-frame drawing of one play.

use crate::event::PlayEvent;
use crate::field::{map_event, FieldGeometry, Point};
use crate::tui::theme::FieldPalette;

use super::easing::{ball_arc_offset, ball_progress, ease_in_out};
use super::formation::formation_at;
use super::markings::draw_field;
use super::{Anchor, Paint, Surface};

/// Progress after which a scoring play shows the touchdown overlay.
pub const TOUCHDOWN_THRESHOLD: f64 = 0.95;

/// Progress after which trailing ghosts appear.
const GHOST_THRESHOLD: f64 = 0.1;
const GHOST_COUNT: u32 = 5;
/// Progress between consecutive ghosts.
const GHOST_SPACING: f64 = 0.04;
const GHOST_MAX_OPACITY: f64 = 0.6;

const MARKER_RADIUS: f64 = 8.0;
const GHOST_RADIUS: f64 = 6.0;
const BALL_RADIUS: f64 = 4.0;
const PLAYER_RADIUS: f64 = 5.0;
const TACKLE_RADIUS: f64 = 16.0;
const CELEBRATION_RADIUS: f64 = 20.0;

const LABEL_SIZE: f64 = 14.0;
const OVERLAY_SIZE: f64 = 28.0;

/// Draw one frame at progress `t` with the default palette.
pub fn render<S: Surface + ?Sized>(surface: &mut S, geometry: &FieldGeometry, event: &PlayEvent, t: f64) {
    render_with_palette(surface, geometry, event, t, &FieldPalette::default());
}

/// Draw one frame at progress `t`.
///
/// Clears and redraws everything; the output depends only on the arguments.
pub fn render_with_palette<S: Surface + ?Sized>(
    surface: &mut S,
    geometry: &FieldGeometry,
    event: &PlayEvent,
    t: f64,
    palette: &FieldPalette,
) {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    draw_field(surface, geometry, palette);

    let path = map_event(event, geometry);
    surface.line(path.start(), path.end(), Paint::solid(palette.path).with_opacity(0.5), true);

    let eased = ease_in_out(t);
    let current = path.point_at(eased);

    let formation = formation_at(&path, geometry, f64::from(event.yards), eased, current);
    for player in &formation.offense {
        surface.circle(*player, PLAYER_RADIUS, Paint::solid(palette.offense), true);
    }
    for player in &formation.defense {
        surface.circle(*player, PLAYER_RADIUS, Paint::solid(palette.defense), true);
    }

    if t > GHOST_THRESHOLD {
        for i in 1..=GHOST_COUNT {
            let ghost_t = t - f64::from(i) * GHOST_SPACING;
            if ghost_t < 0.0 {
                break;
            }
            let opacity = GHOST_MAX_OPACITY * f64::from(GHOST_COUNT + 1 - i) / f64::from(GHOST_COUNT + 1);
            surface.circle(
                path.point_at(ease_in_out(ghost_t)),
                GHOST_RADIUS,
                Paint::solid(palette.marker).with_opacity(opacity),
                true,
            );
        }
    }

    surface.circle(current, MARKER_RADIUS, Paint::solid(palette.marker), true);

    if event.play_type.has_ball_flight() {
        let ball_t = ball_progress(t);
        let straight = path.point_at(ball_t);
        let ball = Point::new(straight.x, straight.y - ball_arc_offset(ball_t));
        surface.circle(ball, BALL_RADIUS, Paint::solid(palette.ball), true);
    }

    let label_paint = Paint::solid(palette.label);
    let gained = (f64::from(event.yards) * eased).floor() as i64;
    surface.text(
        Point::new(geometry.width / 2.0, geometry.y_at(0.05)),
        &format!("{} yds", gained),
        LABEL_SIZE,
        label_paint,
        Anchor::Middle,
    );

    if let Some(name) = event.ball_carrier() {
        surface.text(
            Point::new(current.x, current.y - MARKER_RADIUS - 6.0),
            name,
            LABEL_SIZE,
            label_paint,
            Anchor::Middle,
        );
    }

    if event.is_scoring_play && t > TOUCHDOWN_THRESHOLD {
        surface.circle(current, CELEBRATION_RADIUS, Paint::solid(palette.touchdown), false);
        surface.text(
            Point::new(geometry.width / 2.0, geometry.center_y() + OVERLAY_SIZE / 2.0),
            "TOUCHDOWN!",
            OVERLAY_SIZE,
            Paint::solid(palette.touchdown),
            Anchor::Middle,
        );
    } else if !event.is_scoring_play && t >= 1.0 {
        let end = path.end();
        surface.circle(end, TACKLE_RADIUS, Paint::solid(palette.tackle), false);
        if let Some(tackler) = &event.tackler {
            surface.text(
                Point::new(end.x, end.y + TACKLE_RADIUS + LABEL_SIZE),
                tackler,
                LABEL_SIZE,
                Paint::solid(palette.tackle),
                Anchor::Middle,
            );
        }
    }
}
