//! Rendering components for the player.
//!
//! Everything draws through the [`Surface`] trait in logical field units
//! (x to the right, y downward). The trajectory renderer is a pure function
//! of the event, the geometry and the current progress; surfaces decide how
//! shapes reach the screen:
//!
//! - [`canvas`]: ratatui canvas inside the terminal player
//! - [`svg`]: standalone SVG frames for export
//! - [`recording`]: an in-memory op log, used to inspect frames

pub mod canvas;
mod easing;
pub mod formation;
mod markings;
mod progress;
pub mod recording;
pub mod svg;
mod trajectory;

use ratatui::style::Color;

use crate::field::Point;

pub use easing::{ball_arc_offset, ball_progress, ease_in_out, ARC_HEIGHT, BALL_SPEEDUP};
pub use markings::{draw_field, yard_number_label};
pub use progress::{build_progress_bar_chars, format_percent, progress_line};
pub use trajectory::{render, render_with_palette, TOUCHDOWN_THRESHOLD};

/// Color plus opacity for one shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub opacity: f64,
}

impl Paint {
    pub fn solid(color: Color) -> Self {
        Self {
            color,
            opacity: 1.0,
        }
    }

    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }
}

/// Horizontal alignment of text around its anchor point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// A drawing target in logical field units.
///
/// Implementations must accept any coordinates, including ones far off the
/// surface or non-finite ones, and simply not show what does not fit.
pub trait Surface {
    /// Logical size as (width, height).
    fn size(&self) -> (f64, f64);

    /// Paint the whole surface with `color`.
    fn clear(&mut self, color: Color);

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: Paint);

    fn line(&mut self, from: Point, to: Point, paint: Paint, dashed: bool);

    fn circle(&mut self, center: Point, radius: f64, paint: Paint, filled: bool);

    /// Draw `text` with its baseline at `at.y`. `size` is the font size in
    /// logical units; surfaces without font control may ignore it.
    fn text(&mut self, at: Point, text: &str, size: f64, paint: Paint, anchor: Anchor);
}

/// Dash length of dashed lines.
pub const DASH_LENGTH: f64 = 8.0;
/// Gap between dashes.
pub const DASH_GAP: f64 = 6.0;

/// Split `from`..`to` into dash segments for surfaces without native dashing.
pub fn dash_segments(from: Point, to: Point, dash: f64, gap: f64) -> Vec<(Point, Point)> {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let length = (dx * dx + dy * dy).sqrt();
    if !length.is_finite() || length == 0.0 || dash <= 0.0 {
        return Vec::new();
    }
    let period = dash + gap.max(0.0);

    let mut segments = Vec::with_capacity((length / period).ceil() as usize + 1);
    let mut offset = 0.0;
    while offset < length {
        let end = (offset + dash).min(length);
        segments.push((from.lerp(to, offset / length), from.lerp(to, end / length)));
        offset += period;
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paint_with_opacity_keeps_color() {
        let paint = Paint::solid(Color::White).with_opacity(0.25);
        assert_eq!(paint.color, Color::White);
        assert_eq!(paint.opacity, 0.25);
    }

    #[test]
    fn dash_segments_cover_line_with_gaps() {
        let segments = dash_segments(Point::new(0.0, 0.0), Point::new(30.0, 0.0), 8.0, 6.0);
        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0], (Point::new(0.0, 0.0), Point::new(8.0, 0.0)));
        assert_eq!(segments[1], (Point::new(14.0, 0.0), Point::new(22.0, 0.0)));
        // last dash is cut at the end point
        assert_eq!(segments[2], (Point::new(28.0, 0.0), Point::new(30.0, 0.0)));
    }

    #[test]
    fn dash_segments_degenerate_lines() {
        let p = Point::new(3.0, 3.0);
        assert!(dash_segments(p, p, 8.0, 6.0).is_empty());
        assert!(dash_segments(p, Point::new(f64::NAN, 0.0), 8.0, 6.0).is_empty());
    }
}
