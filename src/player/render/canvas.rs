//! Terminal surface backed by a ratatui canvas.
//!
//! The canvas uses a y-up coordinate system, so every shape is flipped on
//! the way in. Terminals have no alpha channel; translucent paints are mixed
//! toward the last clear color instead.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::Span,
    widgets::canvas::{Circle, Context, Line as CanvasLine},
};
use unicode_width::UnicodeWidthStr;

use crate::field::{FieldGeometry, Point};
use crate::tui::theme::blend;

use super::{dash_segments, Anchor, Paint, Surface, DASH_GAP, DASH_LENGTH};

/// Paints onto a canvas [`Context`] that spans the field geometry.
pub struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    width: f64,
    height: f64,
    /// Logical width of one terminal column
    column_width: f64,
    /// Logical height of one canvas pixel row
    pixel_height: f64,
    background: Color,
}

impl<'a, 'b> CanvasSurface<'a, 'b> {
    /// `area` is the terminal area the canvas is rendered into; with the
    /// half-block marker every row holds two pixels.
    pub fn new(ctx: &'a mut Context<'b>, geometry: &FieldGeometry, area: Rect, background: Color) -> Self {
        let columns = f64::from(area.width.max(1));
        let pixel_rows = f64::from(area.height.max(1)) * 2.0;
        Self {
            ctx,
            width: geometry.width,
            height: geometry.height,
            column_width: geometry.width / columns,
            pixel_height: geometry.height / pixel_rows,
            background,
        }
    }

    fn color(&self, paint: Paint) -> Option<Color> {
        if paint.opacity <= 0.0 {
            return None;
        }
        if paint.opacity >= 1.0 {
            return Some(paint.color);
        }
        Some(blend(paint.color, self.background, paint.opacity))
    }

    fn draw_segment(&mut self, from: Point, to: Point, color: Color) {
        let Some((from, to)) = clip_segment(from, to, self.width, self.height) else {
            return;
        };
        self.ctx.draw(&CanvasLine {
            x1: from.x,
            y1: self.height - from.y,
            x2: to.x,
            y2: self.height - to.y,
            color,
        });
    }
}

impl Surface for CanvasSurface<'_, '_> {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.background = color;
        self.fill_rect(0.0, 0.0, self.width, self.height, Paint::solid(color));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: Paint) {
        let Some(color) = self.color(paint) else {
            return;
        };
        if ![x, y, width, height].iter().all(|v| v.is_finite()) {
            return;
        }
        let top = y.max(0.0);
        let bottom = (y + height).min(self.height);
        let left = x.max(0.0);
        let right = (x + width).min(self.width);
        if top >= bottom || left >= right {
            return;
        }

        let mut row = top;
        while row < bottom {
            self.draw_segment(Point::new(left, row), Point::new(right, row), color);
            row += self.pixel_height;
        }
    }

    fn line(&mut self, from: Point, to: Point, paint: Paint, dashed: bool) {
        let Some(color) = self.color(paint) else {
            return;
        };
        if dashed {
            for (start, end) in dash_segments(from, to, DASH_LENGTH, DASH_GAP) {
                self.draw_segment(start, end, color);
            }
        } else {
            self.draw_segment(from, to, color);
        }
    }

    fn circle(&mut self, center: Point, radius: f64, paint: Paint, filled: bool) {
        let Some(color) = self.color(paint) else {
            return;
        };
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return;
        }
        if filled {
            let mut dy = -radius;
            while dy <= radius {
                let half = (radius * radius - dy * dy).max(0.0).sqrt();
                let y = center.y + dy;
                self.draw_segment(Point::new(center.x - half, y), Point::new(center.x + half, y), color);
                dy += self.pixel_height;
            }
        }
        self.ctx.draw(&Circle {
            x: center.x,
            y: self.height - center.y,
            radius,
            color,
        });
    }

    fn text(&mut self, at: Point, text: &str, _size: f64, paint: Paint, anchor: Anchor) {
        let Some(color) = self.color(paint) else {
            return;
        };
        if !at.is_finite() || text.is_empty() {
            return;
        }
        let span_width = text.width() as f64 * self.column_width;
        let x = match anchor {
            Anchor::Start => at.x,
            Anchor::Middle => at.x - span_width / 2.0,
            Anchor::End => at.x - span_width,
        };
        if x < 0.0 || x > self.width || at.y < 0.0 || at.y > self.height {
            return;
        }
        self.ctx.print(
            x,
            self.height - at.y,
            Span::styled(text.to_string(), Style::default().fg(color)),
        );
    }
}

/// Clip a segment to the `[0, width] x [0, height]` box (Liang-Barsky).
///
/// Returns `None` when nothing of the segment is inside or it is not finite.
pub fn clip_segment(from: Point, to: Point, width: f64, height: f64) -> Option<(Point, Point)> {
    if !from.is_finite() || !to.is_finite() {
        return None;
    }
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let mut t0: f64 = 0.0;
    let mut t1: f64 = 1.0;

    for (p, q) in [
        (-dx, from.x),
        (dx, width - from.x),
        (-dy, from.y),
        (dy, height - from.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else if r < t0 {
            return None;
        } else {
            t1 = t1.min(r);
        }
    }

    Some((from.lerp(to, t0), from.lerp(to, t1)))
}
