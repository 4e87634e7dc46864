//! Surface that records draw calls instead of painting them.

use ratatui::style::Color;

use crate::field::{FieldGeometry, Point};

use super::{Anchor, Paint, Surface};

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Color),
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        paint: Paint,
    },
    Line {
        from: Point,
        to: Point,
        paint: Paint,
        dashed: bool,
    },
    Circle {
        center: Point,
        radius: f64,
        paint: Paint,
        filled: bool,
    },
    Text {
        at: Point,
        text: String,
        size: f64,
        paint: Paint,
        anchor: Anchor,
    },
}

/// In-memory surface; every frame fully replaces the previous op log.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: f64,
    height: f64,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new(geometry: &FieldGeometry) -> Self {
        Self {
            width: geometry.width,
            height: geometry.height,
            ops: Vec::new(),
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn lines(&self) -> impl Iterator<Item = (Point, Point, Paint)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line { from, to, paint, .. } => Some((*from, *to, *paint)),
            _ => None,
        })
    }

    pub fn dashed_lines(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Line {
                from,
                to,
                dashed: true,
                ..
            } => Some((*from, *to)),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = (Point, f64, Paint, bool)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Circle {
                center,
                radius,
                paint,
                filled,
            } => Some((*center, *radius, *paint, *filled)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = (Point, &str, Paint)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { at, text, paint, .. } => Some((*at, text.as_str(), *paint)),
            _ => None,
        })
    }

    /// Whether any text op reads exactly `needle`.
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts().any(|(_, text, _)| text == needle)
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.ops.clear();
        self.ops.push(DrawOp::Clear(color));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: Paint) {
        self.ops.push(DrawOp::Rect {
            x,
            y,
            width,
            height,
            paint,
        });
    }

    fn line(&mut self, from: Point, to: Point, paint: Paint, dashed: bool) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            paint,
            dashed,
        });
    }

    fn circle(&mut self, center: Point, radius: f64, paint: Paint, filled: bool) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            paint,
            filled,
        });
    }

    fn text(&mut self, at: Point, text: &str, size: f64, paint: Paint, anchor: Anchor) {
        self.ops.push(DrawOp::Text {
            at,
            text: text.to_string(),
            size,
            paint,
            anchor,
        });
    }
}
