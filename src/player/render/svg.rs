//! SVG export surface.
//!
//! Produces a self-contained SVG document with the logical field as its
//! `viewBox`; `scale` only sets the pixel size of the document.

use std::fmt::Write as _;

use ratatui::style::Color;

use crate::field::{FieldGeometry, Point};
use crate::tui::theme::rgb_of;

use super::{Anchor, Paint, Surface, DASH_GAP, DASH_LENGTH};

const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

/// Accumulates one frame as SVG markup.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    scale: f64,
    body: String,
}

impl SvgSurface {
    pub fn new(geometry: &FieldGeometry, scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        Self {
            width: geometry.width,
            height: geometry.height,
            scale,
            body: String::new(),
        }
    }

    /// Finish the document.
    pub fn into_svg(self) -> String {
        format!(
            concat!(
                "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" ",
                "viewBox=\"0 0 {} {}\">\n{}</svg>\n"
            ),
            fmt_num(self.width * self.scale),
            fmt_num(self.height * self.scale),
            fmt_num(self.width),
            fmt_num(self.height),
            self.body
        )
    }

    fn push(&mut self, element: std::fmt::Arguments<'_>) {
        // Writing to a String cannot fail
        let _ = self.body.write_fmt(element);
        self.body.push('\n');
    }
}

impl Surface for SvgSurface {
    fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Color) {
        self.body.clear();
        let (width, height) = (fmt_num(self.width), fmt_num(self.height));
        self.push(format_args!(
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>",
            width,
            height,
            color_hex(color)
        ));
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64, paint: Paint) {
        if ![x, y, width, height].iter().all(|v| v.is_finite()) {
            return;
        }
        let (x, y, width, height) = (fmt_num(x), fmt_num(y), fmt_num(width), fmt_num(height));
        self.push(format_args!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"{}/>",
            x,
            y,
            width,
            height,
            color_hex(paint.color),
            opacity_attr("fill-opacity", paint.opacity)
        ));
    }

    fn line(&mut self, from: Point, to: Point, paint: Paint, dashed: bool) {
        if !from.is_finite() || !to.is_finite() {
            return;
        }
        let dash = if dashed {
            format!(" stroke-dasharray=\"{} {}\"", fmt_num(DASH_LENGTH), fmt_num(DASH_GAP))
        } else {
            String::new()
        };
        let (x1, y1, x2, y2) = (fmt_num(from.x), fmt_num(from.y), fmt_num(to.x), fmt_num(to.y));
        self.push(format_args!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"2\"{}{}/>",
            x1,
            y1,
            x2,
            y2,
            color_hex(paint.color),
            opacity_attr("stroke-opacity", paint.opacity),
            dash
        ));
    }

    fn circle(&mut self, center: Point, radius: f64, paint: Paint, filled: bool) {
        if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
            return;
        }
        let color = color_hex(paint.color);
        let style = if filled {
            format!(
                "fill=\"{}\"{}",
                color,
                opacity_attr("fill-opacity", paint.opacity)
            )
        } else {
            format!(
                "fill=\"none\" stroke=\"{}\" stroke-width=\"3\"{}",
                color,
                opacity_attr("stroke-opacity", paint.opacity)
            )
        };
        let (cx, cy, r) = (fmt_num(center.x), fmt_num(center.y), fmt_num(radius));
        self.push(format_args!("<circle cx=\"{}\" cy=\"{}\" r=\"{}\" {}/>", cx, cy, r, style));
    }

    fn text(&mut self, at: Point, text: &str, size: f64, paint: Paint, anchor: Anchor) {
        if !at.is_finite() {
            return;
        }
        let anchor = match anchor {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        };
        let weight = if size >= 20.0 { " font-weight=\"bold\"" } else { "" };
        let (x, y, size) = (fmt_num(at.x), fmt_num(at.y), fmt_num(size));
        self.push(format_args!(
            "<text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\"{} text-anchor=\"{}\" fill=\"{}\"{}>{}</text>",
            x,
            y,
            FONT_FAMILY,
            size,
            weight,
            anchor,
            color_hex(paint.color),
            opacity_attr("fill-opacity", paint.opacity),
            escape_xml(text)
        ));
    }
}

/// `#rrggbb` for a color; unmixable colors fall back to white.
pub fn color_hex(color: Color) -> String {
    let (r, g, b) = rgb_of(color).unwrap_or((0xFF, 0xFF, 0xFF));
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

fn opacity_attr(name: &str, opacity: f64) -> String {
    if opacity >= 1.0 || opacity.is_nan() {
        String::new()
    } else {
        format!(" {}=\"{}\"", name, fmt_num(opacity.max(0.0)))
    }
}

/// Shortest stable rendering of a coordinate: at most two decimals.
fn fmt_num(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{}", rounded)
}

fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
