//! Field geometry
//!
//! Maps the 100-scale field position and gained yards onto a drawing
//! surface that spans 120 yard units: the defended end zone (0..10), the
//! playing field (10..110) and the attacked end zone (110..120).

use crate::event::{Direction, PlayEvent};
use crate::extract::infer_direction;

/// Logical drawing width of the field.
pub const FIELD_WIDTH: f64 = 800.0;
/// Logical drawing height of the field.
pub const FIELD_HEIGHT: f64 = 300.0;

/// Total yard units across the drawing, end zones included.
pub const TOTAL_YARD_UNITS: f64 = 120.0;
/// Depth of each end zone in yard units.
pub const END_ZONE_UNITS: f64 = 10.0;
/// Yard unit of the attacked goal line, measured from the back of the defended end zone.
pub const GOAL_LINE_UNITS: f64 = 110.0;

/// End-point height fraction for plays toward the left sideline.
const LEFT_FRACTION: f64 = 0.75;
/// End-point height fraction for plays toward the right sideline.
const RIGHT_FRACTION: f64 = 0.25;
const CENTER_FRACTION: f64 = 0.5;

/// Size of a drawing surface in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldGeometry {
    pub width: f64,
    pub height: f64,
}

impl Default for FieldGeometry {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
        }
    }
}

impl FieldGeometry {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Drawing units per yard.
    pub fn unit_width(&self) -> f64 {
        self.width / TOTAL_YARD_UNITS
    }

    /// Horizontal coordinate of a yard unit (0 = back of the defended end zone).
    pub fn x_at(&self, yard_units: f64) -> f64 {
        yard_units * self.unit_width()
    }

    /// Vertical coordinate of a fraction of the field height.
    pub fn y_at(&self, fraction: f64) -> f64 {
        self.height * fraction
    }

    pub fn center_y(&self) -> f64 {
        self.y_at(CENTER_FRACTION)
    }
}

/// A point on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Linear interpolation toward `other`.
    pub fn lerp(self, other: Point, t: f64) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Start and end of a play on the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayPath {
    pub start_x: f64,
    pub start_y: f64,
    pub end_x: f64,
    pub end_y: f64,
}

impl PlayPath {
    pub fn start(&self) -> Point {
        Point::new(self.start_x, self.start_y)
    }

    pub fn end(&self) -> Point {
        Point::new(self.end_x, self.end_y)
    }

    /// Position at interpolation factor `t` (already eased by the caller).
    pub fn point_at(&self, t: f64) -> Point {
        self.start().lerp(self.end(), t)
    }
}

/// Map a field position and gain onto drawing coordinates.
///
/// No clamping happens here: inconsistent data may place the end point past
/// the visible field, and the renderer tolerates that.
pub fn map_to_coordinates(
    field_position_100: f64,
    yards: f64,
    draw_width: f64,
    draw_height: f64,
    direction: Direction,
) -> PlayPath {
    let geometry = FieldGeometry::new(draw_width, draw_height);
    let unit_width = geometry.unit_width();
    let start_x = (GOAL_LINE_UNITS - field_position_100) * unit_width;
    let end_x = start_x + yards * unit_width;

    let end_fraction = match direction {
        Direction::Left => LEFT_FRACTION,
        Direction::Right => RIGHT_FRACTION,
        Direction::Middle => CENTER_FRACTION,
    };

    PlayPath {
        start_x,
        start_y: geometry.center_y(),
        end_x,
        end_y: geometry.y_at(end_fraction),
    }
}

/// Map an event onto `geometry`, inferring direction from its narrative.
pub fn map_event(event: &PlayEvent, geometry: &FieldGeometry) -> PlayPath {
    map_to_coordinates(
        f64::from(event.field_position_100),
        f64::from(event.yards),
        geometry.width,
        geometry.height,
        infer_direction(&event.description),
    )
}
