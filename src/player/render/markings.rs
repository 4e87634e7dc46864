//! Static field markings.

use crate::field::{FieldGeometry, Point, END_ZONE_UNITS, GOAL_LINE_UNITS, TOTAL_YARD_UNITS};
use crate::tui::theme::FieldPalette;

use super::{Anchor, Paint, Surface};

/// Height bands of the hash ticks, as fractions of the field height.
const HASH_BANDS: [f64; 2] = [0.43, 0.57];
/// Length of one hash tick in logical units.
const HASH_LENGTH: f64 = 6.0;
/// Baselines of the yard numbers near each sideline.
const NUMBER_BANDS: [f64; 2] = [0.12, 0.94];
const NUMBER_SIZE: f64 = 16.0;

/// Printed yard number for the yard line at `units` (10..=110).
///
/// Numbers count up to 50 from each goal line.
pub fn yard_number_label(units: u32) -> u32 {
    if units <= 60 {
        units.saturating_sub(10)
    } else {
        110u32.saturating_sub(units)
    }
}

/// Paint grass, end zones, yard lines, numbers and hash ticks.
pub fn draw_field<S: Surface + ?Sized>(surface: &mut S, geometry: &FieldGeometry, palette: &FieldPalette) {
    surface.clear(palette.grass);

    let end_zone_width = geometry.x_at(END_ZONE_UNITS);
    surface.fill_rect(0.0, 0.0, end_zone_width, geometry.height, Paint::solid(palette.own_end_zone));
    surface.fill_rect(
        geometry.x_at(GOAL_LINE_UNITS),
        0.0,
        geometry.x_at(TOTAL_YARD_UNITS - GOAL_LINE_UNITS),
        geometry.height,
        Paint::solid(palette.opponent_end_zone),
    );

    let line_paint = Paint::solid(palette.lines);
    for units in (10..=110u32).step_by(10) {
        let x = geometry.x_at(f64::from(units));
        let paint = if units == 10 || units == 110 {
            line_paint
        } else {
            line_paint.with_opacity(0.7)
        };
        surface.line(Point::new(x, 0.0), Point::new(x, geometry.height), paint, false);
    }

    for units in (20..=100u32).step_by(10) {
        let x = geometry.x_at(f64::from(units));
        let label = yard_number_label(units).to_string();
        for band in NUMBER_BANDS {
            surface.text(
                Point::new(x, geometry.y_at(band)),
                &label,
                NUMBER_SIZE,
                line_paint.with_opacity(0.8),
                Anchor::Middle,
            );
        }
    }

    let tick_paint = line_paint.with_opacity(0.6);
    for units in 11..110u32 {
        if units % 10 == 0 {
            continue;
        }
        let x = geometry.x_at(f64::from(units));
        for band in HASH_BANDS {
            let y = geometry.y_at(band);
            surface.line(
                Point::new(x, y - HASH_LENGTH / 2.0),
                Point::new(x, y + HASH_LENGTH / 2.0),
                tick_paint,
                false,
            );
        }
    }
}
