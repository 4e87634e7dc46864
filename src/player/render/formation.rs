//! The other 21 players on the field.
//!
//! Offsets are in yards relative to the line of scrimmage (the start of the
//! play) and lateral positions are yards across a 53.3-yard-wide field.

use crate::field::{FieldGeometry, PlayPath, Point};

/// Sideline to sideline, in yards.
pub const FIELD_WIDTH_YARDS: f64 = 53.3;

const LINE_DEPTH: f64 = -1.0;
const LINE_SPOTS: [f64; 7] = [15.0, 20.0, 25.0, 26.65, 28.0, 33.0, 38.0];
/// How far the line drives forward over the whole play.
const LINE_PUSH: f64 = 5.0;

/// Receivers split wide, then the back behind the quarterback spot.
const SKILL_SPOTS: [(f64, Option<f64>); 3] = [(-5.0, Some(10.0)), (-5.0, Some(43.0)), (-7.0, None)];
/// Share of the carrier's gain and drift the skill players follow.
const SKILL_FOLLOW: f64 = 0.3;

const FRONT_DEPTH: f64 = 3.0;
const FRONT_SPOTS: [f64; 5] = [18.0, 23.0, 28.0, 33.0, 38.0];
const SECOND_LEVEL_DEPTH: f64 = 8.0;
const SECOND_LEVEL_SPOTS: [f64; 3] = [15.0, 26.65, 38.0];
const DEEP_DEPTH: f64 = 15.0;
const DEEP_SPOTS: [f64; 4] = [10.0, 20.0, 33.0, 43.0];

pub const OFFENSE_COUNT: usize = LINE_SPOTS.len() + SKILL_SPOTS.len();
pub const DEFENSE_COUNT: usize = FRONT_SPOTS.len() + SECOND_LEVEL_SPOTS.len() + DEEP_SPOTS.len();

/// Everyone but the ball carrier at one moment of the play.
#[derive(Debug, Clone, PartialEq)]
pub struct Formation {
    pub offense: Vec<Point>,
    pub defense: Vec<Point>,
}

/// Share of the distance to the carrier defender `index` closes by the end.
pub fn pursuit(index: usize) -> f64 {
    0.8 + (index % 3) as f64 * 0.1
}

/// Lay out both sides at eased progress `eased`, with the carrier at `carrier`.
pub fn formation_at(path: &PlayPath, geometry: &FieldGeometry, yards: f64, eased: f64, carrier: Point) -> Formation {
    let unit = geometry.unit_width();
    let spot = |depth: f64, lateral: f64| {
        Point::new(
            path.start_x + depth * unit,
            geometry.y_at(lateral / FIELD_WIDTH_YARDS),
        )
    };
    let drift = carrier.y - path.start_y;

    let mut offense = Vec::with_capacity(OFFENSE_COUNT);
    for lateral in LINE_SPOTS {
        let base = spot(LINE_DEPTH, lateral);
        offense.push(Point::new(base.x + eased * LINE_PUSH * unit, base.y));
    }
    for (depth, lateral) in SKILL_SPOTS {
        let base = match lateral {
            Some(lateral) => spot(depth, lateral),
            None => Point::new(path.start_x + depth * unit, path.start_y),
        };
        offense.push(Point::new(
            base.x + eased * yards * SKILL_FOLLOW * unit,
            base.y + drift * SKILL_FOLLOW,
        ));
    }

    let levels = [
        (FRONT_DEPTH, &FRONT_SPOTS[..]),
        (SECOND_LEVEL_DEPTH, &SECOND_LEVEL_SPOTS[..]),
        (DEEP_DEPTH, &DEEP_SPOTS[..]),
    ];
    let defense = levels
        .iter()
        .flat_map(|(depth, spots)| spots.iter().map(move |lateral| (*depth, *lateral)))
        .enumerate()
        .map(|(i, (depth, lateral))| spot(depth, lateral).lerp(carrier, eased * pursuit(i)))
        .collect();

    Formation { offense, defense }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Direction;
    use crate::field::map_to_coordinates;

    fn distance(a: Point, b: Point) -> f64 {
        ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
    }

    fn run_up_the_middle() -> (FieldGeometry, PlayPath) {
        let geometry = FieldGeometry::default();
        let path = map_to_coordinates(75.0, 20.0, geometry.width, geometry.height, Direction::Middle);
        (geometry, path)
    }

    fn at(t: f64) -> Formation {
        let (geometry, path) = run_up_the_middle();
        formation_at(&path, &geometry, 20.0, t, path.point_at(t))
    }

    #[test]
    fn full_teams_on_the_field() {
        let snap = at(0.0);
        assert_eq!(snap.offense.len(), 10);
        assert_eq!(snap.defense.len(), 11);
    }

    #[test]
    fn sides_line_up_on_either_side_of_the_ball() {
        let (_, path) = run_up_the_middle();
        let snap = at(0.0);
        assert!(snap.offense.iter().all(|p| p.x < path.start_x));
        assert!(snap.defense.iter().all(|p| p.x > path.start_x));
    }

    #[test]
    fn line_drives_five_yards() {
        let (geometry, _) = run_up_the_middle();
        let snap = at(0.0);
        let done = at(1.0);
        for (before, after) in snap.offense.iter().zip(&done.offense).take(LINE_SPOTS.len()) {
            assert!((after.x - before.x - 5.0 * geometry.unit_width()).abs() < 1e-9);
            assert_eq!(after.y, before.y);
        }
    }

    #[test]
    fn defenders_converge_on_the_carrier() {
        let (_, path) = run_up_the_middle();
        let snap = at(0.0);
        let done = at(1.0);

        for (i, (before, after)) in snap.defense.iter().zip(&done.defense).enumerate() {
            let start_gap = distance(*before, path.start());
            let end_gap = distance(*after, path.end());
            assert!(end_gap < start_gap, "defender {} went from {} to {}", i, start_gap, end_gap);
        }
    }

    #[test]
    fn full_pursuit_defenders_reach_the_carrier() {
        let (_, path) = run_up_the_middle();
        let done = at(1.0);
        for (i, defender) in done.defense.iter().enumerate().filter(|(i, _)| i % 3 == 2) {
            assert!(distance(*defender, path.end()) < 1e-9, "defender {}", i);
        }
    }

    #[test]
    fn pack_closes_in_as_the_play_runs() {
        let spread = |t: f64| {
            let (_, path) = run_up_the_middle();
            let carrier = path.point_at(t);
            at(t).defense.iter().map(|p| distance(*p, carrier)).sum::<f64>()
        };
        assert!(spread(0.5) < spread(0.0));
        assert!(spread(1.0) < spread(0.5));
    }
}
