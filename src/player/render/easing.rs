//! Time warping for the carrier and the ball.

use std::f64::consts::PI;

/// Peak height of the ball's flight above the straight path, in logical units.
pub const ARC_HEIGHT: f64 = 40.0;

/// How much faster the ball's flight progresses than the play itself.
pub const BALL_SPEEDUP: f64 = 1.5;

/// Quadratic ease-in-out: accelerates through the first half, decelerates
/// through the second.
pub fn ease_in_out(t: f64) -> f64 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - 2.0 * (1.0 - t) * (1.0 - t)
    }
}

/// Flight progress of the ball for play progress `t`.
///
/// The ball lands before the carrier finishes, then rides with the play.
pub fn ball_progress(t: f64) -> f64 {
    let t = if t.is_nan() { 0.0 } else { t.max(0.0) };
    (t * BALL_SPEEDUP).min(1.0)
}

/// Height of the ball above the straight path at flight progress `ball_t`.
pub fn ball_arc_offset(ball_t: f64) -> f64 {
    // sin(PI) is not exactly zero in floating point
    if !(ball_t > 0.0 && ball_t < 1.0) {
        return 0.0;
    }
    ARC_HEIGHT * (ball_t * PI).sin()
}
