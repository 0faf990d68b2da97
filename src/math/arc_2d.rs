//! Circular arc evaluation in center-radius-angle form.
//!
//! Sweep convention: `sweep > 0` is counter-clockwise, `sweep < 0` clockwise.

use std::f64::consts::TAU;

use super::vector_2d::{from_angle, rotate_ccw, rotate_cw};
use super::{Point2, Vector2};

/// Evaluates a point on an arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(center: &Point2, radius: f64, start_angle: f64, sweep: f64, t: f64) -> Point2 {
    *center + from_angle(start_angle + sweep * t) * radius
}

/// Computes the unit tangent direction on an arc at parameter `t` in `[0, 1]`.
///
/// The tangent points in the direction of increasing `t`.
#[must_use]
pub fn arc_tangent_at(start_angle: f64, sweep: f64, t: f64) -> Vector2 {
    let radial = from_angle(start_angle + sweep * t);
    if sweep > 0.0 {
        rotate_ccw(&radial)
    } else {
        rotate_cw(&radial)
    }
}

/// Number of points used to approximate an arc when a full circle gets
/// `points_per_circle` points. Never less than 2 (the endpoints).
#[must_use]
pub fn arc_point_count(sweep: f64, points_per_circle: usize) -> usize {
    #[allow(clippy::cast_precision_loss)]
    let n = (sweep.abs() / TAU * points_per_circle as f64).round();
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let n = n as usize;
    n.max(2)
}
