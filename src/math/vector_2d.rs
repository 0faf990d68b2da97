//! 2D vector helpers that `nalgebra` leaves to the caller.

use crate::error::{GeometryError, Result};

use super::{Vector2, TOLERANCE};

/// Scalar 2D cross product `a.x * b.y - a.y * b.x`.
///
/// Positive when `b` lies counter-clockwise of `a`.
#[must_use]
pub fn cross(a: &Vector2, b: &Vector2) -> f64 {
    a.x * b.y - a.y * b.x
}

/// Signed angle in `(-π, π]` turning `a` onto `b`, positive counter-clockwise.
#[must_use]
pub fn signed_angle(a: &Vector2, b: &Vector2) -> f64 {
    cross(a, b).atan2(a.dot(b))
}

/// Rotates `v` by -90° (clockwise in a y-up frame).
#[must_use]
pub fn rotate_cw(v: &Vector2) -> Vector2 {
    Vector2::new(v.y, -v.x)
}

/// Rotates `v` by +90° (counter-clockwise in a y-up frame).
#[must_use]
pub fn rotate_ccw(v: &Vector2) -> Vector2 {
    Vector2::new(-v.y, v.x)
}

/// Returns `v` scaled to unit length.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `v` is shorter than [`TOLERANCE`]
/// or not finite.
pub fn normalize(v: &Vector2) -> Result<Vector2> {
    let len = v.norm();
    if !len.is_finite() || len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(*v / len)
}

/// Unit vector pointing at `angle` radians from the +x axis.
#[must_use]
pub fn from_angle(angle: f64) -> Vector2 {
    Vector2::new(angle.cos(), angle.sin())
}
