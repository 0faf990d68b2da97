use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::arc_2d::{arc_point_at, arc_point_count, arc_tangent_at};
use crate::math::{Point2, Vector2, TOLERANCE};
use crate::tessellation::TessellationParams;

use super::{check_position, PathCurve};

/// A circular arc in the plane.
///
/// Starts at `start_angle` (radians, from +x) and sweeps by `delta_angle`:
/// positive sweeps run counter-clockwise, negative ones clockwise. The
/// sign of the sweep survives every transformation.
#[derive(Debug, Clone, PartialEq)]
pub struct Arc {
    center: Point2,
    radius: f64,
    start_angle: f64,
    delta_angle: f64,
    length: f64,
}

impl Arc {
    /// Creates a new arc.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the arc circle
    /// * `radius` - Radius (must be positive)
    /// * `start_angle` - Angle of the first point, in radians
    /// * `delta_angle` - Signed sweep, in radians
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive, the sweep is zero or
    /// more than a full turn, or any input is not finite.
    pub fn new(center: Point2, radius: f64, start_angle: f64, delta_angle: f64) -> Result<Self> {
        if !(radius.is_finite() && radius >= TOLERANCE) {
            return Err(GeometryError::Degenerate(format!("arc radius must be positive, got {radius}")).into());
        }
        if !(delta_angle.is_finite() && delta_angle.abs() >= TOLERANCE) {
            return Err(GeometryError::Degenerate(format!("arc sweep must be non-zero, got {delta_angle}")).into());
        }
        if delta_angle.abs() > TAU + TOLERANCE {
            return Err(GeometryError::Degenerate(format!("arc sweep exceeds a full turn, got {delta_angle}")).into());
        }
        if !(start_angle.is_finite() && center.x.is_finite() && center.y.is_finite()) {
            return Err(GeometryError::Degenerate("arc placement must be finite".into()).into());
        }
        Ok(Self {
            center,
            radius,
            start_angle,
            delta_angle,
            length: radius * delta_angle.abs(),
        })
    }

    /// Returns the center of the arc.
    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Returns the radius of the arc.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the angle of the first point, in radians.
    #[must_use]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }

    /// Returns the signed sweep.
    #[must_use]
    pub fn delta_angle(&self) -> f64 {
        self.delta_angle
    }

    /// Returns the angle of the last point, `start_angle + delta_angle`.
    #[must_use]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.delta_angle
    }

    /// Returns whether the arc sweeps counter-clockwise.
    #[must_use]
    pub fn is_ccw(&self) -> bool {
        self.delta_angle > 0.0
    }
}

impl PathCurve for Arc {
    fn length(&self) -> f64 {
        self.length
    }

    fn tessellate_with(&self, params: &TessellationParams) -> Vec<Point2> {
        let n = arc_point_count(self.delta_angle, params.points_per_circle());
        #[allow(clippy::cast_precision_loss)]
        let last = (n - 1) as f64;
        (0..n)
            .map(|i| {
                #[allow(clippy::cast_precision_loss)]
                let t = i as f64 / last;
                arc_point_at(&self.center, self.radius, self.start_angle, self.delta_angle, t)
            })
            .collect()
    }

    fn sample_at(&self, pos: f64) -> Result<(Point2, Vector2)> {
        check_position(pos, self.length)?;
        let t = pos / self.length;
        Ok((
            arc_point_at(&self.center, self.radius, self.start_angle, self.delta_angle, t),
            arc_tangent_at(self.start_angle, self.delta_angle, t),
        ))
    }

    /// Grows the radius by `offset`, keeping center and angles.
    ///
    /// The radius grows for positive offsets whatever the sweep direction.
    ///
    /// Offsets of at least the radius are rejected, as are negative offsets
    /// that would shrink the radius to zero or below.
    fn offset(&self, offset: f64) -> Result<Self> {
        let radius = self.radius + offset;
        if offset.is_nan() || offset >= self.radius || radius < TOLERANCE {
            return Err(GeometryError::OffsetExceedsRadius {
                offset,
                radius: self.radius,
            }
            .into());
        }
        Self::new(self.center, radius, self.start_angle, self.delta_angle)
    }
}
