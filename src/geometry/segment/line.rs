use crate::error::{GeometryError, Result};
use crate::math::vector_2d::rotate_cw;
use crate::math::{Point2, Vector2, TOLERANCE};
use crate::tessellation::TessellationParams;

use super::{check_position, PathCurve};

/// A straight segment from `p1` to `p2`.
///
/// Length, unit tangent and unit normal are cached at construction. The
/// normal is the tangent rotated by -90°, so a positive offset moves the
/// line to the right of its direction of travel (y-up).
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    p1: Point2,
    p2: Point2,
    length: f64,
    tangent: Vector2,
    normal: Vector2,
}

impl Line {
    /// Creates a line segment between two points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ZeroVector` if the endpoints coincide or are
    /// not finite.
    pub fn new(p1: Point2, p2: Point2) -> Result<Self> {
        let d = p2 - p1;
        let length = d.norm();
        if !length.is_finite() || length < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let tangent = d / length;
        Ok(Self {
            p1,
            p2,
            length,
            tangent,
            normal: rotate_cw(&tangent),
        })
    }

    /// Returns the start point.
    #[must_use]
    pub fn p1(&self) -> &Point2 {
        &self.p1
    }

    /// Returns the end point.
    #[must_use]
    pub fn p2(&self) -> &Point2 {
        &self.p2
    }

    /// Returns the unit direction from `p1` to `p2`.
    #[must_use]
    pub fn tangent(&self) -> &Vector2 {
        &self.tangent
    }

    /// Returns the unit normal (tangent rotated by -90°).
    #[must_use]
    pub fn normal(&self) -> &Vector2 {
        &self.normal
    }
}

impl PathCurve for Line {
    fn length(&self) -> f64 {
        self.length
    }

    /// A line is exact between its endpoints and is never subdivided.
    fn tessellate_with(&self, _params: &TessellationParams) -> Vec<Point2> {
        vec![self.p1, self.p2]
    }

    fn sample_at(&self, pos: f64) -> Result<(Point2, Vector2)> {
        check_position(pos, self.length)?;
        Ok((self.p1 + self.tangent * pos, self.tangent))
    }

    fn offset(&self, offset: f64) -> Result<Self> {
        let shift = self.normal * offset;
        Self::new(self.p1 + shift, self.p2 + shift)
    }
}
