use std::f64::consts::PI;

use crate::error::{GeometryError, Result};
use crate::math::vector_2d::{normalize, rotate_ccw, rotate_cw, signed_angle};
use crate::math::{Point2, TOLERANCE};

use super::segment::Arc;

/// Turns (and reversals) smaller than this many radians cannot be filleted.
pub(crate) const MIN_TURN: f64 = 1e-9;

/// A circular arc inscribed at the corner `p2` of the path `p1 → p2 → p3`,
/// tangent to both legs.
///
/// The arc runs from `start` (on leg `p1 → p2`) to `end` (on leg
/// `p2 → p3`), turning the same way the path does, so splicing it between
/// the trimmed legs leaves no kink in direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Fillet {
    arc: Arc,
    start: Point2,
    end: Point2,
    setback: f64,
}

impl Fillet {
    /// Fits a fillet of `radius` at corner `p2`.
    ///
    /// With `φ` the signed turn of the travel direction at the corner and
    /// `θ = π - |φ|` the angle between the legs: the tangent points sit
    /// `r / tan(θ/2)` back along each leg, the center lies `r` to the
    /// inside of the first tangent point and the arc sweeps `φ`.
    ///
    /// # Errors
    ///
    /// - `GeometryError::ZeroVector` if `p2` coincides with a neighbour
    /// - `GeometryError::Degenerate` if the radius is not positive, or the
    ///   legs are parallel (straight pass-through or full reversal)
    pub fn new(p1: &Point2, p2: &Point2, p3: &Point2, radius: f64) -> Result<Self> {
        if !(radius.is_finite() && radius >= TOLERANCE) {
            return Err(GeometryError::Degenerate(format!("fillet radius must be positive, got {radius}")).into());
        }

        let d_in = normalize(&(*p2 - *p1))?;
        let d_out = normalize(&(*p3 - *p2))?;

        let sweep = signed_angle(&d_in, &d_out);
        let theta = PI - sweep.abs();
        if sweep.abs() < MIN_TURN {
            return Err(GeometryError::Degenerate("cannot fillet a straight corner".into()).into());
        }
        if theta < MIN_TURN {
            return Err(GeometryError::Degenerate("cannot fillet a reversal corner".into()).into());
        }

        let setback = radius / (theta * 0.5).tan();
        let start = *p2 - d_in * setback;
        let end = *p2 + d_out * setback;

        // Left turns keep the center on the left of travel.
        let inward = if sweep > 0.0 { rotate_ccw(&d_in) } else { rotate_cw(&d_in) };
        let center = start + inward * radius;
        let start_angle = (-inward.y).atan2(-inward.x);

        Ok(Self {
            arc: Arc::new(center, radius, start_angle, sweep)?,
            start,
            end,
            setback,
        })
    }

    /// Returns the fitted arc.
    #[must_use]
    pub fn arc(&self) -> &Arc {
        &self.arc
    }

    /// Consumes the fillet, returning the arc.
    #[must_use]
    pub fn into_arc(self) -> Arc {
        self.arc
    }

    /// Tangent point on the incoming leg.
    #[must_use]
    pub fn start(&self) -> &Point2 {
        &self.start
    }

    /// Tangent point on the outgoing leg.
    #[must_use]
    pub fn end(&self) -> &Point2 {
        &self.end
    }

    /// Distance from the corner back to either tangent point.
    #[must_use]
    pub fn setback(&self) -> f64 {
        self.setback
    }
}

/// Fits an arc of `radius` tangent to `p1 → p2` and `p2 → p3` at corner `p2`.
///
/// # Errors
///
/// See [`Fillet::new`].
pub fn fit_arc(p1: &Point2, p2: &Point2, p3: &Point2, radius: f64) -> Result<Arc> {
    Fillet::new(p1, p2, p3, radius).map(Fillet::into_arc)
}
