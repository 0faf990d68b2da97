mod arc;
mod line;

pub use arc::Arc;
pub use line::Line;

use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2};
use crate::tessellation::TessellationParams;

/// Contract shared by everything that can be walked by arc length.
///
/// Positions are arc-length distances from the start, valid in
/// `[0, length()]`.
pub trait PathCurve {
    /// Returns the arc length.
    fn length(&self) -> f64;

    /// Approximates the curve as an ordered polyline.
    fn tessellate_with(&self, params: &TessellationParams) -> Vec<Point2>;

    /// Approximates the curve with the default resolution.
    fn tessellate(&self) -> Vec<Point2> {
        self.tessellate_with(&TessellationParams::default())
    }

    /// Returns the point and unit tangent at arc-length position `pos`.
    ///
    /// # Errors
    ///
    /// Returns an error if `pos` lies outside `[0, length()]`.
    fn sample_at(&self, pos: f64) -> Result<(Point2, Vector2)>;

    /// Returns a copy displaced sideways by `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if the displaced curve would be degenerate.
    fn offset(&self, offset: f64) -> Result<Self>
    where
        Self: Sized;

    /// Returns the first point of the curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve cannot be sampled.
    fn start_point(&self) -> Result<Point2> {
        Ok(self.sample_at(0.0)?.0)
    }

    /// Returns the last point of the curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the curve cannot be sampled.
    fn end_point(&self) -> Result<Point2> {
        Ok(self.sample_at(self.length())?.0)
    }
}

/// A single piece of a centerline.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// A straight segment.
    Line(Line),
    /// A circular arc.
    Arc(Arc),
}

impl From<Line> for Segment {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Arc> for Segment {
    fn from(arc: Arc) -> Self {
        Self::Arc(arc)
    }
}

impl PathCurve for Segment {
    fn length(&self) -> f64 {
        match self {
            Self::Line(line) => line.length(),
            Self::Arc(arc) => arc.length(),
        }
    }

    fn tessellate_with(&self, params: &TessellationParams) -> Vec<Point2> {
        match self {
            Self::Line(line) => line.tessellate_with(params),
            Self::Arc(arc) => arc.tessellate_with(params),
        }
    }

    fn sample_at(&self, pos: f64) -> Result<(Point2, Vector2)> {
        match self {
            Self::Line(line) => line.sample_at(pos),
            Self::Arc(arc) => arc.sample_at(pos),
        }
    }

    fn offset(&self, offset: f64) -> Result<Self> {
        Ok(match self {
            Self::Line(line) => Self::Line(line.offset(offset)?),
            Self::Arc(arc) => Self::Arc(arc.offset(offset)?),
        })
    }
}

/// Fails unless `pos` lies in `[0, length]`. NaN is rejected.
pub(crate) fn check_position(pos: f64, length: f64) -> Result<()> {
    if (0.0..=length).contains(&pos) {
        Ok(())
    } else {
        Err(GeometryError::ParameterOutOfRange {
            parameter: "pos",
            value: pos,
            min: 0.0,
            max: length,
        }
        .into())
    }
}
