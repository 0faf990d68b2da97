use tracing::{debug, trace};

use crate::error::{GeometryError, PathError, Result};
use crate::math::vector_2d::signed_angle;
use crate::math::{Point2, Vector2, TOLERANCE};
use crate::tessellation::TessellationParams;

use super::fillet::{Fillet, MIN_TURN};
use super::segment::{check_position, Line, PathCurve, Segment};

/// Fillet radius used when none is given.
pub const DEFAULT_FILLET_RADIUS: f64 = 50.0;

/// Leg remnants shorter than this are dropped so that fillets on
/// neighbouring corners can meet directly.
const MIN_LEG_REMNANT: f64 = 1e-9;

/// An ordered path of lines and arcs, walked first to last.
///
/// A `CenterLine` is immutable once built; offsetting produces a new one.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CenterLine {
    segments: Vec<Segment>,
}

impl CenterLine {
    /// Creates a path from already constructed segments.
    ///
    /// Continuity between consecutive segments is not checked.
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Builds a path through `points`, rounding every interior corner with
    /// an arc of `radius`.
    ///
    /// # Errors
    ///
    /// See [`CenterLineBuilder::build`].
    pub fn from_points(points: &[Point2], radius: f64) -> Result<Self> {
        CenterLineBuilder::new(points.to_vec()).radius(radius).build()
    }

    /// Returns the segments in traversal order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the number of segments.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// Returns whether the path has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl PathCurve for CenterLine {
    fn length(&self) -> f64 {
        self.segments.iter().map(PathCurve::length).sum()
    }

    /// Concatenates the tessellation of every segment. Joints shared by two
    /// segments appear twice.
    fn tessellate_with(&self, params: &TessellationParams) -> Vec<Point2> {
        self.segments
            .iter()
            .flat_map(|s| s.tessellate_with(params))
            .collect()
    }

    fn sample_at(&self, pos: f64) -> Result<(Point2, Vector2)> {
        let Some((last, init)) = self.segments.split_last() else {
            return Err(PathError::Empty.into());
        };
        check_position(pos, self.length())?;

        let mut remaining = pos;
        for segment in init {
            let len = segment.length();
            if remaining <= len {
                return segment.sample_at(remaining);
            }
            remaining -= len;
        }
        // Absorbs rounding left over from the subtraction scan.
        last.sample_at(remaining.min(last.length()))
    }

    /// Offsets every segment by `offset`, in order.
    ///
    /// Lines move to the right of travel while arcs grow their radius, so
    /// joints at clockwise fillets (right turns) open by `2 * offset`.
    fn offset(&self, offset: f64) -> Result<Self> {
        let segments = self
            .segments
            .iter()
            .map(|s| s.offset(offset))
            .collect::<Result<Vec<_>>>()?;
        debug!(offset, segments = segments.len(), "offset centerline");
        Ok(Self::new(segments))
    }
}

/// Assembles a [`CenterLine`] from a point list.
///
/// Consecutive points become straight legs. Each interior corner is
/// replaced by a [`Fillet`]: both adjoining legs are cut back to the
/// fillet's tangent points and the arc is spliced in between. A radius of
/// zero keeps sharp corners; collinear corners never get an arc.
#[derive(Debug, Clone)]
pub struct CenterLineBuilder {
    points: Vec<Point2>,
    radius: f64,
}

impl CenterLineBuilder {
    /// Starts a builder over `points` with [`DEFAULT_FILLET_RADIUS`].
    #[must_use]
    pub fn new(points: Vec<Point2>) -> Self {
        Self {
            points,
            radius: DEFAULT_FILLET_RADIUS,
        }
    }

    /// Sets the corner fillet radius.
    #[must_use]
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    /// Builds the path.
    ///
    /// Fewer than two points give an empty path.
    ///
    /// # Errors
    ///
    /// - `GeometryError::ZeroVector` if two consecutive points coincide
    /// - `GeometryError::Degenerate` if the radius is negative or not
    ///   finite, a corner reverses direction, or the fillets at both ends
    ///   of a leg need more than its length
    pub fn build(&self) -> Result<CenterLine> {
        if !(self.radius.is_finite() && self.radius >= 0.0) {
            return Err(GeometryError::Degenerate(format!(
                "fillet radius must be non-negative, got {}",
                self.radius
            ))
            .into());
        }
        if self.points.len() < 2 {
            debug!(points = self.points.len(), "centerline has no segments");
            return Ok(CenterLine::default());
        }

        let legs = self
            .points
            .windows(2)
            .map(|w| Line::new(w[0], w[1]))
            .collect::<Result<Vec<_>>>()?;

        // fillets[i] rounds the corner between legs[i] and legs[i + 1].
        let fillets = legs
            .windows(2)
            .enumerate()
            .map(|(i, pair)| self.corner_fillet(i, &pair[0], &pair[1]))
            .collect::<Result<Vec<_>>>()?;

        let mut segments = Vec::with_capacity(legs.len() * 2);
        for (i, leg) in legs.iter().enumerate() {
            let entry = i.checked_sub(1).and_then(|j| fillets[j].as_ref());
            let exit = fillets.get(i).and_then(Option::as_ref);

            if let Some(fillet) = entry {
                segments.push(Segment::Arc(fillet.arc().clone()));
            }

            let cut = entry.map_or(0.0, Fillet::setback) + exit.map_or(0.0, Fillet::setback);
            let remnant = leg.length() - cut;
            if remnant < -MIN_LEG_REMNANT {
                return Err(GeometryError::Degenerate(format!(
                    "fillet radius {} does not fit leg {i} of length {}",
                    self.radius,
                    leg.length()
                ))
                .into());
            }
            if remnant > MIN_LEG_REMNANT {
                let start = entry.map_or(*leg.p1(), |f| *f.end());
                let end = exit.map_or(*leg.p2(), |f| *f.start());
                segments.push(Segment::Line(Line::new(start, end)?));
            }
        }

        let arcs = fillets.iter().flatten().count();
        debug!(
            points = self.points.len(),
            radius = self.radius,
            segments = segments.len(),
            fillets = arcs,
            "built centerline"
        );
        Ok(CenterLine::new(segments))
    }

    /// Returns the fillet for the corner after leg `index`, or `None` when
    /// the corner stays as is.
    fn corner_fillet(&self, index: usize, incoming: &Line, outgoing: &Line) -> Result<Option<Fillet>> {
        if self.radius < TOLERANCE {
            return Ok(None);
        }
        if signed_angle(incoming.tangent(), outgoing.tangent()).abs() < MIN_TURN {
            return Ok(None);
        }
        let fillet = Fillet::new(incoming.p1(), incoming.p2(), outgoing.p2(), self.radius)?;
        trace!(corner = index + 1, setback = fillet.setback(), "inserted fillet");
        Ok(Some(fillet))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::CenterLineError;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn pts(coords: &[(f64, f64)]) -> Vec<Point2> {
        coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    fn right_angle() -> CenterLine {
        CenterLine::from_points(&pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]), 2.0).unwrap()
    }

    #[test]
    fn fewer_than_two_points_is_empty() {
        for input in [vec![], pts(&[(1.0, 1.0)])] {
            let path = CenterLine::from_points(&input, 5.0).unwrap();
            assert!(path.is_empty());
            assert_abs_diff_eq!(path.length(), 0.0);
            assert!(path.tessellate().is_empty());
        }
    }

    #[test]
    fn sampling_empty_path_fails() {
        assert!(matches!(
            CenterLine::default().sample_at(0.0),
            Err(CenterLineError::Path(PathError::Empty))
        ));
    }

    #[test]
    fn two_points_make_one_line() {
        let path = CenterLine::from_points(&pts(&[(0.0, 0.0), (10.0, 0.0)]), 5.0).unwrap();
        assert_eq!(path.segment_count(), 1);
        assert!(matches!(path.segments()[0], Segment::Line(_)));
        assert_abs_diff_eq!(path.length(), 10.0);
        let (p, t) = path.sample_at(5.0).unwrap();
        assert_abs_diff_eq!(p, Point2::new(5.0, 0.0));
        assert_abs_diff_eq!(t, Vector2::new(1.0, 0.0));
    }

    #[test]
    fn corner_is_filleted() {
        let path = right_angle();
        assert_eq!(path.segment_count(), 3);
        let Segment::Line(first) = &path.segments()[0] else {
            panic!("expected line");
        };
        let Segment::Arc(arc) = &path.segments()[1] else {
            panic!("expected arc");
        };
        let Segment::Line(last) = &path.segments()[2] else {
            panic!("expected line");
        };
        assert_abs_diff_eq!(*first.p2(), Point2::new(8.0, 0.0), epsilon = 1e-10);
        assert_abs_diff_eq!(arc.delta_angle(), FRAC_PI_2, epsilon = 1e-10);
        assert_abs_diff_eq!(*last.p1(), Point2::new(10.0, 2.0), epsilon = 1e-10);
        assert_abs_diff_eq!(path.length(), 16.0 + PI, epsilon = 1e-10);
    }

    #[test]
    fn length_is_sum_of_segments() {
        let path = CenterLine::from_points(
            &pts(&[(0.0, 0.0), (30.0, 0.0), (40.0, 25.0), (10.0, 40.0), (-5.0, 20.0)]),
            4.0,
        )
        .unwrap();
        let sum: f64 = path.segments().iter().map(PathCurve::length).sum();
        assert_eq!(path.length(), sum);
    }

    #[test]
    fn sampling_is_continuous_across_joints() {
        let path = CenterLine::from_points(
            &pts(&[(0.0, 0.0), (30.0, 0.0), (40.0, 25.0), (10.0, 40.0), (-5.0, 20.0)]),
            4.0,
        )
        .unwrap();
        let eps = 1e-6;
        let mut boundary = 0.0;
        for segment in &path.segments()[..path.segment_count() - 1] {
            boundary += segment.length();
            let (a, ta) = path.sample_at(boundary - eps).unwrap();
            let (b, tb) = path.sample_at(boundary + eps).unwrap();
            assert!((a - b).norm() < 3.0 * eps, "gap at {boundary}");
            assert!((ta - tb).norm() < 1e-3, "kink at {boundary}");
        }
    }

    #[test]
    fn sample_endpoints() {
        let path = right_angle();
        assert_abs_diff_eq!(path.start_point().unwrap(), Point2::new(0.0, 0.0), epsilon = 1e-10);
        let (end, tangent) = path.sample_at(path.length()).unwrap();
        assert_abs_diff_eq!(end, Point2::new(10.0, 10.0), epsilon = 1e-10);
        assert_abs_diff_eq!(tangent, Vector2::new(0.0, 1.0), epsilon = 1e-10);
    }

    #[test]
    fn sample_out_of_range_fails() {
        let path = right_angle();
        assert!(path.sample_at(-0.1).is_err());
        assert!(path.sample_at(path.length() + 0.1).is_err());
    }

    #[test]
    fn tessellation_keeps_shared_joints() {
        let path = right_angle();
        let points = path.tessellate();
        // 2 + 36 (quarter circle) + 2
        assert_eq!(points.len(), 40);
        assert_abs_diff_eq!(points[1], points[2], epsilon = 1e-10);
        assert_abs_diff_eq!(points[37], points[38], epsilon = 1e-10);
        assert_abs_diff_eq!(points[39], Point2::new(10.0, 10.0));
    }

    #[test]
    fn zero_radius_keeps_sharp_corners() {
        let path = CenterLine::from_points(&pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]), 0.0).unwrap();
        assert_eq!(path.segment_count(), 2);
        assert_abs_diff_eq!(path.length(), 20.0);
    }

    #[test]
    fn collinear_corner_gets_no_arc() {
        let path = CenterLine::from_points(&pts(&[(0.0, 0.0), (5.0, 0.0), (10.0, 0.0)]), 2.0).unwrap();
        assert_eq!(path.segment_count(), 2);
        assert!(path.segments().iter().all(|s| matches!(s, Segment::Line(_))));
        assert_abs_diff_eq!(path.length(), 10.0);
    }

    #[test]
    fn shallow_corner_is_filleted() {
        let path = CenterLine::from_points(&pts(&[(0.0, 0.0), (10.0, 0.0), (20.0, 1e-7)]), 2.0).unwrap();
        assert_eq!(path.segment_count(), 3);
        let Segment::Arc(arc) = &path.segments()[1] else {
            panic!("expected arc");
        };
        assert_abs_diff_eq!(arc.delta_angle(), 1e-8, epsilon = 1e-20);
        assert_abs_diff_eq!(path.length(), 20.0, epsilon = 1e-9);
        assert_abs_diff_eq!(path.end_point().unwrap(), Point2::new(20.0, 1e-7), epsilon = 1e-12);

        for dy in [1e-8, 2e-8, 5e-8] {
            assert!(CenterLine::from_points(&pts(&[(0.0, 0.0), (10.0, 0.0), (20.0, dy)]), 2.0).is_ok());
        }
    }

    #[test]
    fn nearly_straight_corner_passes_through() {
        let path = CenterLine::from_points(&pts(&[(0.0, 0.0), (10.0, 0.0), (20.0, 1e-9)]), 2.0).unwrap();
        assert_eq!(path.segment_count(), 2);
        assert!(path.segments().iter().all(|s| matches!(s, Segment::Line(_))));
    }

    #[test]
    fn adjacent_fillets_can_meet() {
        let path = CenterLine::from_points(&pts(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (8.0, 4.0)]), 2.0).unwrap();
        assert_eq!(path.segment_count(), 4);
        let Segment::Arc(left) = &path.segments()[1] else {
            panic!("expected arc");
        };
        let Segment::Arc(right) = &path.segments()[2] else {
            panic!("expected arc");
        };
        assert!(left.is_ccw());
        assert!(!right.is_ccw());
        assert_abs_diff_eq!(path.length(), 4.0 + 2.0 * PI, epsilon = 1e-10);
    }

    #[test]
    fn oversized_radius_fails() {
        let result = CenterLine::from_points(&pts(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]), 5.0);
        assert!(matches!(
            result,
            Err(CenterLineError::Geometry(GeometryError::Degenerate(_)))
        ));
    }

    #[test]
    fn reversal_and_duplicates_fail() {
        assert!(CenterLine::from_points(&pts(&[(0.0, 0.0), (10.0, 0.0), (0.0, 0.0)]), 1.0).is_err());
        assert!(CenterLine::from_points(&pts(&[(0.0, 0.0), (0.0, 0.0), (1.0, 0.0)]), 1.0).is_err());
        assert!(CenterLine::from_points(&pts(&[(0.0, 0.0), (1.0, 0.0)]), -1.0).is_err());
    }

    #[test]
    fn builder_defaults_radius() {
        let builder = CenterLineBuilder::new(pts(&[(0.0, 0.0), (200.0, 0.0), (200.0, 200.0)]));
        let path = builder.build().unwrap();
        let Segment::Arc(arc) = &path.segments()[1] else {
            panic!("expected arc");
        };
        assert_abs_diff_eq!(arc.radius(), DEFAULT_FILLET_RADIUS);
    }

    #[test]
    fn offset_is_segment_wise() {
        let path = right_angle();
        let edge = path.offset(1.0).unwrap();
        assert_eq!(edge.segment_count(), path.segment_count());
        let Segment::Arc(arc) = &edge.segments()[1] else {
            panic!("expected arc");
        };
        assert_abs_diff_eq!(arc.radius(), 3.0);
        // Left turn: the outer edge stays joined.
        assert_abs_diff_eq!(edge.start_point().unwrap(), Point2::new(0.0, -1.0), epsilon = 1e-10);
        assert_abs_diff_eq!(edge.end_point().unwrap(), Point2::new(11.0, 10.0), epsilon = 1e-10);
        let boundary = edge.segments()[0].length();
        let (a, _) = edge.sample_at(boundary).unwrap();
        let (b, _) = edge.segments()[1].sample_at(0.0).unwrap();
        assert_abs_diff_eq!(a, b, epsilon = 1e-10);
    }

    #[test]
    fn offset_opens_right_turn_joints() {
        let path = CenterLine::from_points(&pts(&[(0.0, 0.0), (10.0, 0.0), (10.0, -10.0)]), 2.0).unwrap();
        let edge = path.offset(1.0).unwrap();
        let Segment::Arc(arc) = &edge.segments()[1] else {
            panic!("expected arc");
        };
        assert!(!arc.is_ccw());
        assert_abs_diff_eq!(arc.radius(), 3.0);
        let line_end = edge.segments()[0].end_point().unwrap();
        let arc_start = arc.start_point().unwrap();
        assert_abs_diff_eq!(line_end, Point2::new(8.0, -1.0), epsilon = 1e-10);
        assert_abs_diff_eq!(arc_start, Point2::new(8.0, 1.0), epsilon = 1e-10);
        assert_abs_diff_eq!((arc_start - line_end).norm(), 2.0, epsilon = 1e-10);
    }

    #[test]
    fn offset_round_trip() {
        let path = CenterLine::from_points(&pts(&[(0.0, 0.0), (10.0, 3.0), (12.0, 20.0)]), 0.0).unwrap();
        let back = path.offset(2.5).unwrap().offset(-2.5).unwrap();
        assert_relative_eq!(back.length(), path.length(), epsilon = 1e-12);

        let filleted = right_angle();
        let back = filleted.offset(1.5).unwrap().offset(-1.5).unwrap();
        let Segment::Arc(arc) = &back.segments()[1] else {
            panic!("expected arc");
        };
        assert_eq!(arc.radius(), 2.0);
    }

    #[test]
    fn offset_propagates_arc_failure() {
        assert!(matches!(
            right_angle().offset(2.0),
            Err(CenterLineError::Geometry(GeometryError::OffsetExceedsRadius { .. }))
        ));
        assert!(CenterLine::default().offset(3.0).unwrap().is_empty());
    }
}
