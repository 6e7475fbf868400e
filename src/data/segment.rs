//! Bezier segment: a single cubic bezier curve with four control points

use crate::constants::{EPSILON, NORMAL_PARAMETER_NUDGE};
use crate::data::bounds::BoundingBox;
use crate::data::point::Point;
use crate::error::{BezierError, BezierResult};
use crate::modules::analysis::extrema;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// A cubic bezier segment
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierSegment {
    /// Control points: start anchor, start handle, end handle, end anchor
    pub points: [Point; 4],
}

/// Segments produced by splitting, together with the parameter range of the split
#[derive(Debug, Clone, PartialEq)]
pub struct SplitResult {
    pub segments: Vec<BezierSegment>,
    pub t1: f64,
    pub t2: f64,
}

impl Default for BezierSegment {
    /// A straight segment along +X starting at `(1, 0, 0)`
    fn default() -> Self {
        Self::new(
            Point::new(1.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
            Point::new(3.0, 0.0, 0.0),
            Point::new(4.0, 0.0, 0.0),
        )
    }
}

impl BezierSegment {
    /// Create a cubic segment with 4 control points
    pub fn new(p1: Point, p2: Point, p3: Point, p4: Point) -> Self {
        Self {
            points: [p1, p2, p3, p4],
        }
    }

    pub fn start(&self) -> Point {
        self.points[0]
    }

    pub fn end(&self) -> Point {
        self.points[3]
    }

    /// Get a point on the bezier curve at parameter t, clamped to `[0, 1]`
    pub fn point_at(&self, t: f64) -> Point {
        let t = t.clamp(0.0, 1.0);
        let [p1, p2, p3, p4] = self.points;
        let t1 = 1.0 - t;

        // B(t) = (1-t)^3 * p1 + 3(1-t)^2 * t * p2 + 3(1-t) * t^2 * p3 + t^3 * p4
        t1.powi(3) * p1 + 3.0 * t1.powi(2) * t * p2 + 3.0 * t1 * t.powi(2) * p3 + t.powi(3) * p4
    }

    /// First derivative at parameter t
    ///
    /// Unlike [`point_at`](Self::point_at) the parameter is not clamped, so tangents can be
    /// extrapolated slightly past either end.
    pub fn derivative(&self, t: f64) -> Point {
        let [p1, p2, p3, p4] = self.points;
        let t1 = 1.0 - t;

        3.0 * t1 * t1 * (p2 - p1) + 6.0 * t1 * t * (p3 - p2) + 3.0 * t * t * (p4 - p3)
    }

    /// Unit tangent at parameter t
    pub fn direction(&self, t: f64) -> BezierResult<Point> {
        self.derivative(t)
            .try_normalize()
            .ok_or(BezierError::DegenerateCurve { t })
    }

    /// Unit normal at parameter t
    ///
    /// The tangent is turned a quarter turn around the axis spanned by the tangents at `t`
    /// and slightly after `t`. Straight segments have no such axis and report
    /// [`BezierError::DegenerateCurve`].
    pub fn normal(&self, t: f64) -> BezierResult<Point> {
        let r1 = self.direction(t)?;
        let r2 = self.direction(t + NORMAL_PARAMETER_NUDGE)?;
        let axis = r2.cross(&r1);

        r1.rotate_around(&axis, FRAC_PI_2)
            .and_then(|n| n.try_normalize())
            .ok_or(BezierError::DegenerateCurve { t })
    }

    /// The ten points of one de Casteljau construction at parameter t
    ///
    /// Layout: the 4 control points, 3 first-level lerps, 2 second-level lerps,
    /// and the point on the curve.
    pub fn hull(&self, t: f64) -> [Point; 10] {
        let [p0, p1, p2, p3] = self.points;
        let p4 = p0.lerp(&p1, t);
        let p5 = p1.lerp(&p2, t);
        let p6 = p2.lerp(&p3, t);
        let p7 = p4.lerp(&p5, t);
        let p8 = p5.lerp(&p6, t);
        let p9 = p7.lerp(&p8, t);

        [p0, p1, p2, p3, p4, p5, p6, p7, p8, p9]
    }

    /// Split into the two segments covering `[0, t]` and `[t, 1]`
    pub fn split(&self, t: f64) -> (BezierSegment, BezierSegment) {
        let h = self.hull(t);
        (
            BezierSegment::new(h[0], h[4], h[7], h[9]),
            BezierSegment::new(h[9], h[8], h[6], h[3]),
        )
    }

    /// Split at two parameters of this segment
    ///
    /// With `mid_only` the result holds the single segment covering `[t1, t2]`,
    /// otherwise the two outer segments covering `[0, t1]` and `[t2, 1]`.
    /// Parameters are clamped to `[0, 1]` and put in ascending order.
    pub fn split_range(&self, t1: f64, t2: f64, mid_only: bool) -> SplitResult {
        let (t1, t2) = ordered_range(t1, t2);
        let (first, rest) = self.split(t1);

        // t2 lives in the parameter space of the whole segment, `rest` starts at t1
        let local = if 1.0 - t1 <= EPSILON {
            0.0
        } else {
            (t2 - t1) / (1.0 - t1)
        };
        let (mid, last) = rest.split(local);

        let segments = if mid_only {
            vec![mid]
        } else {
            vec![first, last]
        };
        SplitResult { segments, t1, t2 }
    }

    /// The part of this segment between `t1` and `t2`
    pub fn sub_segment(&self, t1: f64, t2: f64) -> BezierSegment {
        let (t1, t2) = ordered_range(t1, t2);
        let (_, rest) = self.split(t1);
        let local = if 1.0 - t1 <= EPSILON {
            0.0
        } else {
            (t2 - t1) / (1.0 - t1)
        };
        rest.split(local).0
    }

    /// Axis aligned bounding box computed from the exact extrema
    pub fn bounding_box(&self) -> BoundingBox {
        extrema::bounding_box(self)
    }

    /// Generate a series of evenly parameterized points along the segment
    pub fn sample_points(&self, num_points: usize) -> Vec<Point> {
        match num_points {
            0 => vec![],
            1 => vec![self.start()],
            _ => (0..num_points)
                .map(|i| self.point_at(i as f64 / (num_points - 1) as f64))
                .collect(),
        }
    }
}

fn ordered_range(t1: f64, t2: f64) -> (f64, f64) {
    let t1 = t1.clamp(0.0, 1.0);
    let t2 = t2.clamp(0.0, 1.0);
    if t1 <= t2 {
        (t1, t2)
    } else {
        (t2, t1)
    }
}
