use super::IntersectionConfig;
use crate::data::{BezierSegment, BoundingBox, Point};
use crate::modules::analysis::reduce::reduce;
use log::{debug, trace};

/// Intersection points together with how much of the refinement budget was used
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntersectionReport {
    pub points: Vec<Point>,
    /// Refinement steps taken over all pairs
    pub iterations: usize,
    /// Candidates dropped for reaching the depth limit
    pub depth_exhausted: usize,
    /// Pairs of pieces abandoned for running out of iterations
    pub budget_exhausted: usize,
}

impl IntersectionReport {
    /// Whether any part of the search was cut short
    pub fn is_exhaustive(&self) -> bool {
        self.depth_exhausted == 0 && self.budget_exhausted == 0
    }
}

/// A segment together with its bounding box
#[derive(Debug, Clone, Copy)]
struct Piece {
    segment: BezierSegment,
    bounds: BoundingBox,
}

impl Piece {
    fn new(segment: BezierSegment) -> Self {
        Self {
            segment,
            bounds: segment.bounding_box(),
        }
    }

    fn halves(&self) -> [Piece; 2] {
        let (left, right) = self.segment.split(0.5);
        [Piece::new(left), Piece::new(right)]
    }

    fn overlaps(&self, other: &Piece, config: &IntersectionConfig) -> bool {
        self.bounds
            .overlaps_within(&other.bounds, config.contact_tolerance)
    }

    fn is_small(&self, config: &IntersectionConfig) -> bool {
        self.bounds.size.x + self.bounds.size.y < config.threshold
    }
}

/// Approximate points where a segment crosses itself
pub fn self_intersections(segment: &BezierSegment, config: &IntersectionConfig) -> Vec<Point> {
    self_intersections_report(segment, config).points
}

/// Like [`self_intersections`], also reporting budget usage
pub fn self_intersections_report(
    segment: &BezierSegment,
    config: &IntersectionConfig,
) -> IntersectionReport {
    let pieces: Vec<Piece> = reduce(segment).into_iter().map(Piece::new).collect();
    let mut report = IntersectionReport::default();

    // Neighbouring pieces always share an end point, so only pieces at least one apart are tested
    for (i, left) in pieces.iter().enumerate() {
        for right in pieces.iter().skip(i + 2) {
            if left.overlaps(right, config) {
                refine_pair(*left, *right, config, &mut report);
            }
        }
    }

    trace!(
        "self intersections: {} pieces, {} points, {} iterations",
        pieces.len(),
        report.points.len(),
        report.iterations
    );
    report
}

/// Approximate points where two segments cross
pub fn pair_intersections(
    left: &BezierSegment,
    right: &BezierSegment,
    config: &IntersectionConfig,
) -> Vec<Point> {
    pair_intersections_report(left, right, config).points
}

/// Like [`pair_intersections`], also reporting budget usage
pub fn pair_intersections_report(
    left: &BezierSegment,
    right: &BezierSegment,
    config: &IntersectionConfig,
) -> IntersectionReport {
    let left_pieces: Vec<Piece> = reduce(left).into_iter().map(Piece::new).collect();
    let right_pieces: Vec<Piece> = reduce(right).into_iter().map(Piece::new).collect();
    let mut report = IntersectionReport::default();

    for l in &left_pieces {
        for r in &right_pieces {
            if l.overlaps(r, config) {
                refine_pair(*l, *r, config, &mut report);
            }
        }
    }

    trace!(
        "pair intersections: {}x{} pieces, {} points, {} iterations",
        left_pieces.len(),
        right_pieces.len(),
        report.points.len(),
        report.iterations
    );
    report
}

/// Halve both pieces until their boxes are small, keeping only overlapping combinations
///
/// Points are only added to the report if the pair finishes within the iteration budget.
fn refine_pair(
    left: Piece,
    right: Piece,
    config: &IntersectionConfig,
    report: &mut IntersectionReport,
) {
    let mut points = Vec::new();
    let mut stack = vec![(left, right, 0usize)];
    let mut iterations = 0;
    let mut too_deep = 0;

    while let Some((left, right, depth)) = stack.pop() {
        if iterations >= config.max_iterations {
            debug!(
                "intersection refinement gave up after {} iterations, {} candidates left",
                iterations,
                stack.len() + 1
            );
            report.iterations += iterations;
            report.depth_exhausted += too_deep;
            report.budget_exhausted += 1;
            return;
        }
        iterations += 1;

        if left.is_small(config) && right.is_small(config) {
            points.push((left.bounds.center + right.bounds.center) / 2.0);
            continue;
        }

        if depth >= config.max_depth {
            too_deep += 1;
            continue;
        }

        let [l0, l1] = left.halves();
        let [r0, r1] = right.halves();
        // pushed in reverse so the first combination is examined first
        for (l, r) in [(l1, r0), (l1, r1), (l0, r1), (l0, r0)] {
            if l.overlaps(&r, config) {
                stack.push((l, r, depth + 1));
            }
        }
    }

    if too_deep > 0 {
        debug!(
            "intersection refinement hit depth {} on {} candidates",
            config.max_depth, too_deep
        );
    }
    report.iterations += iterations;
    report.depth_exhausted += too_deep;
    report.points.extend(points);
}
