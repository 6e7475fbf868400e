//! Reduce a cubic segment into monotonic sub-segments
//!
//! The segment is cut at every extremum (and inflection candidate) on every axis, so each
//! resulting piece is monotonic along x, y and z. Bounding boxes of such pieces are tight,
//! which is what the intersection refinement relies on.

use crate::constants::PARAMETER_EPSILON;
use crate::data::BezierSegment;
use crate::modules::analysis::extrema::get_extrema;

/// Sorted cut parameters of a segment, always starting at 0 and ending at 1
///
/// Parameters closer together than a small epsilon are merged, and interior values that
/// fall onto either end are dropped, so no zero length piece is produced.
pub fn reduction_parameters(segment: &BezierSegment) -> Vec<f64> {
    let mut interior: Vec<f64> = get_extrema(segment)
        .into_iter()
        .flatten()
        .filter(|&t| t > PARAMETER_EPSILON && t < 1.0 - PARAMETER_EPSILON)
        .collect();
    interior.sort_by(f64::total_cmp);
    interior.dedup_by(|a, b| (*a - *b).abs() <= PARAMETER_EPSILON);

    let mut params = Vec::with_capacity(interior.len() + 2);
    params.push(0.0);
    params.extend(interior);
    params.push(1.0);
    params
}

/// Split a segment into its monotonic sub-segments, in order
pub fn reduce(segment: &BezierSegment) -> Vec<BezierSegment> {
    reduction_parameters(segment)
        .windows(2)
        .map(|w| segment.sub_segment(w[0], w[1]))
        .collect()
}
