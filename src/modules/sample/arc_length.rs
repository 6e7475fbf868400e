use crate::constants::LENGTH_SAMPLE_COUNT;
use crate::data::BezierSpline;

/// Approximate arc length of every segment of a spline
///
/// The global parameter is walked over `[0, 1]` in `LENGTH_SAMPLE_COUNT` equal steps and each
/// chord is added to the segment the later sample falls in. Splines with many segments get
/// only a few chords per segment, so the estimate is coarse.
pub fn segment_lengths(spline: &BezierSpline) -> Vec<f64> {
    let mut lengths = vec![0.0; spline.curve_count()];
    let mut previous = spline.point_at(0.0);

    for k in 0..=LENGTH_SAMPLE_COUNT {
        let t = k as f64 / LENGTH_SAMPLE_COUNT as f64;
        let (index, _) = spline.locate(t);
        let current = spline.point_at(t);
        lengths[index] += current.distance(&previous);
        previous = current;
    }

    lengths
}
