//! Lookup tables of points spaced evenly by arc length
//!
//! A table is built in two passes. The spline is first sampled densely with a parameter
//! increment of `step / total_length`. The dense samples are then walked while keeping the
//! last emitted point: as soon as a sample lies at least `step` away, a new point is emitted
//! exactly `step` further along the line towards that sample, and the same sample is tested
//! again. The emitted points therefore sit on chords of the spline rather than on the spline
//! itself, but consecutive points are always exactly `step` apart, except for the final
//! endpoint which is appended as is.
//!
//! # Example
//!
//! ```rust
//! use bezier_spline::{cubic, spline};
//! use bezier_spline::modules::sample::generate_lut;
//!
//! let spline = spline!([cubic!([(0, 0), (1, 0), (2, 0), (3, 0)])]);
//! let lut = generate_lut(&spline, 0.5).unwrap();
//!
//! assert_eq!(lut.points()[0], spline.point_at(0.0));
//! assert_eq!(lut.points()[lut.len() - 1], spline.point_at(1.0));
//! ```

use crate::constants::{EPSILON, MAX_LUT_SAMPLES};
use crate::data::{BezierSpline, Point, SampleWindow};
use crate::error::{BezierError, BezierResult};
use log::debug;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookupTable {
    points: Vec<Point>,
    step_world_units: f64,
}

impl LookupTable {
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Spacing the table was built with
    pub fn step_world_units(&self) -> f64 {
        self.step_world_units
    }

    /// Nearest table point to progress `u`
    ///
    /// `u` is clamped to `[0, 1]` and mapped linearly onto the index range. No interpolation
    /// takes place between neighbouring points.
    pub fn sample_point(&self, u: f64) -> BezierResult<Point> {
        let last = self
            .points
            .len()
            .checked_sub(1)
            .ok_or(BezierError::LookupTableEmpty)?;
        let index = (u.clamp(0.0, 1.0) * last as f64).round() as usize;
        Ok(self.points[index.min(last)])
    }

    /// Like [`LookupTable::sample_point`] with `u` first mapped into `window`
    pub fn sample_point_windowed(&self, u: f64, window: &SampleWindow) -> BezierResult<Point> {
        self.sample_point(window.map(u))
    }
}

/// Build a lookup table whose points are `step_world_units` apart along the spline
///
/// Fails when the step is not a positive finite number, or when it is so small compared to
/// the spline length that more than `MAX_LUT_SAMPLES` dense samples would be needed.
pub fn generate_lut(spline: &BezierSpline, step_world_units: f64) -> BezierResult<LookupTable> {
    if !step_world_units.is_finite() || step_world_units <= 0.0 {
        return Err(BezierError::InvalidParameter(format!(
            "lookup table step must be positive, got {}",
            step_world_units
        )));
    }

    let start = spline.point_at(0.0);
    let end = spline.point_at(1.0);
    let total_length = spline.total_length();

    if total_length <= EPSILON {
        let mut points = vec![start];
        if end != start {
            points.push(end);
        }
        return Ok(LookupTable {
            points,
            step_world_units,
        });
    }

    let increment = step_world_units / total_length;
    let sample_count = (1.0 / increment).ceil();
    if sample_count > MAX_LUT_SAMPLES as f64 {
        return Err(BezierError::InvalidParameter(format!(
            "lookup table step {} needs {} samples for a length of {}",
            step_world_units, sample_count, total_length
        )));
    }

    let mut dense: Vec<Point> = (0..sample_count as usize)
        .map(|k| k as f64 * increment)
        .take_while(|t| *t < 1.0)
        .map(|t| spline.point_at(t))
        .collect();
    dense.push(end);

    let mut points = vec![start];
    let mut previous = start;
    let step_squared = step_world_units * step_world_units;
    let mut i = 0;

    while i < dense.len() {
        let offset = dense[i] - previous;
        if offset.length_squared() < step_squared {
            i += 1;
            continue;
        }
        let Some(direction) = offset.try_normalize() else {
            i += 1;
            continue;
        };
        previous += direction * step_world_units;
        points.push(previous);
    }

    if points.last() != Some(&end) {
        points.push(end);
    }

    debug!(
        "lookup table: {} points from {} samples, step {}, length {:.4}",
        points.len(),
        dense.len(),
        step_world_units,
        total_length
    );

    Ok(LookupTable {
        points,
        step_world_units,
    })
}
