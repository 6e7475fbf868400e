//! A spline: cubic bezier segments chained through shared anchors.
//!
//! Control points are stored flat. Index `3k` is the anchor of joint `k`, indices `3k - 1` and
//! `3k + 1` are its incoming and outgoing tangent handles. Every joint carries a
//! [`ContinuityMode`] that decides how moving one handle drags the other one along.
//!
//! A looping spline repeats its first anchor as its last one, so joint `0` and the last joint
//! describe the same anchor and always share their mode.

use crate::constants::{DEFAULT_BORDER_RADIUS, DEFAULT_ROAD_RADIUS, DEFAULT_STEP_WORLD_UNITS};
use crate::data::point::Point;
use crate::data::segment::BezierSegment;
use crate::error::{BezierError, BezierResult};
use crate::modules::sample::arc_length::segment_lengths;
use crate::modules::sample::lut::{generate_lut, LookupTable};
use log::trace;
use serde::{Deserialize, Serialize};

/// How the two tangent handles of a joint constrain each other
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ContinuityMode {
    /// Handles move independently
    #[default]
    Free,
    /// Handles point in opposite directions, each keeps its own length
    Aligned,
    /// Handles point in opposite directions with equal length
    Mirrored,
}

/// Sub-range of the lookup table that [`BezierSpline::sample_point`] maps onto
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleWindow {
    pub start: f64,
    pub end: f64,
}

impl Default for SampleWindow {
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 1.0,
        }
    }
}

impl SampleWindow {
    /// Map `u` in `[0, 1]` into the window
    pub fn map(&self, u: f64) -> f64 {
        self.start + (self.end - self.start) * u.clamp(0.0, 1.0)
    }
}

/// Per spline settings exchanged with the host
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplineSettings {
    /// Spacing of lookup table points, in world units
    pub step_world_units: f64,
    /// Road half-width, only read by the host mesh generator
    pub road_radius: f64,
    /// Border width, only read by the host mesh generator
    pub border_radius: f64,
    pub sample_window: SampleWindow,
}

impl Default for SplineSettings {
    fn default() -> Self {
        Self {
            step_world_units: DEFAULT_STEP_WORLD_UNITS,
            road_radius: DEFAULT_ROAD_RADIUS,
            border_radius: DEFAULT_BORDER_RADIUS,
            sample_window: SampleWindow::default(),
        }
    }
}

impl SplineSettings {
    /// Load settings from JSON, missing fields take their defaults
    pub fn from_json(json: &str) -> BezierResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// A chain of cubic bezier segments with per joint continuity
#[derive(Debug, Clone, PartialEq)]
pub struct BezierSpline {
    points: Vec<Point>,
    modes: Vec<ContinuityMode>,
    lengths: Vec<f64>,
    is_loop: bool,
    settings: SplineSettings,
    lut: Option<LookupTable>,
}

impl Default for BezierSpline {
    fn default() -> Self {
        Self::from_segment(&BezierSegment::default())
    }
}

impl BezierSpline {
    /// A single straight segment from `(1, 0, 0)` to `(4, 0, 0)` with free joints
    pub fn new() -> Self {
        Self::default()
    }

    /// An open spline made of one segment
    pub fn from_segment(segment: &BezierSegment) -> Self {
        let mut spline = Self {
            points: segment.points.to_vec(),
            modes: vec![ContinuityMode::Free; 2],
            lengths: vec![0.0],
            is_loop: false,
            settings: SplineSettings::default(),
            lut: None,
        };
        spline.recalculate_lengths();
        spline
    }

    /// An open spline from connected segments
    ///
    /// Each segment must start exactly where the previous one ends.
    pub fn from_segments(segments: &[BezierSegment]) -> BezierResult<Self> {
        let (first, rest) = segments
            .split_first()
            .ok_or_else(|| BezierError::InvalidSpline("no segments".to_string()))?;

        let mut points = first.points.to_vec();
        for (i, segment) in rest.iter().enumerate() {
            if points.last() != Some(&segment.start()) {
                return Err(BezierError::InvalidSpline(format!(
                    "segment {} does not start at the end of segment {}",
                    i + 1,
                    i
                )));
            }
            points.extend_from_slice(&segment.points[1..]);
        }

        let modes = vec![ContinuityMode::Free; segments.len() + 1];
        Self::from_parts(points, modes, false)
    }

    /// Build a spline from its flat arrays
    ///
    /// `points` must hold `3n + 1` points for `n >= 1` segments and `modes` one mode per
    /// joint. A looping spline must end on its start anchor and use the same mode on its
    /// first and last joint.
    pub fn from_parts(
        points: Vec<Point>,
        modes: Vec<ContinuityMode>,
        is_loop: bool,
    ) -> BezierResult<Self> {
        if points.len() < 4 || (points.len() - 1) % 3 != 0 {
            return Err(BezierError::InvalidSpline(format!(
                "{} control points do not form cubic segments",
                points.len()
            )));
        }
        let curve_count = (points.len() - 1) / 3;
        if modes.len() != curve_count + 1 {
            return Err(BezierError::InvalidSpline(format!(
                "expected {} joint modes, got {}",
                curve_count + 1,
                modes.len()
            )));
        }
        if let Some(p) = points.iter().find(|p| !p.is_finite()) {
            return Err(BezierError::InvalidSpline(format!(
                "non finite control point {:?}",
                p
            )));
        }
        if is_loop {
            if points.first() != points.last() {
                return Err(BezierError::InvalidSpline(
                    "looping spline does not end on its start anchor".to_string(),
                ));
            }
            if modes.first() != modes.last() {
                return Err(BezierError::InvalidSpline(
                    "looping spline has different modes on its wrap joint".to_string(),
                ));
            }
        }

        let mut spline = Self {
            points,
            modes,
            lengths: vec![0.0; curve_count],
            is_loop,
            settings: SplineSettings::default(),
            lut: None,
        };
        spline.recalculate_lengths();
        Ok(spline)
    }

    pub fn control_point_count(&self) -> usize {
        self.points.len()
    }

    pub fn curve_count(&self) -> usize {
        (self.points.len() - 1) / 3
    }

    pub fn control_points(&self) -> &[Point] {
        &self.points
    }

    /// Continuity mode of every joint, indexed by anchor ordinal
    pub fn modes(&self) -> &[ContinuityMode] {
        &self.modes
    }

    /// Approximate arc length of every segment
    pub fn lengths(&self) -> &[f64] {
        &self.lengths
    }

    pub fn total_length(&self) -> f64 {
        self.lengths.iter().sum()
    }

    pub fn is_loop(&self) -> bool {
        self.is_loop
    }

    pub fn settings(&self) -> &SplineSettings {
        &self.settings
    }

    /// Replace the settings, discarding the lookup table
    pub fn set_settings(&mut self, settings: SplineSettings) {
        self.settings = settings;
        self.lut = None;
    }

    /// Change the lookup table spacing, discarding the lookup table
    pub fn set_step_world_units(&mut self, step_world_units: f64) {
        self.settings.step_world_units = step_world_units;
        self.lut = None;
    }

    /// The segment with the given index
    pub fn segment(&self, index: usize) -> BezierResult<BezierSegment> {
        if index >= self.curve_count() {
            return Err(BezierError::IndexOutOfRange {
                index,
                len: self.curve_count(),
            });
        }
        Ok(self.segment_unchecked(index))
    }

    pub fn segments(&self) -> Vec<BezierSegment> {
        (0..self.curve_count())
            .map(|i| self.segment_unchecked(i))
            .collect()
    }

    fn segment_unchecked(&self, index: usize) -> BezierSegment {
        let p = &self.points[index * 3..index * 3 + 4];
        BezierSegment::new(p[0], p[1], p[2], p[3])
    }

    pub fn control_point(&self, index: usize) -> BezierResult<Point> {
        self.points
            .get(index)
            .copied()
            .ok_or(BezierError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
    }

    /// Move a control point and enforce the continuity mode of its joint
    ///
    /// Moving an anchor drags both of its handles along by the same offset.
    pub fn set_control_point(&mut self, index: usize, point: Point) -> BezierResult<()> {
        self.check_index(index)?;
        if !point.is_finite() {
            return Err(BezierError::InvalidParameter(format!(
                "non finite control point {:?}",
                point
            )));
        }
        let last = self.points.len() - 1;

        if index % 3 == 0 {
            let delta = point - self.points[index];
            if self.is_loop && (index == 0 || index == last) {
                // both copies of the wrap anchor move together
                self.points[1] += delta;
                self.points[last - 1] += delta;
                self.points[0] = point;
                self.points[last] = point;
            } else {
                if index > 0 {
                    self.points[index - 1] += delta;
                }
                if index < last {
                    self.points[index + 1] += delta;
                }
                self.points[index] = point;
            }
        } else {
            self.points[index] = point;
        }

        trace!("control point {} moved to {:?}", index, point);
        self.enforce_joint(index);
        self.geometry_changed();
        Ok(())
    }

    /// Continuity mode of the joint closest to a control point
    pub fn control_point_mode(&self, index: usize) -> BezierResult<ContinuityMode> {
        self.check_index(index)?;
        Ok(self.modes[joint_of(index)])
    }

    /// Set the continuity mode of the joint closest to a control point
    pub fn set_control_point_mode(&mut self, index: usize, mode: ContinuityMode) -> BezierResult<()> {
        self.check_index(index)?;
        self.store_joint_mode(joint_of(index), mode);
        self.enforce_joint(index);
        self.geometry_changed();
        Ok(())
    }

    pub fn joint_mode(&self, joint: usize) -> BezierResult<ContinuityMode> {
        self.modes
            .get(joint)
            .copied()
            .ok_or(BezierError::IndexOutOfRange {
                index: joint,
                len: self.modes.len(),
            })
    }

    /// Set the continuity mode of a joint, addressed by anchor ordinal
    pub fn set_joint_mode(&mut self, joint: usize, mode: ContinuityMode) -> BezierResult<()> {
        if joint >= self.modes.len() {
            return Err(BezierError::IndexOutOfRange {
                index: joint,
                len: self.modes.len(),
            });
        }
        self.set_control_point_mode(joint * 3, mode)
    }

    fn store_joint_mode(&mut self, joint: usize, mode: ContinuityMode) {
        let last_joint = self.modes.len() - 1;
        self.modes[joint] = mode;
        if self.is_loop {
            if joint == 0 {
                self.modes[last_joint] = mode;
            } else if joint == last_joint {
                self.modes[0] = mode;
            }
        }
    }

    /// Re-apply the continuity mode of the joint closest to `index`
    ///
    /// The handle on the side of `index` (the incoming handle when `index` is the anchor)
    /// stays where it is and the opposite handle is adjusted. The open ends of a
    /// non-looping spline are never enforced.
    pub fn enforce_mode(&mut self, index: usize) -> BezierResult<()> {
        self.check_index(index)?;
        self.enforce_joint(index);
        Ok(())
    }

    fn enforce_joint(&mut self, index: usize) {
        let joint = joint_of(index);
        let mode = self.modes[joint];
        let last_joint = self.modes.len() - 1;
        if mode == ContinuityMode::Free || (!self.is_loop && (joint == 0 || joint == last_joint)) {
            return;
        }

        let count = self.points.len();
        let middle = joint * 3;
        let before = if middle == 0 { count - 2 } else { middle - 1 };
        let after = if middle + 1 >= count { 1 } else { middle + 1 };
        let (fixed, enforced) = if index <= middle {
            (before, after)
        } else {
            (after, before)
        };

        let anchor = self.points[middle];
        let mut tangent = anchor - self.points[fixed];
        if mode == ContinuityMode::Aligned {
            let Some(direction) = tangent.try_normalize() else {
                return;
            };
            tangent = direction * anchor.distance(&self.points[enforced]);
        }
        self.points[enforced] = anchor + tangent;

        trace!(
            "joint {} enforced {:?}: handle {} follows handle {}",
            joint,
            mode,
            enforced,
            fixed
        );
    }

    /// Append a straight segment along +X after the last anchor
    ///
    /// The new joint inherits the mode of the previous last joint. A looping spline is closed
    /// again by moving the new end anchor (and its handle) onto the start anchor.
    pub fn add_curve(&mut self) {
        let anchor = self.points[self.points.len() - 1];
        self.points.extend([
            anchor + Point::RIGHT,
            anchor + Point::RIGHT * 2.0,
            anchor + Point::RIGHT * 3.0,
        ]);
        let inherited = self.modes[self.modes.len() - 1];
        self.modes.push(inherited);

        let count = self.points.len();
        self.enforce_joint(count - 4);

        if self.is_loop {
            let start = self.points[0];
            let delta = start - self.points[count - 1];
            self.points[count - 2] += delta;
            self.points[count - 1] = start;
            let last_joint = self.modes.len() - 1;
            self.modes[last_joint] = self.modes[0];
            self.enforce_joint(0);
        }

        trace!("curve added, {} segments", self.curve_count());
        self.geometry_changed();
    }

    /// Open or close the spline
    ///
    /// Closing moves the last anchor (and its handle) onto the first anchor and copies the
    /// mode of joint 0 onto the wrap joint.
    pub fn set_loop(&mut self, is_loop: bool) {
        self.is_loop = is_loop;
        if is_loop {
            let last = self.points.len() - 1;
            let delta = self.points[0] - self.points[last];
            self.points[last - 1] += delta;
            self.points[last] = self.points[0];
            let last_joint = self.modes.len() - 1;
            self.modes[last_joint] = self.modes[0];
            self.enforce_joint(0);
        }
        self.geometry_changed();
    }

    /// Back to a single straight open segment, settings are kept
    pub fn reset(&mut self) {
        let settings = self.settings;
        *self = Self::new();
        self.settings = settings;
    }

    /// Segment index and local parameter for a global parameter `t`
    ///
    /// `t` is clamped to `[0, 1]`, which is spread evenly over the segments.
    pub fn locate(&self, t: f64) -> (usize, f64) {
        let curve_count = self.curve_count();
        if t >= 1.0 {
            return (curve_count - 1, 1.0);
        }
        let scaled = t.clamp(0.0, 1.0) * curve_count as f64;
        let index = (scaled.floor() as usize).min(curve_count - 1);
        (index, scaled - index as f64)
    }

    /// Point at global parameter `t`
    pub fn point_at(&self, t: f64) -> Point {
        let (index, t) = self.locate(t);
        self.segment_unchecked(index).point_at(t)
    }

    /// Derivative of the segment under global parameter `t`, per unit of local parameter
    pub fn velocity(&self, t: f64) -> Point {
        let (index, t) = self.locate(t);
        self.segment_unchecked(index).derivative(t)
    }

    /// Unit tangent at global parameter `t`
    pub fn direction(&self, t: f64) -> BezierResult<Point> {
        self.velocity(t)
            .try_normalize()
            .ok_or(BezierError::DegenerateCurve { t })
    }

    /// Recompute the arc length of every segment
    pub fn recalculate_lengths(&mut self) {
        self.lengths = segment_lengths(self);
    }

    /// Rebuild the lookup table with the configured step
    pub fn generate_lut(&mut self) -> BezierResult<&LookupTable> {
        self.recalculate_lengths();
        let lut = generate_lut(self, self.settings.step_world_units)?;
        Ok(self.lut.insert(lut))
    }

    /// The current lookup table, `None` after any edit until regenerated
    pub fn lookup_table(&self) -> Option<&LookupTable> {
        self.lut.as_ref()
    }

    /// Nearest lookup table point to progress `u` within the sample window
    pub fn sample_point(&self, u: f64) -> BezierResult<Point> {
        self.lut
            .as_ref()
            .ok_or(BezierError::LookupTableMissing)?
            .sample_point_windowed(u, &self.settings.sample_window)
    }

    fn check_index(&self, index: usize) -> BezierResult<()> {
        if index < self.points.len() {
            Ok(())
        } else {
            Err(BezierError::IndexOutOfRange {
                index,
                len: self.points.len(),
            })
        }
    }

    fn geometry_changed(&mut self) {
        self.lut = None;
        self.recalculate_lengths();
    }
}

/// Joint whose anchor is closest to a control point
fn joint_of(index: usize) -> usize {
    (index + 1) / 3
}
