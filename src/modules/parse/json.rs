//! JSON persistence of splines as flat arrays
//!
//! The layout mirrors what a host stores for a spline:
//!
//! ```json
//! {
//!   "points": [{"x": 0.0, "y": 0.0, "z": 0.0}, ...],
//!   "modes": ["Free", "Mirrored", ...],
//!   "lengths": [1.0, ...],
//!   "loop": false,
//!   "settings": {"step_world_units": 0.005, ...}
//! }
//! ```
//!
//! `lengths` and `settings` may be left out. Stored lengths that do not match the segment
//! count are recomputed, and they are always recomputed from the points on load anyway.

use crate::data::{BezierSpline, ContinuityMode, Point, SplineSettings};
use crate::error::BezierResult;
use log::warn;
use serde::{Deserialize, Serialize};

/// Serializable flat representation of a [`BezierSpline`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplineData {
    pub points: Vec<Point>,
    pub modes: Vec<ContinuityMode>,
    #[serde(default)]
    pub lengths: Vec<f64>,
    #[serde(rename = "loop", default)]
    pub is_loop: bool,
    #[serde(default)]
    pub settings: SplineSettings,
}

impl BezierSpline {
    pub fn to_data(&self) -> SplineData {
        SplineData {
            points: self.control_points().to_vec(),
            modes: self.modes().to_vec(),
            lengths: self.lengths().to_vec(),
            is_loop: self.is_loop(),
            settings: *self.settings(),
        }
    }

    /// Rebuild a spline, validating the arrays like [`BezierSpline::from_parts`]
    pub fn from_data(data: SplineData) -> BezierResult<Self> {
        let mut spline = Self::from_parts(data.points, data.modes, data.is_loop)?;
        if data.lengths.len() != spline.curve_count() {
            warn!(
                "stored {} lengths for {} segments, recomputing",
                data.lengths.len(),
                spline.curve_count()
            );
        }
        spline.set_settings(data.settings);
        Ok(spline)
    }

    pub fn to_json(&self) -> BezierResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_data())?)
    }

    pub fn from_json(json: &str) -> BezierResult<Self> {
        let data: SplineData = serde_json::from_str(json)?;
        Self::from_data(data)
    }
}
