//! Curve/curve intersections by bounding box clipping
//!
//! Both segments are first reduced into monotonic pieces. Every pair of pieces whose bounding
//! boxes overlap is refined: each side is halved and the four combinations whose boxes still
//! overlap are examined again, until both boxes are small enough to be taken as a single
//! intersection point.
//!
//! The result is approximate: a reported point is the midpoint of two small box centers, and a
//! single crossing may be reported more than once when it sits on a split boundary.
//!
//! Refinement is bounded by [`IntersectionConfig`]. Nearly tangent or overlapping segments keep
//! producing overlapping boxes, so a candidate deeper than `max_depth` is dropped, and a pair of
//! pieces that uses up `max_iterations` reports no intersection at all.
//!
//! # Example
//!
//! ```rust
//! use bezier_spline::cubic;
//! use bezier_spline::modules::intersect::{pair_intersections, IntersectionConfig};
//!
//! let horizontal = cubic!([(0, 0), (2, 0), (4, 0), (6, 0)]);
//! let vertical = cubic!([(3, -3), (3, -1), (3, 1), (3, 3)]);
//!
//! let points = pair_intersections(&horizontal, &vertical, &IntersectionConfig::default());
//! assert!(!points.is_empty());
//! assert!(points.iter().all(|p| (p.x - 3.0).abs() < 0.5 && p.y.abs() < 0.5));
//! ```

pub mod bbox_clip;

use crate::constants::{
    CONTACT_TOLERANCE, INTERSECTION_THRESHOLD, MAX_INTERSECTION_DEPTH,
    MAX_INTERSECTION_ITERATIONS,
};
use crate::error::BezierResult;
use serde::{Deserialize, Serialize};

pub use bbox_clip::{
    pair_intersections, pair_intersections_report, self_intersections,
    self_intersections_report, IntersectionReport,
};

/// Limits and tolerances of the intersection refinement
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntersectionConfig {
    /// Boxes whose width + height fall below this count as converged, in world units
    pub threshold: f64,
    /// Deepest subdivision level before a candidate is dropped
    pub max_depth: usize,
    /// Refinement steps allowed per pair of monotonic pieces
    pub max_iterations: usize,
    /// Boxes this far apart still count as overlapping
    pub contact_tolerance: f64,
}

impl Default for IntersectionConfig {
    fn default() -> Self {
        Self {
            threshold: INTERSECTION_THRESHOLD,
            max_depth: MAX_INTERSECTION_DEPTH,
            max_iterations: MAX_INTERSECTION_ITERATIONS,
            contact_tolerance: CONTACT_TOLERANCE,
        }
    }
}

impl IntersectionConfig {
    /// Load a configuration from JSON, missing fields take their defaults
    pub fn from_json(json: &str) -> BezierResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
