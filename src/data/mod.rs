//! Core data structures: points, cubic segments, bounding boxes and splines.

pub mod bounds;
pub mod macros;
pub mod point;
pub mod segment;
pub mod spline;

pub use bounds::BoundingBox;
pub use point::{Axis, Point};
pub use segment::{BezierSegment, SplitResult};
pub use spline::{BezierSpline, ContinuityMode, SampleWindow, SplineSettings};
