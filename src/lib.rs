// Module definitions
pub mod constants;
pub mod data;
pub mod error;
pub mod modules;

// export the core data structure at crate level
pub use data::bounds::BoundingBox;
pub use data::point::{Axis, Point};
pub use data::segment::{BezierSegment, SplitResult};
pub use data::spline::{BezierSpline, ContinuityMode, SampleWindow, SplineSettings};
pub use modules::sample::LookupTable;
pub use error::{BezierError, BezierResult};
