//! Reading splines from external formats
//!
//! Now supported format:
//! - JSON:
//!     flat arrays of points, joint modes and lengths plus the loop flag and settings.
//!     See the `json` module for more detailed information on the JSON format.
//! - SVG:
//!     Parse absolute SVG path data into a spline on the XY plane.

pub mod json;
pub mod svg_path;

pub use json::SplineData;
pub use svg_path::FromSvgPath;
