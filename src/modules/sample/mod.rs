//! Arc length based sampling of splines
//!
//! - [arc_length](arc_length/index.html) - per segment length estimates
//! - [lut](lut/index.html) - evenly spaced lookup tables
//! - [decorate](decorate/index.html) - spreading items along a spline

pub mod arc_length;
pub mod decorate;
pub mod lut;

pub use arc_length::segment_lengths;
pub use decorate::{decorate, Placement};
pub use lut::{generate_lut, LookupTable};
