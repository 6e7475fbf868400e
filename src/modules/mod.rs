//! Algorithms over segments and splines
//!
//! - [analysis](analysis/index.html) - extrema, bounding boxes and monotonic reduction
//! - [intersect](intersect/index.html) - curve/curve intersections
//! - [sample](sample/index.html) - arc lengths, lookup tables and decorator placement
//! - [parse](parse/index.html) - reading splines from JSON and SVG path data
//! - [export](export/index.html) - writing splines to SVG

pub mod analysis;
pub mod export;
pub mod intersect;
pub mod parse;
pub mod sample;
