//! Export splines to various formats
//!
//! Exports are debugging aids: splines are projected onto the XY plane.
//!
//! # Available Export Formats
//!
//! - [SVG](svg/index.html) - Export splines and points to SVG documents
//! - [SVG path](svg_path/index.html) - Export splines to SVG path data

pub mod svg;
pub mod svg_path;

pub use svg_path::ToSvgPath;
