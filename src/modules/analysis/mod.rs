//! Analysis of single cubic segments
//!
//! - [extrema](extrema/index.html) - hodographs, derivative roots and tight bounding boxes
//! - [reduce](reduce/index.html) - splitting a segment into monotonic sub-segments

pub mod extrema;
pub mod reduce;
