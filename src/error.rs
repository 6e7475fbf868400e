//! Error types for spline queries and edits.

use thiserror::Error;

/// Errors raised by the bezier spline library
#[derive(Error, Debug)]
pub enum BezierError {
    /// Control point or joint index past the end of the spline
    #[error("Index {index} out of range (len: {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// Tangent has zero length or is not finite, so no direction exists
    #[error("Degenerate curve: no direction at t = {t}")]
    DegenerateCurve { t: f64 },

    /// Argument outside of the accepted domain
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Flat arrays that do not describe a spline
    #[error("Invalid spline: {0}")]
    InvalidSpline(String),

    /// The lookup table was never generated or was discarded by an edit
    #[error("Lookup table missing: call generate_lut first")]
    LookupTableMissing,

    /// Sampling a lookup table that holds no points
    #[error("Lookup table is empty")]
    LookupTableEmpty,

    /// Malformed SVG path data
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON (de)serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type used throughout the crate
pub type BezierResult<T> = Result<T, BezierError>;
