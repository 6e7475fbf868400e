//! Numeric defaults shared across the crate.

/// Default spacing of lookup table points, in world units
pub const DEFAULT_STEP_WORLD_UNITS: f64 = 0.005;

/// Parameter steps covering `[0, 1]` when accumulating arc lengths (a step of 0.01)
pub const LENGTH_SAMPLE_COUNT: usize = 100;

/// Upper bound on the dense samples taken while building a lookup table
pub const MAX_LUT_SAMPLES: usize = 10_000_000;

/// Parameter offset of the second tangent used to build a curve normal
pub const NORMAL_PARAMETER_NUDGE: f64 = 0.01;

/// Default road half-width carried for the host mesh generator
pub const DEFAULT_ROAD_RADIUS: f64 = 1.0;

/// Default border width carried for the host mesh generator
pub const DEFAULT_BORDER_RADIUS: f64 = 0.1;

/// Bounding boxes whose width + height fall below this are reported as an intersection
pub const INTERSECTION_THRESHOLD: f64 = 0.5;

/// Deepest subdivision level a refinement candidate may reach
pub const MAX_INTERSECTION_DEPTH: usize = 32;

/// Refinement steps allowed for one pair of monotonic sub-segments
pub const MAX_INTERSECTION_ITERATIONS: usize = 100_000;

/// Slack allowing touching bounding boxes to stay intersection candidates
pub const CONTACT_TOLERANCE: f64 = 1e-9;

/// Below this a polynomial coefficient (or a vector length) counts as zero
pub const EPSILON: f64 = 1e-12;

/// Parameters closer than this are merged when reducing a segment
pub const PARAMETER_EPSILON: f64 = 1e-9;
