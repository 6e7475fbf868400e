//! This module provides convenient macros for creating points, segments, and splines.

/// Macro for creating a Point
///
/// The two argument form places the point on the `z = 0` plane.
#[macro_export]
macro_rules! pt {
    ($x:expr, $y:expr, $z:expr) => {
        $crate::data::Point::new($x as f64, $y as f64, $z as f64)
    };
    ($x:expr, $y:expr) => {
        $crate::data::Point::new($x as f64, $y as f64, 0.0)
    };
}

/// Macro for creating a cubic bezier segment from four coordinate tuples
///
/// Tuples are either `(x, y, z)` or `(x, y)`, the latter on the `z = 0` plane.
#[macro_export]
macro_rules! cubic {
    ([($x0:expr, $y0:expr, $z0:expr), ($x1:expr, $y1:expr, $z1:expr), ($x2:expr, $y2:expr, $z2:expr), ($x3:expr, $y3:expr, $z3:expr) $(,)?]) => {
        $crate::data::BezierSegment::new(
            $crate::pt!($x0, $y0, $z0),
            $crate::pt!($x1, $y1, $z1),
            $crate::pt!($x2, $y2, $z2),
            $crate::pt!($x3, $y3, $z3),
        )
    };
    ([($x0:expr, $y0:expr), ($x1:expr, $y1:expr), ($x2:expr, $y2:expr), ($x3:expr, $y3:expr) $(,)?]) => {
        $crate::data::BezierSegment::new(
            $crate::pt!($x0, $y0),
            $crate::pt!($x1, $y1),
            $crate::pt!($x2, $y2),
            $crate::pt!($x3, $y3),
        )
    };
}

/// Macro for creating an open spline from connected segments
///
/// Panics if consecutive segments do not share their boundary anchor.
#[macro_export]
macro_rules! spline {
    ([$($segment:expr),* $(,)?]) => {{
        let segments = vec![$($segment),*];
        $crate::data::BezierSpline::from_segments(&segments)
            .unwrap_or_else(|e| panic!("spline!: {}", e))
    }};
}
