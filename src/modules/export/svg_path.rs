//! SVG path data for splines
//!
//! # Example
//!
//! ```rust
//! use bezier_spline::{cubic, spline, modules::export::svg_path::ToSvgPath};
//!
//! let spline = spline!([
//!     cubic!([(10, 20), (20, 30), (30, 40), (40, 50)]),
//!     cubic!([(40, 50), (50, 60), (60, 70), (70, 80)])
//! ]);
//!
//! assert_eq!(
//!     spline.to_svg_path(),
//!     "M10,20 C20,30,30,40,40,50 C50,60,60,70,70,80"
//! );
//! ```

use crate::data::{BezierSegment, BezierSpline};

/// Trait for types that can be converted to SVG path data
pub trait ToSvgPath {
    /// Convert to SVG path data string, dropping the Z coordinate
    fn to_svg_path(&self) -> String;
}

impl ToSvgPath for BezierSegment {
    fn to_svg_path(&self) -> String {
        let [start, c1, c2, end] = self.points;
        format!(
            "M{},{} C{},{},{},{},{},{}",
            start.x, start.y, c1.x, c1.y, c2.x, c2.y, end.x, end.y
        )
    }
}

impl ToSvgPath for BezierSpline {
    fn to_svg_path(&self) -> String {
        let points = self.control_points();
        let mut result = format!("M{},{}", points[0].x, points[0].y);

        for segment in points[1..].chunks_exact(3) {
            result.push_str(&format!(
                " C{},{},{},{},{},{}",
                segment[0].x, segment[0].y, segment[1].x, segment[1].y, segment[2].x, segment[2].y
            ));
        }

        if self.is_loop() {
            result.push('Z');
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cubic, spline};

    #[test]
    fn test_spline_export_to_svg_path() {
        struct SvgPathExportTestCase<'a> {
            name: &'a str,
            spline: BezierSpline,
            expected_path: &'a str,
        }

        let mut closed = spline!([
            cubic!([(20, 20), (40, 20), (60, 40), (60, 60)]),
            cubic!([(60, 60), (60, 80), (40, 80), (20, 60)]),
            cubic!([(20, 60), (0, 40), (0, 20), (20, 20)])
        ]);
        closed.set_loop(true);

        let test_cases = [
            SvgPathExportTestCase {
                name: "single_segment",
                spline: spline!([cubic!([(10, 20), (20, 30), (30, 40), (40, 50)])]),
                expected_path: "M10,20 C20,30,30,40,40,50",
            },
            SvgPathExportTestCase {
                name: "z_is_dropped",
                spline: spline!([cubic!([(1, 2, 3), (4, 5, 6), (7, 8, 9), (10, 11, 12)])]),
                expected_path: "M1,2 C4,5,7,8,10,11",
            },
            SvgPathExportTestCase {
                name: "closed_shape",
                spline: closed,
                expected_path: "M20,20 C40,20,60,40,60,60 C60,80,40,80,20,60 C0,40,0,20,20,20Z",
            },
        ];

        for test_case in test_cases {
            assert_eq!(
                test_case.spline.to_svg_path(),
                test_case.expected_path,
                "Test case: {}",
                test_case.name
            );
        }
    }

    #[test]
    fn test_segment_export() {
        let segment = cubic!([(0.5, 1), (2, 3), (4, 5), (6, 7.25)]);

        assert_eq!(segment.to_svg_path(), "M0.5,1 C2,3,4,5,6,7.25");
    }

    #[test]
    fn test_round_trip_export_and_then_parse() {
        use crate::modules::parse::svg_path::FromSvgPath;

        let mut looping = spline!([
            cubic!([(0, 0), (10, 10), (20, 10), (30, 0)]),
            cubic!([(30, 0), (20, -10), (10, -10), (0, 0)])
        ]);
        looping.set_loop(true);
        let test_cases = [
            spline!([cubic!([(10, 20), (20, 30), (30, 40), (40, 50)])]),
            spline!([
                cubic!([(10, 20), (20, 30), (30, 40), (40, 50)]),
                cubic!([(40, 50), (50, 60), (60, 70), (70, 80)])
            ]),
            looping,
        ];

        for (i, original) in test_cases.iter().enumerate() {
            let parsed = BezierSpline::from_svg_path(&original.to_svg_path())
                .unwrap_or_else(|e| panic!("Failed to parse path data for test case {}: {}", i, e));

            assert_eq!(
                original.control_points(),
                parsed.control_points(),
                "Control point mismatch in test case {}",
                i
            );
            assert_eq!(
                original.is_loop(),
                parsed.is_loop(),
                "Loop state mismatch in test case {}",
                i
            );
        }
    }
}
