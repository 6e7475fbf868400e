//! Exact extrema and bounding boxes of cubic segments
//!
//! See the bezier primer chapters on derivatives and bounding boxes
//! https://pomax.github.io/bezierinfo/#extremities
//!
//! The extrema of a segment along one axis are the roots of its derivative on that axis.
//! The derivative of a cubic is a quadratic (the first hodograph) whose roots are found
//! analytically. The roots of the second hodograph (inflection candidates) are added as well,
//! since splitting there keeps the reduced sub-segments well behaved.
//!
//! # Example
//!
//! ```rust
//! use bezier_spline::{cubic, Axis};
//! use bezier_spline::modules::analysis::extrema::{bounding_box, get_extrema};
//!
//! let segment = cubic!([(0, 0), (0, 2), (2, 2), (2, 0)]);
//!
//! // The arc peaks halfway along Y
//! let extrema = get_extrema(&segment);
//! assert_eq!(extrema[1], vec![0.5]);
//!
//! let bounds = bounding_box(&segment);
//! assert_eq!(bounds.max().y, 1.5);
//! ```

use crate::constants::EPSILON;
use crate::data::{Axis, BezierSegment, BoundingBox, Point};

/// Control points of the first and second derivative of a cubic segment
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hodographs {
    /// Quadratic derivative, scaled by 3
    pub first: [Point; 3],
    /// Linear second derivative, scaled by 2
    pub second: [Point; 2],
}

/// Derive the hodographs of a segment
pub fn derive(segment: &BezierSegment) -> Hodographs {
    let p = segment.points;
    let first = [
        3.0 * (p[1] - p[0]),
        3.0 * (p[2] - p[1]),
        3.0 * (p[3] - p[2]),
    ];
    let second = [2.0 * (first[1] - first[0]), 2.0 * (first[2] - first[1])];

    Hodographs { first, second }
}

/// Roots of a polynomial given in bezier form, in the polynomial's own `[0, 1]` domain
///
/// Three coefficients describe a quadratic and two a linear function. Any other
/// length, and the degenerate cases without a root, return an empty list. Roots
/// are not filtered to `[0, 1]`.
pub fn derived_roots(coeffs: &[f64]) -> Vec<f64> {
    match *coeffs {
        [a, b, c] => {
            let d = a - 2.0 * b + c;
            if d.abs() > EPSILON {
                let discriminant = b * b - a * c;
                if discriminant < 0.0 {
                    return vec![];
                }
                let m1 = -discriminant.sqrt();
                let m2 = -a + b;
                vec![-(m1 + m2) / d, -(-m1 + m2) / d]
            } else if b != c {
                vec![(2.0 * b - c) / (2.0 * (b - c))]
            } else {
                vec![]
            }
        }
        [a, b] => {
            if a != b {
                vec![a / (a - b)]
            } else {
                vec![]
            }
        }
        _ => vec![],
    }
}

/// Parameters of the extrema (and inflection candidates) along each of the x, y, z axes
///
/// Every list is restricted to `[0, 1]`, sorted ascending and free of duplicates.
pub fn get_extrema(segment: &BezierSegment) -> [Vec<f64>; 3] {
    let hodographs = derive(segment);

    Axis::ALL.map(|axis| {
        let first: Vec<f64> = hodographs.first.iter().map(|p| p.axis(axis)).collect();
        let second: Vec<f64> = hodographs.second.iter().map(|p| p.axis(axis)).collect();

        let mut roots: Vec<f64> = derived_roots(&first)
            .into_iter()
            .chain(derived_roots(&second))
            .filter(|t| (0.0..=1.0).contains(t))
            .collect();
        roots.sort_by(f64::total_cmp);
        roots.dedup_by(|a, b| (*a - *b).abs() <= EPSILON);
        roots
    })
}

/// Minimum and maximum of the segment along `axis`
///
/// The segment is evaluated at each of `extrema` and at both ends.
pub fn get_min_max(segment: &BezierSegment, axis: Axis, extrema: &[f64]) -> (f64, f64) {
    let mut ts = Vec::with_capacity(extrema.len() + 2);
    if !extrema.contains(&0.0) {
        ts.push(0.0);
    }
    ts.extend_from_slice(extrema);
    if !extrema.contains(&1.0) {
        ts.push(1.0);
    }

    ts.iter()
        .map(|&t| segment.point_at(t).axis(axis))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| {
            (min.min(v), max.max(v))
        })
}

/// Tight axis aligned bounding box of a segment
pub fn bounding_box(segment: &BezierSegment) -> BoundingBox {
    let extrema = get_extrema(segment);
    let [x, y, z] = [0, 1, 2].map(|i| get_min_max(segment, Axis::ALL[i], &extrema[i]));

    BoundingBox::from_min_max(Point::new(x.0, y.0, z.0), Point::new(x.1, y.1, z.1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cubic, pt};
    use approx::assert_relative_eq;

    #[test]
    fn test_derive() {
        let segment = cubic!([(0, 0, 0), (1, 2, 0), (3, 2, 0), (4, 0, 1)]);
        let hodographs = derive(&segment);

        assert_eq!(hodographs.first, [pt!(3, 6, 0), pt!(6, 0, 0), pt!(3, -6, 3)]);
        assert_eq!(hodographs.second, [pt!(6, -12, 0), pt!(-6, -12, 6)]);

        // The first hodograph evaluated as a quadratic is the derivative
        let t: f64 = 0.3;
        let [a, b, c] = hodographs.first;
        let quad = (1.0 - t).powi(2) * a + 2.0 * (1.0 - t) * t * b + t * t * c;
        let expected = segment.derivative(t);
        assert_relative_eq!(quad.x, expected.x, epsilon = 1e-12);
        assert_relative_eq!(quad.y, expected.y, epsilon = 1e-12);
        assert_relative_eq!(quad.z, expected.z, epsilon = 1e-12);
    }

    #[test]
    fn test_derived_roots() {
        struct RootsTestCase<'a> {
            name: &'a str,
            coeffs: &'a [f64],
            expected: &'a [f64],
        }

        let test_cases = [
            RootsTestCase {
                name: "quadratic_two_roots",
                // 6t^2 - 6t + 1 in bezier form
                coeffs: &[1.0, -2.0, 1.0],
                expected: &[0.7886751345948129, 0.21132486540518713],
            },
            RootsTestCase {
                name: "quadratic_degenerate_to_linear",
                coeffs: &[0.0, 1.0, 2.0],
                expected: &[0.0],
            },
            RootsTestCase {
                name: "quadratic_no_root",
                coeffs: &[1.0, 1.0, 1.0],
                expected: &[],
            },
            RootsTestCase {
                name: "quadratic_complex_roots",
                coeffs: &[1.0, 0.0, 1.0],
                expected: &[],
            },
            RootsTestCase {
                name: "linear",
                coeffs: &[2.0, -2.0],
                expected: &[0.5],
            },
            RootsTestCase {
                name: "linear_constant",
                coeffs: &[-12.0, -12.0],
                expected: &[],
            },
            RootsTestCase {
                name: "unsupported_degree",
                coeffs: &[1.0, 2.0, 3.0, 4.0],
                expected: &[],
            },
        ];

        for test_case in test_cases {
            let mut roots = derived_roots(test_case.coeffs);
            roots.sort_by(|a, b| b.total_cmp(a));
            assert_eq!(
                roots.len(),
                test_case.expected.len(),
                "Test case: {}",
                test_case.name
            );
            for (root, expected) in roots.iter().zip(test_case.expected) {
                assert_relative_eq!(*root, *expected, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_get_extrema() {
        let segment = cubic!([(0, 0, 0), (2, 2, 0), (-2, 2, 0), (0, 0, 0)]);
        let [x, y, z] = get_extrema(&segment);

        // x = 6t(1-t)(1-2t) has extrema at 0.5 -+ sqrt(3)/6 and an inflection at 0.5
        assert_eq!(x.len(), 3);
        assert_relative_eq!(x[0], 0.5 - 3.0_f64.sqrt() / 6.0, epsilon = 1e-12);
        assert_relative_eq!(x[1], 0.5, epsilon = 1e-12);
        assert_relative_eq!(x[2], 0.5 + 3.0_f64.sqrt() / 6.0, epsilon = 1e-12);
        assert_eq!(y, vec![0.5]);
        assert!(z.is_empty());
    }

    #[test]
    fn test_get_min_max() {
        let segment = cubic!([(0, 0), (0, 2), (2, 2), (2, 0)]);

        assert_eq!(get_min_max(&segment, Axis::Y, &[0.5]), (0.0, 1.5));
        assert_eq!(get_min_max(&segment, Axis::X, &[]), (0.0, 2.0));
        assert_eq!(get_min_max(&segment, Axis::Z, &[0.0, 1.0]), (0.0, 0.0));
    }

    #[test]
    fn test_bounding_box() {
        let segment = cubic!([(0, 0, 0), (0, 2, 1), (2, 2, 1), (2, 0, 0)]);
        let bounds = bounding_box(&segment);

        assert_eq!(bounds.min(), pt!(0, 0, 0));
        assert_eq!(bounds.max(), pt!(2, 1.5, 0.75));
        assert_eq!(bounds.center, pt!(1, 0.75, 0.375));
        assert_eq!(segment.bounding_box(), bounds);
    }
}
