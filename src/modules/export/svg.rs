//! SVG documents for splines and sampled points
//!
//! Splines are drawn as a single black path projected onto the XY plane, sampled points
//! (lookup tables, intersections) as small red circles.
//!
//! # Example
//!
//! ```rust
//! use bezier_spline::{cubic, pt, spline, modules::export::svg};
//!
//! let spline = spline!([cubic!([(50, 200), (100, 50), (200, 50), (250, 200)])]);
//! let document = svg::to_svg(&spline, 300, 300);
//! assert!(document.contains("C100,50,200,50,250,200"));
//!
//! let points = svg::points_to_svg(&[pt!(10, 20), pt!(30, 50)], 100, 100);
//! assert!(points.contains("<circle cx=\"10\""));
//! ```

use crate::data::{BezierSpline, Point};
use svg::node::element::{path::Data, Circle, Path};
use svg::Document;

fn document(width: u32, height: u32) -> Document {
    Document::new()
        .set("width", width)
        .set("height", height)
        .set("viewBox", (0, 0, width, height))
}

fn spline_path(spline: &BezierSpline) -> Path {
    let points = spline.control_points();
    let mut data = Data::new().move_to((points[0].x, points[0].y));

    for segment in points[1..].chunks_exact(3) {
        data = data.cubic_curve_to((
            segment[0].x,
            segment[0].y,
            segment[1].x,
            segment[1].y,
            segment[2].x,
            segment[2].y,
        ));
    }
    if spline.is_loop() {
        data = data.close();
    }

    Path::new()
        .set("fill", "none")
        .set("stroke", "black")
        .set("stroke-width", 1)
        .set("d", data)
}

fn point_circles(points: &[Point]) -> impl Iterator<Item = Circle> + '_ {
    points.iter().map(|point| {
        Circle::new()
            .set("cx", point.x)
            .set("cy", point.y)
            .set("r", 2)
            .set("fill", "red")
    })
}

/// Export a spline to an SVG string
pub fn to_svg(spline: &BezierSpline, width: u32, height: u32) -> String {
    document(width, height).add(spline_path(spline)).to_string()
}

/// Export points to an SVG string, one red circle each
pub fn points_to_svg(points: &[Point], width: u32, height: u32) -> String {
    point_circles(points)
        .fold(document(width, height), |document, circle| {
            document.add(circle)
        })
        .to_string()
}

/// Export a spline together with points sampled from it
pub fn spline_with_points_to_svg(
    spline: &BezierSpline,
    points: &[Point],
    width: u32,
    height: u32,
) -> String {
    point_circles(points)
        .fold(
            document(width, height).add(spline_path(spline)),
            |document, circle| document.add(circle),
        )
        .to_string()
}
