use approx::assert_relative_eq;
use bezier_spline::modules::export::svg_path::ToSvgPath;
use bezier_spline::modules::intersect::{
    pair_intersections, self_intersections, IntersectionConfig,
};
use bezier_spline::modules::parse::svg_path::FromSvgPath;
use bezier_spline::modules::sample::decorate;
use bezier_spline::{cubic, pt, spline, BezierError, BezierSpline, ContinuityMode};

#[test]
fn test_straight_segment() {
    let segment = cubic!([(0, 0, 0), (1, 0, 0), (2, 0, 0), (3, 0, 0)]);

    assert_eq!(segment.point_at(0.5), pt!(1.5, 0, 0));
    for k in 0..=10 {
        let direction = segment.direction(k as f64 / 10.0).unwrap();
        assert_relative_eq!(direction.x, 1.0, epsilon = 1e-12);
        assert_eq!(direction.y, 0.0);
        assert_eq!(direction.z, 0.0);
    }
}

#[test]
fn test_self_crossing_loop() {
    let segment = cubic!([(0, 0, 0), (2, 2, 0), (-2, 2, 0), (0, 0, 0)]);
    let points = self_intersections(&segment, &IntersectionConfig::default());

    assert!(
        points.iter().any(|p| p.x.abs() < 0.5 && p.y > 0.0 && p.z == 0.0),
        "no crossing near the y axis in {:?}",
        points
    );
}

#[test]
fn test_disjoint_segments() {
    let left = cubic!([(0, 0, 0), (1, 2, 0), (2, 2, 0), (3, 0, 0)]);
    let right = cubic!([(0, 10, 0), (1, 12, 0), (2, 12, 0), (3, 10, 0)]);

    assert!(!left.bounding_box().overlaps(&right.bounding_box()));
    assert!(pair_intersections(&left, &right, &IntersectionConfig::default()).is_empty());
}

#[test]
fn test_add_curve_on_loop() {
    let mut spline = BezierSpline::new();
    spline.set_control_point(1, pt!(2, 3, 0)).unwrap();
    spline.set_loop(true);
    spline.set_joint_mode(0, ContinuityMode::Mirrored).unwrap();
    let start = spline.control_point(0).unwrap();

    spline.add_curve();

    assert_eq!(spline.curve_count(), 2);
    assert_eq!(spline.control_point(6).unwrap(), start);
    assert_eq!(spline.joint_mode(2).unwrap(), spline.joint_mode(0).unwrap());
    assert_eq!(spline.lengths().len(), 2);
}

#[test]
fn test_edit_then_sample_workflow() {
    let mut spline = spline!([
        cubic!([(0, 0, 0), (1, 2, 0), (3, 2, 0), (4, 0, 0)]),
        cubic!([(4, 0, 0), (5, -2, 0), (7, -2, 0), (8, 0, 0)])
    ]);
    spline.set_joint_mode(1, ContinuityMode::Aligned).unwrap();
    spline.set_control_point(2, pt!(3, 3, 0)).unwrap();
    spline.set_step_world_units(0.05);

    assert!(matches!(
        spline.sample_point(0.5),
        Err(BezierError::LookupTableMissing)
    ));

    let lut = spline.generate_lut().unwrap().clone();
    assert_eq!(lut.points()[0], spline.point_at(0.0));
    assert_eq!(lut.points()[lut.len() - 1], spline.point_at(1.0));
    assert_eq!(spline.sample_point(0.0).unwrap(), pt!(0, 0, 0));
    assert_eq!(spline.sample_point(1.0).unwrap(), pt!(8, 0, 0));

    let placements = decorate(&spline, 5, 2, true);
    assert_eq!(placements.len(), 10);
    assert_relative_eq!(placements[9].position.x, 8.0, epsilon = 1e-9);
    assert!(placements.iter().all(|p| p.direction.is_some()));

    // Aligned joint: the curve leaves the anchor in the direction it arrived
    let before = spline.segment(0).unwrap().direction(1.0).unwrap();
    let after = spline.segment(1).unwrap().direction(0.0).unwrap();
    assert_relative_eq!(before.dot(&after), 1.0, epsilon = 1e-12);
}

#[test]
fn test_persistence_workflow() {
    let mut spline = BezierSpline::from_svg_path("M0,0 C1,2 3,2 4,0 C5,-2 7,-2 8,0").unwrap();
    spline.set_joint_mode(1, ContinuityMode::Mirrored).unwrap();

    let json = spline.to_json().unwrap();
    let restored = BezierSpline::from_json(&json).unwrap();

    assert_eq!(restored.control_points(), spline.control_points());
    assert_eq!(restored.modes(), spline.modes());
    assert_eq!(
        restored.to_svg_path(),
        "M0,0 C1,2,3,2,4,0 C5,-2,7,-2,8,0"
    );
}
