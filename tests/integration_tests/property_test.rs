use approx::assert_relative_eq;
use bezier_spline::modules::analysis::reduce::{reduce, reduction_parameters};
use bezier_spline::modules::sample::generate_lut;
use bezier_spline::{BezierSegment, BezierSpline, ContinuityMode, Point};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal, Uniform};

const CASES: usize = 200;

fn random_point(rng: &mut StdRng, coords: &Normal<f64>) -> Point {
    Point::new(coords.sample(rng), coords.sample(rng), coords.sample(rng))
}

fn random_segments(seed: u64) -> Vec<BezierSegment> {
    let mut rng = StdRng::seed_from_u64(seed);
    let coords = Normal::new(0.0, 10.0).unwrap();
    (0..CASES)
        .map(|_| {
            BezierSegment::new(
                random_point(&mut rng, &coords),
                random_point(&mut rng, &coords),
                random_point(&mut rng, &coords),
                random_point(&mut rng, &coords),
            )
        })
        .collect()
}

fn assert_points_close(a: Point, b: Point, epsilon: f64) {
    assert!(
        a.distance(&b) <= epsilon,
        "{:?} and {:?} are {} apart",
        a,
        b,
        a.distance(&b)
    );
}

#[test]
fn test_endpoints_are_interpolated() {
    for segment in random_segments(1) {
        assert_eq!(segment.point_at(0.0), segment.points[0]);
        assert_eq!(segment.point_at(1.0), segment.points[3]);
    }
}

#[test]
fn test_split_halves_meet_on_the_curve() {
    let mut rng = StdRng::seed_from_u64(2);
    let parameters = Uniform::new(0.01, 0.99);

    for segment in random_segments(2) {
        let t = parameters.sample(&mut rng);
        let (left, right) = segment.split(t);
        let on_curve = segment.point_at(t);

        assert_points_close(left.end(), on_curve, 1e-9);
        assert_points_close(right.start(), on_curve, 1e-9);
        assert_eq!(left.start(), segment.start());
        assert_eq!(right.end(), segment.end());

        let u = rng.gen_range(0.0..1.0);
        assert_points_close(left.point_at(u), segment.point_at(u * t), 1e-9);
    }
}

#[test]
fn test_split_range_endpoints() {
    let mut rng = StdRng::seed_from_u64(3);

    for segment in random_segments(3) {
        let a: f64 = rng.gen_range(0.0..1.0);
        let b: f64 = rng.gen_range(0.0..1.0);
        let (t1, t2) = (a.min(b), a.max(b));
        let middle = segment.sub_segment(t1, t2);

        assert_points_close(middle.start(), segment.point_at(t1), 1e-9);
        assert_points_close(middle.end(), segment.point_at(t2), 1e-9);
    }
}

#[test]
fn test_reduction_partitions_the_parameter_range() {
    for segment in random_segments(4) {
        let parameters = reduction_parameters(&segment);

        assert_eq!(parameters.first(), Some(&0.0));
        assert_eq!(parameters.last(), Some(&1.0));
        assert!(parameters.windows(2).all(|w| w[0] < w[1]));

        let pieces = reduce(&segment);
        assert_eq!(pieces.len(), parameters.len() - 1);
        assert_points_close(pieces[0].start(), segment.start(), 1e-9);
        assert_points_close(pieces[pieces.len() - 1].end(), segment.end(), 1e-9);
        for pair in pieces.windows(2) {
            assert_points_close(pair[0].end(), pair[1].start(), 1e-9);
        }
    }
}

#[test]
fn test_bounding_box_contains_samples() {
    for segment in random_segments(5) {
        let bounds = segment.bounding_box();
        for point in segment.sample_points(257) {
            assert!(
                bounds.contains(&point, 1e-9),
                "{:?} outside {:?}",
                point,
                bounds
            );
        }
    }
}

#[test]
fn test_handle_constraints() {
    let mut rng = StdRng::seed_from_u64(6);
    let coords = Normal::new(0.0, 10.0).unwrap();

    for segments in random_segments(6).chunks_exact(2) {
        let second = BezierSegment::new(
            segments[0].end(),
            segments[1].points[1],
            segments[1].points[2],
            segments[1].points[3],
        );
        let mut spline = BezierSpline::from_segments(&[segments[0], second]).unwrap();
        let anchor = spline.control_point(3).unwrap();

        spline.set_joint_mode(1, ContinuityMode::Mirrored).unwrap();
        let moved = random_point(&mut rng, &coords);
        spline.set_control_point(2, moved).unwrap();
        let opposite = spline.control_point(4).unwrap();
        assert_relative_eq!(
            anchor.distance(&opposite),
            anchor.distance(&moved),
            max_relative = 1e-9
        );
        assert_points_close((moved + opposite) / 2.0, anchor, 1e-9);

        spline.set_joint_mode(1, ContinuityMode::Aligned).unwrap();
        let kept_length = anchor.distance(&spline.control_point(4).unwrap());
        let moved = random_point(&mut rng, &coords);
        spline.set_control_point(2, moved).unwrap();
        let opposite = spline.control_point(4).unwrap();
        assert_relative_eq!(
            anchor.distance(&opposite),
            kept_length,
            max_relative = 1e-9
        );
        let incoming = (anchor - moved).try_normalize().unwrap();
        let outgoing = (opposite - anchor).try_normalize().unwrap();
        assert_relative_eq!(incoming.dot(&outgoing), 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_lookup_table_spacing() {
    let mut rng = StdRng::seed_from_u64(7);
    let steps = Uniform::new(0.2, 2.0);

    for segments in random_segments(7).chunks_exact(4).take(20) {
        let mut spline = BezierSpline::from_segment(&segments[0]);
        for segment in &segments[1..] {
            spline.add_curve();
            let last = spline.control_point_count() - 1;
            spline.set_control_point(last - 1, segment.points[2]).unwrap();
            spline.set_control_point(last, segment.points[3]).unwrap();
        }
        let step = steps.sample(&mut rng);
        let lut = generate_lut(&spline, step).unwrap();
        let points = lut.points();

        assert_eq!(points[0], spline.point_at(0.0));
        assert_eq!(points[points.len() - 1], spline.point_at(1.0));
        for pair in points[..points.len() - 1].windows(2) {
            assert_relative_eq!(pair[0].distance(&pair[1]), step, epsilon = 1e-9);
        }
        assert!(points[points.len() - 2].distance(&points[points.len() - 1]) <= step + 1e-9);
    }
}
