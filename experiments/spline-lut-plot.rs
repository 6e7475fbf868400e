// Plot a looping spline, its lookup table and the self intersections of its segments.
//
// usage: bezier-spline-lut-plot [step] [output.svg]

use bezier_spline::modules::intersect::{self_intersections_report, IntersectionConfig};
use bezier_spline::{cubic, spline, BezierSpline, ContinuityMode, Point};
use log::{info, warn};
use plotters::prelude::*;
use std::env;

const OUTPUT: &str = "spline-lut-plot.svg";
const DEFAULT_STEP: f64 = 0.25;
const CURVE_SAMPLES: usize = 400;

fn build_spline() -> Result<BezierSpline, Box<dyn std::error::Error>> {
    let mut spline = spline!([
        cubic!([(0, 0), (4, 4), (-4, 4), (0, 0)]),
        cubic!([(0, 0), (3, -3), (6, -1), (6, 2)])
    ]);
    spline.set_joint_mode(1, ContinuityMode::Mirrored)?;
    spline.add_curve();
    spline.set_control_point(7, Point::new(8.0, 6.0, 0.0))?;
    spline.set_loop(true);
    Ok(spline)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let step = match args.next() {
        Some(arg) => arg.parse::<f64>()?,
        None => DEFAULT_STEP,
    };
    let output = args.next().unwrap_or_else(|| OUTPUT.to_string());

    let mut spline = build_spline()?;
    spline.set_step_world_units(step);
    let lut = spline.generate_lut()?.points().to_vec();
    info!(
        "spline of {} segments, length {:.3}, {} lookup table points",
        spline.curve_count(),
        spline.total_length(),
        lut.len()
    );

    let config = IntersectionConfig::default();
    let mut crossings = Vec::new();
    for (i, segment) in spline.segments().iter().enumerate() {
        let report = self_intersections_report(segment, &config);
        if !report.is_exhaustive() {
            warn!("segment {}: intersection search was cut short", i);
        }
        info!(
            "segment {}: {} self intersections in {} iterations",
            i,
            report.points.len(),
            report.iterations
        );
        crossings.extend(report.points);
    }

    let curve: Vec<(f64, f64)> = (0..=CURVE_SAMPLES)
        .map(|k| spline.point_at(k as f64 / CURVE_SAMPLES as f64))
        .map(|p| (p.x, p.y))
        .collect();

    let (min_x, max_x, min_y, max_y) = curve.iter().fold(
        (f64::MAX, f64::MIN, f64::MAX, f64::MIN),
        |(min_x, max_x, min_y, max_y), &(x, y)| {
            (min_x.min(x), max_x.max(x), min_y.min(y), max_y.max(y))
        },
    );
    let margin = 0.5;

    let root = SVGBackend::new(&output, (800, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            format!("lookup table, step {}", step),
            ("sans-serif", 24).into_font(),
        )
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(30)
        .build_cartesian_2d(
            (min_x - margin)..(max_x + margin),
            (min_y - margin)..(max_y + margin),
        )?;
    chart.configure_mesh().draw()?;

    chart
        .draw_series(LineSeries::new(curve, &BLACK))?
        .label("spline")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLACK));

    chart
        .draw_series(
            lut.iter()
                .map(|p| Circle::new((p.x, p.y), 2, BLUE.filled())),
        )?
        .label("lookup table")
        .legend(|(x, y)| Circle::new((x + 10, y), 2, BLUE.filled()));

    chart
        .draw_series(
            crossings
                .iter()
                .map(|p| Cross::new((p.x, p.y), 6, RED.stroke_width(2))),
        )?
        .label("self intersections")
        .legend(|(x, y)| Cross::new((x + 10, y), 4, RED));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    info!("plot written to {}", output);
    Ok(())
}
