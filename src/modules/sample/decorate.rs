use crate::data::{BezierSpline, Point};

/// Where one copy of a decoration item goes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Index into the caller's item list
    pub item: usize,
    pub position: Point,
    /// Unit tangent, only filled in when looking forward on a non degenerate spot
    pub direction: Option<Point>,
}

/// Spread `frequency` rounds of `item_count` items evenly over the global parameter
///
/// An open spline gets an item on both ends. A looping spline does not repeat its start, and
/// neither does a single placement.
pub fn decorate(
    spline: &BezierSpline,
    frequency: usize,
    item_count: usize,
    look_forward: bool,
) -> Vec<Placement> {
    let steps = match frequency.checked_mul(item_count) {
        Some(steps) if steps > 0 => steps,
        _ => return Vec::new(),
    };
    let step_size = if spline.is_loop() || steps == 1 {
        1.0 / steps as f64
    } else {
        1.0 / (steps - 1) as f64
    };

    (0..steps)
        .map(|p| {
            let t = p as f64 * step_size;
            Placement {
                item: p % item_count,
                position: spline.point_at(t),
                direction: if look_forward {
                    spline.direction(t).ok()
                } else {
                    None
                },
            }
        })
        .collect()
}
