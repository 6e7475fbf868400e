//! Axis aligned bounding box stored as center and size.

use crate::data::point::{Axis, Point};

/// Axis aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub center: Point,
    pub size: Point,
}

impl BoundingBox {
    pub fn new(center: Point, size: Point) -> Self {
        Self { center, size }
    }

    /// Build a box from its minimum and maximum corners
    pub fn from_min_max(min: Point, max: Point) -> Self {
        Self {
            center: (min + max) / 2.0,
            size: max - min,
        }
    }

    pub fn min(&self) -> Point {
        self.center - self.size / 2.0
    }

    pub fn max(&self) -> Point {
        self.center + self.size / 2.0
    }

    /// Whether the two boxes overlap
    ///
    /// Axes on which both boxes are flat are skipped, so a box with zero size on
    /// every axis overlaps anything. Boxes that only touch do not overlap.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        self.overlaps_within(other, 0.0)
    }

    /// Like [`overlaps`](Self::overlaps), but boxes up to `tolerance` apart still count
    pub fn overlaps_within(&self, other: &BoundingBox, tolerance: f64) -> bool {
        Axis::ALL.iter().all(|&axis| {
            let half_extent = (self.size.axis(axis) + other.size.axis(axis)) / 2.0;
            if half_extent == 0.0 {
                return true;
            }
            (self.center.axis(axis) - other.center.axis(axis)).abs() < half_extent + tolerance
        })
    }

    /// Whether `point` lies inside the box, allowing `tolerance` slack per axis
    pub fn contains(&self, point: &Point, tolerance: f64) -> bool {
        let (min, max) = (self.min(), self.max());
        Axis::ALL.iter().all(|&axis| {
            let v = point.axis(axis);
            v >= min.axis(axis) - tolerance && v <= max.axis(axis) + tolerance
        })
    }
}
