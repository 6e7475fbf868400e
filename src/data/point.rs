//! A point (or vector) in 3D space.

use crate::constants::EPSILON;
use nalgebra::{Rotation3, Unit, Vector3};
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// Coordinate axis, used to address a single component of a [`Point`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All three axes in order
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];
}

/// A 3D point, also used for offsets and tangents
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point {
    pub const ZERO: Point = Point::new(0.0, 0.0, 0.0);

    /// Unit step along +X, used to extend a spline
    pub const RIGHT: Point = Point::new(1.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component along `axis`
    pub fn axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    pub fn to_vector(self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    pub fn from_vector(v: &Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }

    /// Euclidean length when read as a vector
    pub fn length(&self) -> f64 {
        self.to_vector().norm()
    }

    pub fn length_squared(&self) -> f64 {
        self.to_vector().norm_squared()
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        (*other - *self).length()
    }

    pub fn dot(&self, other: &Point) -> f64 {
        self.to_vector().dot(&other.to_vector())
    }

    pub fn cross(&self, other: &Point) -> Point {
        Point::from_vector(&self.to_vector().cross(&other.to_vector()))
    }

    /// Linear interpolation, `t = 0` gives `self` and `t = 1` gives `other`
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::from_vector(&self.to_vector().lerp(&other.to_vector(), t))
    }

    /// Unit vector in the same direction, or `None` for (near) zero or non-finite input
    pub fn try_normalize(&self) -> Option<Point> {
        if !self.is_finite() {
            return None;
        }
        self.to_vector()
            .try_normalize(EPSILON)
            .map(|v| Point::from_vector(&v))
    }

    /// Rotate this vector by `angle` radians around `axis`
    ///
    /// Returns `None` when the axis has no direction.
    pub fn rotate_around(&self, axis: &Point, angle: f64) -> Option<Point> {
        let axis = Unit::try_new(axis.to_vector(), EPSILON)?;
        let rotation = Rotation3::from_axis_angle(&axis, angle);
        Some(Point::from_vector(&(rotation * self.to_vector())))
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl From<(f64, f64, f64)> for Point {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vector3<f64>> for Point {
    fn from(v: Vector3<f64>) -> Self {
        Self::from_vector(&v)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, rhs: f64) -> Point {
        Point::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Point> for f64 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Point {
        rhs * self
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, rhs: f64) -> Point {
        Point::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl SubAssign for Point {
    fn sub_assign(&mut self, rhs: Point) {
        *self = *self - rhs;
    }
}
