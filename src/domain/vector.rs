// 2D vector math shared by the simulation and the render adapter.

use serde::Serialize;
use std::ops::{Add, AddAssign, Mul, Sub};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector the ship points along for a given orientation.
    ///
    /// 0 rad = up / -Y; positive angles turn the nose right (y-down coordinates).
    pub fn up(angle: f64) -> Self {
        Self::new(angle.sin(), -angle.cos())
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Scales both components in place.
    pub fn scale_mut(&mut self, factor: f64) {
        self.x *= factor;
        self.y *= factor;
    }
}

impl Add for Vector2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// Rotates `point` by `angle` radians: `(x cos - y sin, x sin + y cos)`.
pub fn rotate(point: Vector2, angle: f64) -> Vector2 {
    let (sin, cos) = angle.sin_cos();
    Vector2::new(point.x * cos - point.y * sin, point.x * sin + point.y * cos)
}

/// Floored modulo: the result takes the sign of `modulus`.
pub fn wrap(a: f64, modulus: f64) -> f64 {
    a - (a / modulus).floor() * modulus
}
