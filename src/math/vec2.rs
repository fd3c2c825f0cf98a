use std::ops::{Add, Sub};

/// 2D vector in world space (metres, y up).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    /// Creates a new Vec2.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    pub fn magnitude(self) -> f32 {
        self.dot(self).sqrt()
    }

    pub fn distance(self, other: Self) -> f32 {
        (self - other).magnitude()
    }

    /// Rotates the vector by a given angle (in radians).
    pub fn rotate(self, angle: f32) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        Self::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
        )
    }

    /// Computes the 2D cross product (scalar). Equivalent to z-component of 3D cross product.
    pub fn cross(self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

// Conversions at the engine boundary. Nothing outside `physics::rapier_world`
// should see nalgebra types.
impl From<rapier2d::math::Vector<f32>> for Vec2 {
    fn from(v: rapier2d::math::Vector<f32>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Vec2> for rapier2d::math::Vector<f32> {
    fn from(v: Vec2) -> Self {
        rapier2d::math::Vector::new(v.x, v.y)
    }
}
