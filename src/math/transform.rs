use super::vec2::Vec2;

/// Position and rotation of a body as reported by the physics engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec2,
    pub rotation: f32, // Angle in radians
}

impl Transform {
    pub fn new(position: Vec2, rotation: f32) -> Self {
        Self { position, rotation }
    }

    pub fn identity() -> Self {
        Self::new(Vec2::ZERO, 0.0)
    }

    /// Applies the transform (rotation then translation) to a point.
    pub fn apply(self, point: Vec2) -> Vec2 {
        point.rotate(self.rotation) + self.position
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
