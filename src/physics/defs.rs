//! Definition values passed to a physics backend when creating a world,
//! a body or a shape. They are plain data: build one, hand it over, and the
//! backend copies what it needs.

use crate::math::Vec2;

/// Gravity used when nothing else is specified, in m/s².
pub const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, -10.0);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldDef {
    pub gravity: Vec2,
}

impl Default for WorldDef {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyType {
    /// Immovable, infinite mass.
    #[default]
    Static,
    /// Simulated: affected by gravity and contacts.
    Dynamic,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyDef {
    pub body_type: BodyType,
    /// World position of the body origin.
    pub position: Vec2,
    /// Initial rotation in radians.
    pub rotation: f32,
    /// Locks rotation so contacts never spin the body.
    pub fixed_rotation: bool,
}

impl Default for BodyDef {
    /// Static body at the origin with free rotation.
    fn default() -> Self {
        Self {
            body_type: BodyType::Static,
            position: Vec2::ZERO,
            rotation: 0.0,
            fixed_rotation: false,
        }
    }
}

impl BodyDef {
    pub fn dynamic() -> Self {
        Self {
            body_type: BodyType::Dynamic,
            ..Self::default()
        }
    }

    pub fn at(mut self, position: Vec2) -> Self {
        self.position = position;
        self
    }

    pub fn with_rotation(mut self, rotation: f32) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_fixed_rotation(mut self, fixed_rotation: bool) -> Self {
        self.fixed_rotation = fixed_rotation;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDef {
    /// Mass per unit area, kg/m².
    pub density: f32,
    pub friction: f32,
    /// Bounciness in `[0, 1]`.
    pub restitution: f32,
}

impl Default for ShapeDef {
    fn default() -> Self {
        Self {
            density: 1.0,
            friction: 0.6,
            restitution: 0.0,
        }
    }
}

impl ShapeDef {
    pub fn with_density(mut self, density: f32) -> Self {
        self.density = density.max(0.0);
        self
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction.max(0.0);
        self
    }

    pub fn with_restitution(mut self, restitution: f32) -> Self {
        self.restitution = restitution.clamp(0.0, 1.0);
        self
    }
}
