use crate::error::SandboxResult;
use crate::math::{Transform, Vec2};

use super::defs::{BodyDef, ShapeDef};
use super::handle::{BodyId, ShapeId, WorldId};
use super::polygon::Polygon;

/// The part of a physics engine the demos consume.
///
/// One value of an implementing type is one world: creating it creates the
/// world and dropping it destroys the world together with every body and
/// shape created through it.
pub trait PhysicsBackend {
    fn world_id(&self) -> WorldId;

    fn create_body(&mut self, def: &BodyDef) -> BodyId;

    /// Attaches a polygon collider to `body`.
    fn create_polygon_shape(
        &mut self,
        body: BodyId,
        def: &ShapeDef,
        polygon: &Polygon,
    ) -> SandboxResult<ShapeId>;

    /// Removes `body` and every shape attached to it.
    fn destroy_body(&mut self, body: BodyId) -> SandboxResult<()>;

    /// Advances the world by `time_step` seconds split into `sub_steps` solver passes.
    fn step(&mut self, time_step: f32, sub_steps: usize);

    fn body_transform(&self, body: BodyId) -> SandboxResult<Transform>;

    fn body_count(&self) -> usize;

    fn body_position(&self, body: BodyId) -> SandboxResult<Vec2> {
        Ok(self.body_transform(body)?.position)
    }

    /// Rotation angle in radians.
    fn body_rotation(&self, body: BodyId) -> SandboxResult<f32> {
        Ok(self.body_transform(body)?.rotation)
    }
}
