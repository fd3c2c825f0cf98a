//! `PhysicsBackend` over rapier2d.
//!
//! We own the whole rapier pipeline state and drive `PhysicsPipeline::step`
//! ourselves. Rapier handles are converted to `BodyId`/`ShapeId` on the way
//! out and checked on the way back in.

use rapier2d::prelude::*;
use tracing::{debug, trace};

use crate::error::{SandboxError, SandboxResult};
use crate::math::{Transform, Vec2};

use super::backend::PhysicsBackend;
use super::defs::{BodyDef, BodyType, ShapeDef, WorldDef};
use super::handle::{BodyId, ShapeId, WorldId};
use super::polygon::Polygon;

pub struct RapierWorld {
    id: WorldId,
    gravity: Vector<Real>,
    integration_parameters: IntegrationParameters,
    physics_pipeline: PhysicsPipeline,
    island_manager: IslandManager,
    broad_phase: DefaultBroadPhase,
    narrow_phase: NarrowPhase,
    bodies: RigidBodySet,
    colliders: ColliderSet,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
    steps_taken: u64,
}

impl RapierWorld {
    pub fn new(def: &WorldDef) -> Self {
        let id = WorldId::next();
        debug!(world = ?id, gravity = ?def.gravity, "creating physics world");

        Self {
            id,
            gravity: def.gravity.into(),
            integration_parameters: IntegrationParameters::default(),
            physics_pipeline: PhysicsPipeline::new(),
            island_manager: IslandManager::new(),
            broad_phase: DefaultBroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
            steps_taken: 0,
        }
    }

    /// Number of `step` calls so far.
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    fn resolve(&self, body: BodyId) -> SandboxResult<RigidBodyHandle> {
        if body.world() != self.id {
            return Err(SandboxError::ForeignBody {
                body,
                expected: self.id,
            });
        }
        let handle = RigidBodyHandle::from_raw_parts(body.index(), body.generation());
        if self.bodies.contains(handle) {
            Ok(handle)
        } else {
            Err(SandboxError::UnknownBody(body))
        }
    }
}

impl Default for RapierWorld {
    fn default() -> Self {
        Self::new(&WorldDef::default())
    }
}

impl PhysicsBackend for RapierWorld {
    fn world_id(&self) -> WorldId {
        self.id
    }

    fn create_body(&mut self, def: &BodyDef) -> BodyId {
        let builder = match def.body_type {
            BodyType::Static => RigidBodyBuilder::fixed(),
            BodyType::Dynamic => RigidBodyBuilder::dynamic(),
        };
        let mut builder = builder
            .translation(def.position.into())
            .rotation(def.rotation);
        if def.fixed_rotation {
            builder = builder.lock_rotations();
        }

        let handle = self.bodies.insert(builder.build());
        let (index, generation) = handle.into_raw_parts();
        let body = BodyId::new(self.id, index, generation);
        trace!(?body, body_type = ?def.body_type, position = ?def.position, "created body");
        body
    }

    fn create_polygon_shape(
        &mut self,
        body: BodyId,
        def: &ShapeDef,
        polygon: &Polygon,
    ) -> SandboxResult<ShapeId> {
        let parent = self.resolve(body)?;
        let points: Vec<Point<Real>> = polygon
            .vertices()
            .iter()
            .map(|v| Point::new(v.x, v.y))
            .collect();

        let collider = ColliderBuilder::convex_hull(&points)
            .ok_or(SandboxError::ColliderRejected(body))?
            .density(def.density)
            .friction(def.friction)
            .restitution(def.restitution)
            .build();

        let handle = self
            .colliders
            .insert_with_parent(collider, parent, &mut self.bodies);
        let (index, _) = handle.into_raw_parts();
        trace!(?body, density = def.density, friction = def.friction, "attached polygon shape");
        Ok(ShapeId::new(body, index))
    }

    fn destroy_body(&mut self, body: BodyId) -> SandboxResult<()> {
        let handle = self.resolve(body)?;
        self.bodies.remove(
            handle,
            &mut self.island_manager,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
        trace!(?body, "destroyed body");
        Ok(())
    }

    fn step(&mut self, time_step: f32, sub_steps: usize) {
        let sub_steps = sub_steps.max(1);
        self.integration_parameters.dt = time_step / sub_steps as f32;

        for _ in 0..sub_steps {
            self.physics_pipeline.step(
                &self.gravity,
                &self.integration_parameters,
                &mut self.island_manager,
                &mut self.broad_phase,
                &mut self.narrow_phase,
                &mut self.bodies,
                &mut self.colliders,
                &mut self.impulse_joints,
                &mut self.multibody_joints,
                &mut self.ccd_solver,
                None,
                &(),
                &(),
            );
        }
        self.steps_taken += 1;
    }

    fn body_transform(&self, body: BodyId) -> SandboxResult<Transform> {
        let handle = self.resolve(body)?;
        let rb = &self.bodies[handle];
        Ok(Transform::new(
            (*rb.translation()).into(),
            rb.rotation().angle(),
        ))
    }

    fn body_count(&self) -> usize {
        self.bodies.len()
    }
}

impl Drop for RapierWorld {
    fn drop(&mut self) {
        debug!(
            world = ?self.id,
            bodies = self.bodies.len(),
            colliders = self.colliders.len(),
            steps = self.steps_taken,
            "destroying physics world"
        );
    }
}
