//! Recording stand-ins for the physics engine and the canvas.

use std::cell::RefCell;
use std::rc::Rc;

use ggez::glam::Vec2 as GVec2;
use ggez::graphics::{Color, Rect};

use crate::error::{SandboxError, SandboxResult};
use crate::math::{Transform, Vec2};
use crate::physics::{
    BodyDef, BodyId, BodyType, PhysicsBackend, Polygon, ShapeDef, ShapeId, WorldId,
};
use crate::render::{Canvas2d, TextureId};

#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsCall {
    CreateBody(BodyDef),
    CreateShape { body: BodyId, def: ShapeDef },
    DestroyBody(BodyId),
    Step { time_step: f32, sub_steps: usize },
    DestroyWorld,
}

pub type CallLog = Rc<RefCell<Vec<PhysicsCall>>>;

/// Fake world: dynamic bodies sink by `FALL_SPEED * time_step` per step,
/// static bodies stay put. Every call is appended to a shared log that
/// outlives the world, so tests can check destruction too.
pub struct MockPhysics {
    id: WorldId,
    log: CallLog,
    // Destroyed bodies leave a `None` so ids stay stable.
    bodies: Vec<Option<(BodyType, Transform)>>,
    pub reject_shapes: bool,
}

impl MockPhysics {
    pub const FALL_SPEED: f32 = 1.0;

    pub fn new() -> (Self, CallLog) {
        let log = CallLog::default();
        let world = Self {
            id: WorldId::next(),
            log: Rc::clone(&log),
            bodies: Vec::new(),
            reject_shapes: false,
        };
        (world, log)
    }

    fn slot(&self, body: BodyId) -> SandboxResult<usize> {
        if body.world() != self.id {
            return Err(SandboxError::ForeignBody {
                body,
                expected: self.id,
            });
        }
        let index = body.index() as usize;
        match self.bodies.get(index) {
            Some(Some(_)) => Ok(index),
            _ => Err(SandboxError::UnknownBody(body)),
        }
    }
}

impl PhysicsBackend for MockPhysics {
    fn world_id(&self) -> WorldId {
        self.id
    }

    fn create_body(&mut self, def: &BodyDef) -> BodyId {
        self.log.borrow_mut().push(PhysicsCall::CreateBody(*def));
        self.bodies
            .push(Some((def.body_type, Transform::new(def.position, def.rotation))));
        BodyId::new(self.id, (self.bodies.len() - 1) as u32, 0)
    }

    fn create_polygon_shape(
        &mut self,
        body: BodyId,
        def: &ShapeDef,
        _polygon: &Polygon,
    ) -> SandboxResult<ShapeId> {
        self.slot(body)?;
        self.log
            .borrow_mut()
            .push(PhysicsCall::CreateShape { body, def: *def });
        if self.reject_shapes {
            return Err(SandboxError::ColliderRejected(body));
        }
        Ok(ShapeId::new(body, 0))
    }

    fn destroy_body(&mut self, body: BodyId) -> SandboxResult<()> {
        let slot = self.slot(body)?;
        self.log.borrow_mut().push(PhysicsCall::DestroyBody(body));
        self.bodies[slot] = None;
        Ok(())
    }

    fn step(&mut self, time_step: f32, sub_steps: usize) {
        self.log.borrow_mut().push(PhysicsCall::Step {
            time_step,
            sub_steps,
        });
        for (body_type, transform) in self.bodies.iter_mut().flatten() {
            if *body_type == BodyType::Dynamic {
                transform.position =
                    transform.position - Vec2::new(0.0, Self::FALL_SPEED * time_step);
            }
        }
    }

    fn body_transform(&self, body: BodyId) -> SandboxResult<Transform> {
        let slot = self.slot(body)?;
        self.bodies[slot]
            .map(|(_, transform)| transform)
            .ok_or(SandboxError::UnknownBody(body))
    }

    fn body_count(&self) -> usize {
        self.bodies.iter().flatten().count()
    }
}

impl Drop for MockPhysics {
    fn drop(&mut self) {
        self.log.borrow_mut().push(PhysicsCall::DestroyWorld);
    }
}

pub fn count_calls(log: &CallLog, pred: impl Fn(&PhysicsCall) -> bool) -> usize {
    log.borrow().iter().filter(|call| pred(call)).count()
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Rect(Rect, Color),
    Polygon(Vec<GVec2>, Color),
    Texture(TextureId, Rect, f32),
    Text(String),
}

#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    pub fn textures(&self) -> Vec<(TextureId, Rect, f32)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Texture(id, rect, rotation) => Some((*id, *rect, *rotation)),
                _ => None,
            })
            .collect()
    }

    pub fn texts(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Canvas2d for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> SandboxResult<()> {
        self.calls.push(DrawCall::Rect(rect, color));
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[GVec2], color: Color) -> SandboxResult<()> {
        self.calls.push(DrawCall::Polygon(points.to_vec(), color));
        Ok(())
    }

    fn draw_texture(&mut self, texture: TextureId, rect: Rect, rotation: f32) -> SandboxResult<()> {
        self.calls.push(DrawCall::Texture(texture, rect, rotation));
        Ok(())
    }

    fn draw_text(&mut self, text: &str, _dest: GVec2, _color: Color) -> SandboxResult<()> {
        self.calls.push(DrawCall::Text(text.to_string()));
        Ok(())
    }
}
