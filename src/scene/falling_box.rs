use ggez::glam::Vec2 as GVec2;
use ggez::graphics::Color;
use tracing::info;

use crate::config::{DemoConfig, StepPolicy};
use crate::error::SandboxResult;
use crate::math::Vec2;
use crate::physics::{BodyDef, BodyId, PhysicsBackend, Polygon, ShapeDef};
use crate::render::{Camera, Canvas2d};

const GROUND_COLOR: Color = Color {
    r: 0.3,
    g: 0.3,
    b: 0.3,
    a: 1.0,
};

/// One static ground slab and one dynamic box falling onto it.
pub struct FallingBoxScene<P: PhysicsBackend> {
    physics: P,
    camera: Camera,
    step_policy: StepPolicy,
    sub_steps: usize,
    ground: BodyId,
    ground_half_extents: Vec2,
    body: BodyId,
    box_shape: Polygon,
}

impl<P: PhysicsBackend> FallingBoxScene<P> {
    pub fn new(mut physics: P, config: &DemoConfig) -> SandboxResult<Self> {
        // Ground
        let ground = physics.create_body(&BodyDef::default().at(config.ground_position));
        let ground_shape = Polygon::make_box(
            config.ground_half_extents.x,
            config.ground_half_extents.y,
        )?;
        physics.create_polygon_shape(ground, &ShapeDef::default(), &ground_shape)?;

        // Dynamic
        let body = physics.create_body(&BodyDef::dynamic().at(config.box_position));
        let box_shape = Polygon::make_box(config.box_half_extents.x, config.box_half_extents.y)?;
        let shape_def = ShapeDef::default()
            .with_density(config.box_density)
            .with_friction(config.box_friction);
        physics.create_polygon_shape(body, &shape_def, &box_shape)?;

        info!(world = ?physics.world_id(), ?body, position = ?config.box_position, "falling box scene ready");

        Ok(Self {
            physics,
            camera: config.camera(),
            step_policy: config.step_policy,
            sub_steps: config.sub_steps,
            ground,
            ground_half_extents: ground_shape.half_extents(),
            body,
            box_shape,
        })
    }

    /// Advances the world for a frame that took `frame_time` seconds.
    pub fn update(&mut self, frame_time: f32) {
        let dt = self.step_policy.delta(frame_time);
        if dt > 0.0 {
            self.physics.step(dt, self.sub_steps);
        }
    }

    /// `x y angle` of the box, for the console.
    pub fn status_line(&self) -> SandboxResult<String> {
        let transform = self.physics.body_transform(self.body)?;
        Ok(format!(
            "{:4.2} {:4.2} {:4.2}",
            transform.position.x, transform.position.y, transform.rotation
        ))
    }

    pub fn draw(&self, canvas: &mut impl Canvas2d) -> SandboxResult<()> {
        let ground = self.physics.body_transform(self.ground)?;
        canvas.fill_rect(
            self.camera.body_rect(ground, self.ground_half_extents),
            GROUND_COLOR,
        )?;

        let transform = self.physics.body_transform(self.body)?;
        let points = self.camera.polygon_points(&self.box_shape, transform);
        canvas.fill_polygon(&points, Color::RED)?;

        canvas.draw_text(
            &format!(
                "Position: x:{:.2} y:{:.2}",
                transform.position.x, transform.position.y
            ),
            GVec2::new(4.0, 4.0),
            Color::WHITE,
        )
    }

    pub fn body(&self) -> BodyId {
        self.body
    }

    pub fn physics(&self) -> &P {
        &self.physics
    }
}
