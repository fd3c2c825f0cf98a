use ggez::glam::Vec2 as GVec2;
use ggez::graphics::Color;
use tracing::{debug, info, warn};

use crate::config::{DemoConfig, StepPolicy};
use crate::error::SandboxResult;
use crate::math::Vec2;
use crate::physics::{BodyDef, BodyId, PhysicsBackend, Polygon, ShapeDef};
use crate::render::{Camera, Canvas2d, TextureId};

use super::input::{Flow, SceneInput};

/// A body paired with what is needed to draw it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entity {
    pub body: BodyId,
    pub texture: TextureId,
    pub half_extents: Vec2,
}

/// Click-to-spawn sandbox: a textured ground and any number of
/// rotation-locked sprite boxes.
pub struct SpawnerScene<P: PhysicsBackend> {
    physics: P,
    camera: Camera,
    step_policy: StepPolicy,
    sub_steps: usize,
    ground: Entity,
    box_texture: TextureId,
    box_shape: Polygon,
    box_shape_def: ShapeDef,
    // Spawn order; never shrinks.
    entities: Vec<Entity>,
    paused: bool,
}

impl<P: PhysicsBackend> SpawnerScene<P> {
    pub fn new(
        mut physics: P,
        config: &DemoConfig,
        box_texture: TextureId,
        ground_texture: TextureId,
    ) -> SandboxResult<Self> {
        let body = physics.create_body(&BodyDef::default().at(config.ground_position));
        let ground_shape = Polygon::make_box(
            config.ground_half_extents.x,
            config.ground_half_extents.y,
        )?;
        physics.create_polygon_shape(body, &ShapeDef::default(), &ground_shape)?;

        let box_shape = Polygon::make_box(config.box_half_extents.x, config.box_half_extents.y)?;
        let box_shape_def = ShapeDef::default()
            .with_density(config.box_density)
            .with_friction(config.box_friction);

        info!(world = ?physics.world_id(), "spawner scene ready");

        Ok(Self {
            physics,
            camera: config.camera(),
            step_policy: config.step_policy,
            sub_steps: config.sub_steps,
            ground: Entity {
                body,
                texture: ground_texture,
                half_extents: ground_shape.half_extents(),
            },
            box_texture,
            box_shape,
            box_shape_def,
            entities: Vec::new(),
            paused: false,
        })
    }

    pub fn handle_input(&mut self, input: SceneInput) -> SandboxResult<Flow> {
        match input {
            SceneInput::Spawn(screen) => {
                self.spawn_box(screen)?;
            }
            SceneInput::InertSpawn(screen) => self.inert_spawn(screen),
            SceneInput::TogglePause => {
                self.paused = !self.paused;
                info!(paused = self.paused, "physics pause toggled");
            }
            SceneInput::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    /// Creates a rotation-locked dynamic box under the cursor.
    ///
    /// If the engine refuses the collider the new body is destroyed again,
    /// so a failed spawn leaves the world as it was.
    pub fn spawn_box(&mut self, screen: GVec2) -> SandboxResult<Entity> {
        let position = self.camera.screen_to_world(screen);
        let def = BodyDef::dynamic().at(position).with_fixed_rotation(true);
        let body = self.physics.create_body(&def);
        if let Err(e) = self
            .physics
            .create_polygon_shape(body, &self.box_shape_def, &self.box_shape)
        {
            self.physics.destroy_body(body)?;
            return Err(e);
        }

        let entity = Entity {
            body,
            texture: self.box_texture,
            half_extents: self.box_shape.half_extents(),
        };
        self.entities.push(entity);
        debug!(?body, ?position, count = self.entities.len(), "spawned box");
        Ok(entity)
    }

    // Right click builds the definitions for a second spawn type but never
    // creates anything from them.
    fn inert_spawn(&self, screen: GVec2) {
        let position = self.camera.screen_to_world(screen);
        let body_def = BodyDef::dynamic().at(position);
        let shape_def = ShapeDef::default()
            .with_density(self.box_shape_def.density)
            .with_friction(self.box_shape_def.friction);
        debug!(?body_def, ?shape_def, "right click: definition built, nothing spawned");
    }

    /// Advances the world for a frame that took `frame_time` seconds,
    /// unless paused.
    pub fn update(&mut self, frame_time: f32) {
        if self.paused {
            return;
        }
        let dt = self.step_policy.delta(frame_time);
        if dt > 0.0 {
            self.physics.step(dt, self.sub_steps);
        }
    }

    pub fn draw(&self, canvas: &mut impl Canvas2d) -> SandboxResult<()> {
        for entity in std::iter::once(&self.ground).chain(&self.entities) {
            let transform = match self.physics.body_transform(entity.body) {
                Ok(transform) => transform,
                Err(e) => {
                    warn!(error = %e, body = ?entity.body, "skipping entity this frame");
                    continue;
                }
            };
            let rect = self.camera.body_rect(transform, entity.half_extents);
            // Screen y points down, so world counter-clockwise is clockwise here.
            canvas.draw_texture(entity.texture, rect, -transform.rotation)?;
        }

        canvas.draw_text(
            &format!("Boxes: {}", self.entities.len()),
            GVec2::new(10.0, 10.0),
            Color::WHITE,
        )?;
        if self.paused {
            canvas.draw_text("PAUSED", GVec2::new(10.0, 28.0), Color::YELLOW)?;
        }
        Ok(())
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn physics(&self) -> &P {
        &self.physics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SandboxError;
    use crate::physics::{BodyType, RapierWorld};
    use crate::render::TextureRegistry;
    use crate::test_support::{count_calls, CallLog, MockPhysics, PhysicsCall, RecordingCanvas};

    fn textures() -> (TextureId, TextureId) {
        let mut registry = TextureRegistry::new();
        (registry.insert("/box.png", ()), registry.insert("/ground.png", ()))
    }

    fn mock_scene() -> (SpawnerScene<MockPhysics>, CallLog) {
        let (physics, log) = MockPhysics::new();
        let (box_texture, ground_texture) = textures();
        let scene = SpawnerScene::new(
            physics,
            &DemoConfig::box_spawner(),
            box_texture,
            ground_texture,
        )
        .unwrap();
        (scene, log)
    }

    fn click(x: f32, y: f32) -> SceneInput {
        SceneInput::Spawn(GVec2::new(x, y))
    }

    #[test]
    fn test_left_click_adds_exactly_one_entity() {
        let (mut scene, log) = mock_scene();
        let calls_before = log.borrow().len();

        for n in 1..=3 {
            scene.handle_input(click(400.0, 100.0)).unwrap();
            assert_eq!(scene.entities().len(), n);
        }
        assert_eq!(log.borrow().len() - calls_before, 6);
        assert_eq!(
            count_calls(&log, |c| matches!(c, PhysicsCall::CreateBody(def) if def.body_type == BodyType::Dynamic && def.fixed_rotation)),
            3
        );
    }

    #[test]
    fn test_spawn_lands_under_cursor() {
        let (mut scene, _log) = mock_scene();
        let entity = scene.spawn_box(GVec2::new(432.0, 476.0)).unwrap();
        // Camera origin is (400, 540) at 32 px/m.
        let position = scene.physics().body_position(entity.body).unwrap();
        assert_eq!(position, Vec2::new(1.0, 2.0));
        assert_eq!(entity.half_extents, Vec2::new(0.5, 0.5));
    }

    #[test]
    fn test_rejected_spawn_removes_its_body() {
        let (mut scene, log) = mock_scene();
        let bodies_before = scene.physics().body_count();
        scene.physics.reject_shapes = true;

        let result = scene.handle_input(click(400.0, 100.0));

        assert!(matches!(result, Err(SandboxError::ColliderRejected(_))));
        assert!(scene.entities().is_empty());
        assert_eq!(scene.physics().body_count(), bodies_before);
        assert_eq!(
            count_calls(&log, |c| matches!(c, PhysicsCall::DestroyBody(_))),
            1
        );

        scene.physics.reject_shapes = false;
        scene.handle_input(click(400.0, 100.0)).unwrap();
        assert_eq!(scene.entities().len(), 1);
        assert_eq!(scene.physics().body_count(), bodies_before + 1);
    }

    #[test]
    fn test_right_click_changes_nothing() {
        let (mut scene, log) = mock_scene();
        let calls_before = log.borrow().clone();

        let flow = scene
            .handle_input(SceneInput::InertSpawn(GVec2::new(400.0, 100.0)))
            .unwrap();

        assert_eq!(flow, Flow::Continue);
        assert!(scene.entities().is_empty());
        assert_eq!(*log.borrow(), calls_before);
    }

    #[test]
    fn test_pause_freezes_bodies_until_toggled() {
        let (mut scene, log) = mock_scene();
        scene.handle_input(click(400.0, 100.0)).unwrap();
        scene.handle_input(click(300.0, 100.0)).unwrap();
        scene.update(1.0 / 60.0);

        scene.handle_input(SceneInput::TogglePause).unwrap();
        assert!(scene.is_paused());
        let frozen: Vec<Vec2> = scene
            .entities()
            .iter()
            .map(|e| scene.physics().body_position(e.body).unwrap())
            .collect();
        let steps_before = count_calls(&log, |c| matches!(c, PhysicsCall::Step { .. }));

        for _ in 0..10 {
            scene.update(1.0 / 60.0);
        }
        for (entity, before) in scene.entities().iter().zip(&frozen) {
            assert_eq!(scene.physics().body_position(entity.body).unwrap(), *before);
        }
        assert_eq!(
            count_calls(&log, |c| matches!(c, PhysicsCall::Step { .. })),
            steps_before
        );

        scene.handle_input(SceneInput::TogglePause).unwrap();
        scene.update(1.0 / 60.0);
        let moved = scene.physics().body_position(scene.entities()[0].body).unwrap();
        assert!(moved.y < frozen[0].y);
    }

    #[test]
    fn test_measured_step_is_clamped() {
        let (mut scene, log) = mock_scene();
        scene.update(3.0);
        assert_eq!(
            log.borrow().last(),
            Some(&PhysicsCall::Step {
                time_step: crate::config::MAX_MEASURED_STEP,
                sub_steps: crate::config::SUB_STEPS
            })
        );
    }

    #[test]
    fn test_quit_input_ends_loop() {
        let (mut scene, _log) = mock_scene();
        assert_eq!(scene.handle_input(SceneInput::Quit).unwrap(), Flow::Quit);
    }

    #[test]
    fn test_draw_uses_each_entity_texture() {
        let (mut scene, _log) = mock_scene();
        let (box_texture, ground_texture) = textures();
        scene.handle_input(click(400.0, 100.0)).unwrap();
        scene.handle_input(click(200.0, 100.0)).unwrap();

        let mut canvas = RecordingCanvas::default();
        scene.draw(&mut canvas).unwrap();

        let drawn = canvas.textures();
        assert_eq!(drawn.len(), 3);
        assert_eq!(drawn[0].0, ground_texture);
        assert_eq!(drawn[1].0, box_texture);
        assert_eq!(drawn[2].0, box_texture);
        // Box sprites are 1 m = 32 px square.
        assert_eq!((drawn[1].1.w, drawn[1].1.h), (32.0, 32.0));
        assert_eq!(canvas.texts(), vec!["Boxes: 2"]);
    }

    #[test]
    fn test_draw_shows_pause_banner() {
        let (mut scene, _log) = mock_scene();
        scene.handle_input(SceneInput::TogglePause).unwrap();
        let mut canvas = RecordingCanvas::default();
        scene.draw(&mut canvas).unwrap();
        assert_eq!(canvas.texts(), vec!["Boxes: 0", "PAUSED"]);
    }

    #[test]
    fn test_world_destroyed_once_on_drop() {
        let (mut scene, log) = mock_scene();
        scene.handle_input(click(400.0, 100.0)).unwrap();
        drop(scene);
        assert_eq!(count_calls(&log, |c| *c == PhysicsCall::DestroyWorld), 1);
    }

    #[test]
    fn test_spawned_boxes_stack_with_rapier() {
        let (box_texture, ground_texture) = textures();
        let mut scene = SpawnerScene::new(
            RapierWorld::default(),
            &DemoConfig::box_spawner(),
            box_texture,
            ground_texture,
        )
        .unwrap();
        // Two boxes, one above the other, dropped at the same x.
        scene.spawn_box(GVec2::new(400.0, 400.0)).unwrap();
        scene.spawn_box(GVec2::new(400.0, 300.0)).unwrap();
        for _ in 0..300 {
            scene.update(1.0 / 60.0);
        }

        let lower = scene.physics().body_transform(scene.entities()[0].body).unwrap();
        let upper = scene.physics().body_transform(scene.entities()[1].body).unwrap();
        assert!((lower.position.y - 0.5).abs() < 0.05, "lower at {lower:?}");
        assert!((upper.position.y - 1.5).abs() < 0.05, "upper at {upper:?}");
        assert_eq!(lower.rotation, 0.0);
        assert_eq!(upper.rotation, 0.0);
    }
}
