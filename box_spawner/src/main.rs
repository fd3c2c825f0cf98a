use std::path::PathBuf;

use ggez::event::{self, EventHandler};
use ggez::graphics::{Color, Image};
use ggez::input::keyboard::KeyInput;
use ggez::input::mouse::MouseButton;
use ggez::{conf, Context, ContextBuilder, GameResult};
use tracing::info;

use box_sandbox::config::{BOX_TEXTURE_PATH, GROUND_TEXTURE_PATH};
use box_sandbox::logging::init_tracing;
use box_sandbox::scene::input::{from_key, from_mouse};
use box_sandbox::scene::{Flow, SceneInput};
use box_sandbox::{DemoConfig, GgezCanvas, RapierWorld, SpawnerScene, TextureRegistry, WorldDef};

struct MainState {
    scene: SpawnerScene<RapierWorld>,
    textures: TextureRegistry<Image>,
}

impl MainState {
    fn new(ctx: &mut Context, config: &DemoConfig) -> GameResult<MainState> {
        let mut textures = TextureRegistry::new();
        let box_texture = textures.insert(BOX_TEXTURE_PATH, Image::from_path(ctx, BOX_TEXTURE_PATH)?);
        let ground_texture =
            textures.insert(GROUND_TEXTURE_PATH, Image::from_path(ctx, GROUND_TEXTURE_PATH)?);

        let world = RapierWorld::new(&WorldDef {
            gravity: config.gravity,
        });
        let scene = SpawnerScene::new(world, config, box_texture, ground_texture)?;
        Ok(MainState { scene, textures })
    }

    fn apply(&mut self, ctx: &mut Context, input: SceneInput) -> GameResult {
        if self.scene.handle_input(input)? == Flow::Quit {
            ctx.request_quit();
        }
        Ok(())
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        let frame_time = ctx.time.delta().as_secs_f32();
        self.scene.update(frame_time);
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = GgezCanvas::begin(ctx, Some(&self.textures), Color::from_rgb(40, 44, 52));
        self.scene.draw(&mut canvas)?;
        canvas.finish()
    }

    fn mouse_button_down_event(
        &mut self,
        ctx: &mut Context,
        button: MouseButton,
        x: f32,
        y: f32,
    ) -> GameResult {
        match from_mouse(button, x, y) {
            Some(input) => self.apply(ctx, input),
            None => Ok(()),
        }
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeated: bool) -> GameResult {
        if repeated {
            return Ok(());
        }
        match input.keycode.and_then(from_key) {
            Some(scene_input) => self.apply(ctx, scene_input),
            None => Ok(()),
        }
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> GameResult<bool> {
        let released = self.textures.unload_all();
        info!(
            boxes = self.scene.entities().len(),
            textures = released,
            "shutting down"
        );
        Ok(false)
    }
}

pub fn main() -> GameResult {
    init_tracing();
    let config = DemoConfig::box_spawner();
    info!(title = %config.window_title, "starting");

    let resource_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("resources");
    let (mut ctx, event_loop) = ContextBuilder::new("box_spawner", "box_sandbox")
        .window_setup(conf::WindowSetup::default().title(&config.window_title))
        .window_mode(conf::WindowMode::default().dimensions(config.window_width, config.window_height))
        .add_resource_path(resource_dir)
        .build()?;

    let state = MainState::new(&mut ctx, &config)?;
    event::run(ctx, event_loop, state)
}
