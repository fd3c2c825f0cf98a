use ggez::event::{self, EventHandler};
use ggez::graphics::Color;
use ggez::input::keyboard::{KeyCode, KeyInput};
use ggez::{conf, Context, ContextBuilder, GameResult};
use tracing::info;

use box_sandbox::config::FIXED_TIME_STEP;
use box_sandbox::logging::init_tracing;
use box_sandbox::{DemoConfig, FallingBoxScene, GgezCanvas, RapierWorld, WorldDef};

struct MainState {
    scene: FallingBoxScene<RapierWorld>,
    target_fps: u32,
}

impl MainState {
    fn new(config: &DemoConfig) -> GameResult<MainState> {
        let world = RapierWorld::new(&WorldDef {
            gravity: config.gravity,
        });
        let scene = FallingBoxScene::new(world, config)?;
        Ok(MainState {
            scene,
            target_fps: config.target_fps,
        })
    }
}

impl EventHandler for MainState {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        while ctx.time.check_update_time(self.target_fps) {
            self.scene.update(FIXED_TIME_STEP);
            println!("{}", self.scene.status_line()?);
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = GgezCanvas::begin(ctx, None, Color::from_rgb(130, 130, 130));
        self.scene.draw(&mut canvas)?;
        canvas.finish()
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeated: bool) -> GameResult {
        if input.keycode == Some(KeyCode::Escape) {
            ctx.request_quit();
        }
        Ok(())
    }
}

pub fn main() -> GameResult {
    init_tracing();
    let config = DemoConfig::falling_box();
    info!(title = %config.window_title, "starting");

    let (ctx, event_loop) = ContextBuilder::new("falling_box", "box_sandbox")
        .window_setup(conf::WindowSetup::default().title(&config.window_title))
        .window_mode(conf::WindowMode::default().dimensions(config.window_width, config.window_height))
        .build()?;

    let state = MainState::new(&config)?;
    event::run(ctx, event_loop, state)
}
