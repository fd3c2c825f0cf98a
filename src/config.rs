use ggez::glam::Vec2 as GVec2;

use crate::math::Vec2;
use crate::physics::defs::DEFAULT_GRAVITY;
use crate::render::Camera;

// Demo-wide constants (not physics tuning).

pub const TARGET_FPS: u32 = 60;
pub const FIXED_TIME_STEP: f32 = 1.0 / TARGET_FPS as f32;
pub const SUB_STEPS: usize = 4;
/// Longest frame a measured step will simulate in one go.
pub const MAX_MEASURED_STEP: f32 = 1.0 / 20.0;

pub const BOX_TEXTURE_PATH: &str = "/box.png";
pub const GROUND_TEXTURE_PATH: &str = "/ground.png";

/// How a frame decides how much simulated time to advance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepPolicy {
    /// Constant increment regardless of wall time.
    Fixed(f32),
    /// The renderer's frame time, clamped to `max`.
    Measured { max: f32 },
}

impl StepPolicy {
    /// Seconds to simulate for a frame that took `frame_time` seconds.
    pub fn delta(self, frame_time: f32) -> f32 {
        match self {
            StepPolicy::Fixed(dt) => dt,
            StepPolicy::Measured { max } => frame_time.clamp(0.0, max),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DemoConfig {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub target_fps: u32,
    pub step_policy: StepPolicy,
    pub sub_steps: usize,
    pub gravity: Vec2,

    pub pixels_per_meter: f32,
    /// Screen position of the world origin, as a fraction of the window size.
    pub origin_fraction: GVec2,

    /// Ground body position and box half extents, metres.
    pub ground_position: Vec2,
    pub ground_half_extents: Vec2,

    /// Dynamic box spawn position (Demo A) and half extents.
    pub box_position: Vec2,
    pub box_half_extents: Vec2,
    pub box_density: f32,
    pub box_friction: f32,
}

impl DemoConfig {
    /// Demo A: one box dropped on the ground in a small window.
    pub fn falling_box() -> Self {
        Self {
            window_title: "Falling Box".to_string(),
            window_width: 64.0 * 5.0,
            window_height: 64.0 * 5.0,
            step_policy: StepPolicy::Fixed(FIXED_TIME_STEP),
            pixels_per_meter: 16.0,
            origin_fraction: GVec2::new(0.5, 0.75),
            ..Self::default()
        }
    }

    /// Demo B: click to spawn sprite boxes.
    pub fn box_spawner() -> Self {
        Self {
            window_title: "Box Spawner".to_string(),
            window_width: 800.0,
            window_height: 600.0,
            step_policy: StepPolicy::Measured {
                max: MAX_MEASURED_STEP,
            },
            pixels_per_meter: 32.0,
            origin_fraction: GVec2::new(0.5, 0.9),
            box_half_extents: Vec2::new(0.5, 0.5),
            ..Self::default()
        }
    }

    pub fn camera(&self) -> Camera {
        Camera::new(
            self.pixels_per_meter,
            GVec2::new(
                self.window_width * self.origin_fraction.x,
                self.window_height * self.origin_fraction.y,
            ),
        )
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            window_title: "Box Sandbox".to_string(),
            window_width: 800.0,
            window_height: 600.0,
            target_fps: TARGET_FPS,
            step_policy: StepPolicy::Fixed(FIXED_TIME_STEP),
            sub_steps: SUB_STEPS,
            gravity: DEFAULT_GRAVITY,
            pixels_per_meter: 16.0,
            origin_fraction: GVec2::new(0.5, 0.75),
            ground_position: Vec2::new(0.0, -10.0),
            ground_half_extents: Vec2::new(50.0, 10.0),
            box_position: Vec2::new(0.0, 4.0),
            box_half_extents: Vec2::new(1.0, 1.0),
            box_density: 1.0,
            box_friction: 0.3,
        }
    }
}
