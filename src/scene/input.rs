use ggez::glam::Vec2 as GVec2;
use ggez::input::keyboard::KeyCode;
use ggez::input::mouse::MouseButton;

/// Input the scenes react to, already decoded from window events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneInput {
    /// Spawn a box at this screen position.
    Spawn(GVec2),
    /// Build a spawn definition at this screen position and discard it.
    InertSpawn(GVec2),
    TogglePause,
    Quit,
}

/// Whether the frame loop should keep running after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub const PAUSE_KEY: KeyCode = KeyCode::P;

pub fn from_mouse(button: MouseButton, x: f32, y: f32) -> Option<SceneInput> {
    match button {
        MouseButton::Left => Some(SceneInput::Spawn(GVec2::new(x, y))),
        MouseButton::Right => Some(SceneInput::InertSpawn(GVec2::new(x, y))),
        _ => None,
    }
}

pub fn from_key(key: KeyCode) -> Option<SceneInput> {
    match key {
        PAUSE_KEY => Some(SceneInput::TogglePause),
        KeyCode::Escape => Some(SceneInput::Quit),
        _ => None,
    }
}
