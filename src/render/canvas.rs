use ggez::glam::Vec2 as GVec2;
use ggez::graphics::{Color, Rect};

use crate::error::SandboxResult;

use super::textures::TextureId;

/// Draw primitives issued by the scenes during one frame, in screen space.
pub trait Canvas2d {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> SandboxResult<()>;

    fn fill_polygon(&mut self, points: &[GVec2], color: Color) -> SandboxResult<()>;

    /// Stretches the texture over `rect`, rotated by `rotation` radians
    /// (screen orientation) about the rect centre.
    fn draw_texture(&mut self, texture: TextureId, rect: Rect, rotation: f32) -> SandboxResult<()>;

    fn draw_text(&mut self, text: &str, dest: GVec2, color: Color) -> SandboxResult<()>;
}
