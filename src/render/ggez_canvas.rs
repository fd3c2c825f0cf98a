use ggez::glam::Vec2 as GVec2;
use ggez::graphics::{self, Color, DrawMode, DrawParam, Image, Mesh, Rect};
use ggez::{Context, GameResult};

use crate::error::{SandboxError, SandboxResult};

use super::canvas::Canvas2d;
use super::textures::{TextureId, TextureRegistry};

const TEXT_SCALE: f32 = 16.0;

/// One frame of drawing on the ggez window.
///
/// Created from the frame at the start of `draw` (clearing it) and consumed
/// by `finish`, which presents it. Without a registry every texture draw
/// fails with `UnknownTexture`.
pub struct GgezCanvas<'a> {
    ctx: &'a mut Context,
    canvas: graphics::Canvas,
    images: Option<&'a TextureRegistry<Image>>,
}

impl<'a> GgezCanvas<'a> {
    pub fn begin(
        ctx: &'a mut Context,
        images: Option<&'a TextureRegistry<Image>>,
        clear: Color,
    ) -> Self {
        let canvas = graphics::Canvas::from_frame(&*ctx, clear);
        Self {
            ctx,
            canvas,
            images,
        }
    }

    pub fn finish(self) -> GameResult {
        self.canvas.finish(self.ctx)
    }
}

fn texture_in<T>(images: Option<&TextureRegistry<T>>, id: TextureId) -> SandboxResult<&T> {
    images.ok_or(SandboxError::UnknownTexture(id))?.get(id)
}

impl Canvas2d for GgezCanvas<'_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) -> SandboxResult<()> {
        self.canvas
            .draw(&graphics::Quad, DrawParam::new().dest_rect(rect).color(color));
        Ok(())
    }

    fn fill_polygon(&mut self, points: &[GVec2], color: Color) -> SandboxResult<()> {
        let mesh = Mesh::new_polygon(&*self.ctx, DrawMode::fill(), points, color)?;
        self.canvas.draw(&mesh, DrawParam::default());
        Ok(())
    }

    fn draw_texture(&mut self, texture: TextureId, rect: Rect, rotation: f32) -> SandboxResult<()> {
        let image = texture_in(self.images, texture)?;
        let scale = GVec2::new(
            rect.w / image.width() as f32,
            rect.h / image.height() as f32,
        );
        let center = GVec2::new(rect.x + rect.w / 2.0, rect.y + rect.h / 2.0);
        self.canvas.draw(
            image,
            DrawParam::new()
                .dest(center)
                .offset(GVec2::new(0.5, 0.5))
                .scale(scale)
                .rotation(rotation),
        );
        Ok(())
    }

    fn draw_text(&mut self, text: &str, dest: GVec2, color: Color) -> SandboxResult<()> {
        let mut text = graphics::Text::new(text);
        text.set_scale(TEXT_SCALE);
        self.canvas.draw(&text, DrawParam::new().dest(dest).color(color));
        Ok(())
    }
}
