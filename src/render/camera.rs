use ggez::glam::Vec2 as GVec2;
use ggez::graphics::Rect;

use crate::math::{Transform, Vec2};
use crate::physics::Polygon;

/// Maps world space (metres, y up) onto screen space (pixels, y down).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pixels_per_meter: f32,
    /// Screen position of the world origin.
    pub origin: GVec2,
}

impl Camera {
    pub fn new(pixels_per_meter: f32, origin: GVec2) -> Self {
        Self {
            pixels_per_meter,
            origin,
        }
    }

    pub fn meters_to_pixels(&self, meters: f32) -> f32 {
        meters * self.pixels_per_meter
    }

    pub fn world_to_screen(&self, point: Vec2) -> GVec2 {
        GVec2::new(
            self.origin.x + point.x * self.pixels_per_meter,
            self.origin.y - point.y * self.pixels_per_meter,
        )
    }

    pub fn screen_to_world(&self, point: GVec2) -> Vec2 {
        Vec2::new(
            (point.x - self.origin.x) / self.pixels_per_meter,
            (self.origin.y - point.y) / self.pixels_per_meter,
        )
    }

    /// Screen rectangle covering a box of `half_extents` centred on the
    /// body position. Rotation is ignored.
    pub fn body_rect(&self, transform: Transform, half_extents: Vec2) -> Rect {
        let center = self.world_to_screen(transform.position);
        let w = self.meters_to_pixels(half_extents.x * 2.0);
        let h = self.meters_to_pixels(half_extents.y * 2.0);
        Rect::new(center.x - w / 2.0, center.y - h / 2.0, w, h)
    }

    /// Polygon outline in screen space, following the body rotation.
    pub fn polygon_points(&self, polygon: &Polygon, transform: Transform) -> Vec<GVec2> {
        polygon
            .world_vertices(transform)
            .into_iter()
            .map(|v| self.world_to_screen(v))
            .collect()
    }
}
