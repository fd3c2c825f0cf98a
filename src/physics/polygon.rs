use crate::error::{SandboxError, SandboxResult};
use crate::math::{Transform, Vec2};

const MIN_AREA: f32 = 1e-6;

/// Convex polygon in body-local space, vertices counter-clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Creates a polygon from counter-clockwise vertices.
    ///
    /// Rejects fewer than three vertices, non-finite coordinates and
    /// (near) zero area.
    pub fn new(vertices: Vec<Vec2>) -> SandboxResult<Self> {
        if vertices.len() < 3 {
            return Err(SandboxError::DegeneratePolygon(format!(
                "{} vertices, need at least 3",
                vertices.len()
            )));
        }
        if !vertices.iter().all(|v| v.is_finite()) {
            return Err(SandboxError::DegeneratePolygon(
                "non-finite vertex".to_string(),
            ));
        }
        let polygon = Polygon { vertices };
        let area = polygon.calculate_area();
        if area < MIN_AREA {
            return Err(SandboxError::DegeneratePolygon(format!("area {area}")));
        }
        Ok(polygon)
    }

    /// Axis-aligned box centred on the body origin.
    pub fn make_box(half_width: f32, half_height: f32) -> SandboxResult<Self> {
        if !(half_width > 0.0 && half_height > 0.0) {
            return Err(SandboxError::DegeneratePolygon(format!(
                "box half extents {half_width} x {half_height}"
            )));
        }
        Self::new(vec![
            Vec2::new(-half_width, -half_height),
            Vec2::new(half_width, -half_height),
            Vec2::new(half_width, half_height),
            Vec2::new(-half_width, half_height),
        ])
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Calculates the area of the polygon using the Shoelace formula.
    pub fn calculate_area(&self) -> f32 {
        let n = self.vertices.len();
        let mut area = 0.0;
        for i in 0..n {
            area += self.vertices[i].cross(self.vertices[(i + 1) % n]);
        }
        (area / 2.0).abs()
    }

    /// Half size of the local bounding box.
    pub fn half_extents(&self) -> Vec2 {
        let (mut max_x, mut max_y) = (0.0f32, 0.0f32);
        for v in &self.vertices {
            max_x = max_x.max(v.x.abs());
            max_y = max_y.max(v.y.abs());
        }
        Vec2::new(max_x, max_y)
    }

    /// Vertices moved into world space by a body transform.
    pub fn world_vertices(&self, transform: Transform) -> Vec<Vec2> {
        self.vertices.iter().map(|v| transform.apply(*v)).collect()
    }
}
