pub mod config;
pub mod error;
pub mod logging;
pub mod math;
pub mod physics;
pub mod render;
pub mod scene;

#[cfg(test)]
mod test_support;

// Re-export key types for easier use
pub use config::DemoConfig;
pub use error::{SandboxError, SandboxResult};
pub use math::{Transform, Vec2};
pub use physics::{BodyDef, BodyId, PhysicsBackend, Polygon, RapierWorld, ShapeDef, WorldDef};
pub use render::{Camera, Canvas2d, GgezCanvas, TextureId, TextureRegistry};
pub use scene::{FallingBoxScene, SceneInput, SpawnerScene};
