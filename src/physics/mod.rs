//! Physics engine surface used by the demos.

pub mod backend;
pub mod defs;
pub mod handle;
pub mod polygon;
pub mod rapier_world;

pub use backend::PhysicsBackend;
pub use defs::{BodyDef, BodyType, ShapeDef, WorldDef};
pub use handle::{BodyId, ShapeId, WorldId};
pub use polygon::Polygon;
pub use rapier_world::RapierWorld;
