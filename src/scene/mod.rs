//! Per-demo state: what gets created at start, what a frame does, and what
//! gets drawn.

pub mod falling_box;
pub mod input;
pub mod spawner;

pub use falling_box::FallingBoxScene;
pub use input::{Flow, SceneInput};
pub use spawner::{Entity, SpawnerScene};
