//! Rendering surface used by the demos: a world-to-screen camera, a texture
//! registry and a small canvas trait with a ggez implementation.

pub mod camera;
pub mod canvas;
pub mod ggez_canvas;
pub mod textures;

pub use camera::Camera;
pub use canvas::Canvas2d;
pub use ggez_canvas::GgezCanvas;
pub use textures::{TextureId, TextureRegistry};
