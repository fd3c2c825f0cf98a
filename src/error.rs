//! Error type shared by the library and the demo binaries.

use thiserror::Error;

use crate::physics::{BodyId, WorldId};
use crate::render::TextureId;

#[derive(Error, Debug)]
pub enum SandboxError {
    #[error("body {body:?} does not belong to world {expected:?}")]
    ForeignBody { body: BodyId, expected: WorldId },

    #[error("body {0:?} is not alive in its world")]
    UnknownBody(BodyId),

    #[error("degenerate polygon: {0}")]
    DegeneratePolygon(String),

    #[error("physics engine rejected collider for body {0:?}")]
    ColliderRejected(BodyId),

    #[error("texture {0:?} is not loaded")]
    UnknownTexture(TextureId),

    #[error("render error: {0}")]
    Render(#[from] ggez::GameError),
}

pub type SandboxResult<T> = std::result::Result<T, SandboxError>;

impl From<SandboxError> for ggez::GameError {
    fn from(err: SandboxError) -> Self {
        match err {
            SandboxError::Render(inner) => inner,
            other => ggez::GameError::CustomError(other.to_string()),
        }
    }
}
