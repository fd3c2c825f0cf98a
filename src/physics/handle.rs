//! Opaque handles over objects owned by a physics world.
//!
//! Each handle is a small `Copy` value holding the engine-assigned slot plus
//! the id of the world that issued it, so a backend can refuse handles from
//! another world instead of indexing into the wrong storage.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

static NEXT_WORLD_ID: AtomicU32 = AtomicU32::new(1);

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WorldId(u32);

impl WorldId {
    /// Allocates a process-unique world id.
    pub(crate) fn next() -> Self {
        WorldId(NEXT_WORLD_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Debug for WorldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "World#{}", self.0)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId {
    world: WorldId,
    index: u32,
    generation: u32,
}

impl BodyId {
    pub(crate) fn new(world: WorldId, index: u32, generation: u32) -> Self {
        Self {
            world,
            index,
            generation,
        }
    }

    pub fn world(self) -> WorldId {
        self.world
    }

    pub(crate) fn index(self) -> u32 {
        self.index
    }

    pub(crate) fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Body#{}v{}@{:?}", self.index, self.generation, self.world)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeId {
    body: BodyId,
    index: u32,
}

impl ShapeId {
    pub(crate) fn new(body: BodyId, index: u32) -> Self {
        Self { body, index }
    }

    /// Body the shape is attached to.
    pub fn body(self) -> BodyId {
        self.body
    }
}
