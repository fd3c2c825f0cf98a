use std::collections::HashMap;

use tracing::debug;

use crate::error::{SandboxError, SandboxResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureId(u32);

/// Owns loaded textures and hands out ids for them.
///
/// Generic over the payload so the demos store `ggez::graphics::Image`
/// while tests can store anything.
#[derive(Debug)]
pub struct TextureRegistry<T> {
    next_id: u32,
    entries: HashMap<TextureId, (String, T)>,
}

impl<T> TextureRegistry<T> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: HashMap::new(),
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, texture: T) -> TextureId {
        let id = TextureId(self.next_id);
        self.next_id += 1;
        let name = name.into();
        debug!(?id, %name, "texture loaded");
        self.entries.insert(id, (name, texture));
        id
    }

    pub fn get(&self, id: TextureId) -> SandboxResult<&T> {
        self.entries
            .get(&id)
            .map(|(_, texture)| texture)
            .ok_or(SandboxError::UnknownTexture(id))
    }

    /// Releases one texture. Releasing it again is an error.
    pub fn unload(&mut self, id: TextureId) -> SandboxResult<T> {
        let (name, texture) = self
            .entries
            .remove(&id)
            .ok_or(SandboxError::UnknownTexture(id))?;
        debug!(?id, %name, "texture unloaded");
        Ok(texture)
    }

    /// Releases every texture still held; returns how many there were.
    pub fn unload_all(&mut self) -> usize {
        let count = self.entries.len();
        for (id, (name, _)) in self.entries.drain() {
            debug!(?id, %name, "texture unloaded");
        }
        count
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for TextureRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
