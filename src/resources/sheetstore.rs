//! CPU-side registry of sprite-sheets.
//!
//! Holds the base sheet and every generated colour variant by name, together
//! with their frame tables. Textures uploaded to the GPU live separately in
//! [`TextureStore`](crate::resources::texturestore::TextureStore) under the
//! same keys.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::palette::sheet::SpriteSheet;

#[derive(Resource, Default)]
pub struct SheetStore {
    pub map: FxHashMap<String, SpriteSheet>,
}

impl SheetStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, sheet: SpriteSheet) {
        self.map.insert(key.into(), sheet);
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&SpriteSheet> {
        self.map.get(key.as_ref())
    }

    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        self.map.contains_key(key.as_ref())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Keys in sorted order.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.map.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}
