//! Animation resource registry.
//!
//! This module provides a minimal store for animation definitions that can be
//! reused by multiple entities. Systems can look up an animation by a string
//! key and drive playback based on the immutable parameters stored here.

use std::sync::Arc;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::palette::sheet::FrameRect;

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, animation: AnimationResource) {
        self.animations.insert(key.into(), animation);
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&AnimationResource> {
        self.animations.get(key.as_ref())
    }

    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        self.animations.contains_key(key.as_ref())
    }
}

/// Immutable data describing a sprite-sheet animation.
///
/// Frame rectangles are resolved from the sheet's frame table when the
/// animation is registered, so playback never has to look names up.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationResource {
    /// Texture key in [`crate::resources::texturestore::TextureStore`].
    pub tex_key: Arc<str>,
    /// Source rectangles, in playback order.
    pub frames: Vec<FrameRect>,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

impl AnimationResource {
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }
}
