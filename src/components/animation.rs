use bevy_ecs::prelude::Component;

/// Playback state of the animation an entity is showing.
#[derive(Debug, Clone, Component)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    pub elapsed_time: f32,
}

impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
        }
    }

    /// Switch to another animation, restarting from its first frame.
    /// Does nothing if `animation_key` is already playing.
    pub fn play(&mut self, animation_key: impl Into<String>) {
        let key = animation_key.into();
        if self.animation_key != key {
            self.animation_key = key;
            self.frame_index = 0;
            self.elapsed_time = 0.0;
        }
    }
}
