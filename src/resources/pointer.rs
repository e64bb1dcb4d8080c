//! Pointer (mouse) state in world coordinates.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Filled every frame by [`update_pointer_state`](crate::systems::input::update_pointer_state).
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct PointerState {
    /// Position in render (world) coordinates.
    pub position: Vector2,
    pub down: bool,
    pub just_pressed: bool,
}

impl PointerState {
    /// Apply a new sample, deriving `just_pressed` from the previous one.
    pub fn update(&mut self, position: Vector2, down: bool) {
        self.just_pressed = down && !self.down;
        self.down = down;
        self.position = position;
    }
}
