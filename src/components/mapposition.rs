//! World-space position component.
//!
//! [`MapPosition`] is the entity pivot in render-target pixels. For horses and
//! the stable the pivot is the centre of the sprite frame.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
