//! Pointer dragging components.
//!
//! Entities with [`Draggable`] (and a [`BoxCollider`](super::boxcollider::BoxCollider))
//! can be picked up with the pointer. While held they carry [`Dragged`].

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// The entity can be picked up by the pointer.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Draggable;

/// The entity is currently held by the pointer.
#[derive(Component, Clone, Copy, Debug)]
pub struct Dragged {
    /// Pointer position minus entity position at pick-up time.
    pub grab_offset: Vector2,
}
