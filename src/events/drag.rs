//! Drag release event.
//!
//! [`drag_system`](crate::systems::drag::drag_system) triggers a
//! [`DragEndEvent`] when the pointer lets go of an entity.
//! [`drop_observer`](crate::systems::stable::drop_observer) decides what
//! happens to it.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

#[derive(Event, Debug, Clone, Copy)]
pub struct DragEndEvent {
    /// The entity that was released.
    pub entity: Entity,
    /// Pointer position at release, in world space.
    pub position: Vector2,
}
