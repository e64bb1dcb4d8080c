use bevy_ecs::prelude::*;

use crate::components::draggable::Dragged;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Integrate velocities. Held bodies stay put.
pub fn movement_system(
    mut query: Query<(&mut MapPosition, &RigidBody), Without<Dragged>>,
    time: Res<WorldTime>,
) {
    for (mut position, rigidbody) in query.iter_mut() {
        position.pos = position.pos + rigidbody.velocity.scale_by(time.delta);
    }
}
