//! Pointer drag-and-drop.
//!
//! On press the top-most [`Draggable`] under the pointer is picked up; it
//! follows the pointer while the button is held and is released with a
//! [`DragEndEvent`]. Picking a horse up cancels its return tween.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::boxcollider::BoxCollider;
use crate::components::draggable::{Draggable, Dragged};
use crate::components::mapposition::MapPosition;
use crate::components::tween::TweenPosition;
use crate::components::zindex::ZIndex;
use crate::events::drag::DragEndEvent;
use crate::resources::pointer::PointerState;

pub fn drag_system(
    mut commands: Commands,
    pointer: Res<PointerState>,
    candidates: Query<
        (Entity, &MapPosition, &BoxCollider, &ZIndex),
        (With<Draggable>, Without<Dragged>),
    >,
    mut held: Query<(Entity, &mut MapPosition, &Dragged)>,
) {
    if pointer.just_pressed && held.is_empty() {
        let picked = candidates
            .iter()
            .filter(|(_, position, collider, _)| {
                collider.contains_point(position.pos, pointer.position)
            })
            .max_by_key(|(_, _, _, z)| **z);
        if let Some((entity, position, _, _)) = picked {
            debug!("Picked up {:?}", entity);
            commands
                .entity(entity)
                .remove::<TweenPosition>()
                .insert(Dragged {
                    grab_offset: pointer.position - position.pos,
                });
        }
    }

    for (entity, mut position, dragged) in held.iter_mut() {
        position.pos = pointer.position - dragged.grab_offset;
        if !pointer.down {
            commands.entity(entity).remove::<Dragged>();
            commands.trigger(DragEndEvent {
                entity,
                position: pointer.position,
            });
        }
    }
}
