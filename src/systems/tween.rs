//! Tween animation systems.
//!
//! - [`tween_mapposition_system`] – animates [`MapPosition`](crate::components::mapposition::MapPosition)
//! - [`tween_scale_system`] – animates [`Scale`](crate::components::scale::Scale)
//!
//! The systems read delta time from [`WorldTime`]. A tween that reaches its
//! end snaps to its final value, is removed from the entity and a
//! [`TweenFinishedEvent`] is triggered. Held horses are never tweened.

use crate::components::draggable::Dragged;
use crate::components::mapposition::MapPosition;
use crate::components::scale::Scale;
use crate::components::tween::{TweenPosition, TweenProperty, TweenScale};
use crate::events::tween::TweenFinishedEvent;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::*;
use raylib::math::Vector2;

pub(crate) fn lerp_v2(a: Vector2, b: Vector2, t: f32) -> Vector2 {
    Vector2 {
        x: a.x + (b.x - a.x) * t,
        y: a.y + (b.y - a.y) * t,
    }
}

/// Advance tween time by `dt`; returns the progress in `0..=1`.
///
/// A zero-length tween is always complete.
pub(crate) fn advance(time: &mut f32, duration: f32, dt: f32) -> f32 {
    *time = (*time + dt.max(0.0)).min(duration.max(0.0));
    if duration <= 0.0 {
        1.0
    } else {
        (*time / duration).clamp(0.0, 1.0)
    }
}

/// Animate entity positions based on [`TweenPosition`] components.
pub fn tween_mapposition_system(
    mut commands: Commands,
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut MapPosition, &mut TweenPosition), Without<Dragged>>,
) {
    for (entity, mut mp, mut tw) in query.iter_mut() {
        let tw = &mut *tw;
        let t = advance(&mut tw.time, tw.duration, world_time.delta);
        mp.pos = lerp_v2(tw.from, tw.to, t);
        if t >= 1.0 {
            commands.entity(entity).remove::<TweenPosition>();
            commands.trigger(TweenFinishedEvent {
                entity,
                property: TweenProperty::Position,
            });
        }
    }
}

/// Animate entity scales based on [`TweenScale`] components.
pub fn tween_scale_system(
    mut commands: Commands,
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Scale, &mut TweenScale)>,
) {
    for (entity, mut scale, mut tw) in query.iter_mut() {
        let tw = &mut *tw;
        let t = advance(&mut tw.time, tw.duration, world_time.delta);
        scale.scale = lerp_v2(tw.from, tw.to, t);
        if t >= 1.0 {
            commands.entity(entity).remove::<TweenScale>();
            commands.trigger(TweenFinishedEvent {
                entity,
                property: TweenProperty::Scale,
            });
        }
    }
}
