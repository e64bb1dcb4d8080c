//! Per-horse behaviour: turning around, depth sorting and edge wrapping.
//!
//! Turning is a two-step scale animation. [`facing_system`] notices the
//! heading disagrees with the velocity and squashes the sprite to zero width;
//! [`flip_observer`] swaps the mirror flag when that tween finishes and grows
//! the sprite back.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::draggable::{Draggable, Dragged};
use crate::components::group::Group;
use crate::components::horse::{Facing, FlipState, Gait, Horse};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::scale::Scale;
use crate::components::sprite::Sprite;
use crate::components::tween::{TweenProperty, TweenScale};
use crate::components::zindex::ZIndex;
use crate::events::tween::TweenFinishedEvent;
use crate::palette::remap::{run_animation_key, walk_animation_key};
use crate::palette::sheet::FrameRect;
use crate::resources::catalog::HorseType;
use crate::resources::pasture::Pasture;

/// Duration of each half of a turn-around.
pub const FLIP_HALF_DURATION: f32 = 0.15;
/// Held horses are drawn above everything else.
pub const DRAGGED_Z: i32 = 100_000;

/// Animation key for a horse type and gait.
pub fn gait_animation_key(kind: &HorseType, gait: Gait) -> String {
    let tex_key = kind.tex_key();
    match gait {
        Gait::Run => run_animation_key(&tex_key),
        Gait::Walk => walk_animation_key(&tex_key),
    }
}

/// Depth of a footprint whose lowest row is at `bottom`.
pub fn depth_of(bottom: f32) -> ZIndex {
    ZIndex(bottom.floor() as i32)
}

/// Spawn a horse centred at `position`, moving horizontally at `vx`.
pub fn spawn_horse(
    commands: &mut Commands,
    kind: HorseType,
    position: Vector2,
    vx: f32,
    gait: Gait,
    size: Vector2,
) -> Entity {
    let frame = FrameRect::new(0, 0, size.x as u32, size.y as u32);
    let mut sprite = Sprite::centered(kind.tex_key(), frame);
    sprite.flip_h = Facing::from_velocity_x(vx).flip_h();
    let mut horse = Horse::new(kind);
    horse.gait = gait;

    commands
        .spawn((
            Group("horse"),
            horse,
            MapPosition::new(position.x, position.y),
            RigidBody::with_velocity_x(vx),
            sprite,
            Scale::default(),
            Animation::new(gait_animation_key(&kind, gait)),
            BoxCollider::centered(size.x, size.y),
            depth_of(position.y + size.y * 0.5),
            Draggable,
        ))
        .id()
}

/// Start a turn-around when a horse heads the other way than it faces.
pub fn facing_system(
    mut commands: Commands,
    mut query: Query<(Entity, &mut Horse, &Sprite, &RigidBody, &Scale)>,
) {
    for (entity, mut horse, sprite, body, scale) in query.iter_mut() {
        if horse.flip.is_flipping() || body.velocity.x == 0.0 {
            continue;
        }
        let facing = if sprite.flip_h {
            Facing::Right
        } else {
            Facing::Left
        };
        let wanted = Facing::from_velocity_x(body.velocity.x);
        if facing == wanted {
            continue;
        }
        horse.flip = FlipState::FlippingOut { to: wanted };
        commands.entity(entity).insert(TweenScale::new(
            scale.scale,
            Vector2::new(0.0, scale.scale.y),
            FLIP_HALF_DURATION,
        ));
    }
}

/// Continue a turn-around when one of its halves finishes.
pub fn flip_observer(
    trigger: On<TweenFinishedEvent>,
    mut commands: Commands,
    mut query: Query<(&mut Horse, &mut Sprite, &Scale)>,
) {
    let event = trigger.event();
    if event.property != TweenProperty::Scale {
        return;
    }
    let Ok((mut horse, mut sprite, scale)) = query.get_mut(event.entity) else {
        return;
    };
    match horse.flip {
        FlipState::FlippingOut { to } => {
            sprite.flip_h = to.flip_h();
            horse.flip = FlipState::FlippingIn;
            commands.entity(event.entity).insert(TweenScale::new(
                Vector2::new(0.0, scale.scale.y),
                Vector2::new(1.0, scale.scale.y),
                FLIP_HALF_DURATION,
            ));
        }
        FlipState::FlippingIn => horse.flip = FlipState::Idle,
        FlipState::Idle => {}
    }
}

/// Horses lower on screen are drawn in front.
pub fn depth_system(
    mut query: Query<(&MapPosition, &Sprite, &mut ZIndex, Has<Dragged>), With<Horse>>,
) {
    for (position, sprite, mut z, dragged) in query.iter_mut() {
        let new_z = if dragged {
            ZIndex(DRAGGED_Z)
        } else {
            depth_of(position.pos.y - sprite.origin.y + sprite.height)
        };
        if *z != new_z {
            *z = new_z;
        }
    }
}

/// Horses leaving one side of the field come back on the other.
pub fn wrap_system(
    mut query: Query<&mut MapPosition, (With<Horse>, Without<Dragged>)>,
    pasture: Res<Pasture>,
) {
    let half = pasture.half_horse_width();
    for mut position in query.iter_mut() {
        if position.pos.x < -half {
            position.pos.x = pasture.width + half;
        } else if position.pos.x > pasture.width + half {
            position.pos.x = -half;
        }
    }
}
