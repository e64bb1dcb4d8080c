//! Dropping horses into the stable, and breeding.
//!
//! [`drop_observer`] reacts to every [`DragEndEvent`]. A horse released over
//! the stable is taken in; the second one closes the stable and breeds a foal
//! in front of it. A horse dropped anywhere else is nudged back and walks on.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, error};
use raylib::prelude::Vector2;

use crate::components::animation::Animation;
use crate::components::boxcollider::BoxCollider;
use crate::components::horse::{Gait, Horse};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::sprite::Sprite;
use crate::components::stablezone::StableZone;
use crate::components::tween::TweenPosition;
use crate::events::breeding::HorseBredEvent;
use crate::events::drag::DragEndEvent;
use crate::resources::breeder::BreederState;
use crate::resources::catalog::{HorseCatalog, HorseType};
use crate::resources::pasture::Pasture;
use crate::resources::stable::{Admission, Stable};
use crate::systems::horse::{gait_animation_key, spawn_horse};

/// Breed two horses: raise the breeder level, pick the foal's type and spawn it.
///
/// Returns the foal entity, or `None` when the catalog is empty.
pub fn breed(
    commands: &mut Commands,
    parents: (HorseType, HorseType),
    breeder: &mut BreederState,
    catalog: &HorseCatalog,
    pasture: &Pasture,
) -> Option<Entity> {
    let bred_level = parents.0.level + parents.1.level;
    breeder.record_breeding(bred_level);
    let Some(foal) = catalog.resolve_bred(bred_level) else {
        error!("Cannot breed level {bred_level}: horse catalog is empty");
        return None;
    };
    let entity = spawn_horse(
        commands,
        foal,
        pasture.birth_pos,
        pasture.birth_speed,
        Gait::Walk,
        pasture.horse_size,
    );
    commands.trigger(HorseBredEvent {
        parents,
        foal,
        entity,
        breeder_level: breeder.level,
    });
    Some(entity)
}

/// Send a missed drop back towards where it came from and into the band.
#[allow(clippy::too_many_arguments)]
fn push_back(
    commands: &mut Commands,
    entity: Entity,
    horse: &mut Horse,
    position: &mut MapPosition,
    collider: &BoxCollider,
    body: &RigidBody,
    animation: &mut Animation,
    pasture: &Pasture,
) {
    position.pos.x -= body.direction_x() * pasture.pushback;
    horse.gait = Gait::Walk;
    animation.play(gait_animation_key(&horse.kind, Gait::Walk));

    let (top, bottom) = collider.vertical_span(position.pos);
    if let Some(y) = pasture.band_correction(position.pos.y, top, bottom) {
        commands.entity(entity).insert(TweenPosition::new(
            position.pos,
            Vector2::new(position.pos.x, y),
            pasture.return_duration,
        ));
    }
}

#[allow(clippy::too_many_arguments)]
pub fn drop_observer(
    trigger: On<DragEndEvent>,
    mut commands: Commands,
    mut stable: ResMut<Stable>,
    mut breeder: ResMut<BreederState>,
    catalog: Res<HorseCatalog>,
    pasture: Res<Pasture>,
    zones: Query<(&MapPosition, &BoxCollider), With<StableZone>>,
    mut horses: Query<
        (
            &mut Horse,
            &mut MapPosition,
            &BoxCollider,
            &RigidBody,
            &mut Animation,
        ),
        Without<StableZone>,
    >,
) {
    let entity = trigger.event().entity;
    let Ok((mut horse, mut position, collider, body, mut animation)) = horses.get_mut(entity)
    else {
        return;
    };

    let in_stable = zones
        .iter()
        .any(|(zone_pos, zone)| collider.overlaps(position.pos, zone, zone_pos.pos));

    if !in_stable {
        debug!("Horse {:?} dropped outside the stable", entity);
        push_back(
            &mut commands,
            entity,
            &mut horse,
            &mut position,
            collider,
            body,
            &mut animation,
            &pasture,
        );
        return;
    }

    debug!("Horse {:?} (level {}) enters the stable", entity, horse.level());
    commands.entity(entity).despawn();
    if let Admission::Pair(a, b) = stable.admit(horse.kind) {
        breed(&mut commands, (a, b), &mut breeder, &catalog, &pasture);
        stable.clear();
    }
}

/// Show the stable state on the stable sprite (frames side by side).
pub fn stable_sprite_system(
    stable: Res<Stable>,
    mut query: Query<&mut Sprite, With<StableZone>>,
) {
    let frame_x = stable.state().frame_index() as f32;
    for mut sprite in query.iter_mut() {
        let x = frame_x * sprite.width;
        if sprite.offset.x != x {
            sprite.offset.x = x;
        }
    }
}
