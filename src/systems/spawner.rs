//! Background spawning of wild horses.

use bevy_ecs::prelude::*;
use log::{debug, warn};
use raylib::prelude::Vector2;

use crate::components::horse::{Gait, Horse};
use crate::resources::breeder::BreederState;
use crate::resources::catalog::HorseCatalog;
use crate::resources::pasture::Pasture;
use crate::resources::spawner::HorseSpawner;
use crate::resources::worldtime::WorldTime;
use crate::systems::horse::spawn_horse;

/// Every `interval` seconds, while fewer than `cap` horses exist, bring one
/// in from a random side of the field.
///
/// Its level is uniform in `1..=min(breeder level, highest catalog level)`.
pub fn spawner_system(
    mut commands: Commands,
    mut spawner: ResMut<HorseSpawner>,
    time: Res<WorldTime>,
    breeder: Res<BreederState>,
    catalog: Res<HorseCatalog>,
    pasture: Res<Pasture>,
    horses: Query<(), With<Horse>>,
) {
    if !spawner.enabled || !spawner.tick(time.delta) {
        return;
    }
    if horses.iter().count() >= spawner.cap {
        return;
    }

    let max_level = breeder.level.min(catalog.max_level()).max(1);
    let level = spawner.rng.u32(1..=max_level);
    let Some(kind) = catalog.get(level) else {
        warn!("No horse type for level {level}, skipping spawn");
        return;
    };

    let half = pasture.half_horse_width();
    let from_left = spawner.rng.bool();
    let (x, vx) = if from_left {
        (-half, spawner.speed)
    } else {
        (pasture.width + half, -spawner.speed)
    };
    let y = pasture.random_center_y(&mut spawner.rng);

    let entity = spawn_horse(
        &mut commands,
        kind,
        Vector2::new(x, y),
        vx,
        Gait::Run,
        pasture.horse_size,
    );
    debug!("Spawned level {} horse {:?} at ({x:.1}, {y:.1})", level, entity);
}
