//! Breeding notification.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::catalog::HorseType;

/// Triggered after two stabled horses produced a foal.
#[derive(Event, Debug, Clone, Copy)]
pub struct HorseBredEvent {
    pub parents: (HorseType, HorseType),
    pub foal: HorseType,
    /// The newly spawned horse.
    pub entity: Entity,
    /// Breeder level after the breeding.
    pub breeder_level: u32,
}

/// Log every breeding.
pub fn log_breeding_observer(trigger: On<HorseBredEvent>) {
    let event = trigger.event();
    info!(
        "Bred level {} + level {} into level {} (sheet {}), breeder level now {}",
        event.parents.0.level,
        event.parents.1.level,
        event.foal.level,
        event.foal.sheet,
        event.breeder_level
    );
}
