use bevy_ecs::prelude::Component;

/// Marks the stable entity: the drop target whose collider decides whether a
/// released horse is collected.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct StableZone;
