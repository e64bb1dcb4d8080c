//! Background horse spawner state.

use bevy_ecs::prelude::Resource;

pub const DEFAULT_SPAWN_INTERVAL: f32 = 1.0;
pub const DEFAULT_SPAWN_CAP: usize = 8;
pub const DEFAULT_SPAWN_SPEED: f32 = 40.0;

/// Drives [`spawner_system`](crate::systems::spawner::spawner_system).
#[derive(Resource, Debug, Clone)]
pub struct HorseSpawner {
    /// Seconds between spawn attempts.
    pub interval: f32,
    /// Time accumulated since the last attempt.
    pub elapsed: f32,
    /// No spawn while this many horses exist.
    pub cap: usize,
    /// Horizontal speed of spawned horses.
    pub speed: f32,
    /// Cleared when the catalog does not match the generated sheets.
    pub enabled: bool,
    pub rng: fastrand::Rng,
}

impl Default for HorseSpawner {
    fn default() -> Self {
        Self::new(DEFAULT_SPAWN_INTERVAL, DEFAULT_SPAWN_CAP, DEFAULT_SPAWN_SPEED)
    }
}

impl HorseSpawner {
    pub fn new(interval: f32, cap: usize, speed: f32) -> Self {
        Self {
            interval,
            elapsed: 0.0,
            cap,
            speed,
            enabled: true,
            rng: fastrand::Rng::new(),
        }
    }

    /// Use a fixed seed, for reproducible spawns.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }

    /// Accumulate `dt` and report whether an attempt is due.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed -= self.interval;
            true
        } else {
            false
        }
    }
}
