use bevy_ecs::prelude::Resource;

/// The player's profile. `level` caps the level of spawned horses and never decreases.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct BreederState {
    pub name: String,
    pub level: u32,
}

impl Default for BreederState {
    fn default() -> Self {
        Self::new("Breeder", 1)
    }
}

impl BreederState {
    pub fn new(name: impl Into<String>, level: u32) -> Self {
        Self {
            name: name.into(),
            level,
        }
    }

    /// Raise the level to `bred_level` if it is higher. Returns true if it changed.
    pub fn record_breeding(&mut self, bred_level: u32) -> bool {
        if bred_level > self.level {
            self.level = bred_level;
            true
        } else {
            false
        }
    }
}
