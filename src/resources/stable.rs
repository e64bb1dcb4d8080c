//! The stable: collects two horses, then breeds them.
//!
//! The stable moves `Empty → OneFilled → Closed`. Reaching `Closed` hands the
//! pair back to the caller, which breeds them and clears the stable again in
//! the same frame.

use bevy_ecs::prelude::Resource;

use super::catalog::HorseType;

/// Horses needed for one breeding.
pub const STABLE_CAPACITY: usize = 2;

/// Visual state of the stable, also the frame drawn from the stable sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StableState {
    #[default]
    Empty,
    OneFilled,
    Closed,
}

impl StableState {
    pub fn frame_index(self) -> usize {
        match self {
            StableState::Empty => 0,
            StableState::OneFilled => 1,
            StableState::Closed => 2,
        }
    }
}

/// Result of putting a horse in the stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The horse waits for a partner.
    Waiting,
    /// The stable is full; these two must be bred.
    Pair(HorseType, HorseType),
}

#[derive(Resource, Debug, Clone, Default)]
pub struct Stable {
    pending: Vec<HorseType>,
    state: StableState,
}

impl Stable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> StableState {
        self.state
    }

    /// Horses waiting, in the order they were dropped in.
    pub fn pending(&self) -> &[HorseType] {
        &self.pending
    }

    pub fn admit(&mut self, kind: HorseType) -> Admission {
        if self.pending.len() >= STABLE_CAPACITY {
            // A previous pair was never cleared; start over with this horse.
            self.pending.clear();
        }
        self.pending.push(kind);
        match self.pending.as_slice() {
            [a, b] => {
                self.state = StableState::Closed;
                Admission::Pair(*a, *b)
            }
            _ => {
                self.state = StableState::OneFilled;
                Admission::Waiting
            }
        }
    }

    /// Empty the stable after a breeding.
    pub fn clear(&mut self) {
        self.pending.clear();
        self.state = StableState::Empty;
    }
}
