//! Horse component and its small state enums.

use bevy_ecs::prelude::Component;

use crate::resources::catalog::HorseType;

/// Horizontal heading. A sprite facing right is drawn mirrored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    /// Heading implied by a horizontal velocity. Zero counts as left.
    pub fn from_velocity_x(vx: f32) -> Self {
        if vx > 0.0 { Facing::Right } else { Facing::Left }
    }

    /// Whether the sprite must be mirrored for this heading.
    pub fn flip_h(self) -> bool {
        self == Facing::Right
    }
}

/// Progress of the two-step turn-around.
///
/// The sprite squashes to zero width (`FlippingOut`), swaps its mirror flag,
/// then grows back (`FlippingIn`). Only one turn runs at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlipState {
    Idle,
    FlippingOut { to: Facing },
    FlippingIn,
}

impl FlipState {
    pub fn is_flipping(self) -> bool {
        self != FlipState::Idle
    }
}

/// Which looping animation the horse plays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gait {
    Run,
    Walk,
}

/// A horse roaming the field.
#[derive(Component, Clone, Copy, Debug)]
pub struct Horse {
    pub kind: HorseType,
    pub flip: FlipState,
    pub gait: Gait,
}

impl Horse {
    pub fn new(kind: HorseType) -> Self {
        Self {
            kind,
            flip: FlipState::Idle,
            gait: Gait::Run,
        }
    }

    pub fn level(&self) -> u32 {
        self.kind.level
    }
}
