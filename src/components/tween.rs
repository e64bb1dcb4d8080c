//! Tween components for animated interpolation.
//!
//! - [`TweenPosition`] – animate [`MapPosition`](super::mapposition::MapPosition)
//! - [`TweenScale`] – animate [`Scale`](super::scale::Scale)
//!
//! Tweens are linear and play once. A tween removes itself when it reaches
//! its end and announces it with a
//! [`TweenFinishedEvent`](crate::events::tween::TweenFinishedEvent).
//! See [`crate::systems::tween`] for the update systems.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Which property a finished tween was animating.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TweenProperty {
    Position,
    Scale,
}

/// Animates an entity's [`MapPosition`](super::mapposition::MapPosition) between two points.
///
/// Used to bring a horse dropped outside the pasture band back inside it.
#[derive(Component, Clone, Debug)]
pub struct TweenPosition {
    pub from: Vector2,
    pub to: Vector2,
    /// Duration in seconds.
    pub duration: f32,
    /// Seconds played so far.
    pub time: f32,
}

impl TweenPosition {
    pub fn new(from: Vector2, to: Vector2, duration: f32) -> Self {
        TweenPosition {
            from,
            to,
            duration,
            time: 0.0,
        }
    }
}

/// Animates an entity's [`Scale`](super::scale::Scale) between two values.
///
/// Horses use it to squash to zero width and back when they turn around.
#[derive(Component, Clone, Debug)]
pub struct TweenScale {
    pub from: Vector2,
    pub to: Vector2,
    /// Duration in seconds.
    pub duration: f32,
    pub time: f32,
}

impl TweenScale {
    pub fn new(from: Vector2, to: Vector2, duration: f32) -> Self {
        TweenScale {
            from,
            to,
            duration,
            time: 0.0,
        }
    }
}
