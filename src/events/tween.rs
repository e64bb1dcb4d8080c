//! Tween completion events.
//!
//! When a tween reaches its end, the tween systems remove the tween component and trigger
//! a [`TweenFinishedEvent`]. Multi-step animations (like a horse turning
//! around) chain their next step from an observer of this event.

use bevy_ecs::prelude::*;

use crate::components::tween::TweenProperty;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TweenFinishedEvent {
    pub entity: Entity,
    pub property: TweenProperty,
}
