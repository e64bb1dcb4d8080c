//! Z-index component for render ordering.
//!
//! The [`ZIndex`] component controls the drawing order of entities. Entities
//! with higher z-index values are drawn on top of those with lower values.
//! Horses keep theirs equal to the bottom edge of their sprite so that the
//! ones lower on screen (closer to the viewer) are drawn in front.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing.
///
/// Higher values are drawn later (on top).
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);
