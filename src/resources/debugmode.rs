//! Debug toggle resource.
//!
//! While present, the renderer outlines colliders and the pasture band.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}
