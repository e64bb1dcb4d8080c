//! ECS components for entities.
//!
//! This module groups all component types that can be attached to entities in
//! the game world: position, rendering, collision, animation, dragging and the
//! horse itself.
//!
//! Submodules overview:
//! - [`animation`] – playback state for sprite animations
//! - [`boxcollider`] – axis-aligned rectangular collider for picking and drop tests
//! - [`draggable`] – pointer drag markers
//! - [`group`] – tag component for grouping entities by name
//! - [`horse`] – horse kind, heading and turn-around state
//! - [`mapposition`] – world-space position (pivot) for an entity
//! - [`rigidbody`] – simple kinematic body storing velocity
//! - [`scale`] – 2D scale factor for sprites
//! - [`sprite`] – 2D sprite rendering component
//! - [`stablezone`] – marker for the stable drop target
//! - [`tween`] – animated interpolation of position and scale
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod animation;
pub mod boxcollider;
pub mod draggable;
pub mod group;
pub mod horse;
pub mod mapposition;
pub mod rigidbody;
pub mod scale;
pub mod sprite;
pub mod stablezone;
pub mod tween;
pub mod zindex;
