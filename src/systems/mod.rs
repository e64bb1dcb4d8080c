//! ECS systems.
//!
//! Frame order: pointer input → drag → tweens → movement → wrap → facing →
//! depth → spawner → animation → render.
//!
//! - [`animation`] – advance sprite animations
//! - [`drag`] – pointer drag-and-drop
//! - [`gamestate`] – pending state detection and run conditions
//! - [`horse`] – turning, depth sorting, wrapping, spawning helper
//! - [`input`] – mouse and keyboard sampling
//! - [`movement`] – velocity integration
//! - [`render`] – drawing
//! - [`spawner`] – background horse spawning
//! - [`stable`] – drop handling and breeding
//! - [`time`] – world clock
//! - [`tween`] – position and scale tweens
pub mod animation;
pub mod drag;
pub mod gamestate;
pub mod horse;
pub mod input;
pub mod movement;
pub mod render;
pub mod spawner;
pub mod stable;
pub mod time;
pub mod tween;
