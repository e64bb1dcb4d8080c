//! Horse Breeder library.
//!
//! Exposes the palette remapper and the game's ECS components, resources,
//! systems and events for the binary and the integration tests.

pub mod components;
pub mod events;
pub mod game;
pub mod palette;
pub mod resources;
pub mod systems;
