//! Event types and observers.
//!
//! Submodules:
//! - [`breeding`] – a foal was born in the stable
//! - [`drag`] – the pointer released a dragged entity
//! - [`gamestate`] – state transition notifications for the high-level game flow
//! - [`switchdebug`] – toggle the debug overlay on/off
//! - [`tween`] – a one-shot tween reached its end
pub mod breeding;
pub mod drag;
pub mod gamestate;
pub mod switchdebug;
pub mod tween;
