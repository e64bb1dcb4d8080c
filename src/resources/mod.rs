//! ECS resources made available to systems.
//!
//! Overview
//! - `animationstore` – definitions for sprite animations reused across entities
//! - `breeder` – the player's name and level ceiling
//! - `camera2d` – camera scaling the render resolution to the window
//! - `catalog` – horse types by level
//! - `debugmode` – presence toggles collider overlays
//! - `gameconfig` – settings loaded from `config.ini`
//! - `gamestate` – authoritative and pending high-level game state
//! - `pasture` – field layout: roaming band, stable and birth positions
//! - `pointer` – mouse position and button edges in world space
//! - `sheetstore` – CPU sprite-sheets and frame tables
//! - `spawner` – background horse spawning state
//! - `stable` – pending horses and the stable's visual state
//! - `systemsstore` – registry of dynamically-lookup-able systems by name
//! - `texturestore` – loaded textures keyed by string IDs
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod breeder;
pub mod camera2d;
pub mod catalog;
pub mod debugmode;
pub mod gameconfig;
pub mod gamestate;
pub mod pasture;
pub mod pointer;
pub mod sheetstore;
pub mod spawner;
pub mod stable;
pub mod systemsstore;
pub mod texturestore;
pub mod worldtime;
