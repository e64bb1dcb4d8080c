//! High-level game state resources.
//!
//! [`GameState`] holds the state the game is in; [`NextGameState`] holds a
//! requested transition until
//! [`observe_gamestate_change_event`](crate::events::gamestate::observe_gamestate_change_event)
//! applies it and runs the matching enter system.

use bevy_ecs::prelude::Resource;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    None,
    /// Generating sheets and uploading textures.
    Setup,
    Playing,
    Quitting,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NextGameStates {
    #[default]
    Unchanged,
    Pending(GameStates),
}

#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn get(&self) -> &GameStates {
        &self.current
    }
    /// Update the current state immediately, without running enter systems.
    pub fn set(&mut self, state: GameStates) {
        self.current = state;
    }
}

#[derive(Resource, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct NextGameState {
    next: NextGameStates,
}

impl NextGameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> &NextGameStates {
        &self.next
    }

    /// Request a transition; `check_pending_state` picks it up next frame.
    pub fn set(&mut self, next: GameStates) {
        self.next = NextGameStates::Pending(next);
    }

    pub fn reset(&mut self) {
        self.next = NextGameStates::Unchanged;
    }
}
