//! Game state transition event and observer.
//!
//! Systems request a change by setting [`NextGameState`];
//! [`check_pending_state`](crate::systems::gamestate::check_pending_state)
//! then triggers a [`GameStateChangedEvent`] and the observer below applies
//! it, running the enter system registered in [`SystemsStore`] for the new
//! state.
use crate::resources::gamestate::NextGameStates::{Pending, Unchanged};
use crate::resources::gamestate::{GameState, GameStates, NextGameState};
use crate::resources::systemsstore::SystemsStore;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, error, info, warn};

#[derive(Event, Debug, Clone, Copy)]
pub struct GameStateChangedEvent {}

/// Apply a pending transition and run the enter system of the new state.
///
/// Enter systems are looked up in [`SystemsStore`] under `"setup"`,
/// `"enter_play"` and `"quit_game"`.
pub fn observe_gamestate_change_event(
    _trigger: On<GameStateChangedEvent>,
    mut commands: Commands,
    mut next_game_state: Option<ResMut<NextGameState>>,
    mut game_state: Option<ResMut<GameState>>,
    systems_store: Res<SystemsStore>,
) {
    let (Some(next_game_state), Some(game_state)) =
        (next_game_state.as_deref_mut(), game_state.as_deref_mut())
    else {
        warn!(
            "One or more resources missing in observe_gamestate_change_event. next_state: {:?}, game_state: {:?}",
            next_game_state.is_some(),
            game_state.is_some()
        );
        return;
    };

    match next_game_state.get().clone() {
        Pending(new_state) => {
            info!("Transitioning from {:?} to {:?}", game_state.get(), new_state);
            game_state.set(new_state.clone());
            next_game_state.reset();
            on_state_enter(&new_state, &mut commands, &systems_store);
        }
        Unchanged => {
            debug!("No state change pending.");
        }
    }
}

fn enter_system_name(state: &GameStates) -> Option<&'static str> {
    match state {
        GameStates::None => None,
        GameStates::Setup => Some("setup"),
        GameStates::Playing => Some("enter_play"),
        GameStates::Quitting => Some("quit_game"),
    }
}

fn on_state_enter(state: &GameStates, commands: &mut Commands, systems_store: &SystemsStore) {
    let Some(name) = enter_system_name(state) else {
        debug!("Entered {:?} state", state);
        return;
    };
    match systems_store.get(name) {
        Some(id) => commands.run_system(*id),
        None => error!("System {name} not found in SystemsStore"),
    }
}
