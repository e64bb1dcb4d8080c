//! Horse Breeder entry point.
//!
//! A small pasture game built on:
//! - **raylib** for windowing, input and drawing
//! - **bevy_ecs** for the entity-component-system architecture
//! - **image** for the palette remapping of the horse sprite-sheet
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, open the window, build the ECS world
//! 2. Enter `Setup`: generate the colour variants and upload textures
//! 3. Enter `Playing`: spawn the stable and let horses roam
//! 4. Each frame: pointer → drag → tweens → movement → wrap → facing →
//!    depth → spawner → animation → render
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! cargo run --release -- --export-variants out/
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use horsebreeder::events::breeding::log_breeding_observer;
use horsebreeder::events::gamestate::{GameStateChangedEvent, observe_gamestate_change_event};
use horsebreeder::events::switchdebug::switch_debug_observer;
use horsebreeder::game;
use horsebreeder::resources::camera2d::Camera2DRes;
use horsebreeder::resources::gameconfig::GameConfig;
use horsebreeder::resources::gamestate::{GameState, GameStates, NextGameState};
use horsebreeder::resources::systemsstore::SystemsStore;
use horsebreeder::resources::worldtime::WorldTime;
use horsebreeder::systems::animation::animation;
use horsebreeder::systems::drag::drag_system;
use horsebreeder::systems::gamestate::{check_pending_state, state_is_playing};
use horsebreeder::systems::horse::{depth_system, facing_system, flip_observer, wrap_system};
use horsebreeder::systems::input::update_pointer_state;
use horsebreeder::systems::movement::movement_system;
use horsebreeder::systems::render::render_system;
use horsebreeder::systems::spawner::spawner_system;
use horsebreeder::systems::stable::{drop_observer, stable_sprite_system};
use horsebreeder::systems::time::update_world_time;
use horsebreeder::systems::tween::{tween_mapposition_system, tween_scale_system};

/// Horse Breeder
#[derive(Parser)]
#[command(version, about = "Drag horses into the stable and breed new colours.")]
struct Cli {
    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Generate the colour variants, write them as PNG files into DIR and exit.
    #[arg(long, value_name = "DIR")]
    export_variants: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::info!("{e}; using defaults");
    }

    // Early-exit: headless variant export (no window needed)
    if let Some(dir) = cli.export_variants {
        match game::export_variants(&config, &dir) {
            Ok(written) => println!("{} sheets written to {}", written.len(), dir.display()),
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
        return;
    }

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size();
    let (render_width, render_height) = config.render_size();

    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .title("Horse Breeder")
        .build();
    rl.set_target_fps(config.target_fps);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(Camera2DRes::fit(
        render_width as f32,
        render_height as f32,
        window_width as f32,
        window_height as f32,
    ));
    world.insert_resource(config);
    world.insert_resource(GameState::new());
    world.insert_resource(NextGameState::new());
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(observe_gamestate_change_event));

    let mut systems_store = SystemsStore::new();
    systems_store.insert("setup", world.register_system(game::setup));
    systems_store.insert("enter_play", world.register_system(game::enter_play));
    systems_store.insert("quit_game", world.register_system(game::quit_game));
    world.insert_resource(systems_store);

    world.spawn(Observer::new(drop_observer));
    world.spawn(Observer::new(flip_observer));
    world.spawn(Observer::new(log_breeding_observer));
    world.spawn(Observer::new(switch_debug_observer));
    world.flush();

    world.resource_mut::<NextGameState>().set(GameStates::Setup);
    world.trigger(GameStateChangedEvent {}); // enter Setup right away

    let mut update = Schedule::default();
    update.add_systems(check_pending_state);
    update.add_systems(
        (
            update_pointer_state,
            drag_system,
            (tween_mapposition_system, tween_scale_system),
            movement_system,
            wrap_system,
            facing_system,
            depth_system,
            spawner_system,
            stable_sprite_system,
            animation,
        )
            .chain()
            .run_if(state_is_playing)
            .after(check_pending_state),
    );
    update.add_systems(render_system.after(animation));

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
        && *world.resource::<GameState>().get() != GameStates::Quitting
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers();
    }
}
