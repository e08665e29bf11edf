//! Fighter animations demo entry point.
//!
//! A minimal 2D game written in Rust using:
//! - **raylib** for windowing, graphics, and keyboard input
//! - **bevy_ecs** for entity-component-system architecture
//!
//! The window shows a fixed background and one fighter sprite. Key presses
//! queue fighting moves; each move plays its animation through once and
//! falls back to the idle loop. Action changes are only committed at a
//! cycle boundary, so a move requested mid-animation waits for the current
//! cycle to wrap.
//!
//! # Project Structure
//!
//! - [`components`] – ECS components (action state machine, sprite, position)
//! - [`events`] – Event types and observers (action requests, debug toggle)
//! - [`game`] – scene setup (background + player entities)
//! - [`resources`] – ECS resources (config, animation library, textures, input)
//! - [`systems`] – ECS systems (input, playback, anchoring, rendering)
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, ECS world, and asset stores
//! 2. Run the fixed-rate loop: poll input, tick the action state machine
//!    when the animation clock fires, anchor the sprite, render
//! 3. Exit when the window is closed
//!
//! # Controls
//!
//! Space = jump, E = kick, Q = lower kick, D = punsh, A = lower punsh,
//! F11 = debug overlay.
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod error;
mod events;
mod game;
mod resources;
mod systems;

use std::path::PathBuf;

use bevy_ecs::prelude::*;
use clap::Parser;
use log::info;

use crate::error::AssetError;
use crate::events::action::action_request_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::animationclock::AnimationClock;
use crate::resources::animationlibrary::AnimationLibrary;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::action::advance_action_playback;
use crate::systems::anchor::anchor_player_sprite;
use crate::systems::input::update_input_state;
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;

/// Fighter animations demo
#[derive(Parser)]
#[command(version, about = "A small fighter sprite animation demo")]
struct Cli {
    /// Path to the configuration file.
    #[arg(long, value_name = "PATH", default_value = "./config.ini")]
    config: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = GameConfig::with_path(cli.config);
    config.load_from_file().ok(); // missing file keeps defaults

    // --------------- Raylib window ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .title(&config.title)
        .build();
    rl.set_target_fps(config.target_fps);
    // Only the window-close event quits, not ESC
    rl.set_exit_key(None);
    if let Some((x, y)) = config.window_position {
        rl.set_window_position(x, y);
    }

    // --------------- Assets ---------------
    let library = AnimationLibrary::load(&config).unwrap_or_else(exit_on_asset_error);
    let textures =
        TextureStore::load(&mut rl, &thread, &config, &library).unwrap_or_else(exit_on_asset_error);
    info!("Assets loaded for {} actions", config.actions.len());

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(1.0));
    world.insert_resource(ScreenSize {
        w: config.window_width as i32,
        h: config.window_height as i32,
    });
    world.insert_resource(AnimationClock::new(config.animation_interval()));
    world.insert_resource(InputState::default());
    world.insert_resource(library);
    world.insert_resource(textures);
    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.add_observer(action_request_observer);
    world.add_observer(switch_debug_observer);
    // Observers must be registered before any system triggers events
    world.flush();

    game::setup(&mut world);

    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(advance_action_playback.after(update_input_state));
    update.add_systems(anchor_player_sprite.after(advance_action_playback));
    update.add_systems(render_system.after(anchor_player_sprite));

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame
    }
}

fn exit_on_asset_error<T>(err: AssetError) -> T {
    log::error!("{err}");
    std::process::exit(1);
}
