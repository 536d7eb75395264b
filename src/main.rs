//! Bounce Loop entry point.
//!
//! A small real-time demo written in Rust using:
//! - **raylib** for windowing, graphics and audio
//! - **bevy_ecs** for the per-frame systems
//! - **crossbeam-channel** for the audio thread and the color timer
//!
//! # Main Loop
//!
//! 1. Load `config.ini` (defaults when missing), apply CLI overrides
//! 2. Open the window, load textures, rasterize the title label
//! 3. Build the ECS world, start the audio thread, queue sound loads
//! 4. Run the frame loop until Escape or the window is closed
//! 5. Clean up audio thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --width 1024 --height 768
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use std::path::PathBuf;

use bounceloop::frameloop::FrameLoop;
use bounceloop::game::{self, SceneLayout, TEXT_TEX};
use bounceloop::platform::raylib_host::RaylibHost;
use bounceloop::resources::audio::{setup_audio, shutdown_audio};
use bounceloop::resources::gameconfig::GameConfig;
use clap::Parser;

/// Bouncing title, movable sprite, flashing background.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Configuration file to read (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Window width in pixels; overrides the config file.
    #[arg(long)]
    width: Option<u32>,

    /// Window height in pixels; overrides the config file.
    #[arg(long)]
    height: Option<u32>,

    /// Write the effective configuration back to the config file and exit.
    #[arg(long)]
    save_config: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        log::warn!("{} ({:?}), using defaults", e, config.config_path);
    }
    let (w, h) = config.window_size();
    config.set_window_size(cli.width.unwrap_or(w), cli.height.unwrap_or(h));

    if cli.save_config {
        if let Err(e) = config.save_to_file() {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        println!("Configuration written to {}", config.config_path.display());
        return;
    }

    // --------------- Raylib window & assets ---------------
    let mut host = match RaylibHost::open(&config) {
        Ok(host) => host,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    let text_size = host.texture_size(TEXT_TEX).unwrap_or((0, 0));

    // --------------- ECS world + resources ---------------
    let mut world = game::build_world(SceneLayout::from_config(&config, text_size));
    setup_audio(&mut world);
    game::queue_audio_loads(&mut world, &config);
    let frame_delay = config.frame_delay();
    let color_interval = config.color_interval();
    world.insert_resource(config);

    // --------------- Main loop ---------------
    let mut frame_loop = FrameLoop::new(world);
    frame_loop.run(&mut host, frame_delay, color_interval);

    shutdown_audio(frame_loop.world_mut());
}
