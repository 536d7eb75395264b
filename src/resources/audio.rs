//! ECS resources that bridge the main thread with the background audio thread.
//!
//! With the `raylib` feature, use [`setup_audio`] once during initialization
//! to spawn the audio thread and insert the [`AudioBridge`]. Call
//! [`shutdown_audio`] during teardown to halt the music and join the thread.
//! Without a backend (tests), insert a bridge built with [`AudioBridge::new`]
//! around plain channels.

use crate::events::audio::{AudioCmd, AudioMessage};
use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender};

/// Sound effect played by the sprite action (Space).
pub const SPRITE_FX: &str = "sprite";
/// Sound effect played when the label hits a wall.
pub const WALL_FX: &str = "wall";
/// Background music track.
pub const THEME_MUSIC: &str = "theme";

/// Shared bridge between the ECS world and the audio thread.
#[derive(Resource)]
pub struct AudioBridge {
    /// Sender for [`AudioCmd`] messages (ECS -> audio thread).
    pub tx_cmd: Sender<AudioCmd>,
    /// Receiver for [`AudioMessage`] messages (audio thread -> ECS).
    pub rx_msg: Receiver<AudioMessage>,
    /// Join handle for the background audio thread, if one was spawned.
    pub handle: Option<std::thread::JoinHandle<()>>,
}

impl AudioBridge {
    /// Bridge over existing channels with no thread attached.
    pub fn new(tx_cmd: Sender<AudioCmd>, rx_msg: Receiver<AudioMessage>) -> Self {
        Self {
            tx_cmd,
            rx_msg,
            handle: None,
        }
    }
}

/// Spawn the raylib audio thread and register bridge resources.
///
/// Inserts [`AudioBridge`] and initializes `Messages<AudioCmd>` /
/// `Messages<AudioMessage>` so that systems can queue commands and read
/// replies.
#[cfg(feature = "raylib")]
pub fn setup_audio(world: &mut World) {
    use crate::systems::audio::audio_thread;
    use crossbeam_channel::unbounded;

    let (tx_cmd, rx_cmd) = unbounded::<AudioCmd>();
    let (tx_msg, rx_msg) = unbounded::<AudioMessage>();

    let handle = std::thread::spawn(move || audio_thread(rx_cmd, tx_msg));

    world.insert_resource(AudioBridge {
        tx_cmd,
        rx_msg,
        handle: Some(handle),
    });
    world.init_resource::<Messages<AudioMessage>>();
    world.init_resource::<Messages<AudioCmd>>();
}

/// Gracefully request shutdown of the audio thread and join it.
///
/// If the bridge resource exists, sends [`AudioCmd::Shutdown`] (the thread
/// halts the music itself), waits for the thread to exit, and removes the
/// resource from the world.
pub fn shutdown_audio(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<AudioBridge>() {
        let _ = bridge.tx_cmd.send(AudioCmd::Shutdown);
        if let Some(handle) = bridge.handle {
            let _ = handle.join();
        }
    }
}
