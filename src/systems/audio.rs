//! Audio systems and the background audio thread.
//!
//! - [`audio_thread`] (feature `raylib`) runs on its own OS thread, owns the
//!   Raylib audio device and every `Music`/`Sound` handle, and processes
//!   [`AudioCmd`] messages, answering with [`AudioMessage`]s.
//! - [`forward_audio_cmds`] pushes the frame's queued commands down the
//!   channel; [`poll_audio_messages`] drains replies without blocking.
//! - [`apply_audio_messages`] folds replies into
//!   [`PlaybackState`](crate::resources::playback::PlaybackState).
//!
//! Raylib audio calls stay on one thread; the frame loop only talks to it
//! through lock-free channels.

use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::audio::{AudioBridge, THEME_MUSIC};
use crate::resources::playback::{MusicStatus, PlaybackState};
use bevy_ecs::prelude::*;
use log::{info, warn};

/// Drain pending replies from the audio thread into `Messages<AudioMessage>`.
pub fn poll_audio_messages(bridge: Res<AudioBridge>, mut writer: MessageWriter<AudioMessage>) {
    writer.write_batch(bridge.rx_msg.try_iter());
}

/// Advance the ECS message queue for [`AudioMessage`].
pub fn update_bevy_audio_messages(mut msgs: ResMut<Messages<AudioMessage>>) {
    msgs.update();
}

/// Forward ECS AudioCmd messages to the audio thread via the AudioBridge sender.
pub fn forward_audio_cmds(bridge: Res<AudioBridge>, mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        // ignore send error on shutdown
        let _ = bridge.tx_cmd.send(cmd.clone());
    }
}

/// Advance the ECS message queue for AudioCmd so same-frame readers can observe writes.
pub fn update_bevy_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

/// Update the music status from what the audio thread reported.
pub fn apply_audio_messages(
    mut reader: MessageReader<AudioMessage>,
    mut playback: ResMut<PlaybackState>,
) {
    for msg in reader.read() {
        match msg {
            AudioMessage::MusicPlayStarted { id } if id == THEME_MUSIC => {
                // a looped restart while paused must not unpause the view
                if playback.music == MusicStatus::Stopped {
                    playback.music = MusicStatus::Playing;
                }
            }
            AudioMessage::MusicPaused { id } if id == THEME_MUSIC => {
                playback.music = MusicStatus::Paused;
            }
            AudioMessage::MusicResumed { id } if id == THEME_MUSIC => {
                playback.music = MusicStatus::Playing;
            }
            AudioMessage::MusicFinished { id } if id == THEME_MUSIC => {
                playback.music = MusicStatus::Stopped;
            }
            AudioMessage::MusicLoadFailed { id, error } => {
                warn!("music '{}' unavailable: {}", id, error);
                if id == THEME_MUSIC {
                    playback.music = MusicStatus::Stopped;
                }
            }
            AudioMessage::FxLoadFailed { id, error } => {
                warn!("sound '{}' unavailable: {}", id, error);
            }
            AudioMessage::MusicLoaded { id } | AudioMessage::FxLoaded { id } => {
                info!("audio '{}' loaded", id);
            }
            _ => {}
        }
    }
}

#[cfg(feature = "raylib")]
pub use self::thread::audio_thread;

#[cfg(feature = "raylib")]
mod thread {
    use crate::events::audio::{AudioCmd, AudioMessage};
    use crossbeam_channel::{Receiver, Sender};
    use log::{debug, error, info};
    use raylib::core::audio::{Music, RaylibAudio, Sound};
    use rustc_hash::{FxHashMap, FxHashSet};

    /// Entry point of the dedicated audio thread.
    ///
    /// Initializes the Raylib audio device once, owns all handles, reacts to
    /// [`AudioCmd`]s and pumps music streams. Blocks until
    /// [`AudioCmd::Shutdown`] arrives, then halts and unloads everything.
    pub fn audio_thread(rx_cmd: Receiver<AudioCmd>, tx_evt: Sender<AudioMessage>) {
        let audio = match RaylibAudio::init_audio_device() {
            Ok(device) => device,
            Err(e) => {
                error!("[audio] failed to initialize audio device: {}", e);
                // keep draining so senders never block; everything is a no-op
                for cmd in rx_cmd.iter() {
                    if matches!(cmd, AudioCmd::Shutdown) {
                        break;
                    }
                }
                return;
            }
        };

        debug!(
            "[audio] thread starting (id={:?})",
            std::thread::current().id()
        );

        let mut musics: FxHashMap<String, Music> = FxHashMap::default();
        let mut playing: FxHashSet<String> = FxHashSet::default();
        let mut looped: FxHashSet<String> = FxHashSet::default();
        let mut sounds: FxHashMap<String, Sound> = FxHashMap::default();

        'run: loop {
            // 1) Drain commands
            for cmd in rx_cmd.try_iter() {
                match cmd {
                    AudioCmd::LoadMusic { id, path } => match audio.new_music(&path) {
                        Ok(music) => {
                            info!("[audio] loaded id='{}' path='{}'", id, path);
                            musics.insert(id.clone(), music);
                            let _ = tx_evt.send(AudioMessage::MusicLoaded { id });
                        }
                        Err(e) => {
                            error!("[audio] load failed id='{}' path='{}' error='{}'", id, path, e);
                            let _ = tx_evt.send(AudioMessage::MusicLoadFailed {
                                id,
                                error: e.to_string(),
                            });
                        }
                    },
                    AudioCmd::PlayMusic {
                        id,
                        looped: want_loop,
                    } => {
                        if let Some(music) = musics.get(&id) {
                            debug!("[audio] play start id='{}' looped={}", id, want_loop);
                            music.seek_stream(0.0);
                            music.play_stream();
                            playing.insert(id.clone());
                            if want_loop {
                                looped.insert(id.clone());
                            } else {
                                looped.remove(&id);
                            }
                            let _ = tx_evt.send(AudioMessage::MusicPlayStarted { id });
                        }
                    }
                    AudioCmd::PauseMusic { id } => {
                        if let Some(music) = musics.get(&id) {
                            debug!("[audio] pause id='{}'", id);
                            music.pause_stream();
                            playing.remove(&id);
                            let _ = tx_evt.send(AudioMessage::MusicPaused { id });
                        }
                    }
                    AudioCmd::ResumeMusic { id } => {
                        if let Some(music) = musics.get(&id) {
                            debug!("[audio] resume id='{}'", id);
                            music.resume_stream();
                            playing.insert(id.clone());
                            let _ = tx_evt.send(AudioMessage::MusicResumed { id });
                        }
                    }
                    AudioCmd::LoadFx { id, path } => match audio.new_sound(&path) {
                        Ok(sound) => {
                            info!("[audio] fx loaded id='{}' path='{}'", id, path);
                            sounds.insert(id.clone(), sound);
                            let _ = tx_evt.send(AudioMessage::FxLoaded { id });
                        }
                        Err(e) => {
                            error!(
                                "[audio] fx load failed id='{}' path='{}' error='{}'",
                                id, path, e
                            );
                            let _ = tx_evt.send(AudioMessage::FxLoadFailed {
                                id,
                                error: e.to_string(),
                            });
                        }
                    },
                    AudioCmd::PlayFx { id } => {
                        if let Some(sound) = sounds.get(&id) {
                            debug!("[audio] fx play id='{}'", id);
                            sound.play();
                        } else {
                            debug!("[audio] fx play skipped id='{}' reason='not loaded'", id);
                        }
                    }
                    AudioCmd::Shutdown => {
                        info!("[audio] shutdown requested");
                        for music in musics.values() {
                            music.stop_stream();
                        }
                        for sound in sounds.values() {
                            sound.stop();
                        }
                        musics.clear();
                        playing.clear();
                        looped.clear();
                        sounds.clear();
                        break 'run;
                    }
                }
            }
            // 2) Pump streaming + detect ends
            //    `update_stream()` must be called regularly while playing.
            let mut ended: Vec<String> = Vec::new();
            for id in playing.iter() {
                if let Some(music) = musics.get(id) {
                    if music.is_stream_playing() {
                        music.update_stream();
                    } else {
                        let len = music.get_time_length();
                        let played = music.get_time_played();
                        if played >= len - 0.01 {
                            ended.push(id.clone());
                        }
                    }
                }
            }
            for id in ended.iter() {
                if looped.contains(id) {
                    if let Some(music) = musics.get(id) {
                        debug!("[audio] restarting looped id='{}'", id);
                        music.seek_stream(0.0);
                        music.play_stream();
                        let _ = tx_evt.send(AudioMessage::MusicPlayStarted { id: id.clone() });
                    }
                } else {
                    debug!("[audio] finished id='{}'", id);
                    playing.remove(id);
                    let _ = tx_evt.send(AudioMessage::MusicFinished { id: id.clone() });
                }
            }
            std::thread::sleep(std::time::Duration::from_millis(10));
        } // 'run

        debug!(
            "[audio] thread exiting (id={:?})",
            std::thread::current().id()
        );

        // musics and sounds drop before `audio`, satisfying lifetimes
    }
}
