//! Background music playback state.
//!
//! The audio thread owns the real music stream; [`PlaybackState`] is the
//! frame loop's view of it. Toggling updates it immediately, and
//! [`crate::systems::audio::apply_audio_messages`] folds in what the audio
//! thread reports (a track that failed to load or finished is `Stopped`).

use bevy_ecs::prelude::Resource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MusicStatus {
    /// Never started, halted, failed to load or finished.
    #[default]
    Stopped,
    Playing,
    Paused,
}

/// What a pause toggle should ask the audio thread to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Pause,
    Resume,
    Ignored,
}

#[derive(Resource, Debug, Clone, Default)]
pub struct PlaybackState {
    pub music: MusicStatus,
}

impl PlaybackState {
    pub fn is_paused(&self) -> bool {
        self.music == MusicStatus::Paused
    }

    /// Flip between playing and paused. No-op while stopped.
    pub fn toggle(&mut self) -> ToggleOutcome {
        match self.music {
            MusicStatus::Playing => {
                self.music = MusicStatus::Paused;
                ToggleOutcome::Pause
            }
            MusicStatus::Paused => {
                self.music = MusicStatus::Playing;
                ToggleOutcome::Resume
            }
            MusicStatus::Stopped => ToggleOutcome::Ignored,
        }
    }
}
