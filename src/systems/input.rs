//! Discrete input dispatch.
//!
//! - [`map_transition`] turns a queued [`Transition`] into an [`InputAction`].
//! - [`dispatch_transitions`] drains the frame's transition queue in arrival
//!   order and performs each action. It runs first in the frame schedule, so
//!   a quit seen here suppresses the rest of the frame.
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::events::audio::AudioCmd;
use crate::events::input::InputAction;
use crate::resources::audio::{SPRITE_FX, THEME_MUSIC};
use crate::resources::drawcolor::SharedDrawColor;
use crate::resources::input::{InputSnapshot, Key, Transition};
use crate::resources::loopstate::LoopState;
use crate::resources::playback::{PlaybackState, ToggleOutcome};

/// Map one transition to its action, if it has one.
pub fn map_transition(transition: Transition) -> Option<InputAction> {
    match transition {
        Transition::WindowClose => Some(InputAction::Quit),
        Transition::KeyDown(Key::Escape) => Some(InputAction::Quit),
        Transition::KeyDown(Key::Space) => Some(InputAction::Flash),
        Transition::KeyDown(Key::M) => Some(InputAction::ToggleMusic),
        Transition::KeyDown(_) => None,
    }
}

/// Drain the transition queue and apply every action.
///
/// A quit terminates the loop and discards whatever is still queued behind it.
pub fn dispatch_transitions(
    mut input: ResMut<InputSnapshot>,
    mut state: ResMut<LoopState>,
    mut playback: ResMut<PlaybackState>,
    color: Res<SharedDrawColor>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    for transition in input.take_transitions() {
        let Some(action) = map_transition(transition) else {
            continue;
        };
        match action {
            InputAction::Quit => {
                info!("quit requested ({:?})", transition);
                state.terminate();
                break;
            }
            InputAction::Flash => {
                audio_cmds.write(AudioCmd::PlayFx {
                    id: SPRITE_FX.to_string(),
                });
                let c = color.randomize();
                debug!("flash -> {:?}", c);
            }
            InputAction::ToggleMusic => match playback.toggle() {
                ToggleOutcome::Pause => {
                    info!("music paused");
                    audio_cmds.write(AudioCmd::PauseMusic {
                        id: THEME_MUSIC.to_string(),
                    });
                }
                ToggleOutcome::Resume => {
                    info!("music resumed");
                    audio_cmds.write(AudioCmd::ResumeMusic {
                        id: THEME_MUSIC.to_string(),
                    });
                }
                ToggleOutcome::Ignored => debug!("music toggle ignored: not playing"),
            },
        }
    }
}
