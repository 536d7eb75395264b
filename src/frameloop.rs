//! The frame loop.
//!
//! One iteration:
//! 1. take the input snapshot and drain its transitions (quit, flash, music);
//! 2. move the sprite from the held keys, clamped to the arena;
//! 3. advance the label and bounce it off the edges;
//! 4. clear with the shared color, draw background, label, sprite; present;
//! 5. sleep the fixed frame delay.
//!
//! A quit seen in step 1 ends the iteration there: nothing moves and nothing
//! is drawn.

use std::time::Duration;

use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::events::audio::AudioCmd;
use crate::platform::{InputSource, RenderSurface};
use crate::resources::audio::{AudioBridge, THEME_MUSIC};
use crate::resources::colortimer::ColorTimer;
use crate::resources::drawcolor::SharedDrawColor;
use crate::resources::input::InputSnapshot;
use crate::resources::loopstate::{LoopState, loop_running};
use crate::systems::audio::{
    apply_audio_messages, forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds,
    update_bevy_audio_messages,
};
use crate::systems::bounce::text_bounce;
use crate::systems::input::dispatch_transitions;
use crate::systems::inputcontroller::sprite_controller;
use crate::systems::render::render_pass;

pub struct FrameLoop {
    world: World,
    update: Schedule,
    frames: u64,
}

impl FrameLoop {
    /// Wrap a world built by [`crate::game::build_world`].
    ///
    /// Audio forwarding only runs while an [`AudioBridge`] resource exists.
    pub fn new(world: World) -> Self {
        let mut update = Schedule::default();
        update.add_systems(
            (
                update_bevy_audio_cmds,
                dispatch_transitions,
                sprite_controller.run_if(loop_running),
                text_bounce.run_if(loop_running),
                // commands written above leave on the same frame
                forward_audio_cmds.run_if(resource_exists::<AudioBridge>),
                poll_audio_messages.run_if(resource_exists::<AudioBridge>),
                update_bevy_audio_messages,
                apply_audio_messages,
            )
                .chain(),
        );
        Self {
            world,
            update,
            frames: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Number of frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one iteration, minus the sleep.
    ///
    /// Returns the loop state after the iteration. Once terminated, further
    /// calls do nothing.
    pub fn step(&mut self, input: InputSnapshot, surface: &mut dyn RenderSurface) -> LoopState {
        if !self.world.resource::<LoopState>().is_running() {
            return LoopState::Terminated;
        }
        *self.world.resource_mut::<InputSnapshot>() = input;
        self.update.run(&mut self.world);

        let state = *self.world.resource::<LoopState>();
        if state.is_running() {
            render_pass(&mut self.world, surface);
            self.frames += 1;
        }
        state
    }

    /// Drive the loop on a host until a quit arrives.
    ///
    /// Starts the theme music and the background color timer, then repeats
    /// poll, step and sleep. The timer is stopped before returning.
    pub fn run<H: InputSource + RenderSurface>(
        &mut self,
        host: &mut H,
        frame_delay: Duration,
        color_interval: Duration,
    ) {
        self.world
            .resource_mut::<Messages<AudioCmd>>()
            .write(AudioCmd::PlayMusic {
                id: THEME_MUSIC.to_string(),
                looped: true,
            });

        let color = self.world.resource::<SharedDrawColor>().clone();
        let mut timer = ColorTimer::start(color.clone(), color_interval);

        loop {
            let input = host.poll_input();
            if self.step(input, &mut *host) == LoopState::Terminated {
                break;
            }
            std::thread::sleep(frame_delay);
        }

        timer.stop();
        debug!("color timer wrote {} colors", color.writes());
        info!("frame loop finished after {} frames", self.frames);
    }
}
