//! Free-bouncing motion.
//!
//! Every frame, each [`Bouncing`] rect advances by its velocity; each axis
//! that hits an edge flips and queues one play of the entity's wall sound.
use bevy_ecs::prelude::*;
use log::trace;

use crate::components::bouncing::Bouncing;
use crate::components::movingrect::MovingRect;
use crate::events::audio::AudioCmd;
use crate::physics::advance;
use crate::resources::arena::Arena;

pub fn text_bounce(
    mut query: Query<(&Bouncing, &mut MovingRect)>,
    arena: Res<Arena>,
    mut audio_cmds: MessageWriter<AudioCmd>,
) {
    for (bouncing, mut rect) in query.iter_mut() {
        let (next, bounces) = advance(*rect, *arena);
        *rect = next;
        if bounces.any() {
            trace!("bounce {:?} at {:?}", bounces, next.rect());
        }
        for _ in 0..bounces.count() {
            audio_cmds.write(AudioCmd::PlayFx {
                id: bouncing.fx.clone(),
            });
        }
    }
}
