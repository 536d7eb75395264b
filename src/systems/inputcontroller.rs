//! Keyboard-to-position controller.
//!
//! Reads the held keys from [`InputSnapshot`] and moves every
//! [`InputControlled`] rect by its step, clamped to the [`Arena`]. When no
//! movement key is held the system returns before touching any entity.
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::inputcontrolled::InputControlled;
use crate::components::movingrect::MovingRect;
use crate::physics::step_clamped;
use crate::resources::arena::Arena;
use crate::resources::input::InputSnapshot;

pub fn sprite_controller(
    mut query: Query<(&InputControlled, &mut MovingRect)>,
    input: Res<InputSnapshot>,
    arena: Res<Arena>,
) {
    let held = input.held_directions();
    if !held.any() {
        return;
    }
    for (controlled, mut rect) in query.iter_mut() {
        *rect = step_clamped(*rect, held, controlled.step, *arena);
        debug!("sprite {:?}", rect.rect());
    }
}
