//! Keyboard-driven movement component.
//!
//! Entities carrying [`InputControlled`] are moved by
//! [`crate::systems::inputcontroller::sprite_controller`] while any of the
//! movement keys is held. Movement is clamped to the arena, never bounced.

use bevy_ecs::prelude::Component;

/// Pixels moved per frame for each held direction.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputControlled {
    pub step: i32,
}

impl InputControlled {
    pub fn new(step: i32) -> Self {
        Self { step }
    }
}
