//! Arena size resource.
//!
//! The fixed logical rectangle `[0, w] x [0, h]` every entity lives in. It is
//! set once from the window size and never changes for the process lifetime.

use bevy_ecs::prelude::Resource;

/// Arena dimensions in pixels.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arena {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl Arena {
    pub fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}
