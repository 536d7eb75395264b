//! Frame-loop state resource.
//!
//! The loop only has two states. [`LoopState::Terminated`] is terminal: once a
//! quit transition has been dispatched nothing moves or draws again, and
//! [`FrameLoop::run`](crate::frameloop::FrameLoop::run) returns to its caller.

use bevy_ecs::prelude::{Res, Resource};

/// Whether the frame loop keeps iterating.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LoopState {
    #[default]
    Running,
    Terminated,
}

impl LoopState {
    pub fn is_running(&self) -> bool {
        matches!(self, LoopState::Running)
    }

    /// Move to [`LoopState::Terminated`]. There is no way back.
    pub fn terminate(&mut self) {
        *self = LoopState::Terminated;
    }
}

/// Run condition gating per-frame work on a running loop.
pub fn loop_running(state: Res<LoopState>) -> bool {
    state.is_running()
}
