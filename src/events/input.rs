//! Input actions.
//!
//! [`InputAction`] is what a discrete
//! [`Transition`](crate::resources::input::Transition) means to the demo once
//! the physical key has been looked up. Held movement keys never become
//! actions; they are read straight from the snapshot.

/// Logical actions produced by the transition queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// Leave the frame loop (window close or Escape).
    Quit,
    /// Play the sprite sound and randomize the clear color right now (Space).
    Flash,
    /// Pause or resume the background music (M).
    ToggleMusic,
}
