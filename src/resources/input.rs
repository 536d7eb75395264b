//! Per-frame input snapshot resource.
//!
//! The host fills a fresh [`InputSnapshot`] every iteration from two sources
//! and the frame loop consumes it:
//! - an ordered queue of discrete [`Transition`]s (key-down, window close),
//!   edge-triggered and drained once;
//! - the set of currently held [`Key`]s, level-triggered.
//!
//! Movement keys come in two aliased sets: arrows and WASD.
use bevy_ecs::prelude::*;
use rustc_hash::FxHashSet;
use smallvec::SmallVec;

/// Platform-neutral keys the demo reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Escape,
    Space,
    M,
}

impl Key {
    /// The eight keys that move the sprite.
    pub const MOVEMENT: [Key; 8] = [
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::W,
        Key::A,
        Key::S,
        Key::D,
    ];
}

/// An edge-triggered input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transition {
    /// The window close button (or the OS) asked us to quit.
    WindowClose,
    /// A key went down this frame.
    KeyDown(Key),
}

/// Which of the four directions are held, after folding arrows and WASD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldDirections {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl HeldDirections {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

/// Resource holding this frame's input.
#[derive(Resource, Debug, Clone, Default)]
pub struct InputSnapshot {
    held: FxHashSet<Key>,
    transitions: SmallVec<[Transition; 8]>,
}

impl InputSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: mark `key` as held.
    pub fn with_held(mut self, key: Key) -> Self {
        self.press(key);
        self
    }

    /// Builder: append a transition to the queue.
    pub fn with_transition(mut self, transition: Transition) -> Self {
        self.push(transition);
        self
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn push(&mut self, transition: Transition) {
        self.transitions.push(transition);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Take the transition queue, leaving it empty.
    pub fn take_transitions(&mut self) -> SmallVec<[Transition; 8]> {
        std::mem::take(&mut self.transitions)
    }

    pub fn held_directions(&self) -> HeldDirections {
        HeldDirections {
            up: self.is_held(Key::Up) || self.is_held(Key::W),
            down: self.is_held(Key::Down) || self.is_held(Key::S),
            left: self.is_held(Key::Left) || self.is_held(Key::A),
            right: self.is_held(Key::Right) || self.is_held(Key::D),
        }
    }
}
