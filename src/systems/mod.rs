//! Frame systems.
//!
//! Submodules overview
//! - [`audio`] – bridge with the audio thread (forward commands, poll replies)
//! - [`bounce`] – advance bouncing rects and queue wall sounds
//! - [`input`] – turn queued transitions into quit, flash and music toggles
//! - [`inputcontroller`] – move keyboard-controlled rects inside the arena
//! - [`render`] – clear, draw by layer and present

pub mod audio;
pub mod bounce;
pub mod input;
pub mod inputcontroller;
pub mod render;
