//! Bounce Loop library.
//!
//! This module exposes the demo's ECS components, resources, systems and
//! events, plus the frame loop driving them, for use in integration tests and
//! by the `bounceloop` binary.

pub mod components;
pub mod events;
pub mod frameloop;
pub mod game;
pub mod physics;
pub mod platform;
pub mod resources;
pub mod systems;
