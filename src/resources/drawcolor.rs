//! Shared clear color.
//!
//! [`SharedDrawColor`] is the only state touched from two threads: the
//! [`ColorTimer`](crate::resources::colortimer::ColorTimer) writes it once per
//! interval and the render pass reads it once per frame. The color is packed
//! into one `AtomicU32`, so a read always sees a whole color.

use bevy_ecs::prelude::Resource;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

/// Opaque RGB color used to clear the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DrawColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl DrawColor {
    pub const BLACK: DrawColor = DrawColor { r: 0, g: 0, b: 0 };

    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Each channel drawn independently and uniformly from `0..=255`.
    pub fn random() -> Self {
        Self::new(fastrand::u8(..), fastrand::u8(..), fastrand::u8(..))
    }

    /// Same as [`DrawColor::random`] with an explicit generator.
    pub fn random_with(rng: &mut fastrand::Rng) -> Self {
        Self::new(rng.u8(..), rng.u8(..), rng.u8(..))
    }

    fn pack(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    fn unpack(packed: u32) -> Self {
        Self::new((packed >> 16) as u8, (packed >> 8) as u8, packed as u8)
    }
}

struct ColorCell {
    rgb: AtomicU32,
    writes: AtomicU64,
}

/// Cloneable handle to the shared clear color.
#[derive(Resource, Clone)]
pub struct SharedDrawColor(Arc<ColorCell>);

impl Default for SharedDrawColor {
    fn default() -> Self {
        Self::new(DrawColor::BLACK)
    }
}

impl std::fmt::Debug for SharedDrawColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedDrawColor")
            .field("color", &self.load())
            .field("writes", &self.writes())
            .finish()
    }
}

impl SharedDrawColor {
    pub fn new(initial: DrawColor) -> Self {
        Self(Arc::new(ColorCell {
            rgb: AtomicU32::new(initial.pack()),
            writes: AtomicU64::new(0),
        }))
    }

    pub fn load(&self) -> DrawColor {
        DrawColor::unpack(self.0.rgb.load(Ordering::Relaxed))
    }

    pub fn store(&self, color: DrawColor) {
        self.0.rgb.store(color.pack(), Ordering::Relaxed);
        self.0.writes.fetch_add(1, Ordering::Relaxed);
    }

    /// Replace the color with a fresh random one and return it.
    pub fn randomize(&self) -> DrawColor {
        let color = DrawColor::random();
        self.store(color);
        color
    }

    /// Number of stores since creation.
    pub fn writes(&self) -> u64 {
        self.0.writes.load(Ordering::Relaxed)
    }
}
