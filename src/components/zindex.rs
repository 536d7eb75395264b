//! Draw layer of an entity.
//!
//! The render pass sorts by [`ZIndex`] before drawing, so the fixed layer
//! order background → text → sprite is just three ascending values.

use bevy_ecs::prelude::Component;

/// Painter's-algorithm layer; higher values are drawn on top.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);

impl ZIndex {
    pub const BACKGROUND: ZIndex = ZIndex(0);
    pub const TEXT: ZIndex = ZIndex(1);
    pub const SPRITE: ZIndex = ZIndex(2);
}
