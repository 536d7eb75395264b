//! Integer rectangles that move inside the arena.
//!
//! [`MovingRect`] is the only spatial component in the demo. The bouncing
//! label and the player sprite both carry one; the render pass reads it as the
//! destination rectangle for the entity's texture.

use bevy_ecs::prelude::Component;

/// Axis-aligned integer rectangle in arena pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Position, size and per-frame velocity of an animated rectangle.
///
/// Size never changes after spawn. Velocity is measured in pixels per frame;
/// the player sprite keeps a zero velocity and moves by its
/// [`InputControlled`](crate::components::inputcontrolled::InputControlled)
/// step instead.
#[derive(Component, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MovingRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
    pub vx: i32,
    pub vy: i32,
}

impl MovingRect {
    /// A stationary rectangle at `(x, y)`.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            x,
            y,
            w,
            h,
            vx: 0,
            vy: 0,
        }
    }

    /// Builder-style velocity setter.
    pub fn with_velocity(mut self, vx: i32, vy: i32) -> Self {
        self.vx = vx;
        self.vy = vy;
        self
    }

    /// A rectangle of size `w`x`h` centered in an arena of `arena_w`x`arena_h`.
    pub fn centered(arena_w: i32, arena_h: i32, w: i32, h: i32) -> Self {
        Self::new((arena_w - w) / 2, (arena_h - h) / 2, w, h)
    }

    /// Destination rectangle for drawing.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.w, self.h)
    }
}
