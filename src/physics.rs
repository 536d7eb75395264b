//! Boundary physics for rectangles inside the arena.
//!
//! Two policies, both pure functions over integers:
//! - [`advance`]: free motion with edge-detect bouncing. The frame's
//!   displacement is applied with the old velocity, then each axis whose new
//!   position touches or crosses an edge has its velocity sign flipped for the
//!   next frame. A rect can therefore overshoot an edge by up to one step
//!   before it comes back; it is never snapped inside.
//! - [`step_clamped`]: keyboard motion that is simply refused when it would
//!   leave the arena.

use crate::components::movingrect::MovingRect;
use crate::resources::arena::Arena;
use crate::resources::input::HeldDirections;

/// Axes whose velocity flipped during one [`advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounces {
    pub x: bool,
    pub y: bool,
}

impl Bounces {
    /// Number of bounce events, one per flipped axis.
    pub fn count(&self) -> usize {
        self.x as usize + self.y as usize
    }

    pub fn any(&self) -> bool {
        self.x || self.y
    }
}

/// Move `rect` by its velocity and flip the velocity of every axis that
/// reached an edge.
pub fn advance(rect: MovingRect, arena: Arena) -> (MovingRect, Bounces) {
    let mut next = rect;
    next.x += next.vx;
    next.y += next.vy;

    let mut bounces = Bounces::default();
    if next.x <= 0 || next.x + next.w >= arena.w {
        next.vx = -next.vx;
        bounces.x = true;
    }
    if next.y <= 0 || next.y + next.h >= arena.h {
        next.vy = -next.vy;
        bounces.y = true;
    }
    (next, bounces)
}

/// Move `rect` by `step` for each held direction, skipping any move that
/// would put part of the rect outside the arena.
///
/// Directions are tried in the order up, down, left, right, each against the
/// result of the previous one. Velocity is left untouched.
pub fn step_clamped(
    rect: MovingRect,
    held: HeldDirections,
    step: i32,
    arena: Arena,
) -> MovingRect {
    let mut next = rect;
    if held.up && next.y - step >= 0 {
        next.y -= step;
    }
    if held.down && next.y + next.h + step <= arena.h {
        next.y += step;
    }
    if held.left && next.x - step >= 0 {
        next.x -= step;
    }
    if held.right && next.x + next.w + step <= arena.w {
        next.x += step;
    }
    next
}
