use bevy_ecs::prelude::Component;

/// Marks a [`MovingRect`](crate::components::movingrect::MovingRect) that
/// moves on its own and bounces off the arena edges.
///
/// `fx` is the sound effect id played once per axis bounce.
#[derive(Component, Clone, Debug)]
pub struct Bouncing {
    pub fx: String,
}

impl Bouncing {
    pub fn new(fx: impl Into<String>) -> Self {
        Self { fx: fx.into() }
    }
}
