use bevy_ecs::prelude::Component;

/// Something the render pass draws, identified by its texture key.
///
/// The destination comes from the entity's
/// [`MovingRect`](crate::components::movingrect::MovingRect); an entity
/// without one (the background) is stretched over the whole surface.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Sprite {
    pub tex_key: String,
}

impl Sprite {
    pub fn new(tex_key: impl Into<String>) -> Self {
        Self {
            tex_key: tex_key.into(),
        }
    }
}
