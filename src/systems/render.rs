use bevy_ecs::prelude::*;

use crate::components::movingrect::{MovingRect, Rect};
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::platform::RenderSurface;
use crate::resources::drawcolor::SharedDrawColor;

/// Compose and present one frame.
///
/// Clears with the current shared color, then draws every [`Sprite`] in
/// ascending [`ZIndex`] order. Entities with a [`MovingRect`] are drawn into
/// it; entities without one cover the whole surface.
pub fn render_pass(world: &mut World, surface: &mut dyn RenderSurface) {
    let clear = world.resource::<SharedDrawColor>().load();

    let mut to_draw: Vec<(String, Option<Rect>, ZIndex)> = {
        let mut q = world.query::<(&Sprite, Option<&MovingRect>, &ZIndex)>();
        q.iter(world)
            .map(|(s, r, z)| (s.tex_key.clone(), r.map(MovingRect::rect), *z))
            .collect()
    };
    // stable sort keeps spawn order inside a layer
    to_draw.sort_by_key(|(_, _, z)| *z);

    surface.clear(clear);
    for (tex_key, dest, _z) in to_draw.iter() {
        surface.draw_texture(tex_key, *dest);
    }
    surface.present();
}
