//! Scene setup.
//!
//! Builds the ECS world the frame loop runs on: resources first, then the
//! three drawable entities (background, bouncing label, player sprite).

use bevy_ecs::prelude::*;

use crate::components::bouncing::Bouncing;
use crate::components::inputcontrolled::InputControlled;
use crate::components::movingrect::MovingRect;
use crate::components::sprite::Sprite;
use crate::components::zindex::ZIndex;
use crate::events::audio::{AudioCmd, AudioMessage};
use crate::resources::arena::Arena;
use crate::resources::audio::{SPRITE_FX, THEME_MUSIC, WALL_FX};
use crate::resources::drawcolor::SharedDrawColor;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputSnapshot;
use crate::resources::loopstate::LoopState;
use crate::resources::playback::PlaybackState;

pub const BACKGROUND_TEX: &str = "background";
pub const TEXT_TEX: &str = "text";
pub const SPRITE_TEX: &str = "sprite";

/// Geometry of the scene, independent of where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SceneLayout {
    pub arena: Arena,
    /// Pixel size of the rendered label.
    pub text_size: (i32, i32),
    pub text_speed: i32,
    pub sprite_size: (i32, i32),
    pub sprite_step: i32,
}

impl SceneLayout {
    /// Layout from the config plus the measured label size.
    pub fn from_config(config: &GameConfig, text_size: (i32, i32)) -> Self {
        Self {
            arena: Arena::new(saturate(config.window_width), saturate(config.window_height)),
            text_size,
            text_speed: config.text_speed,
            sprite_size: (saturate(config.sprite_width), saturate(config.sprite_height)),
            sprite_step: config.sprite_step,
        }
    }
}

fn saturate(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

/// Marker for the bouncing label entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct Label;

/// Marker for the player sprite entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct Player;

/// Create a world with every frame-loop resource and the scene entities.
///
/// The draw color starts black. The audio bridge is not inserted here; the
/// caller adds a real or test one.
pub fn build_world(layout: SceneLayout) -> World {
    let mut world = World::new();
    world.insert_resource(layout.arena);
    world.insert_resource(LoopState::Running);
    world.insert_resource(InputSnapshot::default());
    world.insert_resource(PlaybackState::default());
    world.insert_resource(SharedDrawColor::default());
    world.init_resource::<Messages<AudioCmd>>();
    world.init_resource::<Messages<AudioMessage>>();
    spawn_scene(&mut world, layout);
    world
}

/// Spawn background, label and sprite.
///
/// The label starts centered and moves diagonally at `text_speed`; the sprite
/// starts in the top-left corner.
pub fn spawn_scene(world: &mut World, layout: SceneLayout) {
    let arena = layout.arena;
    let (tw, th) = layout.text_size;
    let (sw, sh) = layout.sprite_size;

    world.spawn((Sprite::new(BACKGROUND_TEX), ZIndex::BACKGROUND));

    world.spawn((
        Label,
        Sprite::new(TEXT_TEX),
        ZIndex::TEXT,
        MovingRect::centered(arena.w, arena.h, tw, th)
            .with_velocity(layout.text_speed, layout.text_speed),
        Bouncing::new(WALL_FX),
    ));

    world.spawn((
        Player,
        Sprite::new(SPRITE_TEX),
        ZIndex::SPRITE,
        MovingRect::new(0, 0, sw, sh),
        InputControlled::new(layout.sprite_step),
    ));
}

/// Queue the loads for both sound effects and the music track.
pub fn queue_audio_loads(world: &mut World, config: &GameConfig) {
    let assets = &config.assets;
    let mut msgs = world.resource_mut::<Messages<AudioCmd>>();
    msgs.write(AudioCmd::LoadFx {
        id: SPRITE_FX.to_string(),
        path: assets.sprite_fx.clone(),
    });
    msgs.write(AudioCmd::LoadFx {
        id: WALL_FX.to_string(),
        path: assets.wall_fx.clone(),
    });
    msgs.write(AudioCmd::LoadMusic {
        id: THEME_MUSIC.to_string(),
        path: assets.music.clone(),
    });
}
