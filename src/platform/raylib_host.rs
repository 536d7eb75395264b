//! Raylib host: window, textures and keyboard.
//!
//! [`RaylibHost`] owns the raylib handle and every texture. It implements
//! [`InputSource`] by reading raylib's key-pressed queue and key-down state,
//! and [`RenderSurface`] by buffering draw calls and flushing them inside a
//! single `begin_drawing` scope on `present`.
//!
//! Audio is not here: it lives on its own thread, see
//! [`crate::systems::audio::audio_thread`].

use std::ffi::CString;

use log::info;
use ::raylib::ffi;
use ::raylib::prelude::*;
use rustc_hash::FxHashMap;

use crate::components::movingrect::Rect;
use crate::game::{BACKGROUND_TEX, SPRITE_TEX, TEXT_TEX};
use crate::platform::{InputSource, PlatformError, RenderSurface};
use crate::resources::drawcolor::DrawColor;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{InputSnapshot, Key, Transition};

fn to_raylib_key(key: Key) -> KeyboardKey {
    match key {
        Key::Up => KeyboardKey::KEY_UP,
        Key::Down => KeyboardKey::KEY_DOWN,
        Key::Left => KeyboardKey::KEY_LEFT,
        Key::Right => KeyboardKey::KEY_RIGHT,
        Key::W => KeyboardKey::KEY_W,
        Key::A => KeyboardKey::KEY_A,
        Key::S => KeyboardKey::KEY_S,
        Key::D => KeyboardKey::KEY_D,
        Key::Escape => KeyboardKey::KEY_ESCAPE,
        Key::Space => KeyboardKey::KEY_SPACE,
        Key::M => KeyboardKey::KEY_M,
    }
}

fn from_raylib_key(key: KeyboardKey) -> Option<Key> {
    match key {
        KeyboardKey::KEY_UP => Some(Key::Up),
        KeyboardKey::KEY_DOWN => Some(Key::Down),
        KeyboardKey::KEY_LEFT => Some(Key::Left),
        KeyboardKey::KEY_RIGHT => Some(Key::Right),
        KeyboardKey::KEY_W => Some(Key::W),
        KeyboardKey::KEY_A => Some(Key::A),
        KeyboardKey::KEY_S => Some(Key::S),
        KeyboardKey::KEY_D => Some(Key::D),
        KeyboardKey::KEY_ESCAPE => Some(Key::Escape),
        KeyboardKey::KEY_SPACE => Some(Key::Space),
        KeyboardKey::KEY_M => Some(Key::M),
        _ => None,
    }
}

/// Create a Texture2D from a text string, font, size, and color.
fn load_texture_from_text(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    font: &Font,
    text: &str,
    font_size: f32,
    spacing: f32,
    color: Color,
) -> Result<Texture2D, PlatformError> {
    let c_text = CString::new(text).map_err(|e| PlatformError::TextRender(e.to_string()))?;
    let image = unsafe {
        let raw = ffi::ImageTextEx(**font, c_text.as_ptr(), font_size, spacing, color.into());
        Image::from_raw(raw)
    };
    rl.load_texture_from_image(thread, &image)
        .map_err(|e| PlatformError::TextRender(e.to_string()))
}

/// Loaded textures keyed by string IDs.
#[derive(Default)]
pub struct TextureStore {
    map: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, texture: Texture2D) {
        self.map.insert(key.into(), texture);
    }

    pub fn get(&self, key: impl AsRef<str>) -> Option<&Texture2D> {
        self.map.get(key.as_ref())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}

enum DrawOp {
    Texture { key: String, dest: Option<Rect> },
}

/// Everything raylib-side the frame loop draws with.
pub struct RaylibHost {
    rl: RaylibHandle,
    thread: RaylibThread,
    textures: TextureStore,
    clear: Color,
    pending: Vec<DrawOp>,
}

impl RaylibHost {
    /// Open the window and load every texture the scene needs.
    pub fn open(config: &GameConfig) -> Result<Self, PlatformError> {
        let (mut rl, thread) = ::raylib::init()
            .size(config.window_width as i32, config.window_height as i32)
            .title(&config.title)
            .build();
        // Escape is a regular transition, not raylib's exit key
        rl.set_exit_key(None);

        let assets = &config.assets;
        let mut textures = TextureStore::new();

        let icon = Image::load_image(&assets.icon).map_err(|e| PlatformError::AssetLoad {
            kind: "icon",
            path: assets.icon.clone(),
            reason: e.to_string(),
        })?;
        rl.set_window_icon(&icon);

        for (key, path) in [(BACKGROUND_TEX, &assets.background), (SPRITE_TEX, &assets.sprite)] {
            let texture = rl
                .load_texture(&thread, path)
                .map_err(|e| PlatformError::AssetLoad {
                    kind: "texture",
                    path: path.clone(),
                    reason: e.to_string(),
                })?;
            textures.insert(key, texture);
        }

        let font = rl
            .load_font(&thread, &assets.font)
            .map_err(|e| PlatformError::AssetLoad {
                kind: "font",
                path: assets.font.clone(),
                reason: e.to_string(),
            })?;
        let label = load_texture_from_text(
            &mut rl,
            &thread,
            &font,
            &config.title,
            config.font_size as f32,
            1.0,
            Color::WHITE,
        )?;
        textures.insert(TEXT_TEX, label);

        info!("Loaded {} textures", textures.len());

        Ok(Self {
            rl,
            thread,
            textures,
            clear: Color::BLACK,
            pending: Vec::new(),
        })
    }

    /// Pixel size of a loaded texture.
    pub fn texture_size(&self, key: &str) -> Option<(i32, i32)> {
        self.textures.get(key).map(|t| (t.width, t.height))
    }
}

impl InputSource for RaylibHost {
    fn poll_input(&mut self) -> InputSnapshot {
        let mut snapshot = InputSnapshot::new();
        if self.rl.window_should_close() {
            snapshot.push(Transition::WindowClose);
        }
        while let Some(key) = self.rl.get_key_pressed() {
            if let Some(key) = from_raylib_key(key) {
                snapshot.push(Transition::KeyDown(key));
            }
        }
        for key in Key::MOVEMENT {
            if self.rl.is_key_down(to_raylib_key(key)) {
                snapshot.press(key);
            }
        }
        snapshot
    }
}

impl RenderSurface for RaylibHost {
    fn clear(&mut self, color: DrawColor) {
        self.clear = Color::new(color.r, color.g, color.b, 255);
        self.pending.clear();
    }

    fn draw_texture(&mut self, tex_key: &str, dest: Option<Rect>) {
        self.pending.push(DrawOp::Texture {
            key: tex_key.to_string(),
            dest,
        });
    }

    fn present(&mut self) {
        let full = Rectangle::new(
            0.0,
            0.0,
            self.rl.get_screen_width() as f32,
            self.rl.get_screen_height() as f32,
        );
        let mut d = self.rl.begin_drawing(&self.thread);
        d.clear_background(self.clear);
        for op in self.pending.drain(..) {
            let DrawOp::Texture { key, dest } = op;
            let Some(tex) = self.textures.get(&key) else {
                continue;
            };
            let src = Rectangle::new(0.0, 0.0, tex.width as f32, tex.height as f32);
            let dest = match dest {
                Some(r) => Rectangle::new(r.x as f32, r.y as f32, r.w as f32, r.h as f32),
                None => full,
            };
            d.draw_texture_pro(tex, src, dest, Vector2::zero(), 0.0, Color::WHITE);
        }
        // dropping `d` ends the frame and swaps buffers
    }
}
