//! Game configuration resource.
//!
//! Settings loaded from an INI configuration file. Defaults are safe to start
//! with; any key missing from the file keeps its default.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 800
//! height = 600
//! title = Bounce Loop
//!
//! [loop]
//! frame_delay_ms = 20
//! color_interval_ms = 1000
//!
//! [sprite]
//! width = 128
//! height = 128
//! step = 10
//!
//! [text]
//! font_size = 80
//! speed = 2
//!
//! [assets]
//! background = images/background.png
//! icon = images/logo.png
//! sprite = images/logo.png
//! font = fonts/freesansbold.ttf
//! sprite_fx = sounds/sprite.ogg
//! wall_fx = sounds/wall.ogg
//! music = music/theme.ogg
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::{info, warn};
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_WINDOW_WIDTH: u32 = 800;
const DEFAULT_WINDOW_HEIGHT: u32 = 600;
const DEFAULT_TITLE: &str = "Bounce Loop";
const DEFAULT_FRAME_DELAY_MS: u64 = 20;
const DEFAULT_COLOR_INTERVAL_MS: u64 = 1000;
/// A zero tick interval would make the timer thread spin.
const MIN_COLOR_INTERVAL_MS: u64 = 1;
const DEFAULT_SPRITE_SIZE: u32 = 128;
const DEFAULT_SPRITE_STEP: i32 = 10;
const DEFAULT_FONT_SIZE: u32 = 80;
const DEFAULT_TEXT_SPEED: i32 = 2;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// File locations of everything the host loads before the loop starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    pub background: String,
    pub icon: String,
    pub sprite: String,
    pub font: String,
    pub sprite_fx: String,
    pub wall_fx: String,
    pub music: String,
}

impl Default for AssetPaths {
    fn default() -> Self {
        Self {
            background: "images/background.png".into(),
            icon: "images/logo.png".into(),
            sprite: "images/logo.png".into(),
            font: "fonts/freesansbold.ttf".into(),
            sprite_fx: "sounds/sprite.ogg".into(),
            wall_fx: "sounds/wall.ogg".into(),
            music: "music/theme.ogg".into(),
        }
    }
}

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Window (and arena) width in pixels.
    pub window_width: u32,
    /// Window (and arena) height in pixels.
    pub window_height: u32,
    /// Window title, also rendered as the bouncing label.
    pub title: String,
    /// Fixed sleep after each presented frame.
    pub frame_delay_ms: u64,
    /// Period of the background color timer.
    pub color_interval_ms: u64,
    pub sprite_width: u32,
    pub sprite_height: u32,
    /// Pixels the sprite moves per frame per held direction.
    pub sprite_step: i32,
    /// Point size the label is rasterized at.
    pub font_size: u32,
    /// Initial label speed on both axes, pixels per frame.
    pub text_speed: i32,
    pub assets: AssetPaths,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
            frame_delay_ms: DEFAULT_FRAME_DELAY_MS,
            color_interval_ms: DEFAULT_COLOR_INTERVAL_MS,
            sprite_width: DEFAULT_SPRITE_SIZE,
            sprite_height: DEFAULT_SPRITE_SIZE,
            sprite_step: DEFAULT_SPRITE_STEP,
            font_size: DEFAULT_FONT_SIZE,
            text_speed: DEFAULT_TEXT_SPEED,
            assets: AssetPaths::default(),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }

        // [loop] section
        if let Some(ms) = config.getuint("loop", "frame_delay_ms").ok().flatten() {
            self.frame_delay_ms = ms;
        }
        if let Some(ms) = config.getuint("loop", "color_interval_ms").ok().flatten() {
            if ms < MIN_COLOR_INTERVAL_MS {
                warn!(
                    "color_interval_ms = {} is too small, using {}",
                    ms, MIN_COLOR_INTERVAL_MS
                );
            }
            self.color_interval_ms = ms.max(MIN_COLOR_INTERVAL_MS);
        }

        // [sprite] section
        if let Some(width) = config.getuint("sprite", "width").ok().flatten() {
            self.sprite_width = width as u32;
        }
        if let Some(height) = config.getuint("sprite", "height").ok().flatten() {
            self.sprite_height = height as u32;
        }
        if let Some(step) = config.getint("sprite", "step").ok().flatten() {
            self.sprite_step = step as i32;
        }

        // [text] section
        if let Some(size) = config.getuint("text", "font_size").ok().flatten() {
            self.font_size = size as u32;
        }
        if let Some(speed) = config.getint("text", "speed").ok().flatten() {
            self.text_speed = speed as i32;
        }

        // [assets] section
        let assets = &mut self.assets;
        for (key, slot) in [
            ("background", &mut assets.background),
            ("icon", &mut assets.icon),
            ("sprite", &mut assets.sprite),
            ("font", &mut assets.font),
            ("sprite_fx", &mut assets.sprite_fx),
            ("wall_fx", &mut assets.wall_fx),
            ("music", &mut assets.music),
        ] {
            if let Some(path) = config.get("assets", key) {
                *slot = path;
            }
        }

        info!(
            "Loaded config: {}x{} window, frame_delay={}ms, color_interval={}ms, sprite {}x{} step={}, text speed={}",
            self.window_width,
            self.window_height,
            self.frame_delay_ms,
            self.color_interval_ms,
            self.sprite_width,
            self.sprite_height,
            self.sprite_step,
            self.text_speed
        );

        Ok(())
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "title", Some(self.title.clone()));

        config.set("loop", "frame_delay_ms", Some(self.frame_delay_ms.to_string()));
        config.set(
            "loop",
            "color_interval_ms",
            Some(self.color_interval_ms.to_string()),
        );

        config.set("sprite", "width", Some(self.sprite_width.to_string()));
        config.set("sprite", "height", Some(self.sprite_height.to_string()));
        config.set("sprite", "step", Some(self.sprite_step.to_string()));

        config.set("text", "font_size", Some(self.font_size.to_string()));
        config.set("text", "speed", Some(self.text_speed.to_string()));

        let a = &self.assets;
        config.set("assets", "background", Some(a.background.clone()));
        config.set("assets", "icon", Some(a.icon.clone()));
        config.set("assets", "sprite", Some(a.sprite.clone()));
        config.set("assets", "font", Some(a.font.clone()));
        config.set("assets", "sprite_fx", Some(a.sprite_fx.clone()));
        config.set("assets", "wall_fx", Some(a.wall_fx.clone()));
        config.set("assets", "music", Some(a.music.clone()));

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Set window size.
    pub fn set_window_size(&mut self, width: u32, height: u32) {
        self.window_width = width;
        self.window_height = height;
    }

    /// Get the window size.
    pub fn window_size(&self) -> (u32, u32) {
        (self.window_width, self.window_height)
    }

    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis(self.frame_delay_ms)
    }

    /// Timer period, never shorter than 1 ms.
    pub fn color_interval(&self) -> Duration {
        Duration::from_millis(self.color_interval_ms.max(MIN_COLOR_INTERVAL_MS))
    }
}
