//! Platform abstraction layer.
//!
//! The frame loop never talks to a window system directly. It consumes two
//! narrow traits:
//! - [`InputSource`] hands over one [`InputSnapshot`] per iteration;
//! - [`RenderSurface`] receives clear / draw / present calls.
//!
//! [`raylib_host`] (feature `raylib`) provides the real implementation of both.

use crate::components::movingrect::Rect;
use crate::resources::drawcolor::DrawColor;
use crate::resources::input::InputSnapshot;

#[cfg(feature = "raylib")]
pub mod raylib_host;

/// Source of per-frame input.
pub trait InputSource {
    /// Capture the transitions queued since the last call plus the keys held
    /// right now.
    fn poll_input(&mut self) -> InputSnapshot;
}

/// Something frames can be composed on and presented to.
pub trait RenderSurface {
    /// Start a frame, filling the surface with `color`.
    fn clear(&mut self, color: DrawColor);
    /// Draw the texture registered as `tex_key` into `dest`, or over the
    /// whole surface when `dest` is `None`.
    fn draw_texture(&mut self, tex_key: &str, dest: Option<Rect>);
    /// Show the composed frame.
    fn present(&mut self);
}

/// Startup failures of the platform layer.
#[derive(Debug)]
pub enum PlatformError {
    /// A file could not be loaded by the backend.
    AssetLoad {
        kind: &'static str,
        path: String,
        reason: String,
    },
    /// The title could not be rasterized into a texture.
    TextRender(String),
}

impl std::fmt::Display for PlatformError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AssetLoad { kind, path, reason } => {
                write!(f, "Failed to load {} '{}': {}", kind, path, reason)
            }
            Self::TextRender(e) => write!(f, "Failed to render text: {}", e),
        }
    }
}

impl std::error::Error for PlatformError {}
