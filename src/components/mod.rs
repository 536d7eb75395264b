//! ECS components for entities.
//!
//! Components define the data attached to the three scene entities: where
//! they are, how they move and what they draw.
//!
//! Submodules overview:
//! - [`bouncing`] – free motion that bounces off the arena edges
//! - [`inputcontrolled`] – keyboard-driven motion with a fixed step
//! - [`movingrect`] – integer rectangle with a per-frame velocity
//! - [`sprite`] – texture key the entity is drawn with
//! - [`zindex`] – rendering order hint for 2D drawing

pub mod bouncing;
pub mod inputcontrolled;
pub mod movingrect;
pub mod sprite;
pub mod zindex;
