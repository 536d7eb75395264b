//! ECS resources made available to systems.
//!
//! Overview
//! - `arena` – bounds every moving rectangle lives in
//! - `audio` – bridge and channels for the background audio thread
//! - `colortimer` – periodic thread repainting the background color
//! - `drawcolor` – background color shared between the loop and the timer
//! - `gameconfig` – INI-backed settings
//! - `input` – per-frame snapshot of held keys and queued transitions
//! - `loopstate` – running / terminated flag
//! - `playback` – what the loop believes the music is doing
pub mod arena;
pub mod audio;
pub mod colortimer;
pub mod drawcolor;
pub mod gameconfig;
pub mod input;
pub mod loopstate;
pub mod playback;
