//! Event and message types.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`input`] – actions produced by discrete key transitions
pub mod audio;
pub mod input;
