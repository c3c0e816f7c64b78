//! Data model for the pi-blaster rgb mock.
//!
//! This crate holds everything that does not touch the filesystem or the
//! screen: channel identity (which GPIO pin drives which color), the level
//! state owned by the UI, the line-protocol decoder, and the color/contrast
//! math used when rendering.

pub mod channel;
pub mod color;
pub mod update;

pub use channel::{Channel, ChannelLevels};
pub use update::{Update, decode_line, level_from_fraction};
