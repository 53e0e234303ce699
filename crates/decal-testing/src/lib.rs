//! Testing utilities and harness for Decal
//!
//! The [`StickerRobot`] drives a mounted sticker the way a platform shell
//! would: synthesized pointer sequences in, explicit frame timestamps
//! forward, resolved geometry out.

mod robot;

pub use robot::StickerRobot;
