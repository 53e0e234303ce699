//! Spring animation system for Decal
//!
//! Animated values are stepped incrementally on each frame callback until
//! they converge within the spring's rest thresholds; nothing here blocks
//! or owns a thread.

mod animation;

pub use animation::{Animatable, Lerp, SpringScalar, SpringSpec};
