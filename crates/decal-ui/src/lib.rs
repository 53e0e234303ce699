//! Scene graph and the emoji sticker component for Decal
//!
//! The component model is deliberately small: a [`SceneNode`] tree is
//! rebuilt from the current shared values once per frame (pull-based), and
//! the [`Stage`] wires the frame loop, the resolver, and pointer routing
//! together for hosts that drive the loop themselves.

mod image;
mod scene;
mod stage;
mod sticker;

pub use image::{ImageSource, ResizeMode};
pub use scene::{NodeContent, ResolvedNode, ResolvedScene, SceneNode};
pub use stage::Stage;
pub use sticker::{EmojiSticker, StickerSpec, STICKER_ANCHOR_SHIFT_Y};

pub use decal_graphics::{GraphicsLayer, Point, Rect, Size, Vector};
