//! Per-node transform layer applied when resolving the scene graph.

use crate::Rect;

/// Transform list a scene node applies to its content: a translation, a
/// uniform scale about the content origin, and an alpha. Matches the order
/// the resolver applies them in: translate, then scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphicsLayer {
    pub alpha: f32,
    pub scale: f32,
    pub translation_x: f32,
    pub translation_y: f32,
}

impl Default for GraphicsLayer {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            scale: 1.0,
            translation_x: 0.0,
            translation_y: 0.0,
        }
    }
}

impl GraphicsLayer {
    pub fn translated(dx: f32, dy: f32) -> Self {
        Self {
            translation_x: dx,
            translation_y: dy,
            ..Self::default()
        }
    }

    /// Apply this layer to a rect expressed in the parent's coordinates.
    pub fn apply_to(&self, rect: Rect) -> Rect {
        let translated = rect.translate(self.translation_x, self.translation_y);
        Rect {
            width: translated.width * self.scale,
            height: translated.height * self.scale,
            ..translated
        }
    }
}
