//! The emoji sticker overlay component.
//!
//! Two pieces of transient visual state, each with exactly one writer
//! path: the displayed size (written only by the double-tap handler, via a
//! spring) and the translation offset (written only by the pan handler,
//! tracking the pointer directly). They meet only at render time, when
//! [`EmojiSticker::scene`] composes the positioning wrapper around the
//! sized image.

use crate::image::{ImageSource, ResizeMode};
use crate::scene::SceneNode;
use decal_animation::{Animatable, SpringSpec};
use decal_core::{RuntimeHandle, SharedValue};
use decal_graphics::{GraphicsLayer, Size, Vector};
use decal_input::{
    PanGestureRecognizer, PanPhase, PointerEvent, PointerHandler, TapGestureRecognizer,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Fixed vertical shift of the positioning wrapper, lifting the sticker
/// from its mount point up over the photo.
pub const STICKER_ANCHOR_SHIFT_Y: f32 = -350.0;

/// Construction inputs for a sticker. `base_size` is the square footprint
/// in logical pixels; it is not validated and a non-positive value renders
/// degenerately.
#[derive(Clone, Debug, PartialEq)]
pub struct StickerSpec {
    pub base_size: f32,
    pub source: ImageSource,
    pub draggable: bool,
}

impl StickerSpec {
    pub fn new(base_size: f32, source: impl Into<ImageSource>) -> Self {
        Self {
            base_size,
            source: source.into(),
            draggable: true,
        }
    }

    /// The scale-only variant of the component: the double-tap behavior is
    /// unchanged, but no pan region is published, so drags leave the
    /// offset untouched.
    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }
}

pub struct EmojiSticker {
    spec: StickerSpec,
    size: Animatable<f32>,
    offset: SharedValue<Vector>,
    tap_handler: PointerHandler,
    pan_handler: PointerHandler,
}

impl EmojiSticker {
    pub fn new(spec: StickerSpec, runtime: RuntimeHandle) -> Self {
        let size = Animatable::new(spec.base_size, runtime.clone());
        let offset = SharedValue::with_runtime(Vector::ZERO, runtime);

        let tap_handler = Self::make_tap_handler(&size, spec.base_size);
        let pan_handler = Self::make_pan_handler(&offset);

        Self {
            spec,
            size,
            offset,
            tap_handler,
            pan_handler,
        }
    }

    /// Double tap doubles the displayed size with spring easing, guarded
    /// against the doubled value: once at `base × 2` further double-taps
    /// are no-ops. The guard intentionally checks the doubled value rather
    /// than the base, so there is no path back down.
    fn make_tap_handler(size: &Animatable<f32>, base_size: f32) -> PointerHandler {
        let recognizer = RefCell::new(TapGestureRecognizer::new(2));
        let size = size.clone();
        Rc::new(move |event: &PointerEvent| {
            if recognizer.borrow_mut().handle_event(event) {
                let current = size.target();
                if current != base_size * 2.0 {
                    log::debug!("sticker size {} -> {}", current, current * 2.0);
                    size.animate_to(current * 2.0, SpringSpec::default());
                }
            }
        })
    }

    /// Pan start captures the offset into the drag context; every active
    /// event rebases the offset from that snapshot plus the cumulative
    /// translation. On end the offset simply stays where the last event
    /// put it.
    fn make_pan_handler(offset: &SharedValue<Vector>) -> PointerHandler {
        let recognizer = RefCell::new(PanGestureRecognizer::new());
        let drag_context: Cell<Option<Vector>> = Cell::new(None);
        let offset = offset.clone();
        Rc::new(move |event: &PointerEvent| {
            let Some(pan) = recognizer.borrow_mut().handle_event(event) else {
                return;
            };
            match pan.phase {
                PanPhase::Start => {
                    let snapshot = offset.get();
                    drag_context.set(Some(snapshot));
                    offset.set(snapshot + pan.translation);
                }
                PanPhase::Active => {
                    if let Some(snapshot) = drag_context.get() {
                        offset.set(snapshot + pan.translation);
                    }
                }
                PanPhase::End => {
                    if let Some(snapshot) = drag_context.take() {
                        offset.set(snapshot + pan.translation);
                    }
                }
            }
        })
    }

    /// Build this frame's scene: a positioning wrapper (translation offset
    /// plus the fixed anchor shift, pan region) around the image leaf
    /// (animated square size, tap region).
    pub fn scene(&self) -> SceneNode {
        let offset = self.offset.get();
        let displayed = self.size.value().get();

        let image = SceneNode::image(
            self.spec.source.clone(),
            ResizeMode::Contain,
            Size::square(displayed),
        )
        .with_handler(Rc::clone(&self.tap_handler));

        let wrapper = SceneNode::group(
            GraphicsLayer::translated(offset.dx, STICKER_ANCHOR_SHIFT_Y + offset.dy),
            vec![image],
        );
        if self.spec.draggable {
            wrapper.with_handler(Rc::clone(&self.pan_handler))
        } else {
            wrapper
        }
    }

    pub fn spec(&self) -> &StickerSpec {
        &self.spec
    }

    /// Current animated size (mid-flight values included).
    pub fn displayed_size(&self) -> f32 {
        self.size.value().get()
    }

    /// The size the spring is heading toward.
    pub fn size_target(&self) -> f32 {
        self.size.target()
    }

    pub fn offset(&self) -> Vector {
        self.offset.get()
    }

    pub fn is_animating(&self) -> bool {
        self.size.is_animating()
    }
}

#[cfg(test)]
#[path = "tests/sticker_tests.rs"]
mod tests;
