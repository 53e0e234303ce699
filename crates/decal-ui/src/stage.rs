//! Host-side wiring: one sticker, one runtime, one pointer router.
//!
//! A `Stage` is what a platform shell (or the test harness) drives: it
//! owns the frame loop plumbing and republishes the sticker's gesture
//! regions after every resolved frame, so hit-testing always matches what
//! is on screen.

use crate::scene::ResolvedScene;
use crate::sticker::{EmojiSticker, StickerSpec};
use decal_core::{Runtime, RuntimeHandle};
use decal_graphics::Point;
use decal_input::{PointerEvent, PointerRouter};

pub struct Stage {
    runtime: Runtime,
    router: PointerRouter,
    sticker: EmojiSticker,
    origin: Point,
}

impl Stage {
    /// Mount a sticker at `origin` (the anchor position before the
    /// component's own vertical shift).
    pub fn new(spec: StickerSpec, origin: Point) -> Self {
        let runtime = Runtime::new();
        let sticker = EmojiSticker::new(spec, runtime.handle());
        Self {
            runtime,
            router: PointerRouter::new(),
            sticker,
            origin,
        }
    }

    pub fn runtime_handle(&self) -> RuntimeHandle {
        self.runtime.handle()
    }

    pub fn sticker(&self) -> &EmojiSticker {
        &self.sticker
    }

    /// Run one frame at `frame_time_nanos`: step animations, resolve the
    /// scene from the current state, republish hit regions.
    pub fn frame(&self, frame_time_nanos: u64) -> ResolvedScene {
        let handle = self.runtime.handle();
        handle.drain_frame_callbacks(frame_time_nanos);
        handle.take_frame_request();
        let scene = self.sticker.scene().resolve(self.origin);
        self.router.set_regions(scene.regions.clone());
        scene
    }

    /// Feed a raw pointer event through hit-testing and the recognizers.
    pub fn dispatch(&self, event: PointerEvent) {
        self.router.dispatch(event);
    }

    /// Whether state changed (or animations are pending) since the last
    /// frame.
    pub fn needs_frame(&self) -> bool {
        self.runtime.handle().needs_frame()
    }
}
