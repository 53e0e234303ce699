//! Robot-style driver for sticker interaction tests.
//!
//! The robot owns a [`Stage`] and a frame counter. Interactions mirror
//! what a user does — taps and drags land on the sticker's current
//! on-screen rect, moves are stepped to simulate a smooth drag, and a
//! frame is pumped after each input so the next hit-test sees fresh
//! geometry.

use decal_graphics::{Point, Rect, Vector};
use decal_input::{PointerEvent, PointerEventKind};
use decal_ui::{ResolvedScene, Stage, StickerSpec};
use std::cell::Cell;

const FRAME_NANOS: u64 = 16_666_667; // ~60 FPS

pub struct StickerRobot {
    stage: Stage,
    frame_time: Cell<u64>,
}

impl StickerRobot {
    /// Mount a sticker at `origin` and render the first frame so gesture
    /// regions exist before any input.
    pub fn mount(spec: StickerSpec, origin: Point) -> Self {
        let robot = Self {
            stage: Stage::new(spec, origin),
            frame_time: Cell::new(0),
        };
        robot.pump_frame();
        robot
    }

    /// Advance one frame (~16.7ms) and re-resolve the scene.
    pub fn pump_frame(&self) -> ResolvedScene {
        let now = self.frame_time.get() + FRAME_NANOS;
        self.frame_time.set(now);
        self.stage.frame(now)
    }

    /// Pump frames until animations settle and no state write is pending.
    pub fn settle(&self) {
        for _ in 0..600 {
            if !self.stage.needs_frame() && !self.stage.sticker().is_animating() {
                return;
            }
            self.pump_frame();
        }
        panic!("stage did not settle within the frame budget");
    }

    /// The sticker's current on-screen rect.
    pub fn sticker_rect(&self) -> Rect {
        let scene = self.pump_frame();
        scene.nodes.first().expect("sticker is mounted").rect
    }

    pub fn sticker_center(&self) -> Point {
        self.sticker_rect().center()
    }

    /// Press and release at a position without moving.
    pub fn tap_at(&self, position: Point) {
        self.dispatch(PointerEventKind::Down, position);
        self.dispatch(PointerEventKind::Up, position);
        self.pump_frame();
    }

    /// Two quick taps on the sticker itself.
    pub fn double_tap(&self) {
        let center = self.sticker_center();
        self.tap_at(center);
        self.tap_at(center);
    }

    /// Drag from one point to another in smooth steps.
    pub fn drag(&self, from: Point, to: Point) {
        self.dispatch(PointerEventKind::Down, from);
        let steps = 10;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.dispatch(
                PointerEventKind::Move,
                Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t),
            );
            self.pump_frame();
        }
        self.dispatch(PointerEventKind::Up, to);
        self.pump_frame();
    }

    /// Drag the sticker itself by a displacement.
    pub fn drag_sticker_by(&self, by: Vector) {
        let from = self.sticker_center();
        self.drag(from, from + by);
    }

    /// Interrupt an in-flight gesture, as a platform would on focus loss.
    pub fn cancel_pointer(&self, position: Point) {
        self.dispatch(PointerEventKind::Cancel, position);
        self.pump_frame();
    }

    pub fn displayed_size(&self) -> f32 {
        self.stage.sticker().displayed_size()
    }

    pub fn size_target(&self) -> f32 {
        self.stage.sticker().size_target()
    }

    pub fn offset(&self) -> Vector {
        self.stage.sticker().offset()
    }

    pub fn is_animating(&self) -> bool {
        self.stage.sticker().is_animating()
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    fn dispatch(&self, kind: PointerEventKind, position: Point) {
        self.stage.dispatch(PointerEvent::new(kind, position));
    }
}
