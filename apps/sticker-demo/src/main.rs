//! Scripted sticker session without a window: mounts a sticker, replays a
//! double-tap and two drags, and logs the resolved geometry after every
//! interaction. Run with `RUST_LOG=trace` to watch the recognizers.

use anyhow::{Context, Result};
use decal_graphics::{Point, Vector};
use decal_input::{PointerEvent, PointerEventKind};
use decal_ui::{Stage, StickerSpec};

const FRAME_NANOS: u64 = 16_666_667;

struct Session {
    stage: Stage,
    frame_time: u64,
}

impl Session {
    fn new(base_size: f32) -> Self {
        let stage = Stage::new(
            StickerSpec::new(base_size, "assets/emoji-smile.png"),
            Point::new(100.0, 400.0),
        );
        let mut session = Self {
            stage,
            frame_time: 0,
        };
        session.pump();
        session
    }

    fn pump(&mut self) {
        self.frame_time += FRAME_NANOS;
        self.stage.frame(self.frame_time);
    }

    fn settle(&mut self) {
        while self.stage.needs_frame() || self.stage.sticker().is_animating() {
            self.pump();
        }
    }

    fn center(&mut self) -> Point {
        self.frame_time += FRAME_NANOS;
        let scene = self.stage.frame(self.frame_time);
        scene.nodes[0].rect.center()
    }

    fn double_tap(&mut self) {
        let center = self.center();
        for _ in 0..2 {
            self.stage
                .dispatch(PointerEvent::new(PointerEventKind::Down, center));
            self.stage
                .dispatch(PointerEvent::new(PointerEventKind::Up, center));
            self.pump();
        }
    }

    fn drag(&mut self, by: Vector) {
        let from = self.center();
        self.stage
            .dispatch(PointerEvent::new(PointerEventKind::Down, from));
        let steps = 10;
        for i in 1..=steps {
            let t = i as f32 / steps as f32;
            self.stage.dispatch(PointerEvent::new(
                PointerEventKind::Move,
                Point::new(from.x + by.dx * t, from.y + by.dy * t),
            ));
            self.pump();
        }
        self.stage
            .dispatch(PointerEvent::new(PointerEventKind::Up, from + by));
        self.pump();
    }

    fn report(&mut self, label: &str) {
        self.frame_time += FRAME_NANOS;
        let scene = self.stage.frame(self.frame_time);
        let rect = scene.nodes[0].rect;
        log::info!(
            "{label}: rect ({:.1}, {:.1}) {:.1}x{:.1}, offset {:?}",
            rect.x,
            rect.y,
            rect.width,
            rect.height,
            self.stage.sticker().offset()
        );
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let base_size = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse::<f32>()
            .with_context(|| format!("invalid base size: {arg}"))?,
        None => 100.0,
    };

    let mut session = Session::new(base_size);
    session.report("mounted");

    session.double_tap();
    session.settle();
    session.report("after double-tap");

    session.drag(Vector::new(30.0, -10.0));
    session.report("after drag (30, -10)");

    session.drag(Vector::new(5.0, 5.0));
    session.report("after drag (5, 5)");

    Ok(())
}
