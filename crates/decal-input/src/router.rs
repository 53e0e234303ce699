//! Pointer routing over nested gesture regions.
//!
//! The scene resolver republishes regions (rect + handler) each frame,
//! outermost first. A Down event is delivered to every region containing
//! it, innermost first, and those handlers capture the pointer: Move, Up
//! and Cancel go to the captured handlers even after the pointer leaves
//! the original rects, which is what keeps a drag alive outside the
//! sticker's footprint. Handlers share one event copy per delivery, so
//! consumption by an inner handler is visible to outer ones.

use crate::types::{PointerEvent, PointerEventKind};
use decal_graphics::Rect;
use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

pub type PointerHandler = Rc<dyn Fn(&PointerEvent)>;

/// One hit-testable gesture surface.
#[derive(Clone)]
pub struct GestureRegion {
    pub rect: Rect,
    pub handler: PointerHandler,
}

impl GestureRegion {
    pub fn new(rect: Rect, handler: PointerHandler) -> Self {
        Self { rect, handler }
    }
}

#[derive(Default)]
pub struct PointerRouter {
    /// Current regions, outermost first.
    regions: RefCell<Vec<GestureRegion>>,
    /// Handlers that accepted the most recent Down, innermost first.
    capture: RefCell<SmallVec<[PointerHandler; 2]>>,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the hit regions. Called by the render pass after each frame
    /// is resolved; an in-flight gesture keeps its captured handlers.
    pub fn set_regions(&self, regions: Vec<GestureRegion>) {
        *self.regions.borrow_mut() = regions;
    }

    pub fn dispatch(&self, event: PointerEvent) {
        match event.kind {
            PointerEventKind::Down => {
                let targets: SmallVec<[PointerHandler; 2]> = self
                    .regions
                    .borrow()
                    .iter()
                    .rev()
                    .filter(|region| region.rect.contains(event.position.x, event.position.y))
                    .map(|region| Rc::clone(&region.handler))
                    .collect();
                log::trace!(
                    "pointer down at {:?} captured by {} region(s)",
                    event.position,
                    targets.len()
                );
                for handler in &targets {
                    handler(&event);
                }
                *self.capture.borrow_mut() = targets;
            }
            PointerEventKind::Move => {
                let targets = self.capture.borrow().clone();
                for handler in &targets {
                    handler(&event);
                }
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                let targets = self.capture.take();
                for handler in &targets {
                    handler(&event);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use decal_graphics::{Point, Size};
    use std::cell::RefCell;

    fn recording_handler(log: &Rc<RefCell<Vec<&'static str>>>, name: &'static str) -> PointerHandler {
        let log = Rc::clone(log);
        Rc::new(move |_event| log.borrow_mut().push(name))
    }

    fn down_at(x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(PointerEventKind::Down, Point::new(x, y))
    }

    #[test]
    fn delivery_is_innermost_first() {
        let router = PointerRouter::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let rect = Rect::from_origin_size(Point::ZERO, Size::square(100.0));
        router.set_regions(vec![
            GestureRegion::new(rect, recording_handler(&log, "outer")),
            GestureRegion::new(rect, recording_handler(&log, "inner")),
        ]);

        router.dispatch(down_at(50.0, 50.0));
        assert_eq!(*log.borrow(), vec!["inner", "outer"]);
    }

    #[test]
    fn captured_handlers_receive_moves_outside_their_rect() {
        let router = PointerRouter::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let rect = Rect::from_origin_size(Point::ZERO, Size::square(100.0));
        router.set_regions(vec![GestureRegion::new(rect, recording_handler(&log, "pan"))]);

        router.dispatch(down_at(50.0, 50.0));
        router.dispatch(PointerEvent::new(
            PointerEventKind::Move,
            Point::new(500.0, 500.0),
        ));
        assert_eq!(*log.borrow(), vec!["pan", "pan"]);
    }

    #[test]
    fn up_releases_the_capture() {
        let router = PointerRouter::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let rect = Rect::from_origin_size(Point::ZERO, Size::square(100.0));
        router.set_regions(vec![GestureRegion::new(rect, recording_handler(&log, "pan"))]);

        router.dispatch(down_at(50.0, 50.0));
        router.dispatch(PointerEvent::new(PointerEventKind::Up, Point::new(50.0, 50.0)));
        router.dispatch(PointerEvent::new(
            PointerEventKind::Move,
            Point::new(60.0, 60.0),
        ));
        assert_eq!(log.borrow().len(), 2, "move after release goes nowhere");
    }

    #[test]
    fn down_outside_every_region_captures_nothing() {
        let router = PointerRouter::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        let rect = Rect::from_origin_size(Point::ZERO, Size::square(100.0));
        router.set_regions(vec![GestureRegion::new(rect, recording_handler(&log, "pan"))]);

        router.dispatch(down_at(500.0, 500.0));
        router.dispatch(PointerEvent::new(
            PointerEventKind::Move,
            Point::new(50.0, 50.0),
        ));
        assert!(log.borrow().is_empty());
    }
}
