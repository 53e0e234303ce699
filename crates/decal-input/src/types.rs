use decal_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;
use web_time::Instant;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

/// Pointer event with consumption tracking for gesture disambiguation.
///
/// A handler that claims an event calls [`consume`](PointerEvent::consume);
/// later handlers check [`is_consumed`](PointerEvent::is_consumed) before
/// acting. The flag is shared across clones so consumption survives
/// re-delivery.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
    pub timestamp: Instant,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            timestamp: Instant::now(),
            consumed: Rc::new(Cell::new(false)),
        }
    }

    /// Override the event timestamp. Test harnesses use this to make
    /// multi-tap timing deterministic.
    pub fn with_timestamp(mut self, timestamp: Instant) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Mark this event as consumed, preventing later handlers from acting
    /// on it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}
