//! Multi-tap recognizer.
//!
//! Counts quick press/release pairs and fires once the configured count is
//! reached. A release arriving after [`MULTI_TAP_WINDOW_MS`] since the
//! previous one starts a new sequence; movement past [`TAP_SLOP`] during a
//! press cancels the press.

use crate::constants::{MULTI_TAP_WINDOW_MS, TAP_SLOP};
use crate::types::{PointerEvent, PointerEventKind};
use decal_graphics::Point;
use web_time::Instant;

/// The press currently being tracked, alive between Down and Up.
#[derive(Clone, Copy, Debug)]
struct PressRecord {
    origin: Point,
    cancelled: bool,
}

pub struct TapGestureRecognizer {
    required_taps: u32,
    taps_so_far: u32,
    last_release: Option<Instant>,
    press: Option<PressRecord>,
}

impl TapGestureRecognizer {
    /// A recognizer firing after `required_taps` quick taps. The sticker's
    /// scale toggle uses two.
    pub fn new(required_taps: u32) -> Self {
        Self {
            required_taps: required_taps.max(1),
            taps_so_far: 0,
            last_release: None,
            press: None,
        }
    }

    pub fn reset(&mut self) {
        self.taps_so_far = 0;
        self.last_release = None;
        self.press = None;
    }

    /// Feed one pointer event. Returns `true` when the multi-tap completed
    /// on this event; the completing Up is consumed.
    pub fn handle_event(&mut self, event: &PointerEvent) -> bool {
        match event.kind {
            PointerEventKind::Down => {
                if event.is_consumed() {
                    self.reset();
                    return false;
                }
                let window_expired = self.last_release.is_some_and(|last| {
                    event.timestamp.duration_since(last).as_millis() >= MULTI_TAP_WINDOW_MS
                });
                if window_expired {
                    self.taps_so_far = 0;
                }
                self.press = Some(PressRecord {
                    origin: event.position,
                    cancelled: false,
                });
                false
            }
            PointerEventKind::Move => {
                if let Some(press) = self.press.as_mut() {
                    if event.is_consumed() || press.origin.distance_to(event.position) > TAP_SLOP
                    {
                        press.cancelled = true;
                        self.taps_so_far = 0;
                    }
                }
                false
            }
            PointerEventKind::Up => {
                let Some(press) = self.press.take() else {
                    return false;
                };
                if press.cancelled || event.is_consumed() {
                    self.taps_so_far = 0;
                    return false;
                }
                self.taps_so_far += 1;
                self.last_release = Some(event.timestamp);
                if self.taps_so_far >= self.required_taps {
                    log::trace!("tap recognizer fired after {} tap(s)", self.taps_so_far);
                    self.taps_so_far = 0;
                    event.consume();
                    true
                } else {
                    false
                }
            }
            PointerEventKind::Cancel => {
                self.reset();
                false
            }
        }
    }
}
