//! Pan (drag) recognizer.
//!
//! Activation is eager: the first Move after a press starts the drag, so
//! even a tiny reposition is honored. Translation is always reported
//! relative to the press, which lets a consumer do
//! `offset = snapshot + translation` without accumulating per-event
//! deltas. The state record is explicit and carries the press position
//! between phase calls.

use crate::types::{PointerEvent, PointerEventKind};
use decal_graphics::{Point, Vector};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PanPhase {
    /// First movement after the press; consumers capture their snapshot
    /// here. The event already carries that movement's translation.
    Start,
    Active,
    End,
}

/// Gesture-level event emitted by the recognizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanEvent {
    pub phase: PanPhase,
    /// Cumulative translation since the initiating press.
    pub translation: Vector,
}

#[derive(Clone, Copy, Debug)]
enum PanState {
    Idle,
    /// Pointer is down but has not moved yet.
    Pressed { press: Point },
    /// Drag in progress; `press` is the position captured at Down.
    Active { press: Point },
}

pub struct PanGestureRecognizer {
    state: PanState,
}

impl Default for PanGestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PanGestureRecognizer {
    pub fn new() -> Self {
        Self {
            state: PanState::Idle,
        }
    }

    pub fn reset(&mut self) {
        self.state = PanState::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, PanState::Active { .. })
    }

    /// Feed one pointer event. Move events are consumed once the drag is
    /// active so handlers outside the sticker never see them.
    pub fn handle_event(&mut self, event: &PointerEvent) -> Option<PanEvent> {
        match (self.state, event.kind) {
            (PanState::Idle, PointerEventKind::Down) => {
                if !event.is_consumed() {
                    self.state = PanState::Pressed {
                        press: event.position,
                    };
                }
                None
            }
            (PanState::Pressed { press }, PointerEventKind::Move) => {
                log::trace!("pan activated at {:?}", event.position);
                self.state = PanState::Active { press };
                event.consume();
                Some(PanEvent {
                    phase: PanPhase::Start,
                    translation: event.position - press,
                })
            }
            (PanState::Active { press }, PointerEventKind::Move) => {
                event.consume();
                Some(PanEvent {
                    phase: PanPhase::Active,
                    translation: event.position - press,
                })
            }
            (PanState::Pressed { .. }, PointerEventKind::Up) => {
                // A press that never moved is a tap, not a pan.
                self.state = PanState::Idle;
                None
            }
            (PanState::Active { press }, PointerEventKind::Up | PointerEventKind::Cancel) => {
                self.state = PanState::Idle;
                Some(PanEvent {
                    phase: PanPhase::End,
                    translation: event.position - press,
                })
            }
            (PanState::Pressed { .. }, PointerEventKind::Cancel) => {
                self.state = PanState::Idle;
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: PointerEventKind, x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(kind, Point::new(x, y))
    }

    #[test]
    fn pan_reports_translation_from_the_press() {
        let mut recognizer = PanGestureRecognizer::new();
        assert!(recognizer
            .handle_event(&event(PointerEventKind::Down, 50.0, 50.0))
            .is_none());

        let start = recognizer
            .handle_event(&event(PointerEventKind::Move, 70.0, 45.0))
            .expect("first move starts the drag");
        assert_eq!(start.phase, PanPhase::Start);
        assert_eq!(start.translation, Vector::new(20.0, -5.0));

        let active = recognizer
            .handle_event(&event(PointerEventKind::Move, 80.0, 40.0))
            .expect("drag active");
        assert_eq!(active.phase, PanPhase::Active);
        assert_eq!(active.translation, Vector::new(30.0, -10.0));

        let end = recognizer
            .handle_event(&event(PointerEventKind::Up, 80.0, 40.0))
            .expect("drag ended");
        assert_eq!(end.phase, PanPhase::End);
        assert_eq!(end.translation, Vector::new(30.0, -10.0));
        assert!(!recognizer.is_active());
    }

    #[test]
    fn tiny_drags_still_activate() {
        let mut recognizer = PanGestureRecognizer::new();
        recognizer.handle_event(&event(PointerEventKind::Down, 50.0, 50.0));
        let start = recognizer
            .handle_event(&event(PointerEventKind::Move, 55.0, 55.0))
            .expect("small movement activates");
        assert_eq!(start.translation, Vector::new(5.0, 5.0));
    }

    #[test]
    fn press_and_release_without_movement_is_not_a_pan() {
        let mut recognizer = PanGestureRecognizer::new();
        recognizer.handle_event(&event(PointerEventKind::Down, 50.0, 50.0));
        assert!(recognizer
            .handle_event(&event(PointerEventKind::Up, 50.0, 50.0))
            .is_none());
    }

    #[test]
    fn active_moves_are_consumed() {
        let mut recognizer = PanGestureRecognizer::new();
        recognizer.handle_event(&event(PointerEventKind::Down, 50.0, 50.0));
        let movement = event(PointerEventKind::Move, 80.0, 50.0);
        recognizer.handle_event(&movement);
        assert!(movement.is_consumed());
    }

    #[test]
    fn consumed_down_is_ignored() {
        let mut recognizer = PanGestureRecognizer::new();
        let down = event(PointerEventKind::Down, 50.0, 50.0);
        down.consume();
        recognizer.handle_event(&down);
        assert!(recognizer
            .handle_event(&event(PointerEventKind::Move, 100.0, 100.0))
            .is_none());
    }

    #[test]
    fn cancel_ends_an_active_drag_in_place() {
        let mut recognizer = PanGestureRecognizer::new();
        recognizer.handle_event(&event(PointerEventKind::Down, 50.0, 50.0));
        recognizer.handle_event(&event(PointerEventKind::Move, 80.0, 50.0));
        let end = recognizer
            .handle_event(&event(PointerEventKind::Cancel, 80.0, 50.0))
            .expect("cancel ends the drag");
        assert_eq!(end.phase, PanPhase::End);
        assert_eq!(end.translation, Vector::new(30.0, 0.0));
    }
}
