//! Frame-callback registry driving the pull-based render loop.
//!
//! Platform integrations (or the test harness) call
//! [`RuntimeHandle::drain_frame_callbacks`] once per frame with the frame
//! timestamp. Callbacks registered during a drain run on the *next* frame,
//! which is what lets an animation re-arm itself until it settles.

use smallvec::SmallVec;
use std::cell::RefCell;
use std::rc::Rc;

pub type FrameCallbackId = u64;

type FrameCallback = Box<dyn FnMut(u64)>;

#[derive(Default)]
struct RuntimeInner {
    next_callback_id: FrameCallbackId,
    callbacks: Vec<(FrameCallbackId, FrameCallback)>,
    /// Ids cancelled while a drain batch is in flight.
    cancelled: SmallVec<[FrameCallbackId; 4]>,
    frame_requested: bool,
}

/// Owner of the runtime state. Hand out [`RuntimeHandle`]s with
/// [`Runtime::handle`]; the runtime itself usually lives in the app shell
/// or test harness that drives frames.
#[derive(Default)]
pub struct Runtime {
    inner: Rc<RefCell<RuntimeInner>>,
}

impl Runtime {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Cheaply cloneable handle to the runtime. All shared values and frame
/// registrations hold one of these.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Rc<RefCell<RuntimeInner>>,
}

impl RuntimeHandle {
    /// Register a callback for the next frame. Returns the id used to
    /// cancel it.
    pub fn register_frame_callback(&self, callback: impl FnMut(u64) + 'static) -> FrameCallbackId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_callback_id;
        inner.next_callback_id += 1;
        inner.callbacks.push((id, Box::new(callback)));
        inner.frame_requested = true;
        id
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        let mut inner = self.inner.borrow_mut();
        if let Some(index) = inner.callbacks.iter().position(|(cb_id, _)| *cb_id == id) {
            inner.callbacks.remove(index);
        } else {
            // The callback may belong to the batch currently draining.
            inner.cancelled.push(id);
        }
    }

    /// Mark that state changed and a render pass is wanted. Idempotent.
    pub fn request_frame(&self) {
        self.inner.borrow_mut().frame_requested = true;
    }

    /// Whether a frame has been requested (by a state write or a pending
    /// callback) since the last [`take_frame_request`](Self::take_frame_request).
    pub fn needs_frame(&self) -> bool {
        let inner = self.inner.borrow();
        inner.frame_requested || !inner.callbacks.is_empty()
    }

    /// Consume the frame-request flag. Pending callbacks keep
    /// [`needs_frame`](Self::needs_frame) true regardless.
    pub fn take_frame_request(&self) -> bool {
        let mut inner = self.inner.borrow_mut();
        std::mem::take(&mut inner.frame_requested)
    }

    /// Run every callback registered before this call, passing
    /// `frame_time_nanos`. Callbacks registered while draining are deferred
    /// to the next frame.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        let batch = {
            let mut inner = self.inner.borrow_mut();
            inner.cancelled.clear();
            std::mem::take(&mut inner.callbacks)
        };
        log::trace!("frame {}ns: draining {} callback(s)", frame_time_nanos, batch.len());
        for (id, mut callback) in batch {
            let skip = self.inner.borrow().cancelled.contains(&id);
            if !skip {
                callback(frame_time_nanos);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn callbacks_run_once_per_registration() {
        let runtime = Runtime::new();
        let handle = runtime.handle();
        let hits = Rc::new(Cell::new(0));

        let hits_cb = Rc::clone(&hits);
        handle.register_frame_callback(move |_| hits_cb.set(hits_cb.get() + 1));

        handle.drain_frame_callbacks(16_000_000);
        handle.drain_frame_callbacks(32_000_000);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn registration_during_drain_defers_to_next_frame() {
        let runtime = Runtime::new();
        let handle = runtime.handle();
        let times = Rc::new(RefCell::new(Vec::new()));

        let outer_handle = handle.clone();
        let outer_times = Rc::clone(&times);
        handle.register_frame_callback(move |t| {
            outer_times.borrow_mut().push(t);
            let inner_times = Rc::clone(&outer_times);
            outer_handle.register_frame_callback(move |t| inner_times.borrow_mut().push(t));
        });

        handle.drain_frame_callbacks(1);
        assert_eq!(*times.borrow(), vec![1]);
        handle.drain_frame_callbacks(2);
        assert_eq!(*times.borrow(), vec![1, 2]);
    }

    #[test]
    fn cancelled_callbacks_do_not_run() {
        let runtime = Runtime::new();
        let handle = runtime.handle();
        let hits = Rc::new(Cell::new(0));

        let hits_cb = Rc::clone(&hits);
        let id = handle.register_frame_callback(move |_| hits_cb.set(hits_cb.get() + 1));
        handle.cancel_frame_callback(id);

        handle.drain_frame_callbacks(16_000_000);
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn needs_frame_tracks_requests_and_pending_callbacks() {
        let runtime = Runtime::new();
        let handle = runtime.handle();
        assert!(!handle.needs_frame());

        handle.request_frame();
        assert!(handle.needs_frame());
        assert!(handle.take_frame_request());
        assert!(!handle.needs_frame());

        handle.register_frame_callback(|_| {});
        handle.take_frame_request();
        assert!(handle.needs_frame(), "pending callbacks keep the loop alive");
    }
}
