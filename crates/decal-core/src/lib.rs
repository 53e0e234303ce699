//! Runtime services for Decal.
//!
//! Everything here is single-threaded by construction: gesture callbacks
//! and frame callbacks run on the thread that drives the loop, and each
//! shared value has exactly one writer path. There is no reactive observer
//! graph — writes request a frame, and the next render pass pulls whatever
//! the cells hold at that point.

mod frame_clock;
mod runtime;
mod state;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use runtime::{FrameCallbackId, Runtime, RuntimeHandle};
pub use state::{SharedValue, Value};
