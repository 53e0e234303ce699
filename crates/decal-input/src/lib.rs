//! Pointer event model and gesture recognizers for Decal
//!
//! Recognizers are explicit finite-state machines: each one consumes raw
//! pointer events and emits gesture-level events (tap completed, pan
//! start/active/end). There is no locking between recognizers — conflicts
//! are resolved by delivery order and event consumption in the
//! [`PointerRouter`].

pub mod constants;
mod pan;
mod router;
mod tap;
mod types;

pub use pan::{PanEvent, PanGestureRecognizer, PanPhase};
pub use router::{GestureRegion, PointerHandler, PointerRouter};
pub use tap::TapGestureRecognizer;
pub use types::{PointerEvent, PointerEventKind, PointerId};

pub mod prelude {
    pub use crate::pan::{PanEvent, PanGestureRecognizer, PanPhase};
    pub use crate::tap::TapGestureRecognizer;
    pub use crate::types::{PointerEvent, PointerEventKind, PointerId};
}
