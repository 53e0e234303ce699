//! Shared gesture thresholds for consistent touch/pointer handling.
//!
//! Values are in logical pixels / milliseconds and match common platform
//! conventions (Android's ViewConfiguration touch slop is ~8dp).

/// Movement slop for taps, in logical pixels.
///
/// A press that travels further than this from its origin stops counting
/// as a tap; the release will not fire. Large enough to ignore finger
/// jitter on touch screens, small enough that a deliberate drag cancels
/// the tap immediately.
pub const TAP_SLOP: f32 = 8.0;

/// Maximum pause between the taps of a multi-tap, in milliseconds.
///
/// A release arriving later than this after the previous one starts a
/// fresh tap sequence instead of extending the current one.
pub const MULTI_TAP_WINDOW_MS: u128 = 300;
