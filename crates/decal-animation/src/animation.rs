//! Physics-based interpolation toward a target value.
//!
//! An [`Animatable`] owns a [`SharedValue`] and drives it toward a target
//! with a damped harmonic oscillator, one frame callback at a time. The
//! oscillator runs in progress space (0 at the start value, 1 at the
//! target) with semi-implicit Euler integration and a fixed internal
//! timestep, so a long frame gap is split into stable sub-steps instead of
//! one explosive one.

use std::cell::RefCell;
use std::rc::Rc;

use decal_core::{FrameCallbackRegistration, FrameClock, RuntimeHandle, SharedValue, Value};

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f32) -> Self {
        self + (target - self) * fraction as f64
    }
}

/// Trait for values that can participate in spring animations.
pub trait SpringScalar: Lerp + Clone {
    /// Convert the value to `f32` for the physics calculations.
    fn to_f32(&self) -> f32;

    /// Progress of `current` between `start` and `target`, where 0 is the
    /// start and 1 is the target.
    fn spring_progress(start: &Self, target: &Self, current: &Self) -> f32 {
        let start_val = start.to_f32();
        let target_val = target.to_f32();
        let current_val = current.to_f32();

        if (target_val - start_val).abs() < f32::EPSILON {
            1.0
        } else {
            (current_val - start_val) / (target_val - start_val)
        }
    }

    /// Whether `current` is close enough to `target` to stop stepping.
    fn is_near_target(current: &Self, target: &Self, threshold: f32) -> bool {
        (current.to_f32() - target.to_f32()).abs() < threshold
    }
}

impl SpringScalar for f32 {
    fn to_f32(&self) -> f32 {
        *self
    }
}

impl SpringScalar for f64 {
    fn to_f32(&self) -> f32 {
        *self as f32
    }
}

/// Spring configuration.
///
/// `damping_ratio` 1.0 is critically damped (no overshoot), below 1.0 is
/// bouncy, above 1.0 is sluggish. The two thresholds define "at rest":
/// both must hold before the animation snaps to the exact target and
/// stops scheduling frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    pub damping_ratio: f32,
    pub stiffness: f32,
    pub velocity_threshold: f32,
    pub position_threshold: f32,
}

impl SpringSpec {
    /// Critically damped spring tuned for UI transitions.
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 1500.0,
            velocity_threshold: 0.01,
            position_threshold: 0.001,
        }
    }

    /// Under-damped spring with visible overshoot.
    pub fn bouncy() -> Self {
        Self {
            damping_ratio: 0.5,
            ..Self::default_spring()
        }
    }

    /// Fast spring with no bounce.
    pub fn stiff() -> Self {
        Self {
            stiffness: 3000.0,
            ..Self::default_spring()
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Internal integration timestep in seconds. Frame gaps longer than this
/// are sub-stepped for stability.
const SPRING_TIMESTEP: f32 = 0.016;

/// Spring-animated value holder.
pub struct Animatable<T: SpringScalar + 'static> {
    inner: Rc<RefCell<AnimatableInner<T>>>,
}

struct AnimatableInner<T: SpringScalar + 'static> {
    state: SharedValue<T>,
    clock: FrameClock,
    current: T,
    velocity: f32,
    start: T,
    target: T,
    spec: SpringSpec,
    last_frame_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
}

impl<T: SpringScalar + 'static> Animatable<T> {
    pub fn new(initial: T, runtime: RuntimeHandle) -> Self {
        let inner = AnimatableInner {
            state: SharedValue::with_runtime(initial.clone(), runtime.clone()),
            clock: FrameClock::new(runtime),
            current: initial.clone(),
            velocity: 0.0,
            start: initial.clone(),
            target: initial,
            spec: SpringSpec::default(),
            last_frame_nanos: None,
            registration: None,
        };
        Self {
            inner: Rc::new(RefCell::new(inner)),
        }
    }

    /// Retarget the spring. The value keeps its current position, so
    /// retargeting mid-flight never jumps; the oscillator restarts from
    /// rest because progress space is re-based on the new start/target
    /// pair.
    pub fn animate_to(&self, target: T, spec: SpringSpec) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.start = inner.current.clone();
            inner.target = target;
            inner.spec = spec;
            inner.last_frame_nanos = None;
            inner.velocity = 0.0;
        }
        Self::schedule_frame(&self.inner);
    }

    /// Jump to the target without animating.
    pub fn snap_to(&self, target: T) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.current = target.clone();
        inner.start = target.clone();
        inner.target = target.clone();
        inner.velocity = 0.0;
        inner.last_frame_nanos = None;
        inner.state.set(target);
    }

    /// The value the spring is heading toward (or resting at).
    pub fn target(&self) -> T {
        self.inner.borrow().target.clone()
    }

    /// Whether a frame callback is currently scheduled.
    pub fn is_animating(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    /// Read view of the animated value.
    pub fn value(&self) -> Value<T> {
        self.inner.borrow().state.as_value()
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner<T>>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner<T>>>, frame_time_nanos: u64) {
        let schedule_next = {
            let mut inner = this.borrow_mut();
            inner.registration = None;

            // The first frame only establishes the time base; integration
            // begins on the next one.
            let last = inner.last_frame_nanos.replace(frame_time_nanos);
            let dt = last
                .map(|last| frame_time_nanos.saturating_sub(last) as f32 / 1_000_000_000.0)
                .unwrap_or(0.0);

            if dt > 0.0 {
                let spec = inner.spec;
                let damping = 2.0 * spec.damping_ratio * spec.stiffness.sqrt();

                let mut remaining = dt;
                while remaining > 0.0 {
                    let step = SPRING_TIMESTEP.min(remaining);
                    let progress = <T as SpringScalar>::spring_progress(
                        &inner.start,
                        &inner.target,
                        &inner.current,
                    );
                    let displacement = progress - 1.0;
                    let acceleration = -spec.stiffness * displacement - damping * inner.velocity;

                    inner.velocity += acceleration * step;
                    let next_progress = progress + inner.velocity * step;
                    inner.current = inner
                        .start
                        .lerp(&inner.target, next_progress.clamp(0.0, 2.0));

                    remaining -= step;
                }

                inner.state.set(inner.current.clone());
            }

            let at_rest = inner.velocity.abs() < inner.spec.velocity_threshold;
            let near_target = <T as SpringScalar>::is_near_target(
                &inner.current,
                &inner.target,
                inner.spec.position_threshold,
            );

            if at_rest && near_target {
                inner.current = inner.target.clone();
                inner.start = inner.target.clone();
                inner.velocity = 0.0;
                inner.last_frame_nanos = None;
                inner.state.set(inner.target.clone());
                false
            } else {
                true
            }
        };

        if schedule_next {
            Self::schedule_frame(this);
        }
    }
}

impl<T: SpringScalar + 'static> Clone for Animatable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
