//! Reactively observed mutable value cells.
//!
//! A [`SharedValue`] is the write side: setting it bumps a version counter
//! and requests a frame from the owning runtime, which is the entire
//! re-render-on-write contract. Reads are pull-based — the render pass asks
//! for the current value when it runs. [`Value`] is the read-only view
//! handed to consumers that must not mutate (the scene resolver, tests).

use crate::runtime::RuntimeHandle;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

struct SharedValueInner<T> {
    value: RefCell<T>,
    version: Cell<u64>,
    runtime: RuntimeHandle,
}

pub struct SharedValue<T> {
    inner: Rc<SharedValueInner<T>>,
}

impl<T> SharedValue<T> {
    pub fn with_runtime(initial: T, runtime: RuntimeHandle) -> Self {
        Self {
            inner: Rc::new(SharedValueInner {
                value: RefCell::new(initial),
                version: Cell::new(0),
                runtime,
            }),
        }
    }

    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
        self.mark_written();
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut self.inner.value.borrow_mut());
        self.mark_written();
    }

    /// Monotonically increasing write counter, for change detection.
    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    pub fn as_value(&self) -> Value<T> {
        Value {
            inner: Rc::clone(&self.inner),
        }
    }

    fn mark_written(&self) {
        self.inner.version.set(self.inner.version.get() + 1);
        self.inner.runtime.request_frame();
    }
}

impl<T: Clone> SharedValue<T> {
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }
}

impl<T> Clone for SharedValue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Read-only view of a [`SharedValue`].
pub struct Value<T> {
    inner: Rc<SharedValueInner<T>>,
}

impl<T> Value<T> {
    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }
}

impl<T: Clone> Value<T> {
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }
}

impl<T> Clone for Value<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Runtime;

    #[test]
    fn writes_bump_version_and_request_frame() {
        let runtime = Runtime::new();
        let handle = runtime.handle();
        let cell = SharedValue::with_runtime(100.0f32, handle.clone());
        handle.take_frame_request();

        assert_eq!(cell.get(), 100.0);
        assert_eq!(cell.version(), 0);
        assert!(!handle.needs_frame());

        cell.set(200.0);
        assert_eq!(cell.get(), 200.0);
        assert_eq!(cell.version(), 1);
        assert!(handle.needs_frame());
    }

    #[test]
    fn update_mutates_in_place() {
        let runtime = Runtime::new();
        let cell = SharedValue::with_runtime(vec![1, 2], runtime.handle());
        cell.update(|v| v.push(3));
        assert_eq!(cell.get(), vec![1, 2, 3]);
        assert_eq!(cell.version(), 1);
    }

    #[test]
    fn value_view_observes_writes() {
        let runtime = Runtime::new();
        let cell = SharedValue::with_runtime(0.0f32, runtime.handle());
        let view = cell.as_value();
        cell.set(35.0);
        assert_eq!(view.get(), 35.0);
        assert_eq!(view.version(), 1);
    }
}
