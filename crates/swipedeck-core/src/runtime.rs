//! Single-threaded runtime that owns the frame callback queue.
//!
//! The host owns a [`Runtime`] and calls
//! [`RuntimeHandle::drain_frame_callbacks`] once per display frame with the
//! frame time in nanoseconds. Everything else (animations, controllers)
//! holds a [`RuntimeHandle`], which is a weak reference: dropping the
//! `Runtime` silently disables all registered work.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::{Rc, Weak};
use std::sync::Arc;

use crate::frame_clock::FrameClock;

/// Identifier for a registered frame callback.
pub type FrameCallbackId = u64;

/// Schedules frame processing on behalf of the runtime.
///
/// Implementations ask the host to produce a new frame (e.g. request a
/// redraw). They must be safe to call from any thread.
pub trait RuntimeScheduler: Send + Sync {
    /// Request that the host schedule a new frame.
    fn schedule_frame(&self);
}

/// Scheduler for hosts that pump frames on their own cadence.
///
/// Suitable for demos and tests where the loop calls
/// `drain_frame_callbacks` unconditionally.
#[derive(Default)]
pub struct DefaultScheduler;

impl RuntimeScheduler for DefaultScheduler {
    fn schedule_frame(&self) {}
}

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Option<Box<dyn FnOnce(u64) + 'static>>,
}

struct RuntimeInner {
    scheduler: Arc<dyn RuntimeScheduler>,
    needs_frame: Cell<bool>,
    frame_callbacks: RefCell<VecDeque<FrameCallbackEntry>>,
    next_frame_callback_id: Cell<FrameCallbackId>,
}

impl RuntimeInner {
    fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            scheduler,
            needs_frame: Cell::new(false),
            frame_callbacks: RefCell::new(VecDeque::new()),
            next_frame_callback_id: Cell::new(1),
        }
    }

    fn schedule(&self) {
        self.needs_frame.set(true);
        self.scheduler.schedule_frame();
    }

    fn register_frame_callback(&self, callback: Box<dyn FnOnce(u64) + 'static>) -> FrameCallbackId {
        let id = self.next_frame_callback_id.get();
        self.next_frame_callback_id.set(id + 1);
        self.frame_callbacks
            .borrow_mut()
            .push_back(FrameCallbackEntry {
                id,
                callback: Some(callback),
            });
        self.schedule();
        id
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        let mut callbacks = self.frame_callbacks.borrow_mut();
        if let Some(index) = callbacks.iter().position(|entry| entry.id == id) {
            callbacks.remove(index);
        }
        if callbacks.is_empty() {
            self.needs_frame.set(false);
        }
    }

    fn has_frame_callbacks(&self) -> bool {
        !self.frame_callbacks.borrow().is_empty()
    }

    fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        // Take every pending entry before invoking anything so a callback
        // may register the next frame without re-entering the borrow.
        let mut pending: Vec<Box<dyn FnOnce(u64) + 'static>> = Vec::new();
        {
            let mut callbacks = self.frame_callbacks.borrow_mut();
            while let Some(mut entry) = callbacks.pop_front() {
                if let Some(callback) = entry.callback.take() {
                    pending.push(callback);
                }
            }
        }
        for callback in pending {
            callback(frame_time_nanos);
        }
        if !self.has_frame_callbacks() {
            self.needs_frame.set(false);
        }
    }
}

/// Owner of the frame callback queue. Held by the host for the lifetime
/// of the component.
#[derive(Clone)]
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new(scheduler: Arc<dyn RuntimeScheduler>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner::new(scheduler)),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }

    /// True while animations (or anything else) still want frames.
    pub fn needs_frame(&self) -> bool {
        self.inner.needs_frame.get()
    }
}

/// Weak handle to the runtime, cheap to clone and safe to outlive it.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    /// Register a one-shot callback for the next frame drain. Returns
    /// `None` if the runtime is gone.
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_frame_callback(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_frame_callback(id);
        }
    }

    /// Fire every pending frame callback with the given frame time.
    ///
    /// Callbacks registered while draining run on the *next* drain, which
    /// is what keeps per-frame animations honest.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        if let Some(inner) = self.inner.upgrade() {
            inner.drain_frame_callbacks(frame_time_nanos);
        }
    }

    pub fn has_frame_callbacks(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.has_frame_callbacks())
            .unwrap_or(false)
    }

    pub fn needs_frame(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.needs_frame.get())
            .unwrap_or(false)
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn test_runtime() -> Runtime {
        Runtime::new(Arc::new(DefaultScheduler))
    }

    #[test]
    fn callback_receives_frame_time() {
        let runtime = test_runtime();
        let handle = runtime.handle();
        let seen = Rc::new(Cell::new(0u64));

        let seen_in = Rc::clone(&seen);
        handle
            .register_frame_callback(move |time| seen_in.set(time))
            .expect("runtime alive");
        handle.drain_frame_callbacks(42);

        assert_eq!(seen.get(), 42);
    }

    #[test]
    fn callbacks_fire_in_registration_order() {
        let runtime = test_runtime();
        let handle = runtime.handle();
        let order = Rc::new(RefCell::new(Vec::new()));

        for tag in ["first", "second", "third"] {
            let order = Rc::clone(&order);
            handle
                .register_frame_callback(move |_| order.borrow_mut().push(tag))
                .expect("runtime alive");
        }
        handle.drain_frame_callbacks(0);

        assert_eq!(&*order.borrow(), &["first", "second", "third"]);
    }

    #[test]
    fn cancelled_callback_never_fires() {
        let runtime = test_runtime();
        let handle = runtime.handle();
        let fired = Rc::new(Cell::new(false));

        let fired_in = Rc::clone(&fired);
        let id = handle
            .register_frame_callback(move |_| fired_in.set(true))
            .expect("runtime alive");
        handle.cancel_frame_callback(id);
        handle.drain_frame_callbacks(0);

        assert!(!fired.get());
    }

    #[test]
    fn callback_registered_during_drain_waits_for_next_drain() {
        let runtime = test_runtime();
        let handle = runtime.handle();
        let count = Rc::new(Cell::new(0u32));

        let count_outer = Rc::clone(&count);
        let reentrant = handle.clone();
        handle
            .register_frame_callback(move |_| {
                count_outer.set(count_outer.get() + 1);
                let count_inner = Rc::clone(&count_outer);
                reentrant
                    .register_frame_callback(move |_| {
                        count_inner.set(count_inner.get() + 1);
                    })
                    .expect("runtime alive");
            })
            .expect("runtime alive");

        handle.drain_frame_callbacks(0);
        assert_eq!(count.get(), 1, "inner callback must not run this frame");
        handle.drain_frame_callbacks(16_000_000);
        assert_eq!(count.get(), 2);
    }

    #[test]
    fn needs_frame_tracks_pending_callbacks() {
        let runtime = test_runtime();
        let handle = runtime.handle();
        assert!(!runtime.needs_frame());

        handle
            .register_frame_callback(|_| {})
            .expect("runtime alive");
        assert!(runtime.needs_frame());

        handle.drain_frame_callbacks(0);
        assert!(!runtime.needs_frame());
    }

    #[test]
    fn dropped_runtime_disables_handle() {
        let runtime = test_runtime();
        let handle = runtime.handle();
        drop(runtime);

        assert!(handle.register_frame_callback(|_| {}).is_none());
        assert!(!handle.has_frame_callbacks());
        // Draining after the runtime is gone is a quiet no-op.
        handle.drain_frame_callbacks(0);
    }
}
