//! One-shot join for parallel animations.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Runs a callback once after a fixed number of completions all arrive.
///
/// Each parallel animation takes one handle from [`arm`](Self::arm) and
/// calls it from its completion. Dropping an unfired handle (because its
/// animation was cancelled) means the latch never completes, which also
/// drops the pending callback.
pub struct CompletionLatch {
    inner: Rc<LatchInner>,
}

struct LatchInner {
    remaining: Cell<usize>,
    on_complete: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl CompletionLatch {
    /// Latch that fires `on_complete` after `count` arms complete.
    ///
    /// A zero count completes immediately.
    pub fn new(count: usize, on_complete: impl FnOnce() + 'static) -> Self {
        if count == 0 {
            on_complete();
            return Self {
                inner: Rc::new(LatchInner {
                    remaining: Cell::new(0),
                    on_complete: RefCell::new(None),
                }),
            };
        }
        Self {
            inner: Rc::new(LatchInner {
                remaining: Cell::new(count),
                on_complete: RefCell::new(Some(Box::new(on_complete))),
            }),
        }
    }

    /// One completion handle. Create exactly `count` of these.
    pub fn arm(&self) -> impl FnOnce() + 'static {
        let inner = Rc::clone(&self.inner);
        move || {
            let remaining = inner.remaining.get();
            if remaining == 0 {
                return;
            }
            inner.remaining.set(remaining - 1);
            if remaining == 1 {
                if let Some(callback) = inner.on_complete.borrow_mut().take() {
                    callback();
                }
            }
        }
    }
}
