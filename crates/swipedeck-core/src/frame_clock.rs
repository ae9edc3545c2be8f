//! Frame-aligned callback scheduling with cancellation on drop.

use crate::runtime::{FrameCallbackId, RuntimeHandle};

/// Hands out one-shot frame callbacks tied to the runtime's drain loop.
#[derive(Clone)]
pub struct FrameClock {
    runtime: RuntimeHandle,
}

impl FrameClock {
    pub(crate) fn new(runtime: RuntimeHandle) -> Self {
        Self { runtime }
    }

    /// Run `callback` on the next frame with the frame time in nanoseconds.
    ///
    /// The returned registration cancels the callback when dropped, so the
    /// caller must hold it for as long as the callback should stay alive.
    #[must_use]
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let id = self.runtime.register_frame_callback(callback);
        FrameCallbackRegistration {
            runtime: self.runtime.clone(),
            id,
        }
    }
}

/// Keeps a pending frame callback alive; cancels it on drop.
pub struct FrameCallbackRegistration {
    runtime: RuntimeHandle,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    /// Cancel the callback explicitly.
    pub fn cancel(mut self) {
        self.cancel_inner();
    }

    fn cancel_inner(&mut self) {
        if let Some(id) = self.id.take() {
            self.runtime.cancel_frame_callback(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        self.cancel_inner();
    }
}
