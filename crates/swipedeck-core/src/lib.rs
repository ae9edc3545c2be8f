//! Core runtime for Swipedeck: frame scheduling and callback plumbing.
//!
//! The animation layer registers one-shot frame callbacks here; the host
//! pumps them with [`RuntimeHandle::drain_frame_callbacks`] once per
//! display frame. Nothing in this crate knows about cards or gestures.

mod frame_clock;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use runtime::{
    DefaultScheduler, FrameCallbackId, Runtime, RuntimeHandle, RuntimeScheduler,
};
