//! Pointer input and pan gesture recognition for the Swipedeck card stack.
//!
//! The host forwards raw single-pointer events; [`PanRecognizer`] folds
//! them into drag start/move/end callbacks with an impulse-strategy
//! release velocity in logical px per millisecond.

mod pan;
mod pointer;
mod velocity_tracker;

pub use pan::{PanListener, PanRecognizer};
pub use pointer::{PointerEvent, PointerEventKind};
pub use velocity_tracker::{VelocityTracker, ASSUME_STOPPED_MS, MAX_PAN_VELOCITY};
