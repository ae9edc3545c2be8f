//! Swipeable card stack: deck queue, swipe state machine, derived styles.
//!
//! Pointer events feed a `PanRecognizer` from `swipedeck-foundation`,
//! which drives the [`SwipeController`] through its phases. The
//! controller owns the [`CardQueue`] and the animated position, opacity
//! and scale values, and exposes a per-frame [`SwipeFrame`] snapshot for
//! the host to draw. Nothing here renders; the [`styles`] module maps the
//! drag offset onto rotation, fades and label styles as pure functions.

mod card;
mod controller;
mod error;
mod queue;
pub mod styles;

pub use card::{Card, CardId, ImageSource};
pub use controller::{
    clamp_fling_velocity, SwipeController, SwipeFrame, SwipePhase, FADE_OUT_MILLIS,
    FLING_DECELERATION, MAX_FLING_VELOCITY, MIN_FLING_VELOCITY, NEXT_CARD_REST_SCALE,
    SETTLE_FRICTION, SWIPE_THRESHOLD,
};
pub use error::DeckError;
pub use queue::CardQueue;
pub use styles::LabelStyle;
