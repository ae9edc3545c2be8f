//! Animation primitives for the Swipedeck card stack.
//!
//! Values animate by registering one-shot frame callbacks on the
//! `swipedeck-core` runtime; the host pumps frames, the values advance,
//! and completion callbacks fire after the final update of a finished
//! animation. Cancelled animations never complete.
//!
//! Three animation kinds cover the component's needs: eased timing
//! ([`TimingSpec`]), a damped spring ([`SpringSpec`]), and exponential
//! decay from a fling velocity ([`DecaySpec`]). [`Interpolation`] maps an
//! animated input range onto presentation values without storing anything.

mod easing;
mod interpolation;
mod latch;
mod offset;
mod spec;
mod value;

pub use easing::Easing;
pub use interpolation::{Extrapolate, Interpolation};
pub use latch::CompletionLatch;
pub use offset::Offset;
pub use spec::{
    Animation, DecaySpec, SpringSpec, TimingSpec, DEFAULT_DECAY_DECELERATION,
    DEFAULT_SPRING_FRICTION, DEFAULT_SPRING_TENSION, DEFAULT_TIMING_DURATION_MILLIS,
};
pub use value::{AnimatedValue, AnimatedXY};
