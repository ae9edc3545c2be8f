//! Animation specifications.
//!
//! A spec bundles a target with the parameters of one animation kind.
//! Constructors fill in the engine defaults; `with_*` builders override
//! them per call site.

use crate::easing::Easing;

/// Duration used by timed animations when the caller does not pick one.
pub const DEFAULT_TIMING_DURATION_MILLIS: u64 = 500;
/// Spring friction used when the caller does not pick one.
pub const DEFAULT_SPRING_FRICTION: f32 = 7.0;
/// Spring tension used when the caller does not pick one.
pub const DEFAULT_SPRING_TENSION: f32 = 40.0;
/// Decay deceleration used when the caller does not pick one.
pub const DEFAULT_DECAY_DECELERATION: f32 = 0.997;

/// Displacement below which a spring counts as resting, in value units.
pub(crate) const SPRING_REST_DISPLACEMENT: f32 = 0.001;
/// Speed below which a spring counts as resting, in value units per second.
pub(crate) const SPRING_REST_SPEED: f32 = 0.001;
/// Per-frame movement below which a decay counts as finished.
pub(crate) const DECAY_REST_DELTA: f32 = 0.1;

/// Eased interpolation from the current value to `to` over a fixed duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingSpec {
    pub to: f32,
    pub duration_millis: u64,
    pub easing: Easing,
}

impl TimingSpec {
    pub fn new(to: f32) -> Self {
        Self {
            to,
            duration_millis: DEFAULT_TIMING_DURATION_MILLIS,
            easing: Easing::EaseInOut,
        }
    }

    pub fn with_duration(mut self, duration_millis: u64) -> Self {
        self.duration_millis = duration_millis;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }
}

/// Damped oscillator pulling the value onto `to`.
///
/// Acceleration is `tension * (to - x) - friction * v`. Higher friction
/// settles faster; higher tension pulls harder. At rest the value snaps
/// exactly onto the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    pub to: f32,
    pub friction: f32,
    pub tension: f32,
}

impl SpringSpec {
    pub fn new(to: f32) -> Self {
        Self {
            to,
            friction: DEFAULT_SPRING_FRICTION,
            tension: DEFAULT_SPRING_TENSION,
        }
    }

    pub fn with_friction(mut self, friction: f32) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_tension(mut self, tension: f32) -> Self {
        self.tension = tension;
        self
    }
}

/// Exponential deceleration from an initial velocity, with no fixed target.
///
/// `velocity` is in value units per millisecond. The value approaches
/// `start + velocity / (1 - deceleration)` and finishes once the per-frame
/// movement falls under [`DECAY_REST_DELTA`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecaySpec {
    pub velocity: f32,
    pub deceleration: f32,
}

impl DecaySpec {
    pub fn new(velocity: f32) -> Self {
        Self {
            velocity,
            deceleration: DEFAULT_DECAY_DECELERATION,
        }
    }

    pub fn with_deceleration(mut self, deceleration: f32) -> Self {
        self.deceleration = deceleration;
        self
    }
}

/// One animation to run on an animated value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Animation {
    Timing(TimingSpec),
    Spring(SpringSpec),
    Decay(DecaySpec),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        let spec = TimingSpec::new(120.0);
        assert_eq!(spec.to, 120.0);
        assert_eq!(spec.duration_millis, DEFAULT_TIMING_DURATION_MILLIS);
        assert_eq!(spec.easing, Easing::EaseInOut);
    }

    #[test]
    fn timing_builders_override_defaults() {
        let spec = TimingSpec::new(0.0)
            .with_duration(300)
            .with_easing(Easing::Linear);
        assert_eq!(spec.duration_millis, 300);
        assert_eq!(spec.easing, Easing::Linear);
    }

    #[test]
    fn spring_defaults() {
        let spec = SpringSpec::new(1.0);
        assert_eq!(spec.friction, DEFAULT_SPRING_FRICTION);
        assert_eq!(spec.tension, DEFAULT_SPRING_TENSION);
    }

    #[test]
    fn decay_defaults() {
        let spec = DecaySpec::new(4.0);
        assert_eq!(spec.velocity, 4.0);
        assert_eq!(spec.deceleration, DEFAULT_DECAY_DECELERATION);
        assert_eq!(spec.with_deceleration(0.98).deceleration, 0.98);
    }
}
