//! Frame-driven animated values.
//!
//! An [`AnimatedValue`] is a shared scalar advanced by one-shot frame
//! callbacks: each frame computes the next value, schedules the following
//! frame if the animation is still live, and runs the completion callback
//! strictly after the final value lands. Starting a new animation (or
//! pinning the value with [`AnimatedValue::set_value`]) cancels the old
//! one and discards its completion, so a stale callback can never fire.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use swipedeck_core::{FrameCallbackRegistration, RuntimeHandle};

use crate::latch::CompletionLatch;
use crate::offset::Offset;
use crate::spec::{
    Animation, DecaySpec, SpringSpec, TimingSpec, DECAY_REST_DELTA, SPRING_REST_DISPLACEMENT,
    SPRING_REST_SPEED,
};

/// Shared scalar that at most one animation drives at a time.
pub struct AnimatedValue {
    inner: Rc<RefCell<ValueInner>>,
}

struct ValueInner {
    runtime: RuntimeHandle,
    current: f32,
    animation: Option<ActiveAnimation>,
    registration: Option<FrameCallbackRegistration>,
}

struct ActiveAnimation {
    driver: Driver,
    on_end: Option<Box<dyn FnOnce()>>,
}

enum Driver {
    Timing {
        spec: TimingSpec,
        from: f32,
        start_time_nanos: Option<u64>,
    },
    Spring {
        spec: SpringSpec,
        /// Value units per second.
        velocity: f32,
        last_time_nanos: Option<u64>,
    },
    Decay {
        spec: DecaySpec,
        from: f32,
        start_time_nanos: Option<u64>,
        last_value: f32,
    },
}

enum StepResult {
    Running(f32),
    Finished(f32),
}

impl Driver {
    fn start(animation: Animation, current: f32) -> Self {
        match animation {
            Animation::Timing(spec) => Driver::Timing {
                spec,
                from: current,
                start_time_nanos: None,
            },
            Animation::Spring(spec) => Driver::Spring {
                spec,
                velocity: 0.0,
                last_time_nanos: None,
            },
            Animation::Decay(spec) => Driver::Decay {
                spec,
                from: current,
                start_time_nanos: None,
                last_value: current,
            },
        }
    }

    fn step(&mut self, current: f32, frame_time_nanos: u64) -> StepResult {
        match self {
            Driver::Timing {
                spec,
                from,
                start_time_nanos,
            } => {
                let start = *start_time_nanos.get_or_insert(frame_time_nanos);
                let elapsed_nanos = frame_time_nanos.saturating_sub(start);
                let duration_nanos = spec.duration_millis.max(1) * 1_000_000;
                let linear = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);
                if linear >= 1.0 {
                    StepResult::Finished(spec.to)
                } else {
                    let eased = spec.easing.transform(linear);
                    StepResult::Running(*from + (spec.to - *from) * eased)
                }
            }
            Driver::Spring {
                spec,
                velocity,
                last_time_nanos,
            } => {
                let elapsed_nanos = match *last_time_nanos {
                    Some(last) => frame_time_nanos.saturating_sub(last),
                    None => 0,
                };
                *last_time_nanos = Some(frame_time_nanos);

                // Fixed 1 ms substeps keep the integration stable across
                // uneven frame times; a long stall advances at most 64 ms.
                let substeps = (elapsed_nanos / 1_000_000).min(64);
                const SUBSTEP_SECONDS: f32 = 0.001;

                let mut position = current;
                let mut speed = *velocity;
                for _ in 0..substeps {
                    let acceleration =
                        spec.tension * (spec.to - position) - spec.friction * speed;
                    speed += acceleration * SUBSTEP_SECONDS;
                    position += speed * SUBSTEP_SECONDS;
                }
                *velocity = speed;

                let resting = speed.abs() <= SPRING_REST_SPEED
                    && (spec.to - position).abs() <= SPRING_REST_DISPLACEMENT;
                if resting {
                    *velocity = 0.0;
                    StepResult::Finished(spec.to)
                } else {
                    StepResult::Running(position)
                }
            }
            Driver::Decay {
                spec,
                from,
                start_time_nanos,
                last_value,
            } => {
                let first_frame = start_time_nanos.is_none();
                let start = *start_time_nanos.get_or_insert(frame_time_nanos);
                let elapsed_millis =
                    frame_time_nanos.saturating_sub(start) as f32 / 1_000_000.0;
                let rate = (1.0 - spec.deceleration).max(f32::EPSILON);
                let value =
                    *from + (spec.velocity / rate) * (1.0 - (-rate * elapsed_millis).exp());
                if !first_frame && (value - *last_value).abs() < DECAY_REST_DELTA {
                    StepResult::Finished(value)
                } else {
                    *last_value = value;
                    StepResult::Running(value)
                }
            }
        }
    }
}

impl AnimatedValue {
    pub fn new(initial: f32, runtime: RuntimeHandle) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ValueInner {
                runtime,
                current: initial,
                animation: None,
                registration: None,
            })),
        }
    }

    pub fn get(&self) -> f32 {
        self.inner.borrow().current
    }

    /// Pin the value, stopping any running animation. The stopped
    /// animation's completion is discarded.
    pub fn set_value(&self, value: f32) {
        let mut inner = self.inner.borrow_mut();
        inner.cancel_in_place();
        inner.current = value;
    }

    /// Start `animation` from the current value. Any running animation is
    /// cancelled first and its completion discarded; `on_end` runs after
    /// the new animation's final frame.
    pub fn animate(&self, animation: Animation, on_end: impl FnOnce() + 'static) {
        {
            let mut inner = self.inner.borrow_mut();
            inner.cancel_in_place();
            inner.animation = Some(ActiveAnimation {
                driver: Driver::start(animation, inner.current),
                on_end: Some(Box::new(on_end)),
            });
        }
        Self::schedule_frame(&self.inner);
    }

    /// Stop the running animation, leaving the value where the last frame
    /// put it. The completion is discarded.
    pub fn stop_animation(&self) {
        self.inner.borrow_mut().cancel_in_place();
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().animation.is_some()
    }

    fn schedule_frame(this: &Rc<RefCell<ValueInner>>) {
        let runtime = {
            let inner = this.borrow();
            if inner.registration.is_some() || inner.animation.is_none() {
                return;
            }
            inner.runtime.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = runtime.frame_clock().with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<ValueInner>>, frame_time_nanos: u64) {
        let mut completed: Option<Box<dyn FnOnce()>> = None;
        let mut schedule_next = false;
        {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            let Some(mut active) = inner.animation.take() else {
                return;
            };
            match active.driver.step(inner.current, frame_time_nanos) {
                StepResult::Running(value) => {
                    inner.current = value;
                    inner.animation = Some(active);
                    schedule_next = true;
                }
                StepResult::Finished(value) => {
                    inner.current = value;
                    completed = active.on_end.take();
                }
            }
        }
        if schedule_next {
            Self::schedule_frame(this);
        }
        // Runs after the final value is visible and outside the borrow, so
        // a completion may start the next animation on this same value.
        if let Some(on_end) = completed {
            on_end();
        }
    }
}

impl Clone for AnimatedValue {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl ValueInner {
    fn cancel_in_place(&mut self) {
        if let Some(registration) = self.registration.take() {
            registration.cancel();
        }
        // Dropping the animation drops its completion callback with it.
        self.animation = None;
    }
}

/// Paired x/y animated values moved together.
pub struct AnimatedXY {
    x: AnimatedValue,
    y: AnimatedValue,
}

impl AnimatedXY {
    pub fn new(initial: Offset, runtime: RuntimeHandle) -> Self {
        Self {
            x: AnimatedValue::new(initial.x, runtime.clone()),
            y: AnimatedValue::new(initial.y, runtime),
        }
    }

    pub fn get(&self) -> Offset {
        Offset::new(self.x.get(), self.y.get())
    }

    pub fn set_value(&self, value: Offset) {
        self.x.set_value(value.x);
        self.y.set_value(value.y);
    }

    pub fn x(&self) -> &AnimatedValue {
        &self.x
    }

    pub fn y(&self) -> &AnimatedValue {
        &self.y
    }

    pub fn stop_animation(&self) {
        self.x.stop_animation();
        self.y.stop_animation();
    }

    pub fn is_animating(&self) -> bool {
        self.x.is_animating() || self.y.is_animating()
    }

    /// Spring both axes to `target`; `on_end` fires once when both rest.
    pub fn spring_to(
        &self,
        target: Offset,
        friction: f32,
        tension: f32,
        on_end: impl FnOnce() + 'static,
    ) {
        let latch = CompletionLatch::new(2, on_end);
        let x_done = latch.arm();
        let y_done = latch.arm();
        self.x.animate(
            Animation::Spring(
                SpringSpec::new(target.x)
                    .with_friction(friction)
                    .with_tension(tension),
            ),
            x_done,
        );
        self.y.animate(
            Animation::Spring(
                SpringSpec::new(target.y)
                    .with_friction(friction)
                    .with_tension(tension),
            ),
            y_done,
        );
    }

    /// Decelerate both axes from `velocity` (units per millisecond);
    /// `on_end` fires once when both stop.
    pub fn decay(&self, velocity: Offset, deceleration: f32, on_end: impl FnOnce() + 'static) {
        let latch = CompletionLatch::new(2, on_end);
        let x_done = latch.arm();
        let y_done = latch.arm();
        self.x.animate(
            Animation::Decay(DecaySpec::new(velocity.x).with_deceleration(deceleration)),
            x_done,
        );
        self.y.animate(
            Animation::Decay(DecaySpec::new(velocity.y).with_deceleration(deceleration)),
            y_done,
        );
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
