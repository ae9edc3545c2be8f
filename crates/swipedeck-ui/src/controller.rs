//! The swipe state machine.
//!
//! A [`SwipeController`] owns the deck and the three animated values that
//! present it: the top card's position, the whole-card opacity used by the
//! dismissal fade, and the scale of the card underneath. Gesture callbacks
//! and button presses move it through an explicit phase machine; every
//! handler guards on the current phase and drops anything that arrives out
//! of sequence. The queue advances only when a transition finishes.

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, warn};
use swipedeck_animation::{
    AnimatedValue, AnimatedXY, Animation, CompletionLatch, Offset, SpringSpec, TimingSpec,
    DEFAULT_SPRING_TENSION,
};
use swipedeck_core::RuntimeHandle;
use swipedeck_foundation::{PanListener, PanRecognizer};

use crate::card::Card;
use crate::error::DeckError;
use crate::queue::CardQueue;
use crate::styles::{self, LabelStyle};

/// Horizontal distance, px, past which a released card commits.
pub const SWIPE_THRESHOLD: f32 = 120.0;
/// Slowest fling a committed card leaves with, px per millisecond.
pub const MIN_FLING_VELOCITY: f32 = 3.0;
/// Fastest fling a committed card leaves with, px per millisecond.
pub const MAX_FLING_VELOCITY: f32 = 5.0;
/// Deceleration of the commit fling.
pub const FLING_DECELERATION: f32 = 0.98;
/// Spring friction when a card settles back or the next card scales up.
pub const SETTLE_FRICTION: f32 = 4.0;
/// Duration of the dismissed card's fade, ms.
pub const FADE_OUT_MILLIS: u64 = 300;
/// Resting scale of the card underneath the top card.
pub const NEXT_CARD_REST_SCALE: f32 = 0.9;

/// Where the top card is in its swipe lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipePhase {
    /// At rest, accepting gestures and button presses.
    Idle,
    /// Following the finger 1:1.
    Dragging,
    /// Released under the threshold, springing back to center.
    Settling,
    /// Released past the threshold (or button-pressed), flying out.
    Committing,
    /// Fading out while the next card scales up.
    Transitioning,
}

/// Map a release velocity onto the commit fling band.
///
/// Direction follows the sign of `vx`; a dead-stop release (`vx == 0`)
/// takes the non-negative branch and flings right.
pub fn clamp_fling_velocity(vx: f32) -> f32 {
    if vx >= 0.0 {
        vx.clamp(MIN_FLING_VELOCITY, MAX_FLING_VELOCITY)
    } else {
        -(-vx).clamp(MIN_FLING_VELOCITY, MAX_FLING_VELOCITY)
    }
}

/// Read-only presentation bundle, recomputed on every [`snapshot`] call.
///
/// The rotation, opacities and label styles are pure functions of the
/// position; nothing here is stored between frames.
///
/// [`snapshot`]: SwipeController::snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeFrame {
    /// Up to two visible cards in back-to-front paint order.
    pub top_two: Vec<Card>,
    /// Offset of the top card from its rest position.
    pub position: Offset,
    pub rotation_deg: f32,
    /// Opacity of the top card's image while it is dragged.
    pub drag_opacity: f32,
    /// Opacity of the whole top card during the dismissal fade.
    pub transition_opacity: f32,
    /// Scale of the card underneath.
    pub next_scale: f32,
    pub yes_label: LabelStyle,
    pub no_label: LabelStyle,
    pub is_queue_empty: bool,
    pub phase: SwipePhase,
}

/// Drives one deck through drag, settle, commit and transition.
///
/// Clones share state. Animations run on the runtime handle the
/// controller was built with; the host pumps frames and reads
/// [`snapshot`](Self::snapshot) to draw.
pub struct SwipeController {
    inner: Rc<RefCell<ControllerInner>>,
}

struct ControllerInner {
    queue: CardQueue,
    phase: SwipePhase,
    /// Top card offset from rest. Reset to zero after every gesture.
    position: AnimatedXY,
    /// Whole-card opacity, 1 at rest, timed to 0 during the transition.
    card_opacity: AnimatedValue,
    /// Scale of the card underneath, 0.9 at rest, springs to 1.
    next_scale: AnimatedValue,
    recognizer_attached: bool,
}

impl SwipeController {
    pub fn new(runtime: RuntimeHandle, queue: CardQueue) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ControllerInner {
                queue,
                phase: SwipePhase::Idle,
                position: AnimatedXY::new(Offset::ZERO, runtime.clone()),
                card_opacity: AnimatedValue::new(1.0, runtime.clone()),
                next_scale: AnimatedValue::new(NEXT_CARD_REST_SCALE, runtime),
                recognizer_attached: false,
            })),
        }
    }

    pub fn phase(&self) -> SwipePhase {
        self.inner.borrow().phase
    }

    /// True once a recognizer is attached and pointer input can land.
    /// Hosts gate rendering on this.
    pub fn is_ready(&self) -> bool {
        self.inner.borrow().recognizer_attached
    }

    /// Cards left in the deck.
    pub fn remaining(&self) -> usize {
        self.inner.borrow().queue.len()
    }

    /// Build a recognizer feeding this controller and mark it ready.
    pub fn attach_recognizer(&self) -> PanRecognizer {
        self.inner.borrow_mut().recognizer_attached = true;
        PanRecognizer::new(Rc::new(self.clone()))
    }

    pub fn snapshot(&self) -> SwipeFrame {
        let inner = self.inner.borrow();
        let position = inner.position.get();
        SwipeFrame {
            top_two: inner.queue.peek_top_two().into_iter().cloned().collect(),
            position,
            rotation_deg: styles::rotation_deg(position.x),
            drag_opacity: styles::drag_opacity(position.x),
            transition_opacity: inner.card_opacity.get(),
            next_scale: inner.next_scale.get(),
            yes_label: styles::yes_label(position.x),
            no_label: styles::no_label(position.x),
            is_queue_empty: inner.queue.is_empty(),
            phase: inner.phase,
        }
    }

    pub fn on_drag_start(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.queue.is_empty() {
            return;
        }
        match inner.phase {
            SwipePhase::Idle => {
                inner.phase = SwipePhase::Dragging;
                debug!("drag start");
            }
            SwipePhase::Settling => {
                // Finger caught the card mid-flight. Stopping the spring
                // discards its completion with it.
                inner.position.stop_animation();
                inner.phase = SwipePhase::Dragging;
                debug!("drag start, settle interrupted");
            }
            SwipePhase::Dragging => {
                debug!("drag start ignored, already dragging");
            }
            SwipePhase::Committing | SwipePhase::Transitioning => {
                debug!("drag start ignored during {:?}", inner.phase);
            }
        }
    }

    pub fn on_drag_move(&self, dx: f32, dy: f32) {
        let inner = self.inner.borrow();
        if inner.queue.is_empty() {
            return;
        }
        if inner.phase != SwipePhase::Dragging {
            warn!(
                "dropping gesture: {}",
                DeckError::InvalidGestureSequence {
                    event: "on_drag_move",
                    phase: inner.phase,
                }
            );
            return;
        }
        inner.position.set_value(Offset::new(dx, dy));
    }

    pub fn on_drag_end(&self, dx: f32, vx: f32, vy: f32) {
        let mut inner = self.inner.borrow_mut();
        if inner.queue.is_empty() {
            return;
        }
        if inner.phase != SwipePhase::Dragging {
            warn!(
                "dropping gesture: {}",
                DeckError::InvalidGestureSequence {
                    event: "on_drag_end",
                    phase: inner.phase,
                }
            );
            return;
        }
        let weak = Rc::downgrade(&self.inner);
        if dx.abs() > SWIPE_THRESHOLD {
            inner.phase = SwipePhase::Committing;
            debug!("release at dx {dx:.1}, committing with vx {vx:.2}");
            inner.position.decay(
                Offset::new(clamp_fling_velocity(vx), vy),
                FLING_DECELERATION,
                move || {
                    if let Some(inner) = weak.upgrade() {
                        Self::begin_transition(&inner);
                    }
                },
            );
        } else {
            inner.phase = SwipePhase::Settling;
            debug!("release at dx {dx:.1}, settling back");
            inner.position.spring_to(
                Offset::ZERO,
                SETTLE_FRICTION,
                DEFAULT_SPRING_TENSION,
                move || {
                    if let Some(inner) = weak.upgrade() {
                        inner.borrow_mut().phase = SwipePhase::Idle;
                    }
                },
            );
        }
    }

    /// Dismiss the top card rightward, as if swiped past the threshold.
    pub fn trigger_yes(&self) {
        self.trigger_button(SWIPE_THRESHOLD, "yes");
    }

    /// Dismiss the top card leftward.
    pub fn trigger_no(&self) {
        self.trigger_button(-SWIPE_THRESHOLD, "no");
    }

    fn trigger_button(&self, target_x: f32, label: &'static str) {
        let mut inner = self.inner.borrow_mut();
        if inner.queue.is_empty() {
            return;
        }
        if inner.phase != SwipePhase::Idle {
            debug!("{label} button ignored during {:?}", inner.phase);
            return;
        }
        inner.phase = SwipePhase::Committing;
        debug!("{label} button commit");
        let weak = Rc::downgrade(&self.inner);
        inner.position.x().animate(
            Animation::Timing(TimingSpec::new(target_x)),
            move || {
                if let Some(inner) = weak.upgrade() {
                    Self::begin_transition(&inner);
                }
            },
        );
    }

    /// The commit animation landed: fade the card out while the next one
    /// scales up. The queue advances only once both finish.
    fn begin_transition(this: &Rc<RefCell<ControllerInner>>) {
        let (card_opacity, next_scale) = {
            let mut inner = this.borrow_mut();
            inner.phase = SwipePhase::Transitioning;
            debug!("transition start");
            (inner.card_opacity.clone(), inner.next_scale.clone())
        };
        let weak = Rc::downgrade(this);
        let latch = CompletionLatch::new(2, move || {
            if let Some(inner) = weak.upgrade() {
                Self::finish_transition(&inner);
            }
        });
        card_opacity.animate(
            Animation::Timing(TimingSpec::new(0.0).with_duration(FADE_OUT_MILLIS)),
            latch.arm(),
        );
        next_scale.animate(
            Animation::Spring(SpringSpec::new(1.0).with_friction(SETTLE_FRICTION)),
            latch.arm(),
        );
    }

    fn finish_transition(this: &Rc<RefCell<ControllerInner>>) {
        let mut inner = this.borrow_mut();
        match inner.queue.pop_front() {
            Ok(card) => debug!("dismissed card {} ({})", card.id, card.text),
            Err(error) => warn!("transition finish: {error}"),
        }
        inner.next_scale.set_value(NEXT_CARD_REST_SCALE);
        inner.card_opacity.set_value(1.0);
        inner.position.set_value(Offset::ZERO);
        inner.phase = SwipePhase::Idle;
        debug!("deck advanced, {} cards remaining", inner.queue.len());
    }
}

impl Clone for SwipeController {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl PanListener for SwipeController {
    fn on_drag_start(&self) {
        SwipeController::on_drag_start(self);
    }

    fn on_drag_move(&self, dx: f32, dy: f32) {
        SwipeController::on_drag_move(self, dx, dy);
    }

    fn on_drag_end(&self, dx: f32, vx: f32, vy: f32) {
        SwipeController::on_drag_end(self, dx, vx, vy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fling_velocity_lands_in_the_commit_band() {
        assert_eq!(clamp_fling_velocity(4.2), 4.2);
        assert_eq!(clamp_fling_velocity(0.5), MIN_FLING_VELOCITY);
        assert_eq!(clamp_fling_velocity(7.9), MAX_FLING_VELOCITY);
        assert_eq!(clamp_fling_velocity(-0.5), -MIN_FLING_VELOCITY);
        assert_eq!(clamp_fling_velocity(-7.9), -MAX_FLING_VELOCITY);
    }

    #[test]
    fn dead_stop_release_flings_right() {
        assert_eq!(clamp_fling_velocity(0.0), MIN_FLING_VELOCITY);
        assert_eq!(clamp_fling_velocity(-0.0), MIN_FLING_VELOCITY);
    }
}
