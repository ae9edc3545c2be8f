//! Pan gesture recognition over raw pointer events.

use std::rc::Rc;

use log::debug;
use swipedeck_animation::Offset;

use crate::pointer::{PointerEvent, PointerEventKind};
use crate::velocity_tracker::{VelocityTracker, MAX_PAN_VELOCITY};

/// Receives recognized pan callbacks.
///
/// Deltas are cumulative from the Down position; velocities are in logical
/// px per millisecond, capped at [`MAX_PAN_VELOCITY`].
pub trait PanListener {
    fn on_drag_start(&self);
    fn on_drag_move(&self, dx: f32, dy: f32);
    fn on_drag_end(&self, dx: f32, vx: f32, vy: f32);
}

/// Folds Down/Move/Up/Cancel pointer events into pan callbacks.
///
/// Move and Up without a tracked Down are dropped. Cancel releases the
/// gesture at the last observed delta with zero velocity, so a card past
/// the threshold still commits but nothing flings.
pub struct PanRecognizer {
    listener: Rc<dyn PanListener>,
    origin: Option<Offset>,
    last_delta: Offset,
    tracker_x: VelocityTracker,
    tracker_y: VelocityTracker,
}

impl PanRecognizer {
    pub fn new(listener: Rc<dyn PanListener>) -> Self {
        Self {
            listener,
            origin: None,
            last_delta: Offset::ZERO,
            tracker_x: VelocityTracker::new(),
            tracker_y: VelocityTracker::new(),
        }
    }

    /// True between a Down and its matching Up/Cancel.
    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    pub fn handle_event(&mut self, event: PointerEvent) {
        match event.kind {
            PointerEventKind::Down => {
                self.tracker_x.reset();
                self.tracker_y.reset();
                self.tracker_x.add_sample(event.time_ms, event.position.x);
                self.tracker_y.add_sample(event.time_ms, event.position.y);
                self.origin = Some(event.position);
                self.last_delta = Offset::ZERO;
                self.listener.on_drag_start();
            }
            PointerEventKind::Move => {
                let Some(origin) = self.origin else {
                    debug!("pan: move without a tracked pointer, dropping");
                    return;
                };
                self.tracker_x.add_sample(event.time_ms, event.position.x);
                self.tracker_y.add_sample(event.time_ms, event.position.y);
                let dx = event.position.x - origin.x;
                let dy = event.position.y - origin.y;
                self.last_delta = Offset::new(dx, dy);
                self.listener.on_drag_move(dx, dy);
            }
            PointerEventKind::Up => {
                let Some(origin) = self.origin.take() else {
                    debug!("pan: up without a tracked pointer, dropping");
                    return;
                };
                self.tracker_x.add_sample(event.time_ms, event.position.x);
                self.tracker_y.add_sample(event.time_ms, event.position.y);
                let dx = event.position.x - origin.x;
                let vx = self.tracker_x.velocity_clamped(MAX_PAN_VELOCITY);
                let vy = self.tracker_y.velocity_clamped(MAX_PAN_VELOCITY);
                self.finish_gesture();
                self.listener.on_drag_end(dx, vx, vy);
            }
            PointerEventKind::Cancel => {
                if self.origin.take().is_none() {
                    return;
                }
                let dx = self.last_delta.x;
                self.finish_gesture();
                self.listener.on_drag_end(dx, 0.0, 0.0);
            }
        }
    }

    fn finish_gesture(&mut self) {
        self.last_delta = Offset::ZERO;
        self.tracker_x.reset();
        self.tracker_y.reset();
    }
}
