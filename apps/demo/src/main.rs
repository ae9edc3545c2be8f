//! Headless Swipedeck demo.
//!
//! Builds a four-card deck, then drives scripted pointer gestures and
//! button presses through the full pipeline (recognizer, controller,
//! animated values) against a manually pumped frame clock, logging the
//! presentation snapshot between flows.

use std::sync::Arc;

use log::{info, warn};
use swipedeck_core::{DefaultScheduler, Runtime, RuntimeHandle};
use swipedeck_foundation::{PanRecognizer, PointerEvent};
use swipedeck_ui::{Card, CardQueue, ImageSource, SwipeController};

const FRAME_NANOS: u64 = 16_666_667; // ~60 FPS

/// One monotonic clock for both pointer timestamps (ms) and frame times
/// (nanos), so gestures and animations agree on when "now" is.
#[derive(Default)]
struct DemoClock {
    now_nanos: u64,
}

impl DemoClock {
    fn now_ms(&self) -> i64 {
        (self.now_nanos / 1_000_000) as i64
    }

    fn advance_ms(&mut self, millis: u64) {
        self.now_nanos += millis * 1_000_000;
    }

    fn advance_frame(&mut self) -> u64 {
        self.now_nanos += FRAME_NANOS;
        self.now_nanos
    }
}

fn deck() -> CardQueue {
    let cards = vec![
        Card::new(1, ImageSource::new("cats/sweet.jpg"), "Sweet Cat"),
        Card::new(2, ImageSource::new("cats/sweeter.jpg"), "Sweeter Cat"),
        Card::new(3, ImageSource::new("cats/sweetest.jpg"), "Sweetest Cat"),
        Card::new(4, ImageSource::new("cats/aww.jpg"), "Aww"),
    ];
    CardQueue::new(cards).expect("demo deck is well formed")
}

/// Drag from `start` by `delta` in `steps` move events 10 ms apart, then
/// release. Speed and distance together decide commit vs settle.
fn swipe(
    recognizer: &mut PanRecognizer,
    clock: &mut DemoClock,
    start: (f32, f32),
    delta: (f32, f32),
    steps: u32,
) {
    recognizer.handle_event(PointerEvent::down(start.0, start.1, clock.now_ms()));
    for step in 1..=steps {
        clock.advance_ms(10);
        let progress = step as f32 / steps as f32;
        recognizer.handle_event(PointerEvent::moved(
            start.0 + delta.0 * progress,
            start.1 + delta.1 * progress,
            clock.now_ms(),
        ));
    }
    clock.advance_ms(10);
    recognizer.handle_event(PointerEvent::up(
        start.0 + delta.0,
        start.1 + delta.1,
        clock.now_ms(),
    ));
}

/// Drain frames until the runtime stops asking for them or the budget runs out.
fn pump_until_idle(handle: &RuntimeHandle, clock: &mut DemoClock, max_frames: u32) {
    for _ in 0..max_frames {
        if !handle.needs_frame() {
            return;
        }
        let frame_time = clock.advance_frame();
        handle.drain_frame_callbacks(frame_time);
    }
    warn!("frame budget exhausted with callbacks still pending");
}

fn log_frame(label: &str, controller: &SwipeController) {
    let frame = controller.snapshot();
    let top = frame
        .top_two
        .last()
        .map(|card| card.text.as_str())
        .unwrap_or("(none)");
    info!(
        "{label}: phase {:?}, top {top:?}, {} left, position ({:.1}, {:.1}), \
         rotation {:.1} deg, fade {:.2}, next scale {:.2}",
        frame.phase,
        controller.remaining(),
        frame.position.x,
        frame.position.y,
        frame.rotation_deg,
        frame.transition_opacity,
        frame.next_scale,
    );
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    println!("=== Swipedeck demo ===");
    println!("Scripted pointer gestures and buttons drive a four-card deck");
    println!("through the swipe state machine on a manual frame clock.");
    println!();

    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let handle = runtime.handle();
    let controller = SwipeController::new(handle.clone(), deck());
    let mut recognizer = controller.attach_recognizer();
    let mut clock = DemoClock::default();

    log_frame("start", &controller);

    // Fast rightward swipe, 170 px in 80 ms: commits and reveals the
    // next card.
    swipe(&mut recognizer, &mut clock, (60.0, 300.0), (170.0, -12.0), 8);
    pump_until_idle(&handle, &mut clock, 1200);
    log_frame("after fling", &controller);

    // Hesitant drag released short of the threshold: springs back,
    // nothing is dismissed.
    swipe(&mut recognizer, &mut clock, (60.0, 300.0), (90.0, 4.0), 16);
    pump_until_idle(&handle, &mut clock, 1200);
    log_frame("after hesitant drag", &controller);

    // Buttons clear the rest of the deck.
    controller.trigger_no();
    pump_until_idle(&handle, &mut clock, 1200);
    log_frame("after no button", &controller);

    while controller.remaining() > 0 {
        controller.trigger_yes();
        pump_until_idle(&handle, &mut clock, 1200);
        log_frame("after yes button", &controller);
    }

    println!();
    println!("Deck exhausted; a host would render the empty state here.");
}
