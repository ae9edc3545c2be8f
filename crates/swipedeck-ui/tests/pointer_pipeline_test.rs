//! Raw pointer events through the recognizer into the controller: the
//! whole input pipeline end to end, including readiness and Cancel.

use std::sync::Arc;

use swipedeck_animation::Offset;
use swipedeck_core::{DefaultScheduler, Runtime, RuntimeHandle};
use swipedeck_foundation::PointerEvent;
use swipedeck_ui::{Card, CardQueue, ImageSource, SwipeController, SwipePhase};

const FRAME_NANOS: u64 = 16_666_667; // ~60 FPS

fn fixture(count: u64) -> (Runtime, RuntimeHandle, SwipeController) {
    let cards = (1..=count)
        .map(|id| Card::new(id, ImageSource::new(format!("cat-{id}")), format!("Cat {id}")))
        .collect();
    let runtime = Runtime::new(Arc::new(DefaultScheduler));
    let handle = runtime.handle();
    let controller =
        SwipeController::new(handle.clone(), CardQueue::new(cards).expect("valid deck"));
    (runtime, handle, controller)
}

fn pump(handle: &RuntimeHandle, start_nanos: u64, frames: u32) -> u64 {
    let mut frame_time = start_nanos;
    for _ in 0..frames {
        frame_time += FRAME_NANOS;
        handle.drain_frame_callbacks(frame_time);
    }
    frame_time
}

#[test]
fn attach_flips_readiness() {
    let (_runtime, _handle, controller) = fixture(2);
    assert!(!controller.is_ready());

    let _recognizer = controller.attach_recognizer();
    assert!(controller.is_ready());
}

#[test]
fn a_fast_rightward_swipe_dismisses_the_top_card() {
    let (_runtime, handle, controller) = fixture(3);
    let mut recognizer = controller.attach_recognizer();

    recognizer.handle_event(PointerEvent::down(100.0, 300.0, 0));
    assert_eq!(controller.phase(), SwipePhase::Dragging);

    // 2 px/ms rightward, 180 px total: well past the threshold.
    for step in 1..=8 {
        let time = step * 10;
        recognizer.handle_event(PointerEvent::moved(100.0 + time as f32 * 2.0, 300.0, time));
    }
    recognizer.handle_event(PointerEvent::up(280.0, 300.0, 90));
    assert_eq!(controller.phase(), SwipePhase::Committing);

    pump(&handle, 0, 400);
    assert_eq!(controller.phase(), SwipePhase::Idle);
    assert_eq!(controller.remaining(), 2);
    assert_eq!(
        controller.snapshot().top_two.last().map(|card| card.id),
        Some(2)
    );
}

#[test]
fn cancel_mid_drag_springs_the_card_back() {
    let (_runtime, handle, controller) = fixture(3);
    let mut recognizer = controller.attach_recognizer();

    recognizer.handle_event(PointerEvent::down(0.0, 0.0, 0));
    recognizer.handle_event(PointerEvent::moved(80.0, 10.0, 16));
    recognizer.handle_event(PointerEvent::cancel(32));
    assert_eq!(controller.phase(), SwipePhase::Settling);

    pump(&handle, 0, 600);
    assert_eq!(controller.phase(), SwipePhase::Idle);
    assert_eq!(controller.remaining(), 3);
    assert_eq!(controller.snapshot().position, Offset::ZERO);
}

#[test]
fn cancel_past_the_threshold_still_commits() {
    let (_runtime, handle, controller) = fixture(3);
    let mut recognizer = controller.attach_recognizer();

    recognizer.handle_event(PointerEvent::down(0.0, 0.0, 0));
    recognizer.handle_event(PointerEvent::moved(150.0, 0.0, 16));
    recognizer.handle_event(PointerEvent::cancel(32));
    assert_eq!(controller.phase(), SwipePhase::Committing);

    let frame_time = pump(&handle, 0, 60);
    let x = controller.snapshot().position.x;
    assert!(x > 250.0, "a dead-stop cancel still flings right, got {x}");

    pump(&handle, frame_time, 400);
    assert_eq!(controller.remaining(), 2);
}

#[test]
fn stray_events_before_a_down_reach_nobody() {
    let (_runtime, handle, controller) = fixture(2);
    let mut recognizer = controller.attach_recognizer();

    recognizer.handle_event(PointerEvent::moved(90.0, 0.0, 5));
    recognizer.handle_event(PointerEvent::up(120.0, 0.0, 10));
    assert_eq!(controller.phase(), SwipePhase::Idle);
    assert!(!recognizer.is_tracking());

    pump(&handle, 0, 10);
    assert_eq!(controller.remaining(), 2);
}

#[test]
fn a_second_swipe_waits_for_idle() {
    let (_runtime, handle, controller) = fixture(3);
    let mut recognizer = controller.attach_recognizer();

    recognizer.handle_event(PointerEvent::down(0.0, 0.0, 0));
    recognizer.handle_event(PointerEvent::moved(150.0, 0.0, 50));
    recognizer.handle_event(PointerEvent::up(150.0, 0.0, 100));
    let frame_time = pump(&handle, 0, 30);
    assert_eq!(controller.phase(), SwipePhase::Transitioning);

    // A full gesture lands while the transition runs; every event of it
    // is dropped.
    recognizer.handle_event(PointerEvent::down(0.0, 0.0, 1000));
    recognizer.handle_event(PointerEvent::moved(200.0, 0.0, 1050));
    recognizer.handle_event(PointerEvent::up(200.0, 0.0, 1100));

    let frame_time = pump(&handle, frame_time, 400);
    assert_eq!(controller.phase(), SwipePhase::Idle);
    assert_eq!(controller.remaining(), 2, "the dropped gesture must not double-pop");

    // Once idle, swiping works again.
    recognizer.handle_event(PointerEvent::down(0.0, 0.0, 2000));
    recognizer.handle_event(PointerEvent::moved(150.0, 0.0, 2050));
    recognizer.handle_event(PointerEvent::up(150.0, 0.0, 2100));
    pump(&handle, frame_time, 400);
    assert_eq!(controller.remaining(), 1);
}
