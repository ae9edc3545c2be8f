//! Pointer input types.

use swipedeck_animation::Offset;

/// What a pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    /// The gesture was taken away from us (system interruption, pointer
    /// left the surface). Treated as a release with no velocity.
    Cancel,
}

/// One single-pointer event in component-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub position: Offset,
    pub time_ms: i64,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32, time_ms: i64) -> Self {
        Self {
            kind: PointerEventKind::Down,
            position: Offset::new(x, y),
            time_ms,
        }
    }

    pub fn moved(x: f32, y: f32, time_ms: i64) -> Self {
        Self {
            kind: PointerEventKind::Move,
            position: Offset::new(x, y),
            time_ms,
        }
    }

    pub fn up(x: f32, y: f32, time_ms: i64) -> Self {
        Self {
            kind: PointerEventKind::Up,
            position: Offset::new(x, y),
            time_ms,
        }
    }

    pub fn cancel(time_ms: i64) -> Self {
        Self {
            kind: PointerEventKind::Cancel,
            position: Offset::ZERO,
            time_ms,
        }
    }
}
