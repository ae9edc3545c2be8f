//! Styles derived from the horizontal drag offset.
//!
//! Every visual here is a pure function of the top card's x position, so
//! the renderer can recompute them each frame without touching controller
//! state. Tables are built once and shared.

use std::sync::LazyLock;

use swipedeck_animation::Interpolation;

/// Fixed tilt applied to the accept/reject labels, degrees.
const LABEL_TILT_DEG: f32 = 30.0;

/// Card rotation: full tilt at 200px of drag, held there beyond.
static ROTATION: LazyLock<Interpolation> = LazyLock::new(|| {
    Interpolation::new(vec![-200.0, 0.0, 200.0], vec![-30.0, 0.0, 30.0]).with_clamp()
});

/// Image fade while dragging. Extrapolates past the stops, so a long
/// throw keeps dimming below 0.5.
static DRAG_OPACITY: LazyLock<Interpolation> =
    LazyLock::new(|| Interpolation::new(vec![-200.0, 0.0, 200.0], vec![0.5, 1.0, 0.5]));

static YES_OPACITY: LazyLock<Interpolation> =
    LazyLock::new(|| Interpolation::new(vec![0.0, 150.0], vec![0.0, 1.0]));

static YES_SCALE: LazyLock<Interpolation> =
    LazyLock::new(|| Interpolation::new(vec![0.0, 150.0], vec![0.5, 1.0]).with_clamp());

static NO_OPACITY: LazyLock<Interpolation> =
    LazyLock::new(|| Interpolation::new(vec![-150.0, 0.0], vec![1.0, 0.0]));

static NO_SCALE: LazyLock<Interpolation> =
    LazyLock::new(|| Interpolation::new(vec![-150.0, 0.0], vec![1.0, 0.5]).with_clamp());

/// Opacity, scale and tilt for one of the two verdict labels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelStyle {
    pub opacity: f32,
    pub scale: f32,
    pub rotation_deg: f32,
}

/// Rotation of the top card in degrees for a horizontal offset `x`.
pub fn rotation_deg(x: f32) -> f32 {
    ROTATION.eval(x)
}

/// Opacity of the top card's image while it is being dragged.
pub fn drag_opacity(x: f32) -> f32 {
    DRAG_OPACITY.eval(x)
}

/// The accept label, fading and growing in as the card moves right.
pub fn yes_label(x: f32) -> LabelStyle {
    LabelStyle {
        opacity: YES_OPACITY.eval(x),
        scale: YES_SCALE.eval(x),
        rotation_deg: -LABEL_TILT_DEG,
    }
}

/// The reject label, the mirror image for leftward movement.
pub fn no_label(x: f32) -> LabelStyle {
    LabelStyle {
        opacity: NO_OPACITY.eval(x),
        scale: NO_SCALE.eval(x),
        rotation_deg: LABEL_TILT_DEG,
    }
}
