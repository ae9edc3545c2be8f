//! The derived style tables: rotation, drag fade and the two verdict
//! labels as pure functions of the horizontal offset.

use swipedeck_ui::styles;

#[test]
fn rotation_tilts_with_the_drag_and_saturates() {
    assert_eq!(styles::rotation_deg(0.0), 0.0);
    assert_eq!(styles::rotation_deg(100.0), 15.0);
    assert_eq!(styles::rotation_deg(200.0), 30.0);
    assert_eq!(styles::rotation_deg(-200.0), -30.0);
    // Clamped past the stops: a long throw never over-rotates.
    assert_eq!(styles::rotation_deg(500.0), 30.0);
    assert_eq!(styles::rotation_deg(-500.0), -30.0);
}

#[test]
fn drag_opacity_dims_toward_either_edge() {
    assert_eq!(styles::drag_opacity(0.0), 1.0);
    assert_eq!(styles::drag_opacity(100.0), 0.75);
    assert_eq!(styles::drag_opacity(200.0), 0.5);
    assert_eq!(styles::drag_opacity(-200.0), 0.5);
    // Extends past the stops, all the way to fully transparent.
    assert_eq!(styles::drag_opacity(400.0), 0.0);
    assert_eq!(styles::drag_opacity(-400.0), 0.0);
}

#[test]
fn yes_label_grows_in_on_a_rightward_drag() {
    let at_rest = styles::yes_label(0.0);
    assert_eq!(at_rest.opacity, 0.0);
    assert_eq!(at_rest.scale, 0.5);
    assert_eq!(at_rest.rotation_deg, -30.0);

    let halfway = styles::yes_label(75.0);
    assert_eq!(halfway.opacity, 0.5);
    assert_eq!(halfway.scale, 0.75);

    let full = styles::yes_label(150.0);
    assert_eq!(full.opacity, 1.0);
    assert_eq!(full.scale, 1.0);
}

#[test]
fn yes_label_opacity_extends_while_scale_clamps() {
    let past = styles::yes_label(300.0);
    assert_eq!(past.opacity, 2.0, "opacity keeps the edge slope");
    assert_eq!(past.scale, 1.0, "scale pins at full size");

    let behind = styles::yes_label(-75.0);
    assert_eq!(behind.opacity, -0.5);
    assert_eq!(behind.scale, 0.5, "scale never shrinks below its floor");
}

#[test]
fn no_label_mirrors_for_leftward_drags() {
    let at_rest = styles::no_label(0.0);
    assert_eq!(at_rest.opacity, 0.0);
    assert_eq!(at_rest.scale, 0.5);
    assert_eq!(at_rest.rotation_deg, 30.0);

    let halfway = styles::no_label(-75.0);
    assert_eq!(halfway.opacity, 0.5);
    assert_eq!(halfway.scale, 0.75);

    let full = styles::no_label(-150.0);
    assert_eq!(full.opacity, 1.0);
    assert_eq!(full.scale, 1.0);

    let past = styles::no_label(-300.0);
    assert_eq!(past.opacity, 2.0);
    assert_eq!(past.scale, 1.0);
}

#[test]
fn labels_stay_put_under_opposite_motion() {
    // Dragging right, the no label goes negative rather than showing.
    let wrong_way = styles::no_label(75.0);
    assert!(wrong_way.opacity < 0.0);
    assert_eq!(wrong_way.scale, 0.5);

    let wrong_way = styles::yes_label(-150.0);
    assert!(wrong_way.opacity < 0.0);
    assert_eq!(wrong_way.scale, 0.5);
}
