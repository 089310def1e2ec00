use crate::geometry::{Offset, raster, screen};
use crate::viewport::{ViewportTransform, Zoom};

use super::{GestureAction, GestureRouter, GestureState, InputEvent, Modifiers, PointerButton};

fn down(x: f32, y: f32, button: PointerButton, modifiers: Modifiers) -> InputEvent {
    InputEvent::PointerDown {
        position: screen(x, y),
        button,
        modifiers,
    }
}

fn moved(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerMove {
        position: screen(x, y),
    }
}

fn up(x: f32, y: f32) -> InputEvent {
    InputEvent::PointerUp {
        position: screen(x, y),
    }
}

fn zoomed_view() -> ViewportTransform {
    let mut view = ViewportTransform::default();
    view.set_view(2.0, Offset::new(10.0, 20.0));
    view
}

fn count_commits(actions: &[GestureAction]) -> usize {
    actions
        .iter()
        .filter(|action| matches!(action, GestureAction::CommitStroke))
        .count()
}

#[test]
fn primary_press_draws_at_raster_position() {
    let view = zoomed_view();
    let mut router = GestureRouter::default();
    let actions = router.route(
        &down(30.0, 40.0, PointerButton::Primary, Modifiers::default()),
        &view,
    );
    assert_eq!(actions[0], GestureAction::Stroke(raster(10.0, 10.0)));
    assert_eq!(router.state(), &GestureState::Drawing { dabs: 1 });
}

#[test]
fn drag_yields_one_commit() {
    let view = ViewportTransform::default();
    let mut router = GestureRouter::default();
    let mut actions = router.route(
        &down(5.0, 5.0, PointerButton::Primary, Modifiers::default()),
        &view,
    );
    for step in 0..40 {
        actions.extend(router.route(&moved(6.0 + step as f32, 5.0), &view));
    }
    assert_eq!(router.state(), &GestureState::Drawing { dabs: 41 });
    actions.extend(router.route(&up(46.0, 5.0), &view));

    let strokes = actions
        .iter()
        .filter(|action| matches!(action, GestureAction::Stroke(_)))
        .count();
    assert_eq!(strokes, 41);
    assert_eq!(count_commits(&actions), 1);
    assert!(router.state().is_idle());
}

#[test]
fn secondary_button_pans_from_anchor() {
    let view = zoomed_view();
    let mut router = GestureRouter::default();
    let actions = router.route(
        &down(100.0, 100.0, PointerButton::Secondary, Modifiers::default()),
        &view,
    );
    assert_eq!(actions, vec![GestureAction::Hover(None)]);

    let actions = router.route(&moved(130.0, 90.0), &view);
    assert_eq!(actions, vec![GestureAction::SetOffset(Offset::new(40.0, 10.0))]);

    let actions = router.route(&up(130.0, 90.0), &view);
    assert_eq!(count_commits(&actions), 0);
    assert!(router.state().is_idle());
}

#[test]
fn space_turns_primary_press_into_pan() {
    let view = ViewportTransform::default();
    let mut router = GestureRouter::default();
    let actions = router.route(
        &down(0.0, 0.0, PointerButton::Primary, Modifiers::SPACE),
        &view,
    );
    assert!(matches!(router.state(), GestureState::Panning { .. }));
    assert!(
        !actions
            .iter()
            .any(|action| matches!(action, GestureAction::Stroke(_)))
    );
}

#[test]
fn pinch_keeps_midpoint_anchored() {
    let view = ViewportTransform::default();
    let mut router = GestureRouter::default();
    router.route(
        &InputEvent::TouchStart {
            touches: vec![screen(90.0, 100.0), screen(110.0, 100.0)],
        },
        &view,
    );
    assert!(matches!(router.state(), GestureState::Pinching { .. }));

    let actions = router.route(
        &InputEvent::TouchMove {
            touches: vec![screen(80.0, 100.0), screen(120.0, 100.0)],
        },
        &view,
    );
    let [GestureAction::SetView { scale, offset }] = actions.as_slice() else {
        panic!("expected a view update, got {actions:?}");
    };
    assert!((scale - 2.0).abs() < 1e-5);
    assert!((offset.x + 100.0).abs() < 1e-4);
    assert!((offset.y + 100.0).abs() < 1e-4);

    router.route(
        &InputEvent::TouchEnd {
            touches: vec![screen(80.0, 100.0)],
        },
        &view,
    );
    assert!(router.state().is_idle());
}

#[test]
fn pinch_scale_is_clamped() {
    let view = ViewportTransform::default();
    let mut router = GestureRouter::default();
    router.route(
        &InputEvent::TouchStart {
            touches: vec![screen(0.0, 0.0), screen(10.0, 0.0)],
        },
        &view,
    );
    let actions = router.route(
        &InputEvent::TouchMove {
            touches: vec![screen(0.0, 0.0), screen(1000.0, 0.0)],
        },
        &view,
    );
    let [GestureAction::SetView { scale, .. }] = actions.as_slice() else {
        panic!("expected a view update");
    };
    assert!((scale - 5.0).abs() < f32::EPSILON);
}

#[test]
fn second_finger_commits_partial_stroke() {
    let view = ViewportTransform::default();
    let mut router = GestureRouter::default();
    router.route(
        &InputEvent::TouchStart {
            touches: vec![screen(10.0, 10.0)],
        },
        &view,
    );
    router.route(
        &InputEvent::TouchMove {
            touches: vec![screen(12.0, 10.0)],
        },
        &view,
    );
    let actions = router.route(
        &InputEvent::TouchStart {
            touches: vec![screen(12.0, 10.0), screen(60.0, 10.0)],
        },
        &view,
    );
    assert_eq!(count_commits(&actions), 1);
    assert!(matches!(router.state(), GestureState::Pinching { .. }));

    let actions = router.route(&InputEvent::TouchEnd { touches: vec![] }, &view);
    assert_eq!(count_commits(&actions), 0);
}

#[test]
fn wheel_zooms_at_pointer_with_clamp() {
    let view = ViewportTransform::default();
    let mut router = GestureRouter::new(0.001);
    let actions = router.route(
        &InputEvent::Wheel {
            position: screen(50.0, 60.0),
            delta_y: -500.0,
        },
        &view,
    );
    assert_eq!(
        actions[0],
        GestureAction::ZoomAt {
            anchor: screen(50.0, 60.0),
            zoom: Zoom::To(1.5),
        }
    );

    let actions = router.route(
        &InputEvent::Wheel {
            position: screen(50.0, 60.0),
            delta_y: 5000.0,
        },
        &view,
    );
    assert_eq!(
        actions[0],
        GestureAction::ZoomAt {
            anchor: screen(50.0, 60.0),
            zoom: Zoom::To(0.1),
        }
    );
}

#[test]
fn capture_loss_ends_stroke_with_commit() {
    let view = ViewportTransform::default();
    let mut router = GestureRouter::default();
    router.route(
        &down(1.0, 1.0, PointerButton::Primary, Modifiers::default()),
        &view,
    );
    let actions = router.route(&InputEvent::CaptureLost, &view);
    assert_eq!(
        actions,
        vec![GestureAction::CommitStroke, GestureAction::Hover(None)]
    );
    assert!(router.state().is_idle());

    router.route(
        &down(1.0, 1.0, PointerButton::Secondary, Modifiers::default()),
        &view,
    );
    let actions = router.route(&InputEvent::CaptureLost, &view);
    assert_eq!(count_commits(&actions), 0);
    assert!(router.state().is_idle());
}

#[test]
fn presses_during_a_gesture_are_ignored() {
    let view = ViewportTransform::default();
    let mut router = GestureRouter::default();
    router.route(
        &down(1.0, 1.0, PointerButton::Primary, Modifiers::default()),
        &view,
    );
    let actions = router.route(
        &down(1.0, 1.0, PointerButton::Secondary, Modifiers::default()),
        &view,
    );
    assert!(actions.is_empty());
    assert!(matches!(router.state(), GestureState::Drawing { .. }));
}

#[test]
fn idle_moves_only_hover() {
    let view = ViewportTransform::default();
    let mut router = GestureRouter::default();
    assert_eq!(
        router.route(&moved(3.0, 4.0), &view),
        vec![GestureAction::Hover(Some(screen(3.0, 4.0)))]
    );
    assert_eq!(
        router.route(&InputEvent::PointerLeave, &view),
        vec![GestureAction::Hover(None)]
    );
    assert!(router.route(&up(3.0, 4.0), &view).is_empty());
}
