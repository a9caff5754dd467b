use std::sync::Arc;

use multiverse::platform::{IntersectionEntry, IntersectionNotifier, Observation, ViewportIntersections};
use multiverse::rendering::Rect;
use multiverse::{RevealController, RevealState};

fn block(y: f64, height: f64) -> Rect {
    Rect { x: 0.0, y, width: 1000.0, height }
}

#[test]
fn latch_example_sequence() {
    let c = RevealController::new(0.1).expect("valid threshold");
    assert_eq!(c.state(), RevealState::Hidden);
    assert_eq!(c.observe_ratio(0.05), RevealState::Hidden);
    assert_eq!(c.observe_ratio(0.15), RevealState::Visible);
    assert_eq!(c.observe_ratio(0.0), RevealState::Visible);
}

#[test]
fn visible_state_survives_any_later_ratio() {
    let c = RevealController::default();
    c.observe_ratio(0.5);
    for r in [0.0, 0.01, 0.09, 1.0, 0.0] {
        assert_eq!(c.observe_ratio(r), RevealState::Visible);
    }
    assert!(c.is_visible());
}

#[test]
fn viewport_drives_reveal_and_disconnects() {
    let viewport = ViewportIntersections::new(600.0);
    let mut c = RevealController::new(0.1).unwrap();
    c.observe(&viewport, block(1000.0, 400.0));
    assert_eq!(viewport.observer_count(), 1);
    assert_eq!(c.state(), RevealState::Hidden);

    // 20px of 400 visible: 5%
    viewport.update(420.0);
    assert_eq!(c.state(), RevealState::Hidden);

    // 100px of 400 visible: 25%
    viewport.update(500.0);
    assert_eq!(c.state(), RevealState::Visible);
    assert_eq!(viewport.observer_count(), 0);

    viewport.update(0.0);
    assert_eq!(c.state(), RevealState::Visible);
}

#[test]
fn detached_controller_receives_no_further_notifications() {
    let viewport = ViewportIntersections::new(600.0);
    let mut c = RevealController::new(0.9).unwrap();
    c.observe(&viewport, block(1000.0, 400.0));
    viewport.update(500.0);
    viewport.update(0.0);
    let before = c.notifications();
    assert!(before > 0);

    c.detach();
    assert!(!c.is_observing());
    assert_eq!(viewport.observer_count(), 0);

    for y in [500.0, 0.0, 800.0, 0.0, 1000.0] {
        viewport.update(y);
    }
    assert_eq!(c.notifications(), before);
    assert_eq!(c.state(), RevealState::Hidden);
}

#[test]
fn dropping_controller_releases_observer() {
    let viewport = ViewportIntersections::new(600.0);
    {
        let mut c = RevealController::default();
        c.observe(&viewport, block(2000.0, 300.0));
        assert_eq!(viewport.observer_count(), 1);
    }
    assert_eq!(viewport.observer_count(), 0);
}

#[test]
fn controllers_are_independent() {
    let viewport = ViewportIntersections::new(600.0);
    let mut near = RevealController::default();
    let mut far = RevealController::default();
    near.observe(&viewport, block(700.0, 200.0));
    far.observe(&viewport, block(3000.0, 200.0));

    viewport.update(300.0);
    assert_eq!(near.state(), RevealState::Visible);
    assert_eq!(far.state(), RevealState::Hidden);
    assert_eq!(viewport.observer_count(), 1);
}

#[test]
fn already_visible_block_reveals_on_observe() {
    let viewport = ViewportIntersections::new(600.0);
    let mut c = RevealController::default();
    c.observe(&viewport, block(100.0, 200.0));
    assert_eq!(c.state(), RevealState::Visible);
    assert_eq!(viewport.observer_count(), 0);
}

#[test]
fn raw_observer_sees_threshold_crossings() {
    let viewport = ViewportIntersections::new(100.0);
    let seen = Arc::new(std::sync::Mutex::new(Vec::new()));
    let sink = seen.clone();
    let _sub = viewport.observe(
        block(200.0, 100.0),
        0.5,
        Arc::new(move |e: &IntersectionEntry| {
            sink.lock().unwrap().push((e.is_intersecting, e.intersection_ratio));
            Observation::Continue
        }),
    );
    viewport.update(140.0);
    viewport.update(160.0);
    let seen = seen.lock().unwrap();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], (false, 0.0));
    assert!(seen[1].0);
    assert_eq!(seen[1].1, 0.6);
}
