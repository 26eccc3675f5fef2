// Host-side tests for pointer throttling.

use backdrop_core::constants::POINTER_THROTTLE_MS;
use backdrop_core::{PointerTracker, Throttle, Vec2};

#[test]
fn burst_of_events_is_capped_by_the_window() {
    let mut tracker = PointerTracker::default();
    let mut accepted_at = Vec::new();
    // 20 events, 5 ms apart, over 100 ms
    for i in 0..20 {
        let t = i as f64 * 5.0;
        if tracker.on_move(Vec2::new(i as f32, 0.0), t) {
            accepted_at.push(t);
        }
    }
    assert!(accepted_at.len() <= 7, "accepted {accepted_at:?}");
    assert_eq!(accepted_at, vec![0.0, 20.0, 40.0, 60.0, 80.0]);
    assert_eq!(tracker.accepted(), accepted_at.len() as u64);
    assert_eq!(tracker.latest(), Some(Vec2::new(16.0, 0.0)));
}

#[test]
fn first_event_is_always_accepted() {
    let mut tracker = PointerTracker::default();
    assert_eq!(tracker.latest(), None);
    assert!(tracker.on_move(Vec2::new(3.0, 4.0), 1_700_000_000_000.0));
    assert_eq!(tracker.latest(), Some(Vec2::new(3.0, 4.0)));
}

#[test]
fn dropped_events_do_not_replace_the_coordinate() {
    let mut tracker = PointerTracker::default();
    tracker.on_move(Vec2::new(10.0, 10.0), 100.0);
    assert!(!tracker.on_move(Vec2::new(99.0, 99.0), 110.0));
    assert_eq!(tracker.latest(), Some(Vec2::new(10.0, 10.0)));
}

#[test]
fn window_boundary_is_inclusive() {
    let mut throttle = Throttle::new(POINTER_THROTTLE_MS);
    assert!(throttle.accept(0.0));
    assert!(!throttle.accept(POINTER_THROTTLE_MS - 0.01));
    assert!(throttle.accept(POINTER_THROTTLE_MS));
}

#[test]
fn backwards_clock_restarts_the_window() {
    let mut throttle = Throttle::new(POINTER_THROTTLE_MS);
    assert!(throttle.accept(1_000.0));
    assert!(throttle.accept(500.0));
    assert!(!throttle.accept(510.0));
    assert!(throttle.accept(516.0));
}
