// Host-side tests for the scroll and pointer trackers.

use field_core::{
    normalize_client, scroll_progress, ClickRecord, PointerTracker, PrimaryTouch, ScrollTracker,
};
use glam::Vec2;

#[test]
fn scroll_progress_spans_the_page() {
    assert_eq!(scroll_progress(0.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(1000.0, 3000.0, 1000.0), 0.5);
    assert_eq!(scroll_progress(2000.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn scroll_progress_clamps_overscroll() {
    // Elastic scrolling can report offsets outside the scrollable range
    assert_eq!(scroll_progress(-40.0, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(2300.0, 3000.0, 1000.0), 1.0);
}

#[test]
fn page_that_fits_the_viewport_stays_at_zero() {
    let mut tracker = ScrollTracker::new();
    tracker.update(0.0, 800.0, 800.0);
    assert_eq!(tracker.progress(), 0.0);
    tracker.update(0.0, 600.0, 800.0);
    assert_eq!(tracker.progress(), 0.0);
}

#[test]
fn non_finite_metrics_give_zero() {
    assert_eq!(scroll_progress(f64::NAN, 3000.0, 1000.0), 0.0);
    assert_eq!(scroll_progress(100.0, f64::NAN, 1000.0), 0.0);
    assert_eq!(scroll_progress(100.0, 3000.0, f64::INFINITY), 0.0);
}

#[test]
fn tracker_keeps_the_latest_value() {
    let mut tracker = ScrollTracker::new();
    assert_eq!(tracker.progress(), 0.0);
    tracker.update(500.0, 2000.0, 1000.0);
    assert_eq!(tracker.progress(), 0.5);
    tracker.update(250.0, 2000.0, 1000.0);
    assert_eq!(tracker.progress(), 0.25);
}

#[test]
fn pointer_normalisation_flips_y() {
    assert_eq!(normalize_client(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
    assert_eq!(normalize_client(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
    assert_eq!(normalize_client(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
    assert_eq!(normalize_client(200.0, 450.0, 800.0, 600.0), Vec2::new(-0.5, -0.5));
}

#[test]
fn degenerate_viewport_maps_to_centre() {
    assert_eq!(normalize_client(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
    assert_eq!(normalize_client(10.0, 10.0, 800.0, 0.0), Vec2::ZERO);
    assert_eq!(normalize_client(10.0, 10.0, f64::NAN, 600.0), Vec2::ZERO);
    assert_eq!(normalize_client(f64::INFINITY, 10.0, 800.0, 600.0), Vec2::ZERO);
}

#[test]
fn pointer_starts_centred_without_a_click() {
    let tracker = PointerTracker::new();
    assert_eq!(tracker.position(), Vec2::ZERO);
    assert_eq!(tracker.last_click(), None);
}

#[test]
fn mouse_move_updates_position() {
    let mut tracker = PointerTracker::new();
    tracker.on_move(800.0, 0.0, 800.0, 600.0);
    assert_eq!(tracker.position(), Vec2::new(1.0, 1.0));
    assert_eq!(tracker.last_click(), None);
}

#[test]
fn click_is_recorded_with_timestamp() {
    let mut tracker = PointerTracker::new();
    tracker.on_click(400.0, 0.0, 800.0, 600.0, 1234.5);
    assert_eq!(
        tracker.last_click(),
        Some(ClickRecord {
            position: Vec2::new(0.0, 1.0),
            timestamp_ms: 1234.5,
        })
    );
    // A click does not move the repulsor
    assert_eq!(tracker.position(), Vec2::ZERO);

    tracker.on_click(0.0, 600.0, 800.0, 600.0, 2000.0);
    let click = tracker.last_click().expect("click recorded");
    assert_eq!(click.position, Vec2::new(-1.0, -1.0));
    assert_eq!(click.timestamp_ms, 2000.0);
}

#[test]
fn touch_uses_the_first_contact() {
    let mut tracker = PointerTracker::new();
    tracker.on_touch_move(&[(0.0, 0.0), (800.0, 600.0)], 800.0, 600.0);
    assert_eq!(tracker.position(), Vec2::new(-1.0, 1.0));

    tracker.on_touch_start(&[(800.0, 600.0), (0.0, 0.0)], 800.0, 600.0, 99.0);
    let tap = tracker.last_click().expect("tap recorded");
    assert_eq!(tap.position, Vec2::new(1.0, -1.0));
    assert_eq!(tap.timestamp_ms, 99.0);
}

#[test]
fn empty_touch_list_is_ignored() {
    let mut tracker = PointerTracker::new();
    tracker.on_move(200.0, 150.0, 800.0, 600.0);
    let before = tracker;
    tracker.on_touch_move(&[], 800.0, 600.0);
    tracker.on_touch_start(&[], 800.0, 600.0, 10.0);
    assert_eq!(tracker, before);
}

#[test]
fn only_the_first_finger_down_is_primary() {
    let mut touch = PrimaryTouch::new();
    assert_eq!(touch.id(), None);
    assert!(touch.start(3));
    assert!(!touch.start(8));
    assert!(touch.is_primary(3));
    assert!(!touch.is_primary(8));

    // Lifting a secondary finger leaves the primary in place
    touch.end(8);
    assert_eq!(touch.id(), Some(3));

    touch.end(3);
    assert_eq!(touch.id(), None);
    assert!(touch.start(8));
    assert!(touch.is_primary(8));
}

#[test]
fn secondary_contacts_do_not_move_the_pointer() {
    let mut touch = PrimaryTouch::new();
    let mut tracker = PointerTracker::new();
    // (id, client x, client y) events as a windowing system reports them
    let events = [(1, 0.0, 0.0), (2, 800.0, 600.0), (1, 200.0, 150.0), (2, 700.0, 50.0)];
    for (i, &(id, x, y)) in events.iter().enumerate() {
        if i < 2 {
            if touch.start(id) {
                tracker.on_touch_start(&[(x, y)], 800.0, 600.0, i as f64);
            }
        } else if touch.is_primary(id) {
            tracker.on_touch_move(&[(x, y)], 800.0, 600.0);
        }
    }
    assert_eq!(tracker.position(), Vec2::new(-0.5, 0.5));
    let tap = tracker.last_click().expect("first finger tapped");
    assert_eq!(tap.position, Vec2::new(-1.0, 1.0));
    assert_eq!(tap.timestamp_ms, 0.0);
}
