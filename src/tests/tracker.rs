use super::{toc_scroll_target, ActiveSectionTracker, HeadingEntry, Phase};
use crate::observer::{IntersectionEvent, Viewport};

fn entry(id: &str, position: usize) -> HeadingEntry {
    HeadingEntry {
        id: id.to_string(),
        position,
    }
}

fn three_entries() -> Vec<HeadingEntry> {
    vec![entry("alpha", 0), entry("beta", 500), entry("gamma", 1200)]
}

fn crossing_event() -> Vec<IntersectionEvent> {
    vec![IntersectionEvent {
        index: 0,
        is_intersecting: false,
    }]
}

#[test]
fn test_midpoint_in_middle_section_activates_it() {
    let mut tracker = ActiveSectionTracker::new(three_entries());
    // scroll 100 + height 1000 / 2 = midpoint 600
    let active = tracker.update_active_item(Viewport::new(100, 1000));
    assert_eq!(active, Some(1));
    assert_eq!(tracker.active_id(), Some("beta"));
}

#[test]
fn test_midpoint_near_top_activates_first() {
    let mut tracker = ActiveSectionTracker::new(three_entries());
    // midpoint 50
    let active = tracker.update_active_item(Viewport::new(0, 100));
    assert_eq!(active, Some(0));
}

#[test]
fn test_midpoint_past_last_heading_activates_last() {
    let mut tracker = ActiveSectionTracker::new(three_entries());
    // midpoint 1500, past the final heading
    let active = tracker.update_active_item(Viewport::new(1000, 1000));
    assert_eq!(active, Some(2));
}

#[test]
fn test_at_most_one_entry_active_across_offsets() {
    let mut tracker = ActiveSectionTracker::new(three_entries());
    for scroll in [10, 250, 600, 900, 1400, 5000] {
        let active = tracker.update_active_item(Viewport::new(scroll, 200));
        assert!(active.is_some(), "midpoint {} left no highlight", scroll + 100);
        assert_eq!(active, tracker.active());
    }
}

#[test]
fn test_no_entries_never_highlights() {
    let mut tracker = ActiveSectionTracker::new(Vec::new());
    assert_eq!(tracker.update_active_item(Viewport::new(300, 100)), None);
}

#[test]
fn test_single_entry_never_highlights() {
    let mut tracker = ActiveSectionTracker::new(vec![entry("only", 40)]);
    assert_eq!(tracker.update_active_item(Viewport::new(300, 100)), None);
    assert_eq!(tracker.active(), None);
}

#[test]
fn test_update_is_idempotent_under_unchanged_viewport() {
    let mut tracker = ActiveSectionTracker::new(three_entries());
    let viewport = Viewport::new(100, 1000);
    let first = tracker.update_active_item(viewport);
    let second = tracker.update_active_item(viewport);
    assert_eq!(first, second);
    assert_eq!(tracker.active(), Some(1));
}

#[test]
fn test_select_forces_highlight_and_arms_override() {
    let mut tracker = ActiveSectionTracker::new(three_entries());
    tracker.update_active_item(Viewport::new(0, 100));
    assert_eq!(tracker.active(), Some(0));

    tracker.select(2);
    assert_eq!(tracker.active(), Some(2));
    assert_eq!(tracker.phase(), Phase::Override);
}

#[test]
fn test_select_out_of_range_is_ignored() {
    let mut tracker = ActiveSectionTracker::new(three_entries());
    tracker.update_active_item(Viewport::new(100, 1000));
    tracker.select(17);
    assert_eq!(tracker.active(), Some(1));
    assert_eq!(tracker.phase(), Phase::Tracking);
}

#[test]
fn test_override_suppresses_exactly_one_batch() {
    let mut tracker = ActiveSectionTracker::new(three_entries());
    tracker.select(2);

    // Scroll position says "beta", but the first delivered batch is swallowed.
    let viewport = Viewport::new(100, 1000);
    let after_first = tracker.on_intersections(&crossing_event(), viewport);
    assert_eq!(after_first, Some(2), "first batch must not undo the click");
    assert_eq!(tracker.phase(), Phase::Tracking);

    // The batch after that resumes normal computation.
    let after_second = tracker.on_intersections(&crossing_event(), viewport);
    assert_eq!(after_second, Some(1));
}

#[test]
fn test_batch_size_does_not_affect_suppression() {
    let mut tracker = ActiveSectionTracker::new(three_entries());
    tracker.select(0);

    let batch: Vec<IntersectionEvent> = (0..3)
        .map(|index| IntersectionEvent {
            index,
            is_intersecting: true,
        })
        .collect();
    let active = tracker.on_intersections(&batch, Viewport::new(1000, 1000));
    assert_eq!(active, Some(0), "one batch is one suppression, whatever its size");
}

#[test]
fn test_empty_slice_is_not_a_delivery() {
    let mut tracker = ActiveSectionTracker::new(three_entries());
    tracker.select(2);
    tracker.on_intersections(&[], Viewport::new(100, 1000));
    assert_eq!(tracker.phase(), Phase::Override, "no delivery, no consumption");
    assert_eq!(tracker.active(), Some(2));
}

#[test]
fn test_attach_computes_initial_highlight() {
    let mut tracker = ActiveSectionTracker::new(three_entries());
    let active = tracker.attach(Viewport::new(0, 100));
    assert_eq!(active, Some(0));
    assert!(tracker.attached());
}

#[test]
fn test_detach_stops_scroll_updates() {
    let mut tracker = ActiveSectionTracker::new(three_entries());
    tracker.attach(Viewport::new(0, 100));
    tracker.detach();
    assert!(!tracker.attached());

    let active = tracker.handle_scroll(Viewport::new(1000, 1000));
    assert_eq!(active, Some(0), "detached tracker keeps its last highlight");
}

#[test]
fn test_handle_scroll_without_state_change_leaves_override_armed() {
    let mut tracker = ActiveSectionTracker::new(three_entries());
    tracker.attach(Viewport::new(0, 100));
    tracker.select(2);

    // Midpoint moves 50 -> 70: no heading crosses it and full visibility is
    // unchanged, so neither watcher delivers and the override survives.
    tracker.handle_scroll(Viewport::new(20, 100));
    assert_eq!(tracker.phase(), Phase::Override);
    assert_eq!(tracker.active(), Some(2));
}

#[test]
fn test_handle_scroll_consumes_override_then_resumes() {
    let mut tracker = ActiveSectionTracker::new(three_entries());
    tracker.attach(Viewport::new(0, 100));
    tracker.select(2);

    // Only the full-visibility watcher changes state here (rows 0 and 500 swap
    // in/out of [440, 540)), so exactly one batch is delivered and swallowed.
    tracker.handle_scroll(Viewport::new(440, 100));
    assert_eq!(tracker.active(), Some(2));
    assert_eq!(tracker.phase(), Phase::Tracking);

    // Next change delivers again and recomputation takes over: midpoint 510 is
    // past "beta" with "gamma" still ahead.
    let active = tracker.handle_scroll(Viewport::new(460, 100));
    assert_eq!(active, Some(1));
}

#[test]
fn test_toc_scroll_target_centers_entry() {
    assert_eq!(toc_scroll_target(10, 8), 6);
    assert_eq!(toc_scroll_target(40, 20), 30);
}

#[test]
fn test_toc_scroll_target_saturates_at_zero() {
    assert_eq!(toc_scroll_target(2, 10), 0);
    assert_eq!(toc_scroll_target(0, 0), 0);
}
