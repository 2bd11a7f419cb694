use super::{IntersectionWatcher, TriggerMode, Viewport, WatcherSet};

const POSITIONS: [usize; 3] = [0, 500, 1200];

#[test]
fn test_viewport_midpoint() {
    assert_eq!(Viewport::new(100, 1000).midpoint(), 600);
    assert_eq!(Viewport::new(0, 0).midpoint(), 0);
}

#[test]
fn test_viewport_full_containment() {
    let viewport = Viewport::new(10, 5);
    assert!(viewport.fully_contains(10));
    assert!(viewport.fully_contains(14));
    assert!(!viewport.fully_contains(9));
    assert!(!viewport.fully_contains(15));
}

#[test]
fn test_first_notification_reports_every_target() {
    let mut watcher = IntersectionWatcher::new(TriggerMode::CenterLine, POSITIONS.to_vec());
    let batch = watcher.notify(Viewport::new(0, 100));
    assert_eq!(batch.len(), 3);
    assert!(batch[0].is_intersecting);
    assert!(!batch[1].is_intersecting);
    assert!(!batch[2].is_intersecting);
}

#[test]
fn test_unchanged_viewport_yields_empty_batch() {
    let mut watcher = IntersectionWatcher::new(TriggerMode::CenterLine, POSITIONS.to_vec());
    let viewport = Viewport::new(0, 100);
    watcher.notify(viewport);
    assert!(watcher.notify(viewport).is_empty());
}

#[test]
fn test_center_line_fires_on_midpoint_crossing() {
    let mut watcher = IntersectionWatcher::new(TriggerMode::CenterLine, POSITIONS.to_vec());
    watcher.notify(Viewport::new(0, 100));

    // Midpoint jumps from 50 straight past row 500; the crossing still registers.
    let batch = watcher.notify(Viewport::new(600, 100));
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].index, 1);
    assert!(batch[0].is_intersecting);

    // Jump back below: the same target drops out again.
    let batch = watcher.notify(Viewport::new(0, 100));
    assert_eq!(batch.len(), 1);
    assert_eq!(batch[0].index, 1);
    assert!(!batch[0].is_intersecting);
}

#[test]
fn test_full_visibility_fires_on_enter_and_leave() {
    let mut watcher = IntersectionWatcher::new(TriggerMode::FullVisibility, POSITIONS.to_vec());
    watcher.notify(Viewport::new(0, 100));

    // Row 0 leaves, row 500 enters.
    let batch = watcher.notify(Viewport::new(450, 100));
    assert_eq!(batch.len(), 2);
    assert_eq!((batch[0].index, batch[0].is_intersecting), (0, false));
    assert_eq!((batch[1].index, batch[1].is_intersecting), (1, true));
}

#[test]
fn test_multiple_changes_arrive_as_one_batch() {
    let mut watcher = IntersectionWatcher::new(TriggerMode::FullVisibility, vec![5, 6, 7]);
    watcher.notify(Viewport::new(0, 100));

    // All three rows scroll out of view together.
    let batch = watcher.notify(Viewport::new(50, 100));
    assert_eq!(batch.len(), 3);
    assert!(batch.iter().all(|event| !event.is_intersecting));
}

#[test]
fn test_watcher_set_drops_empty_batches() {
    let mut set = WatcherSet::new(&POSITIONS);
    let initial = set.notify(Viewport::new(0, 100));
    assert_eq!(initial.len(), 2, "both watchers deliver their initial state");

    let quiet = set.notify(Viewport::new(0, 100));
    assert!(quiet.is_empty());
}

#[test]
fn test_watcher_set_delivers_watchers_separately() {
    let mut set = WatcherSet::new(&POSITIONS);
    set.notify(Viewport::new(0, 100));

    // Midpoint 490 -> 510 flips the center watcher only.
    set.notify(Viewport::new(440, 100));
    let batches = set.notify(Viewport::new(460, 100));
    assert_eq!(batches.len(), 1);
    assert_eq!(batches[0][0].index, 1);
}
