//! The core state machine deciding which section is active at a given scroll position.
//!
//! The tracker owns an ordered list of heading positions captured once at load time and
//! answers one question: which table-of-contents entry should be highlighted right now?
//! Scroll-driven recomputation arrives through visibility watcher batches; user selection
//! arrives through [`ActiveSectionTracker::select`] and takes precedence over exactly one
//! subsequent batch, so a click is never immediately undone by the scroll it causes.

use crate::observer::{IntersectionEvent, Viewport, WatcherSet};

/// One table-of-contents target: a heading id and its rendered row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadingEntry {
    /// Slug identifying the heading, the anchor-id analogue.
    pub id: String,
    /// Rendered row of the heading, measured once at load and never refreshed.
    pub position: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Tracks whether scroll-driven recomputation is currently suppressed.
///
/// A user selection and the scroll it triggers race: the navigation scroll would
/// otherwise recompute the active entry and may land on a neighbour of the one clicked.
/// The tracker therefore runs a two-state machine:
///
/// ```text
/// Tracking -> (select) -> Override -> (one delivered batch) -> Tracking
/// ```
///
/// Override is consumed by exactly one delivered watcher batch, however many entries
/// that batch carries. The batch after that resumes normal computation.
pub enum Phase {
    /// Watcher batches recompute the active entry.
    Tracking,
    /// The next delivered batch is swallowed without recomputation.
    Override,
}

/// Decides which heading is active and where the sidebar should scroll to show it.
pub struct ActiveSectionTracker {
    /// Heading targets in document order, positions ascending.
    items: Vec<HeadingEntry>,
    /// Suppression state machine.
    phase: Phase,
    /// Index into `items` of the highlighted entry, if any.
    active: Option<usize>,
    /// Visibility watchers, present while attached.
    watchers: Option<WatcherSet>,
}

impl ActiveSectionTracker {
    #[must_use]
    /// Creates a detached tracker over headings in document order.
    pub fn new(items: Vec<HeadingEntry>) -> Self {
        Self {
            items,
            phase: Phase::Tracking,
            active: None,
            watchers: None,
        }
    }

    #[must_use]
    /// The heading targets, in document order.
    pub fn items(&self) -> &[HeadingEntry] {
        &self.items
    }

    #[must_use]
    /// Index of the highlighted entry, if one is set.
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    /// Id of the highlighted entry, if one is set.
    pub fn active_id(&self) -> Option<&str> {
        self.active.map(|index| self.items[index].id.as_str())
    }

    #[must_use]
    /// Current suppression phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    /// Whether visibility watchers are currently wired up.
    pub fn attached(&self) -> bool {
        self.watchers.is_some()
    }

    /// Wires up the watcher pair and computes the initial highlight.
    ///
    /// Mirrors load-time initialization: the active entry is computed once immediately
    /// so the sidebar reflects the starting scroll position, then the watchers' initial
    /// deliveries are processed like any later batch. Attaching twice restarts the
    /// watchers from scratch.
    pub fn attach(&mut self, viewport: Viewport) -> Option<usize> {
        let positions: Vec<usize> = self.items.iter().map(|entry| entry.position).collect();
        self.watchers = Some(WatcherSet::new(&positions));
        self.phase = Phase::Tracking;
        self.update_active_item(viewport);
        self.handle_scroll(viewport)
    }

    /// Drops the watchers; the tracker keeps its items and can be attached again.
    pub fn detach(&mut self) {
        self.watchers = None;
    }

    /// Recomputes the active entry from the current viewport.
    ///
    /// The reference offset is the vertical midpoint of the viewport. Entries are
    /// scanned pairwise in order: the entry whose position straddles the midpoint with
    /// its successor wins. If the midpoint is past the final heading, the final heading
    /// wins. With fewer than two entries no pair exists and nothing is highlighted.
    /// Calling this twice under an unchanged viewport is idempotent.
    pub fn update_active_item(&mut self, viewport: Viewport) -> Option<usize> {
        let offset = viewport.midpoint();
        self.active = None;
        for i in 1..self.items.len() {
            if self.items[i - 1].position < offset && self.items[i].position > offset {
                self.active = Some(i - 1);
                break;
            } else if i == self.items.len() - 1 && self.items[i].position < offset {
                self.active = Some(i);
                break;
            }
        }
        self.active
    }

    /// User selection: force the highlight onto `index` and arm the override.
    ///
    /// Out-of-range indices are ignored, leaving both highlight and phase untouched.
    pub fn select(&mut self, index: usize) {
        if index >= self.items.len() {
            return;
        }
        self.phase = Phase::Override;
        self.active = Some(index);
    }

    /// Shared watcher callback: one recomputation per delivered batch.
    ///
    /// An armed override is consumed by the batch and suppresses the recomputation it
    /// would have caused. Callers never deliver empty batches; an empty slice here is
    /// treated as no delivery at all.
    pub fn on_intersections(
        &mut self,
        entries: &[IntersectionEvent],
        viewport: Viewport,
    ) -> Option<usize> {
        if entries.is_empty() {
            return self.active;
        }
        match self.phase {
            Phase::Override => {
                self.phase = Phase::Tracking;
                self.active
            }
            Phase::Tracking => self.update_active_item(viewport),
        }
    }

    /// Feeds a viewport change through the watchers to the shared callback.
    ///
    /// Each watcher's non-empty batch is delivered separately, so an override armed by
    /// a selection suppresses the first delivery and the second resumes tracking, just
    /// as two independent observers would behave. No-op while detached.
    pub fn handle_scroll(&mut self, viewport: Viewport) -> Option<usize> {
        let batches = match self.watchers.as_mut() {
            Some(watchers) => watchers.notify(viewport),
            None => return self.active,
        };
        for batch in batches {
            self.on_intersections(&batch, viewport);
        }
        self.active
    }
}

#[must_use]
/// Sidebar scroll offset that centers an entry: its panel offset minus half the panel
/// height, saturating at zero. The upper bound is left to the scroll container.
pub fn toc_scroll_target(item_offset: usize, container_height: usize) -> usize {
    item_offset.saturating_sub(container_height / 2)
}

#[cfg(test)]
#[path = "tests/tracker.rs"]
mod tests;
