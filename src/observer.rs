//! Visibility watchers that re-trigger the active-section computation.
//!
//! Two watchers observe every heading row: one fires when a heading crosses the vertical
//! midpoint of the content viewport, the other when a heading enters or leaves full
//! visibility. Each watcher remembers the last known state per heading and reports only
//! the headings whose state changed, batched per notification. Both feed the same tracker
//! callback, which treats a batch as one recomputation trigger regardless of its size.

/// A window onto the rendered document: the first visible row and the pane height.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Viewport {
    /// First document row visible at the top of the content pane.
    pub scroll_y: usize,
    /// Number of rows the content pane can show.
    pub height: usize,
}

impl Viewport {
    #[must_use]
    /// Creates a viewport at `scroll_y` with `height` visible rows.
    pub fn new(scroll_y: usize, height: usize) -> Self {
        Self { scroll_y, height }
    }

    #[must_use]
    /// Document row at the vertical middle of the pane.
    pub fn midpoint(&self) -> usize {
        self.scroll_y + self.height / 2
    }

    #[must_use]
    /// Whether a one-row target at `position` is entirely inside the pane.
    pub fn fully_contains(&self, position: usize) -> bool {
        position >= self.scroll_y && position < self.scroll_y + self.height
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Which visibility predicate a watcher tracks transitions of.
pub enum TriggerMode {
    /// Collapsed-margin observation: the target is at or above the viewport midpoint.
    /// State flips exactly when the midpoint sweeps past the target row, in either
    /// direction, even when a scroll jumps several rows at once.
    CenterLine,
    /// Threshold-1 observation: the target row is fully inside the viewport.
    FullVisibility,
}

impl TriggerMode {
    fn intersects(self, position: usize, viewport: Viewport) -> bool {
        match self {
            Self::CenterLine => position <= viewport.midpoint(),
            Self::FullVisibility => viewport.fully_contains(position),
        }
    }
}

/// One heading whose visibility state changed in a notification batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntersectionEvent {
    /// Index of the heading in the tracker's entry list.
    pub index: usize,
    /// New state of the watcher's predicate for that heading.
    pub is_intersecting: bool,
}

/// Watches a fixed set of heading rows for visibility-state transitions.
#[derive(Debug)]
pub struct IntersectionWatcher {
    mode: TriggerMode,
    positions: Vec<usize>,
    states: Vec<bool>,
    primed: bool,
}

impl IntersectionWatcher {
    #[must_use]
    /// Starts observing the given heading rows under `mode`.
    pub fn new(mode: TriggerMode, positions: Vec<usize>) -> Self {
        let states = vec![false; positions.len()];
        Self {
            mode,
            positions,
            states,
            primed: false,
        }
    }

    #[must_use]
    /// The predicate this watcher tracks.
    pub fn mode(&self) -> TriggerMode {
        self.mode
    }

    /// Compares every target against the viewport and returns the batch of changes.
    ///
    /// The first notification after construction reports every target with its initial
    /// state, matching observer semantics where registration itself produces a delivery.
    /// Later calls report only targets whose state flipped; an unchanged viewport yields
    /// an empty batch, which callers must not deliver to the tracker.
    pub fn notify(&mut self, viewport: Viewport) -> Vec<IntersectionEvent> {
        let mut batch = Vec::new();
        for (index, &position) in self.positions.iter().enumerate() {
            let now = self.mode.intersects(position, viewport);
            if !self.primed || now != self.states[index] {
                batch.push(IntersectionEvent {
                    index,
                    is_intersecting: now,
                });
            }
            self.states[index] = now;
        }
        self.primed = true;
        batch
    }
}

/// The watcher pair sharing one callback, created on attach and dropped on detach.
#[derive(Debug)]
pub struct WatcherSet {
    center: IntersectionWatcher,
    full: IntersectionWatcher,
}

impl WatcherSet {
    #[must_use]
    /// Builds both watchers over the same heading rows.
    pub fn new(positions: &[usize]) -> Self {
        Self {
            center: IntersectionWatcher::new(TriggerMode::CenterLine, positions.to_vec()),
            full: IntersectionWatcher::new(TriggerMode::FullVisibility, positions.to_vec()),
        }
    }

    /// Notifies both watchers and returns their non-empty batches in delivery order.
    pub fn notify(&mut self, viewport: Viewport) -> Vec<Vec<IntersectionEvent>> {
        [&mut self.center, &mut self.full]
            .into_iter()
            .map(|watcher| watcher.notify(viewport))
            .filter(|batch| !batch.is_empty())
            .collect()
    }
}

#[cfg(test)]
#[path = "tests/observer.rs"]
mod tests;
