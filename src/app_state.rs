//! The application state bridging the rendered document and the sidebar tracker.
//!
//! A TUI needs a single source of truth that can be interrogated and mutated as the user
//! scrolls and navigates. Every content scroll passes through here so the visibility
//! watchers are notified exactly once per change, and the sidebar's smooth scroll is
//! retargeted whenever the active entry moves.

use crate::layout::WrappedDocument;
use crate::observer::Viewport;
use crate::outline::{Heading, OutlineReport};
use crate::scroll::SmoothScroll;
use crate::tracker::{toc_scroll_target, ActiveSectionTracker};
use std::path::PathBuf;

#[derive(Clone, Copy, PartialEq, Eq)]
/// Which pane receives key input.
pub enum Focus {
    /// Arrow keys scroll the document.
    Content,
    /// Arrow keys move the sidebar cursor; Enter selects.
    Sidebar,
}

/// Bridges the wrapped document, the outline, and the active-section tracker.
pub struct AppState {
    /// Document the outline was extracted from.
    pub file: PathBuf,
    /// Content rows wrapped once at load.
    pub doc: WrappedDocument,
    /// Headings in document order.
    pub headings: Vec<Heading>,
    /// Active-section state machine.
    pub tracker: ActiveSectionTracker,
    /// Content pane window: scroll offset and height.
    pub viewport: Viewport,
    /// Sidebar entry under the cursor (distinct from the highlighted entry).
    pub sidebar_cursor: usize,
    /// Animated sidebar panel offset.
    pub sidebar_scroll: SmoothScroll,
    /// Rows the sidebar panel can show, refreshed each frame.
    pub sidebar_height: usize,
    /// Pane receiving key input.
    pub focus: Focus,
    /// Status feedback displayed in the help bar.
    pub message: Option<String>,
    /// Rows moved per arrow-key press in the content pane.
    pub scroll_step: usize,
}

impl AppState {
    #[must_use]
    /// Initialises application state over a wrapped document and its outline.
    pub fn new(
        file: PathBuf,
        doc: WrappedDocument,
        headings: Vec<Heading>,
        scroll_step: usize,
    ) -> Self {
        let entries = headings.iter().map(Heading::entry).collect();
        Self {
            file,
            doc,
            headings,
            tracker: ActiveSectionTracker::new(entries),
            viewport: Viewport::default(),
            sidebar_cursor: 0,
            sidebar_scroll: SmoothScroll::new(0),
            sidebar_height: 0,
            focus: Focus::Content,
            message: None,
            scroll_step,
        }
    }

    /// Wires up the tracker against the initial pane sizes and computes the first
    /// highlight, so the sidebar reflects the starting position before any scrolling.
    pub fn attach(&mut self, content_height: usize, sidebar_height: usize) {
        self.viewport.height = content_height;
        self.sidebar_height = sidebar_height;
        self.tracker.attach(self.viewport);
        self.sync_sidebar();
    }

    /// Unwires the tracker's watchers; scrolling stops updating the highlight.
    pub fn detach(&mut self) {
        self.tracker.detach();
    }

    /// Scrolls the content pane up by `rows`, clamped at the top.
    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll_to(self.viewport.scroll_y.saturating_sub(rows));
    }

    /// Scrolls the content pane down by `rows`, clamped to the document.
    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll_to(self.viewport.scroll_y.saturating_add(rows));
    }

    /// Scrolls the content pane to an absolute row, clamped to the document.
    pub fn scroll_to(&mut self, row: usize) {
        let clamped = row.min(self.doc.max_scroll(self.viewport.height));
        if clamped == self.viewport.scroll_y {
            return;
        }
        self.viewport.scroll_y = clamped;
        self.after_scroll();
    }

    /// Moves the sidebar cursor up one entry.
    pub fn cursor_up(&mut self) {
        self.sidebar_cursor = self.sidebar_cursor.saturating_sub(1);
    }

    /// Moves the sidebar cursor down one entry.
    pub fn cursor_down(&mut self) {
        if self.sidebar_cursor + 1 < self.headings.len() {
            self.sidebar_cursor += 1;
        }
    }

    /// Selects the entry under the sidebar cursor, the link-click path.
    ///
    /// The highlight is forced onto the clicked entry and the override armed before the
    /// navigation scroll, so the watcher batch that scroll produces cannot immediately
    /// undo the selection.
    pub fn click_cursor(&mut self) {
        if self.headings.is_empty() {
            return;
        }
        let index = self.sidebar_cursor;
        self.tracker.select(index);
        let position = self.headings[index].position;
        self.scroll_to(position);
        // When the heading is already the top row no scroll fires; the sidebar still
        // has to reflect the forced highlight.
        self.sync_sidebar();
    }

    /// Advances the sidebar animation one tick. Returns `true` if a redraw is needed.
    pub fn tick(&mut self) -> bool {
        self.sidebar_scroll.tick()
    }

    /// Refreshes pane sizes from the frame layout.
    ///
    /// Heading positions are deliberately not re-measured here; only the live window
    /// geometry follows the terminal.
    pub fn set_pane_sizes(&mut self, content_height: usize, sidebar_height: usize) {
        self.viewport.height = content_height;
        self.sidebar_height = sidebar_height;
    }

    #[must_use]
    /// Sidebar panel offset for this frame, clamped to the panel's scroll range.
    pub fn sidebar_offset(&self) -> usize {
        let max = self.headings.len().saturating_sub(self.sidebar_height);
        self.sidebar_scroll.current().min(max)
    }

    #[must_use]
    /// Snapshot of the outline and active entry, for the exit report.
    pub fn report(&self) -> OutlineReport {
        OutlineReport::new(
            self.file.to_string_lossy().to_string(),
            &self.headings,
            self.tracker.active_id(),
        )
    }

    fn after_scroll(&mut self) {
        self.tracker.handle_scroll(self.viewport);
        self.sync_sidebar();
    }

    /// Retargets the sidebar animation so the highlighted entry sits centered.
    ///
    /// Every entry occupies one panel row, so an entry's offset within the panel is its
    /// index. No highlight means no retarget.
    fn sync_sidebar(&mut self) {
        if let Some(index) = self.tracker.active() {
            self.sidebar_scroll
                .set_target(toc_scroll_target(index, self.sidebar_height));
        }
    }
}

#[cfg(test)]
#[path = "tests/app_state.rs"]
mod tests;
