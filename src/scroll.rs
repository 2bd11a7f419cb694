//! Smooth scrolling for the sidebar panel.
//!
//! The terminal has no native smooth `scrollTo`, so the sidebar offset is animated: each
//! animation tick moves the current offset a fraction of the remaining distance toward the
//! target. Retargeting mid-flight simply redirects the animation; nothing is cancelled or
//! awaited.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// An eased scroll offset that chases a target position one tick at a time.
pub struct SmoothScroll {
    /// Offset currently applied to the scroll container.
    current: usize,
    /// Offset the animation is heading toward.
    target: usize,
}

impl SmoothScroll {
    #[must_use]
    /// Creates a scroll state resting at `offset` with no animation pending.
    pub fn new(offset: usize) -> Self {
        Self {
            current: offset,
            target: offset,
        }
    }

    #[must_use]
    /// Offset to apply to the container this frame.
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    /// Offset the animation will settle at.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Redirects the animation toward a new target, leaving the current offset in place.
    pub fn set_target(&mut self, target: usize) {
        self.target = target;
    }

    /// Snaps both current and target to `offset`, ending any animation.
    pub fn jump_to(&mut self, offset: usize) {
        self.current = offset;
        self.target = offset;
    }

    #[must_use]
    /// Whether the animation has settled on its target.
    pub fn settled(&self) -> bool {
        self.current == self.target
    }

    /// Advances the animation one tick, easing out over the remaining distance.
    ///
    /// Moves a quarter of the remaining distance, never less than one row, so the
    /// animation always terminates. Returns `true` if the offset changed.
    pub fn tick(&mut self) -> bool {
        if self.current == self.target {
            return false;
        }
        let distance = self.current.abs_diff(self.target);
        let step = (distance / 4).max(1);
        if self.current < self.target {
            self.current += step;
        } else {
            self.current -= step;
        }
        true
    }
}

#[cfg(test)]
#[path = "tests/scroll.rs"]
mod tests;
