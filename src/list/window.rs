use super::{DragTolerance, FALLBACK_ITEM_HEIGHT, Site, VirtualList};
use std::ops::Range;

/// Number of items needed to cover `viewport_height`, counting a partially
/// visible last item.
fn items_for(viewport_height: f64, item_height: f64) -> usize {
    // float-to-int `as` saturates, so an infinite viewport maps to usize::MAX
    (viewport_height / item_height).ceil() as usize
}

impl<S: Site> VirtualList<S> {
    /// Creates an empty list whose items are all `item_height` tall.
    pub fn new(item_height: f64, site: S) -> Self {
        let item_height = if item_height.is_finite() && item_height > 0.0 {
            item_height
        } else {
            FALLBACK_ITEM_HEIGHT
        };

        Self {
            item_height,
            total: 0,
            viewport_height: 0.0,
            count: 0,
            start: 0,
            site: Some(site),
            drag: None,
            tolerance: DragTolerance::default(),
        }
    }

    pub fn item_height(&self) -> f64 {
        self.item_height
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Number of items that fit the viewport. Not capped by `total`.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Index of the first visible item.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Indices to render: `start..start + count`, cut off at `total`.
    pub fn visible_range(&self) -> Range<usize> {
        let end = self.start.saturating_add(self.count).min(self.total);
        self.start.min(end)..end
    }

    /// Sets the number of items.
    ///
    /// `start` is pulled back into range when the list shrinks below it, so a
    /// single notification covers both changes.
    pub fn set_total(&mut self, total: usize) {
        if total == self.total {
            return;
        }

        self.total = total;
        self.start = self.start.min(self.last_index());
        self.notify();
    }

    /// Reports the current viewport height.
    ///
    /// When the number of visible items changes, the window keeps its relative
    /// position in the list and exactly one notification is sent.
    pub fn set_height(&mut self, viewport_height: f64) {
        let viewport_height = if viewport_height > 0.0 {
            viewport_height
        } else {
            0.0
        };
        self.viewport_height = viewport_height;

        let count = items_for(viewport_height, self.item_height);
        if count == self.count {
            return;
        }

        self.count = count;

        if self.total > 0 {
            let relative = self.start as f64 / self.total as f64;
            self.move_to(relative);
        }

        self.notify();
    }

    /// Moves the window by `step` items, stopping at either end.
    pub fn move_by(&mut self, step: isize) {
        let start = self.start.saturating_add_signed(step).min(self.last_index());
        if start == self.start {
            return;
        }

        self.start = start;
        self.notify();
    }

    pub fn is_connected(&self) -> bool {
        self.site.is_some()
    }

    /// Drops the site. Later mutations still update the model but notify no one.
    pub fn disconnect(&mut self) {
        self.site = None;
    }
}
