//! Windowing and slider state for a fixed-item-height virtual list.
//!
//! [`VirtualList`] decides which contiguous range of items is visible and
//! translates slider interactions (page clicks, thumb drags) into a new
//! range. It never renders anything: whoever owns it forwards viewport
//! sizes and pointer events in, and re-reads the accessors whenever the
//! injected [`Site`] is refreshed.

mod drag;
mod site;
mod slider;
mod window;

use std::fmt;

pub use drag::{DragContext, DragTolerance, TrackRect};
pub use site::{RedrawFlag, Site};
pub use slider::SliderState;

/// Item height used when the caller passes a non-positive or non-finite one.
pub const FALLBACK_ITEM_HEIGHT: f64 = 1.0;

pub struct VirtualList<S> {
    item_height: f64,
    total: usize,
    viewport_height: f64,
    count: usize,
    start: usize,
    site: Option<S>,
    drag: Option<DragContext>,
    tolerance: DragTolerance,
}

impl<S: Site> VirtualList<S> {
    fn notify(&mut self) {
        if let Some(site) = self.site.as_mut() {
            site.refresh();
        }
    }

    /// Highest valid value for `start`; `0` for an empty list.
    fn last_index(&self) -> usize {
        self.total.saturating_sub(1)
    }
}

impl<S> fmt::Debug for VirtualList<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VirtualList")
            .field("item_height", &self.item_height)
            .field("total", &self.total)
            .field("viewport_height", &self.viewport_height)
            .field("count", &self.count)
            .field("start", &self.start)
            .field("connected", &self.site.is_some())
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}
