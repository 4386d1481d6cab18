use super::layout::ListLayout;
use crate::list::{DragTolerance, RedrawFlag, TrackRect, VirtualList};
use ratatui::layout::Rect;

pub struct AppState {
    pub list: VirtualList<RedrawFlag>,
    pub redraw: RedrawFlag,
    pub items: Vec<String>,
    pub wheel_step: usize,
    pub layout: ListLayout,
    pub should_quit: bool,
}

impl AppState {
    /// Mounts `items` into a fresh list. The viewport height arrives later,
    /// with the first layout.
    pub fn new(
        items: Vec<String>,
        item_height: f64,
        tolerance: DragTolerance,
        wheel_step: usize,
    ) -> Self {
        let redraw = RedrawFlag::new();
        let mut list = VirtualList::new(item_height, redraw.clone()).with_drag_tolerance(tolerance);
        list.set_total(items.len());

        Self {
            list,
            redraw,
            items,
            wheel_step,
            layout: ListLayout::default(),
            should_quit: false,
        }
    }

    pub fn demo_items(count: usize) -> Vec<String> {
        (1..=count).map(|i| format!("Item {}", i)).collect()
    }

    /// Splits `area` and reports the list height to the model.
    pub fn apply_layout(&mut self, area: Rect) {
        self.layout = ListLayout::split(area);
        self.list.set_height(f64::from(self.layout.list.height));
    }

    pub fn visible_items(&self) -> &[String] {
        self.items.get(self.list.visible_range()).unwrap_or(&[])
    }

    /// The slider track, if there is anything to scroll.
    pub fn track_area(&self) -> Option<Rect> {
        (self.list.is_active() && !self.layout.track.is_empty()).then_some(self.layout.track)
    }

    pub fn track_rect(track: Rect) -> TrackRect {
        TrackRect::new(
            f64::from(track.x),
            f64::from(track.y),
            f64::from(track.width),
            f64::from(track.height),
        )
    }

    pub fn wheel_step(&self) -> isize {
        isize::try_from(self.wheel_step).unwrap_or(isize::MAX)
    }

    pub fn page_step(&self) -> isize {
        isize::try_from(self.list.count().max(1)).unwrap_or(isize::MAX)
    }
}
