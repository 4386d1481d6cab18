use super::{Site, VirtualList};

/// Bounding box of the slider track, in the same units as pointer positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl TrackRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// How far a pointer may stray outside the track while a drag keeps
/// tracking it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragTolerance {
    pub vertical: f64,
    pub horizontal: f64,
}

impl Default for DragTolerance {
    fn default() -> Self {
        Self {
            vertical: 20.0,
            horizontal: 40.0,
        }
    }
}

impl DragTolerance {
    pub fn admits(&self, track: &TrackRect, x: f64, y: f64) -> bool {
        track.top - y <= self.vertical
            && y - track.bottom() <= self.vertical
            && track.left - x <= self.horizontal
            && x - track.right() <= self.horizontal
    }
}

/// Pointer and track captured when a drag begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragContext {
    pub pointer_x: f64,
    pub pointer_y: f64,
    pub track: TrackRect,
    /// `start` of the list when the drag began.
    pub start: usize,
}

impl<S: Site> VirtualList<S> {
    pub fn with_drag_tolerance(mut self, tolerance: DragTolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn drag_context(&self) -> Option<&DragContext> {
        self.drag.as_ref()
    }

    /// Starts dragging the thumb from pointer `(x, y)`. Replaces any drag in
    /// progress. Does nothing for an empty list or a degenerate track.
    pub fn start_drag(&mut self, x: f64, y: f64, track: TrackRect) {
        if self.total < 1 {
            return;
        }
        if !(x.is_finite() && y.is_finite() && track.height.is_finite() && track.height > 0.0) {
            return;
        }

        self.drag = Some(DragContext {
            pointer_x: x,
            pointer_y: y,
            track,
            start: self.start,
        });
    }

    /// Follows the pointer during a drag. Positions too far outside the track
    /// are skipped without ending the drag.
    pub fn drag(&mut self, x: f64, y: f64) {
        let Some(context) = self.drag else {
            return;
        };
        if !(x.is_finite() && y.is_finite()) {
            return;
        }
        if !self.tolerance.admits(&context.track, x, y) {
            return;
        }

        let delta = (y - context.pointer_y) / context.track.height;
        let relative = context.start as f64 / self.total as f64 + delta;
        self.set_position(relative);
    }

    pub fn end_drag(&mut self) {
        self.drag = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn track() -> TrackRect {
        TrackRect::new(0.0, 100.0, 20.0, 200.0)
    }

    fn list_with(
        total: usize,
        visible: usize,
    ) -> (VirtualList<impl FnMut()>, Rc<Cell<usize>>) {
        let refreshes = Rc::new(Cell::new(0));
        let counter = Rc::clone(&refreshes);
        let mut list = VirtualList::new(1.0, move || counter.set(counter.get() + 1));
        list.set_total(total);
        list.set_height(visible as f64);
        refreshes.set(0);
        (list, refreshes)
    }

    #[test]
    fn test_tolerance_edges() {
        let tolerance = DragTolerance::default();
        let track = track();

        assert!(tolerance.admits(&track, 10.0, 150.0));
        assert!(tolerance.admits(&track, 10.0, 80.0));
        assert!(tolerance.admits(&track, 10.0, 320.0));
        assert!(!tolerance.admits(&track, 10.0, 79.0));
        assert!(!tolerance.admits(&track, 10.0, 321.0));
        assert!(tolerance.admits(&track, -40.0, 150.0));
        assert!(tolerance.admits(&track, 60.0, 150.0));
        assert!(!tolerance.admits(&track, -41.0, 150.0));
        assert!(!tolerance.admits(&track, 61.0, 150.0));
    }

    #[test]
    fn test_start_drag_requires_items() {
        let (mut list, _) = list_with(0, 10);

        list.start_drag(10.0, 100.0, track());
        assert!(!list.is_dragging());
    }

    #[test]
    fn test_start_drag_rejects_flat_track() {
        let (mut list, _) = list_with(100, 10);

        list.start_drag(10.0, 100.0, TrackRect::new(0.0, 100.0, 20.0, 0.0));
        assert!(!list.is_dragging());
    }

    #[test]
    fn test_start_drag_captures_context() {
        let (mut list, _) = list_with(100, 10);
        list.move_by(7);

        list.start_drag(10.0, 120.0, track());
        assert_eq!(
            list.drag_context(),
            Some(&DragContext {
                pointer_x: 10.0,
                pointer_y: 120.0,
                track: track(),
                start: 7,
            })
        );
    }

    #[test]
    fn test_drag_within_tolerance_moves() {
        let (mut list, refreshes) = list_with(100, 10);

        list.start_drag(10.0, 100.0, track());
        list.drag(10.0, 150.0);
        assert_eq!(list.start(), 25);
        assert_eq!(refreshes.get(), 1);
    }

    #[test]
    fn test_drag_outside_tolerance_is_ignored() {
        let (mut list, refreshes) = list_with(100, 10);

        list.start_drag(10.0, 100.0, track());
        list.drag(10.0, 350.0);
        assert_eq!(list.start(), 0);
        assert_eq!(refreshes.get(), 0);
        assert!(list.is_dragging());

        list.drag(100.0, 150.0);
        assert_eq!(list.start(), 0);
    }

    #[test]
    fn test_drag_is_relative_to_drag_start() {
        let (mut list, _) = list_with(100, 10);
        list.set_position(0.5);

        list.start_drag(10.0, 200.0, track());
        list.drag(10.0, 220.0);
        assert_eq!(list.start(), 60);

        list.drag(10.0, 180.0);
        assert_eq!(list.start(), 40);

        list.drag(10.0, 200.0);
        assert_eq!(list.start(), 50);
    }

    #[test]
    fn test_drag_is_clamped_to_track() {
        let (mut list, _) = list_with(100, 10);

        list.start_drag(10.0, 110.0, track());
        list.drag(10.0, 310.0);
        assert_eq!(list.start(), 90);

        list.drag(10.0, 85.0);
        assert_eq!(list.start(), 0);
    }

    #[test]
    fn test_drag_without_context_is_noop() {
        let (mut list, refreshes) = list_with(100, 10);

        list.drag(10.0, 150.0);
        assert_eq!(list.start(), 0);
        assert_eq!(refreshes.get(), 0);
    }

    #[test]
    fn test_end_drag_is_idempotent() {
        let (mut list, _) = list_with(100, 10);

        list.end_drag();
        list.start_drag(10.0, 100.0, track());
        list.end_drag();
        list.end_drag();
        assert!(!list.is_dragging());

        list.drag(10.0, 150.0);
        assert_eq!(list.start(), 0);
    }

    #[test]
    fn test_new_drag_replaces_old() {
        let (mut list, _) = list_with(100, 10);

        list.start_drag(10.0, 100.0, track());
        list.start_drag(5.0, 300.0, track());
        list.drag(5.0, 250.0);
        // relative 0 - 0.25 clamps to the first item
        assert_eq!(list.start(), 0);
        assert_eq!(list.drag_context().map(|c| c.pointer_y), Some(300.0));
    }

    #[test]
    fn test_custom_tolerance() {
        let (list, _) = list_with(100, 10);
        let mut list = list.with_drag_tolerance(DragTolerance {
            vertical: 1.0,
            horizontal: 1.0,
        });

        list.start_drag(10.0, 100.0, track());
        list.drag(10.0, 302.0);
        assert_eq!(list.start(), 0);

        list.drag(10.0, 301.0);
        assert_eq!(list.start(), 90);
    }
}
