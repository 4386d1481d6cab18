use crate::list::{SliderState, VirtualList};
use clap::Args;
use std::cell::Cell;
use std::fmt;
use std::ops::Range;

#[derive(Args, Debug, Clone, PartialEq)]
pub struct InspectArgs {
    /// Total number of items
    #[arg(long)]
    pub items: usize,

    /// Height of one item
    #[arg(long, default_value_t = 1.0)]
    pub item_height: f64,

    /// Height of the viewport, in the same unit as the item height
    #[arg(long)]
    pub viewport: f64,

    /// Jump to this fraction of the track (0..=1)
    #[arg(long)]
    pub position: Option<f64>,

    /// Click the track at this fraction (0..=1)
    #[arg(long)]
    pub click: Option<f64>,

    /// Move by this many items afterwards
    #[arg(long, allow_hyphen_values = true)]
    pub move_by: Option<isize>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InspectReport {
    pub total: usize,
    pub count: usize,
    pub start: usize,
    pub visible: Range<usize>,
    pub slider: SliderState,
    pub refreshes: usize,
}

/// Replays the requested operations on a fresh list, in the order
/// total, viewport, position, click, move.
pub fn run_inspect(args: &InspectArgs) -> InspectReport {
    let refreshes = Cell::new(0usize);
    let mut list = VirtualList::new(args.item_height, || refreshes.set(refreshes.get() + 1));

    list.set_total(args.items);
    list.set_height(args.viewport);
    if let Some(position) = args.position {
        list.set_position(position);
    }
    if let Some(click) = args.click {
        list.on_click(click);
    }
    if let Some(step) = args.move_by {
        list.move_by(step);
    }

    InspectReport {
        total: list.total(),
        count: list.count(),
        start: list.start(),
        visible: list.visible_range(),
        slider: list.slider(),
        refreshes: refreshes.get(),
    }
}

impl fmt::Display for InspectReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "total     = {}", self.total)?;
        writeln!(f, "count     = {}", self.count)?;
        writeln!(f, "start     = {}", self.start)?;
        writeln!(f, "window    = {}..{}", self.visible.start, self.visible.end)?;
        if self.slider.active {
            writeln!(
                f,
                "slider    = {:.2}% at {:.2}%",
                self.slider.height, self.slider.position
            )?;
        } else {
            writeln!(f, "slider    = inactive")?;
        }
        write!(f, "refreshes = {}", self.refreshes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(items: usize, item_height: f64, viewport: f64) -> InspectArgs {
        InspectArgs {
            items,
            item_height,
            viewport,
            position: None,
            click: None,
            move_by: None,
        }
    }

    #[test]
    fn test_inspect_position() {
        let report = run_inspect(&InspectArgs {
            position: Some(0.5),
            ..args(1000, 50.0, 500.0)
        });

        assert_eq!(report.count, 10);
        assert_eq!(report.start, 500);
        assert_eq!(report.visible, 500..510);
        assert_eq!(report.slider.height, 1.0);
        // total, height, position
        assert_eq!(report.refreshes, 3);
    }

    #[test]
    fn test_inspect_click_then_move() {
        let report = run_inspect(&InspectArgs {
            click: Some(0.5),
            move_by: Some(-3),
            ..args(100, 1.0, 10.0)
        });

        assert_eq!(report.start, 7);
        assert_eq!(report.slider.position, 7.0);
    }

    #[test]
    fn test_inspect_inactive_slider_display() {
        let report = run_inspect(&args(3, 1.0, 10.0));

        assert!(!report.slider.active);
        assert_eq!(report.visible, 0..3);
        assert!(report.to_string().contains("slider    = inactive"));
    }

    #[test]
    fn test_inspect_empty_list() {
        let report = run_inspect(&args(0, 1.0, 10.0));

        assert_eq!(report.total, 0);
        assert_eq!(report.start, 0);
        assert_eq!(report.visible, 0..0);
        assert_eq!(report.slider.height, 100.0);
        assert_eq!(report.refreshes, 1);
    }
}
