use ratatui::layout::Rect;

/// Screen regions of the list view: items on the left, a one-column slider
/// track on the right, and a status line at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ListLayout {
    pub list: Rect,
    pub track: Rect,
    pub status: Rect,
}

impl ListLayout {
    pub const TRACK_WIDTH: u16 = 1;
    pub const STATUS_HEIGHT: u16 = 1;

    pub fn split(area: Rect) -> Self {
        let status_height = Self::STATUS_HEIGHT.min(area.height);
        let body_height = area.height - status_height;
        let track_width = Self::TRACK_WIDTH.min(area.width);
        let list_width = area.width - track_width;

        Self {
            list: Rect::new(area.x, area.y, list_width, body_height),
            track: Rect::new(area.x + list_width, area.y, track_width, body_height),
            status: Rect::new(area.x, area.y + body_height, area.width, status_height),
        }
    }
}
