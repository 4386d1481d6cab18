use crate::tui::app_state::AppState;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

/// One region of the list view, drawn from the shared [`AppState`] into the
/// area the layout assigned to it.
pub trait Component: Send + Sync {
    fn render(&self, app: &AppState, area: Rect, buf: &mut Buffer);
}
