use crate::tui::app_state::AppState;
use crate::tui::component::Component;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Draws the items of the current window, one item every `item_height` rows
/// and never more than one item per row.
pub struct ListView;

impl Component for ListView {
    fn render(&self, state: &AppState, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }

        let first = state.list.start();
        let stride = state.list.item_height().max(1.0);

        for (offset, item) in state.visible_items().iter().enumerate() {
            let row = (offset as f64 * stride).floor();
            if row >= f64::from(area.height) {
                break;
            }

            let index = first + offset;
            let item_style = if index % 2 == 0 {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            };

            let line = Line::from(vec![
                Span::styled(
                    format!("{:>6} ", index + 1),
                    Style::default()
                        .fg(Color::DarkGray)
                        .add_modifier(Modifier::DIM),
                ),
                Span::styled(item.as_str(), item_style),
            ]);

            buf.set_line(area.x, area.y + row as u16, &line, area.width);
        }
    }
}
