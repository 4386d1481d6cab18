use crate::tui::app_state::AppState;
use crate::tui::component::Component;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct StatusBar;

impl StatusBar {
    pub fn position_text(state: &AppState) -> String {
        let range = state.list.visible_range();
        if range.is_empty() {
            return format!("{} items", state.list.total());
        }
        format!(
            "{}-{} of {}",
            range.start + 1,
            range.end,
            state.list.total()
        )
    }
}

impl Component for StatusBar {
    fn render(&self, state: &AppState, area: Rect, buf: &mut Buffer) {
        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", Self::position_text(state)),
                Style::default()
                    .fg(Color::Rgb(142, 240, 204))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "↑↓ PgUp PgDn Home End · wheel, click, drag · q to quit",
                Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            ),
        ]);

        Paragraph::new(line).render(area, buf);
    }
}
