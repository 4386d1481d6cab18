use crate::list::SliderState;
use crate::tui::app_state::AppState;
use crate::tui::component::Component;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
};

const TRACK_SYMBOL: &str = "│";
const THUMB_SYMBOL: &str = "█";

/// Maps the slider's percentages onto `track_len` cells.
/// Returns `(offset, length)` of the thumb; the thumb is at least one cell.
pub fn thumb_span(slider: SliderState, track_len: u16) -> (u16, u16) {
    if track_len == 0 {
        return (0, 0);
    }

    let cells = f64::from(track_len);
    let length = (slider.height / 100.0 * cells).round().clamp(1.0, cells) as u16;
    let offset = (slider.position / 100.0 * cells).round().max(0.0) as u16;
    (offset.min(track_len - length), length)
}

pub struct SliderTrack;

impl Component for SliderTrack {
    fn render(&self, state: &AppState, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || !state.list.is_active() {
            return;
        }

        let (offset, length) = thumb_span(state.list.slider(), area.height);
        let thumb_color = if state.list.is_dragging() {
            Color::Rgb(142, 240, 204)
        } else {
            Color::Gray
        };

        for row in 0..area.height {
            let in_thumb = row >= offset && row < offset + length;
            let (symbol, style) = if in_thumb {
                (THUMB_SYMBOL, Style::default().fg(thumb_color))
            } else {
                (TRACK_SYMBOL, Style::default().fg(Color::DarkGray))
            };

            for x in area.left()..area.right() {
                buf[(x, area.y + row)].set_symbol(symbol).set_style(style);
            }
        }
    }
}
