use crate::tui::app_state::AppState;
use crate::tui::components::thumb_span;
use crate::tui::handler_result::KeyHandlerResult;
use crate::tui::input_handler::InputHandler;
use async_trait::async_trait;
use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

/// Wheel scrolling plus click-to-page and thumb dragging on the track.
pub struct SliderMouseHandler;

impl Default for SliderMouseHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl SliderMouseHandler {
    pub fn new() -> Self {
        Self
    }

    fn press(mouse: &MouseEvent, app: &mut AppState) -> KeyHandlerResult {
        let Some(track) = app.track_area() else {
            return KeyHandlerResult::NotHandled;
        };
        if !track.contains(Position::new(mouse.column, mouse.row)) {
            return KeyHandlerResult::NotHandled;
        }

        let row = mouse.row - track.y;
        let (offset, length) = thumb_span(app.list.slider(), track.height);

        if row >= offset && row < offset + length {
            app.list.start_drag(
                f64::from(mouse.column),
                f64::from(mouse.row),
                AppState::track_rect(track),
            );
            // thumb colour changes while dragging
            app.redraw.request();
        } else if row < offset {
            // page relative to the drawn thumb, which is at least one cell tall
            app.list.on_click(0.0);
        } else {
            app.list.on_click(1.0);
        }

        KeyHandlerResult::Handled
    }
}

#[async_trait]
impl InputHandler for SliderMouseHandler {
    async fn handle_event(&mut self, event: &Event, app: &mut AppState) -> KeyHandlerResult {
        let Event::Mouse(mouse) = event else {
            return KeyHandlerResult::NotHandled;
        };

        match mouse.kind {
            MouseEventKind::ScrollUp => {
                let step = app.wheel_step();
                app.list.move_by(-step);
                KeyHandlerResult::Handled
            }
            MouseEventKind::ScrollDown => {
                let step = app.wheel_step();
                app.list.move_by(step);
                KeyHandlerResult::Handled
            }
            MouseEventKind::Down(MouseButton::Left) => Self::press(mouse, app),
            MouseEventKind::Drag(MouseButton::Left) if app.list.is_dragging() => {
                app.list
                    .drag(f64::from(mouse.column), f64::from(mouse.row));
                KeyHandlerResult::Handled
            }
            MouseEventKind::Up(MouseButton::Left) if app.list.is_dragging() => {
                app.list.end_drag();
                app.redraw.request();
                KeyHandlerResult::Handled
            }
            _ => KeyHandlerResult::NotHandled,
        }
    }
}
