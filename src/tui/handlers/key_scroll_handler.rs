use crate::tui::app_state::AppState;
use crate::tui::handler_result::KeyHandlerResult;
use crate::tui::input_handler::InputHandler;
use async_trait::async_trait;
use crossterm::event::{Event, KeyCode, KeyEventKind};

/// Line, page and jump keys.
pub struct KeyScrollHandler;

impl Default for KeyScrollHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyScrollHandler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl InputHandler for KeyScrollHandler {
    async fn handle_event(&mut self, event: &Event, app: &mut AppState) -> KeyHandlerResult {
        let Event::Key(key) = event else {
            return KeyHandlerResult::NotHandled;
        };
        if key.kind != KeyEventKind::Press {
            return KeyHandlerResult::NotHandled;
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.list.move_by(-1),
            KeyCode::Down | KeyCode::Char('j') => app.list.move_by(1),
            KeyCode::PageUp => {
                let page = app.page_step();
                app.list.move_by(-page)
            }
            KeyCode::PageDown | KeyCode::Char(' ') => {
                let page = app.page_step();
                app.list.move_by(page)
            }
            KeyCode::Home | KeyCode::Char('g') => app.list.set_position(0.0),
            KeyCode::End | KeyCode::Char('G') => app.list.set_position(1.0),
            _ => return KeyHandlerResult::NotHandled,
        }

        KeyHandlerResult::Handled
    }
}
