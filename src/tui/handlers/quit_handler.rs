use crate::tui::app_state::AppState;
use crate::tui::handler_result::KeyHandlerResult;
use crate::tui::input_handler::InputHandler;
use async_trait::async_trait;
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};

pub struct QuitHandler;

impl QuitHandler {
    pub fn new() -> Self {
        Self
    }
}

impl Default for QuitHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InputHandler for QuitHandler {
    async fn handle_event(&mut self, event: &Event, app: &mut AppState) -> KeyHandlerResult {
        let Event::Key(key) = event else {
            return KeyHandlerResult::NotHandled;
        };
        if key.kind != KeyEventKind::Press {
            return KeyHandlerResult::NotHandled;
        }

        let quit = match key.code {
            KeyCode::Char('q') | KeyCode::Esc => true,
            KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
            _ => false,
        };

        if quit {
            app.should_quit = true;
            KeyHandlerResult::ShouldQuit
        } else {
            KeyHandlerResult::NotHandled
        }
    }
}
