//! Full-screen terminal view over a [`VirtualList`](crate::list::VirtualList).
//!
//! The view owns the items and the model for the lifetime of one session:
//! it mounts the item count, reports the list height on every draw, forwards
//! keys and mouse events, and disconnects the model on exit.

mod app_loop;
mod app_state;
mod component;
pub mod components;
mod handler_result;
pub mod handlers;
mod input_handler;
mod layout;
mod terminal;

use anyhow::Result;

use crate::config::AppConfig;
use crate::console::console;

pub use app_loop::{InputHandlers, handle_user_input};
pub use app_state::AppState;
pub use component::Component;
pub use handler_result::KeyHandlerResult;
pub use input_handler::InputHandler;
pub use layout::ListLayout;

use app_loop::run_event_loop;
use terminal::{init_terminal, restore_terminal};

/// Where the list stood when the session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSummary {
    pub start: usize,
    pub count: usize,
    pub total: usize,
}

impl ViewSummary {
    pub fn of(app: &AppState) -> Self {
        Self {
            start: app.list.start(),
            count: app.list.count(),
            total: app.list.total(),
        }
    }
}

pub async fn run(config: &AppConfig, items: usize, item_height: f64) -> Result<ViewSummary> {
    let mut app = AppState::new(
        AppState::demo_items(items),
        item_height,
        config.drag.tolerance(),
        config.list.wheel_step,
    );
    console().session_started(items, app.list.item_height());
    console().debug(&format!("{:?}", app.list));

    let mut handlers: InputHandlers = vec![
        Box::new(handlers::QuitHandler::new()),
        Box::new(handlers::KeyScrollHandler::new()),
        Box::new(handlers::SliderMouseHandler::new()),
    ];

    let mut terminal = init_terminal()?;
    let result = run_event_loop(&mut terminal, &mut app, &mut handlers).await;
    restore_terminal(terminal)?;

    app.list.disconnect();
    console().debug(&format!("{:?}", app.list));
    result?;

    Ok(ViewSummary::of(&app))
}
