use anyhow::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use std::time::Duration;
use tokio::time::interval;

use super::app_state::AppState;
use super::component::Component;
use super::components::{ListView, SliderTrack, StatusBar};
use super::handler_result::KeyHandlerResult;
use super::input_handler::InputHandler;
use super::terminal::ListTerminal;

pub type InputHandlers = Vec<Box<dyn InputHandler + Send>>;

pub async fn run_event_loop(
    terminal: &mut ListTerminal,
    app: &mut AppState,
    handlers: &mut InputHandlers,
) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut render_interval = interval(Duration::from_millis(50));

    // first frame mounts the viewport height
    app.redraw.request();

    loop {
        tokio::select! {
            _ = render_interval.tick() => {
                if app.redraw.take() {
                    render_frame(terminal, app)?;
                }
            }
            maybe_event = event_stream.next() => {
                let Some(event) = maybe_event else {
                    break;
                };
                let event = event?;

                if matches!(event, Event::Resize(..)) {
                    app.redraw.request();
                }

                handle_user_input(&event, app, handlers).await;

                if app.redraw.take() && !app.should_quit {
                    render_frame(terminal, app)?;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Offers `event` to each handler in order until one takes it.
pub async fn handle_user_input(event: &Event, app: &mut AppState, handlers: &mut InputHandlers) {
    for handler in handlers.iter_mut() {
        match handler.handle_event(event, app).await {
            KeyHandlerResult::NotHandled => continue,
            KeyHandlerResult::Handled => break,
            KeyHandlerResult::ShouldQuit => {
                app.should_quit = true;
                break;
            }
        }
    }
}

fn render_frame(terminal: &mut ListTerminal, app: &mut AppState) -> Result<()> {
    terminal.draw(|frame| {
        app.apply_layout(frame.area());

        let state: &AppState = app;
        let layout = state.layout;
        let buf = frame.buffer_mut();
        ListView.render(state, layout.list, buf);
        SliderTrack.render(state, layout.track, buf);
        StatusBar.render(state, layout.status, buf);
    })?;

    // a height change during layout is already on screen
    app.redraw.take();
    Ok(())
}
