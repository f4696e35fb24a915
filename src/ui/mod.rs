//! Terminal user interface
//!
//! This module handles all user interface components, rendering, and user
//! interactions, plus the terminal setup/teardown around the event loop.

pub mod app_component;
pub mod components;
pub mod core;

pub use app_component::{AppComponent, AppState};

use crate::api::TodoApi;
use crate::config::Config;
use crate::logger::Logger;
use crate::ui::core::{Component, EventHandler, EventType};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::Arc;

/// Run the TUI until the user quits.
pub async fn run_app(api: Arc<dyn TodoApi>, config: &Config, logger: Logger) -> anyhow::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppComponent::new(api, config, logger);
    let mut event_handler = EventHandler::new();

    // First fetch starts immediately; the loading overlay shows until it lands
    app.trigger_initial_load();

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            needs_render = false;
        }

        match event_handler.next_event().await? {
            event @ (EventType::Key(_) | EventType::Resize(_, _)) => {
                app.handle_event(event);
                needs_render = true;
            }
            EventType::Tick => {
                // Apply results delivered by background tasks
                let background_actions = app.process_background_actions();
                if !background_actions.is_empty() {
                    needs_render = true;
                }
                for action in background_actions {
                    app.apply_action(action);
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
