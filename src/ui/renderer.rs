//! Terminal setup and the main event loop

use crate::backend::create_backend;
use crate::config::Config;
use crate::service::TodoService;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{actions::Action, AppContext, Component, EventHandler, EventType};
use crate::utils::date::{Clock, SystemClock};
use crossterm::{
    event::DisableMouseCapture,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use std::sync::Arc;
use tokio::time::Duration;

/// Build the service from `config`, run the TUI until the user quits, then restore the terminal
pub async fn run_app(config: Config) -> anyhow::Result<()> {
    let backend = create_backend(&config.api)?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let service = TodoService::new(backend, clock.clone());
    log::info!("Starting with backend '{}' at {}", service.backend_type(), config.api.base_url);

    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = AppComponent::new(AppContext::new(service, clock, config));
    let mut event_handler = EventHandler::new(tick_rate);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Fetch the initial list in the background
    app.handle_app_action(Action::InitialLoad);

    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log::error!("Event loop failed: {:#}", e);
    }
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
            EventType::Tick => {
                // Only redraw when a completion arrived or the banner expired
                needs_render = app.on_tick();
            }
            EventType::Other => {}
            event => {
                app.handle_event(event)?;
                needs_render = true;
            }
        }

        if app.should_quit() {
            log::info!("Quit requested, {} network calls abandoned", app.in_flight());
            break;
        }
    }

    Ok(())
}
