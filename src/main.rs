mod api;
mod app;
mod catalog;
mod config;
mod logging;
mod screen;
mod ui;

use crate::api::client::ApiClient;
use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    let cfg = config::load_config()?;

    // Logging must be up before the alternate screen hides stderr
    match logging::init(&cfg.logging) {
        Ok(Some(path)) => info!(path = %path.display(), "anicat starting"),
        Ok(None) => {}
        Err(e) => eprintln!("Warning: logging disabled: {e:#}"),
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, cfg).await;

    restore_terminal()?;

    if let Err(e) = result {
        error!("fatal: {e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    Ok(())
}

/// Runs one request on a background task; the response comes back as an event.
fn spawn_request(client: &ApiClient, tx: &mpsc::UnboundedSender<AppEvent>, call: api::ApiCall) {
    let client = client.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = client.execute(&call).await;
        let _ = tx.send(AppEvent::ApiResponse { call, result });
    });
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let client = ApiClient::new(&cfg.api)?;
    info!(base_url = %cfg.api.base_url, "api client ready");

    let mut state = AppState::new(cfg);
    let size = terminal.size()?;
    state.viewport = Rect::new(0, 0, size.width, size.height);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            if term_tx.send(AppEvent::Terminal(event)).is_err() {
                break;
            }
        }
    });

    // Spawn tick task (10 FPS drives the spinner and notice expiry)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    for action in state.initial_requests() {
        if let Action::Request(call) = action {
            spawn_request(&client, &event_tx, call);
        }
    }

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    while let Some(event) = event_rx.recv().await {
        for action in handler::handle_event(&mut state, event) {
            match action {
                Action::Request(call) => spawn_request(&client, &event_tx, call),
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            info!("quit requested");
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    Ok(())
}
