use crate::config::Config;
use crate::fetch::HttpCountSource;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::{handle_key, handle_mouse};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use anyhow::Context;
use std::sync::mpsc::RecvTimeoutError;
use std::sync::Arc;

/// Run the counter TUI until the user quits.
///
/// The UI loop owns the store on this thread; fetches run on a separate
/// multi-threaded runtime and report back through the event channel.
pub fn run(config: Config) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    let source = HttpCountSource::new(&config.fetch)?;
    let tick_rate = config.ui.tick_rate();

    let (mut terminal, guard) = setup_terminal()?;
    let events = EventHandler::new(tick_rate);
    let mut app = App::new(
        Arc::new(source),
        runtime.handle().clone(),
        events.sender(),
        config.fetch.amount,
    );
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    let mut changes = app.subscribe();
    tracing::info!(endpoint = %config.fetch.endpoint, "Counter session started");

    terminal.draw(|frame| draw(frame, &app))?;
    loop {
        let redraw = match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => {
                handle_key(&mut app, key);
                true
            }
            Ok(AppEvent::Mouse(mouse)) => handle_mouse(&mut app, mouse).is_some(),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => {
                app.on_resize(cols, rows);
                true
            }
            Ok(AppEvent::Counter(intent)) => {
                app.on_counter_intent(intent);
                false
            }
            Err(RecvTimeoutError::Timeout) => false,
            Err(RecvTimeoutError::Disconnected) => break,
        };
        if app.should_quit() {
            break;
        }

        let state_changed = changes.has_changed().unwrap_or(false);
        if state_changed {
            let _ = changes.borrow_and_update();
        }
        if redraw || state_changed {
            terminal.draw(|frame| draw(frame, &app))?;
        }
    }

    drop(guard);
    tracing::info!(value = app.counter().value, "Counter session ended");
    // Pending fetches are abandoned.
    runtime.shutdown_background();
    Ok(())
}
