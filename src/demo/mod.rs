//! Interactive terminal demo of menu aiming.
//!
//! Renders a menu and a submenu panel on the configured side. Moving the
//! pointer diagonally from an open item toward its submenu crosses other
//! items without switching; the menu title shows when a switch is deferred.

pub mod app;
pub mod layout;
pub mod view;

pub use app::{DemoApp, MenuEntry, MENU_ENTRIES};

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;

use crate::adapters::TokioRetryScheduler;
use crate::config::MenuAimConfig;
use crate::pointer::PointerTracker;
use crate::terminal::TerminalManager;

/// Run the demo until the user quits.
///
/// Must be called inside a tokio runtime.
pub async fn run(config: MenuAimConfig) -> Result<()> {
    let mut term_manager = TerminalManager::new()?;
    let (scheduler, mut retries) = TokioRetryScheduler::channel();
    let mut app = DemoApp::new(config, PointerTracker::new(), scheduler);
    let mut events = EventStream::new();

    tracing::info!(
        direction = %app.config().content_direction,
        delay_ms = app.config().delay_ms,
        threshold = app.config().threshold,
        "demo started"
    );

    while !app.should_quit {
        app.resize(term_manager.size()?);
        if app.needs_redraw {
            term_manager.terminal().draw(|frame| view::render(frame, &app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            Some(ticket) = retries.recv() => app.on_retry(ticket),
            event = events.next() => match event {
                Some(Ok(event)) => app.handle_event(event),
                Some(Err(err)) => {
                    tracing::error!(error = %err, "terminal event stream failed");
                    return Err(err.into());
                }
                None => break,
            },
        }
    }

    tracing::info!("demo finished");
    Ok(())
}
