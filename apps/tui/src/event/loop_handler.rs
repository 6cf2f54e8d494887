use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use tokio::sync::mpsc;

use crate::app::actions::AppActions;
use crate::app::{handle_input, App, GenerationOutcome, GenerationRequest};
use crate::reminders::DesktopNotifier;
use crate::ui;

/// Run the main application event loop.
///
/// Generation requests run on spawned tasks and report back over the channel,
/// so the display keeps redrawing while a request is outstanding. There is no
/// cancellation: a dispatched request runs to completion or failure.
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    actions: AppActions,
) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    let notifier = DesktopNotifier;
    let (tx, mut rx) = mpsc::channel::<GenerationOutcome>(4);

    loop {
        // Tick the busy indicator
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if let Some(request) = handle_input(app, &notifier, key.code) {
                        dispatch(&actions, &tx, request);
                    }
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events
                }
            }
        }

        // Apply finished generations; the in-flight marker clears here
        // whatever the outcome was.
        while let Ok(outcome) = rx.try_recv() {
            app.finish_generation(outcome);
        }
    }
    Ok(())
}

fn dispatch(
    actions: &AppActions,
    tx: &mpsc::Sender<GenerationOutcome>,
    request: GenerationRequest,
) {
    let actions = actions.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let outcome = actions.perform(request).await;
        let _ = tx.send(outcome).await;
    });
}
