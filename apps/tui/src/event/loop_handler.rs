use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;

use crate::app::{handle_input, App};
use crate::ui;

// Event poll timeout; also the animation frame interval
const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(50);

/// Run the dashboard event loop until the user quits
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while app.running {
        app.update();

        terminal.draw(|f| ui::ui(app, f))?;

        if event::poll(EVENT_POLL_TIMEOUT)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    tracing::trace!(key = ?key.code, "key pressed");
                    handle_input(app, key.code);
                }
                Event::Resize(width, height) => {
                    tracing::debug!(width, height, "terminal resized");
                }
                _ => {}
            }
        }

        // Let other tasks make progress between frames
        tokio::task::yield_now().await;
    }

    tracing::info!("dashboard closed");
    Ok(())
}
