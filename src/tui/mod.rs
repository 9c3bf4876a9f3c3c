//! Terminal user interface for Pitwall.
//!
//! The main interaction loop using ratatui and crossterm. One cycle per
//! user action: select, execute, render. The gateway call is awaited inline,
//! so exactly one execution is ever in flight and a slow query blocks the
//! loop until the store answers.

pub mod app;
mod events;
mod ui;
pub mod widgets;

pub use app::App;
pub use events::{Event, EventHandler};

use crate::catalog::QueryCatalog;
use crate::db::DatabaseClient;
use crate::error::{PitwallError, Result};
use crate::query::QueryRunner;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use tracing::info;

/// The TUI runner owning the terminal and event source.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_handler: EventHandler,
}

impl Tui {
    /// Creates a new TUI instance, initializing the terminal.
    pub fn new() -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        Ok(Self {
            terminal,
            event_handler: EventHandler::new(),
        })
    }

    /// Sets up the terminal for TUI rendering.
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()
            .map_err(|e| PitwallError::internal(format!("Failed to enable raw mode: {e}")))?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|e| {
            PitwallError::internal(format!("Failed to enter alternate screen: {e}"))
        })?;

        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
            .map_err(|e| PitwallError::internal(format!("Failed to create terminal: {e}")))
    }

    /// Restores the terminal to its original state.
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()
            .map_err(|e| PitwallError::internal(format!("Failed to disable raw mode: {e}")))?;

        execute!(self.terminal.backend_mut(), LeaveAlternateScreen).map_err(|e| {
            PitwallError::internal(format!("Failed to leave alternate screen: {e}"))
        })?;

        self.terminal
            .show_cursor()
            .map_err(|e| PitwallError::internal(format!("Failed to show cursor: {e}")))?;

        Ok(())
    }

    /// Runs the main interaction loop until the user quits.
    pub async fn run(
        &mut self,
        db: &dyn DatabaseClient,
        catalog: &QueryCatalog,
        database_label: &str,
    ) -> Result<()> {
        // Restore the terminal even if rendering panics
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        let runner = QueryRunner::new(db, catalog);
        let mut app = App::new(catalog, database_label);

        while app.running {
            self.terminal
                .draw(|frame| ui::render(frame, &app))
                .map_err(|e| PitwallError::internal(format!("Failed to draw: {e}")))?;

            if let Some(event) = self.event_handler.next()? {
                match event {
                    Event::Key(key) => app.handle_key(key),
                    Event::Resize => {}
                }
            }

            if let Some(name) = app.take_pending() {
                // Redraw so the Executing indicator is visible while the
                // gateway call blocks the cycle
                self.terminal
                    .draw(|frame| ui::render(frame, &app))
                    .map_err(|e| PitwallError::internal(format!("Failed to draw: {e}")))?;

                let outcome = runner.run(&name).await;
                app.finish_execution(name, outcome);
            }
        }

        let _ = panic::take_hook();
        Ok(())
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

/// Runs the TUI application over the given gateway and catalog.
pub async fn run(
    db: &dyn DatabaseClient,
    catalog: &QueryCatalog,
    database_label: &str,
) -> Result<()> {
    info!("Starting TUI against {database_label}");
    let mut tui = Tui::new()?;
    tui.run(db, catalog, database_label).await
}
