//! Terminal event polling.

use crate::error::{PitwallError, Result};
use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;

/// Events the application reacts to.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed.
    Key(KeyEvent),
    /// The terminal was resized (ratatui handles the re-layout).
    Resize,
}

/// Polls crossterm for events with a fixed tick rate.
pub struct EventHandler {
    tick_rate: Duration,
}

impl EventHandler {
    /// Creates a new event handler with the default 100ms tick rate.
    pub fn new() -> Self {
        Self {
            tick_rate: Duration::from_millis(100),
        }
    }

    /// Polls for the next event; `None` if nothing arrived within a tick.
    pub fn next(&self) -> Result<Option<Event>> {
        if !event::poll(self.tick_rate)
            .map_err(|e| PitwallError::internal(format!("Failed to poll events: {e}")))?
        {
            return Ok(None);
        }

        let event = event::read()
            .map_err(|e| PitwallError::internal(format!("Failed to read event: {e}")))?;

        match event {
            // Key releases arrive on some platforms; only presses count
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                Ok(Some(Event::Key(key)))
            }
            CrosstermEvent::Resize(_, _) => Ok(Some(Event::Resize)),
            _ => Ok(None),
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
