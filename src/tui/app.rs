//! Application state for the TUI.
//!
//! One selection cycle at a time: the user moves the selector, triggers an
//! execution, and the loop stores the outcome for the results panel. Nothing
//! is retained between cycles beyond the last outcome on screen.

use crate::catalog::QueryCatalog;
use crate::query::QueryOutcome;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application state.
pub struct App {
    /// Whether the application is still running.
    pub running: bool,
    /// Catalog names, in declared order.
    pub names: Vec<&'static str>,
    /// Index of the selected query; defaults to the first entry.
    pub selected: usize,
    /// True while a gateway call is in flight (Executing state).
    pub executing: bool,
    /// Name and outcome of the last executed query.
    pub outcome: Option<(String, QueryOutcome)>,
    /// Scroll offset into the results panel, in lines.
    pub results_scroll: usize,
    /// Backing database path for the header.
    pub database: String,
    /// Query name queued for execution by the event loop.
    pending: Option<String>,
}

impl App {
    /// Creates the initial Idle state over the given catalog.
    pub fn new(catalog: &QueryCatalog, database: impl Into<String>) -> Self {
        Self {
            running: true,
            names: catalog.list_names(),
            selected: 0,
            executing: false,
            outcome: None,
            results_scroll: 0,
            database: database.into(),
            pending: None,
        }
    }

    /// Returns the currently selected query name.
    pub fn selected_name(&self) -> Option<&'static str> {
        self.names.get(self.selected).copied()
    }

    /// Takes the queued execution request, transitioning to Executing.
    pub fn take_pending(&mut self) -> Option<String> {
        let pending = self.pending.take();
        if pending.is_some() {
            self.executing = true;
        }
        pending
    }

    /// Stores an outcome and returns to Idle.
    pub fn finish_execution(&mut self, name: String, outcome: QueryOutcome) {
        self.executing = false;
        self.results_scroll = 0;
        self.outcome = Some((name, outcome));
    }

    /// Handles a key event and updates application state.
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.running = false;
            }

            KeyCode::Up => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.selected + 1 < self.names.len() {
                    self.selected += 1;
                }
            }

            // Execute trigger; ignored while a call is in flight since the
            // loop is synchronous anyway.
            KeyCode::Enter => {
                if !self.executing {
                    self.pending = self.selected_name().map(String::from);
                }
            }

            KeyCode::PageUp => {
                self.results_scroll = self.results_scroll.saturating_sub(10);
            }
            KeyCode::PageDown => {
                self.results_scroll = self.results_scroll.saturating_add(10);
            }
            KeyCode::Home => {
                self.results_scroll = 0;
            }

            _ => {}
        }
    }
}
