//! Application module
//!
//! Contains the main application struct and event loop.
//!
//! # Module Structure
//! - `state` - Application state types (AppState)
//! - Main module - App struct and event loop
//!
//! The loop is single-threaded and event-driven: every session mutation is
//! applied synchronously inside `handle_key` before the next frame draws, so
//! price and preview always reflect a complete configuration.

mod state;

pub use state::AppState;

use crate::error::Result;
use crate::input;
use crate::ui::UiRenderer;
use crossterm::event::{self, Event};
use ratatui::backend::Backend;
use ratatui::Terminal;
use std::time::Duration;
use tracing::info;

/// How long to block waiting for input before redrawing anyway
const TICK_RATE: Duration = Duration::from_millis(250);

/// Main application struct
pub struct App {
    state: AppState,
    ui: UiRenderer,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application instance with the standard catalog
    pub fn new() -> Self {
        info!("creating configurator app");
        Self {
            state: AppState::new(),
            ui: UiRenderer::new(),
        }
    }

    /// Read-only access to the application state (used by tests)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the event loop until the user quits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("entering event loop");
        loop {
            terminal.draw(|f| self.ui.render(f, &self.state))?;

            if event::poll(TICK_RATE)? {
                if let Event::Key(key) = event::read()? {
                    input::handle_key(&mut self.state, key);
                }
            }

            if self.state.should_quit {
                info!(total = self.state.total(), "session ended");
                return Ok(());
            }
        }
    }
}
