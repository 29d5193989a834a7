//! User interface rendering module
//!
//! This module is organized into submodules for better maintainability:
//! - `header` - Title bar, step indicator, nav bar, help overlay
//! - `steps` - Option lists for the five selection steps
//! - `summary` - Itemized quote for the summary step
//! - `preview` - Terminal rendering of the scene plan
//!
//! Rendering only reads state; every widget derives what it shows from the
//! same configuration snapshot, so the header total, the preview, and the
//! summary can never disagree.

mod header;
mod preview;
mod steps;
mod summary;

pub use header::format_dollars;

use crate::app::AppState;
use crate::session::WizardStep;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

/// UI renderer for the application
///
/// Main entry point for UI rendering; delegates to specialized submodules
/// for the different panes.
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    /// Create a new UI renderer
    pub fn new() -> Self {
        Self
    }

    /// Render the complete UI based on application state
    pub fn render(&self, f: &mut Frame, state: &AppState) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title bar with running total
                Constraint::Length(2), // Step indicator
                Constraint::Min(1),    // Main content
                Constraint::Length(1), // Status / nav bar
            ])
            .split(f.area());

        header::render_title_bar(f, state, rows[0]);
        header::render_step_indicator(f, state, rows[1]);

        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(rows[2]);

        preview::render_preview(f, state, panes[0]);

        match state.session.step() {
            WizardStep::Summary => summary::render_summary(f, state, panes[1]),
            _ => steps::render_options(f, state, panes[1]),
        }

        header::render_status_bar(f, state, rows[3]);

        if state.help_visible {
            header::render_help_overlay(f);
        }
    }
}
