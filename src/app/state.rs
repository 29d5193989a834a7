//! Application state definitions
//!
//! The TUI's view state wraps the engine: the catalog, one configurator
//! session, per-step cursor positions, and transient UI flags. Everything
//! price- or scene-shaped is derived on demand, never cached here.

use crate::catalog::Catalog;
use crate::pricing::{self, Quote};
use crate::scene::{self, ScenePlan};
use crate::session::{ConfiguratorSession, WizardStep};

/// Main application state
#[derive(Debug)]
pub struct AppState {
    /// Immutable option catalog, loaded once at startup
    pub catalog: Catalog,
    /// The visitor's session: selections plus wizard step
    pub session: ConfiguratorSession,
    /// Cursor position per wizard step, so revisiting a step keeps its place
    cursors: [usize; WizardStep::COUNT],
    /// Status message for user feedback (selection results, rejections)
    pub status_message: String,
    /// True when the status message reports a rejected operation
    pub status_is_error: bool,
    /// Whether the help overlay is visible
    pub help_visible: bool,
    /// Set when the user asks to leave
    pub should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            catalog: Catalog::standard(),
            session: ConfiguratorSession::new(),
            cursors: [0; WizardStep::COUNT],
            status_message: "Build your PYRE — press ? for help".to_string(),
            status_is_error: false,
            help_visible: false,
            should_quit: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an informational status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    /// Set a rejection status message, rendered in the error style
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }

    /// Number of option rows on the current step (0 on Summary)
    pub fn current_list_len(&self) -> usize {
        match self.session.step() {
            WizardStep::Exterior => self.catalog.colors().len(),
            WizardStep::Base => self.catalog.bases().len(),
            WizardStep::Modules => self.catalog.cooking_modules().len(),
            WizardStep::Accessories => self.catalog.accessories().len(),
            WizardStep::Tools => self.catalog.tools().len(),
            WizardStep::Summary => 0,
        }
    }

    /// Cursor position on the current step, clamped to the list
    pub fn cursor(&self) -> usize {
        let len = self.current_list_len();
        let raw = self.cursors[self.session.step().index()];
        if len == 0 {
            0
        } else {
            raw.min(len - 1)
        }
    }

    /// Move the cursor up one row, stopping at the top
    pub fn cursor_up(&mut self) {
        let step = self.session.step().index();
        self.cursors[step] = self.cursor().saturating_sub(1);
    }

    /// Move the cursor down one row, stopping at the bottom
    pub fn cursor_down(&mut self) {
        let len = self.current_list_len();
        if len == 0 {
            return;
        }
        let step = self.session.step().index();
        self.cursors[step] = (self.cursor() + 1).min(len - 1);
    }

    /// Id of the option under the cursor, if the step has an option list
    pub fn highlighted_id(&self) -> Option<&str> {
        let i = self.cursor();
        match self.session.step() {
            WizardStep::Exterior => self.catalog.colors().get(i).map(|c| c.id.as_str()),
            WizardStep::Base => self.catalog.bases().get(i).map(|b| b.id.as_str()),
            WizardStep::Modules => self.catalog.cooking_modules().get(i).map(|m| m.id.as_str()),
            WizardStep::Accessories => self.catalog.accessories().get(i).map(|a| a.id.as_str()),
            WizardStep::Tools => self.catalog.tools().get(i).map(|t| t.id.as_str()),
            WizardStep::Summary => None,
        }
    }

    /// Running total for the current selections
    pub fn total(&self) -> u64 {
        pricing::total_price(&self.catalog, self.session.config())
    }

    /// Itemized quote for the summary step
    pub fn quote(&self) -> Quote {
        pricing::build_quote(&self.catalog, self.session.config())
    }

    /// Scene plan for the preview pane
    pub fn scene(&self) -> ScenePlan {
        scene::derive_scene(&self.catalog, self.session.config())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_clamps_to_list() {
        let mut state = AppState::new();
        for _ in 0..20 {
            state.cursor_down();
        }
        assert_eq!(state.cursor(), state.catalog.colors().len() - 1);
        state.cursor_up();
        assert_eq!(state.cursor(), state.catalog.colors().len() - 2);
    }

    #[test]
    fn test_cursor_is_per_step() {
        let mut state = AppState::new();
        state.cursor_down();
        assert_eq!(state.cursor(), 1);
        state.session.advance();
        assert_eq!(state.cursor(), 0);
        state.session.retreat();
        assert_eq!(state.cursor(), 1);
    }

    #[test]
    fn test_highlighted_id_follows_cursor() {
        let mut state = AppState::new();
        assert_eq!(state.highlighted_id(), Some("obsidian"));
        state.cursor_down();
        assert_eq!(state.highlighted_id(), Some("gunmetal"));
    }

    #[test]
    fn test_summary_has_no_option_list() {
        let mut state = AppState::new();
        state.session.go_to_step(5).unwrap();
        assert_eq!(state.current_list_len(), 0);
        assert_eq!(state.highlighted_id(), None);
        // Cursor movement on an empty list is a no-op, not a panic
        state.cursor_down();
        state.cursor_up();
    }

    #[test]
    fn test_status_tracks_error_flag() {
        let mut state = AppState::new();
        assert!(!state.status_is_error);

        state.set_error("'plaid' is not a known entry in the colors catalog");
        assert!(state.status_is_error);

        state.set_status("Ember Red added");
        assert!(!state.status_is_error);
    }

    #[test]
    fn test_total_tracks_session() {
        let mut state = AppState::new();
        assert_eq!(state.total(), 4999);
        state
            .session
            .toggle_module(&state.catalog, "pizza-oven")
            .unwrap();
        assert_eq!(state.total(), 5598);
    }
}
