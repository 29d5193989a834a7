//! Keyboard input handling for the configurator wizard.
//!
//! Maps key events onto session operations. Rejected operations (unknown
//! ids, out-of-range jumps) surface in the status line; they never mutate
//! the session, so the UI can report and move on.
//!
//! # Keys
//!
//! | Key              | Action                              |
//! |------------------|-------------------------------------|
//! | Up/Down, k/j     | Move the option cursor              |
//! | Enter, Space     | Select / toggle the highlighted row |
//! | Right, n, Tab    | Next step                           |
//! | Left, b          | Previous step                       |
//! | 1-6              | Jump to step                        |
//! | ?                | Toggle help overlay                 |
//! | q, Esc           | Quit (Esc closes help first)        |

use crate::app::AppState;
use crate::session::WizardStep;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

/// Apply one key event to the application state.
pub fn handle_key(state: &mut AppState, key: KeyEvent) {
    // Ignore key release events (Windows terminals report both)
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Ctrl-C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    if state.help_visible {
        // Any key dismisses help
        state.help_visible = false;
        return;
    }

    match key.code {
        KeyCode::Char('q') => state.should_quit = true,
        KeyCode::Esc => state.should_quit = true,
        KeyCode::Char('?') => state.help_visible = true,

        KeyCode::Up | KeyCode::Char('k') => state.cursor_up(),
        KeyCode::Down | KeyCode::Char('j') => state.cursor_down(),

        KeyCode::Right | KeyCode::Char('n') | KeyCode::Tab => {
            let step = state.session.advance();
            debug!(step = %step, "advanced");
            state.set_status(step.title());
        }
        KeyCode::Left | KeyCode::Char('b') => {
            let step = state.session.retreat();
            debug!(step = %step, "retreated");
            state.set_status(step.title());
        }
        KeyCode::Char(c @ '1'..='6') => {
            // Keys are 1-based, steps are 0-based
            let index = c as usize - '1' as usize;
            match state.session.go_to_step(index) {
                Ok(step) => state.set_status(step.title()),
                Err(e) => state.set_error(e.to_string()),
            }
        }

        KeyCode::Enter | KeyCode::Char(' ') => apply_selection(state),

        _ => {}
    }
}

/// Select or toggle the highlighted option on the current step.
fn apply_selection(state: &mut AppState) {
    let step = state.session.step();
    let Some(list) = step.catalog_list() else {
        // Summary step has nothing to select
        return;
    };
    let Some(id) = state.highlighted_id().map(str::to_string) else {
        return;
    };

    let result = match step {
        WizardStep::Exterior => state
            .session
            .select_color(&state.catalog, &id)
            .map(|()| true),
        WizardStep::Base => state.session.select_base(&state.catalog, &id).map(|()| true),
        _ => state.session.toggle(&state.catalog, list, &id),
    };

    match result {
        Ok(selected) => {
            let name = state
                .catalog
                .lookup(list, &id)
                .map(|e| e.name().to_string())
                .unwrap_or(id);
            let message = if selected {
                format!("{name} added — total ${}", state.total())
            } else {
                format!("{name} removed — total ${}", state.total())
            };
            state.set_status(message);
        }
        Err(e) => state.set_error(e.to_string()),
    }
}
