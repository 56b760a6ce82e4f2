//! Event handling layer for Candidex's TUI.
//!
//! This module centralizes keyboard input for the single-screen interface:
//! text editing for the search and minimum-experience boxes, table
//! navigation, and the filter-cycling shortcuts. Every state change is
//! followed by a full engine refresh; recomputation is cheap and idempotent.

use crossterm::event::{Event as CEvent, KeyCode, KeyEventKind, KeyModifiers};

use crate::state::{AppState, Focus, cycle_role, cycle_tristate};

/// Rows jumped by PageUp/PageDown.
const PAGE_JUMP: usize = 10;

/// Dispatch a single terminal event and mutate the [`AppState`].
///
/// Returns `true` to signal the application should exit; otherwise `false`.
pub fn handle_event(ev: &CEvent, app: &mut AppState) -> bool {
    let CEvent::Key(ke) = ev else {
        return false;
    };
    if ke.kind != KeyEventKind::Press {
        return false;
    }

    // Global shortcuts (regardless of focus)
    if ke.modifiers.contains(KeyModifiers::CONTROL) {
        match ke.code {
            KeyCode::Char('c') | KeyCode::Char('q') => return true,
            KeyCode::Char('r') => {
                app.filters.role = cycle_role(app.filters.role.as_deref(), &app.roles);
                crate::logic::refresh_results(app);
            }
            KeyCode::Char('t') => {
                app.filters.has_rfc = cycle_tristate(app.filters.has_rfc);
                crate::logic::refresh_results(app);
            }
            KeyCode::Char('g') => {
                app.filters.is_migrant = cycle_tristate(app.filters.is_migrant);
                crate::logic::refresh_results(app);
            }
            KeyCode::Char('s') => {
                app.filters.sort_direction = app.filters.sort_direction.flipped();
                crate::logic::refresh_results(app);
            }
            KeyCode::Char('l') => {
                app.filters.reset();
                app.min_experience_input.clear();
                crate::logic::refresh_results(app);
            }
            _ => {}
        }
        return false;
    }

    match ke.code {
        KeyCode::Esc => return true,
        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::Search => Focus::MinExperience,
                Focus::MinExperience => Focus::Search,
            };
        }
        KeyCode::Up => move_selection(app, -1),
        KeyCode::Down => move_selection(app, 1),
        KeyCode::PageUp => move_selection(app, -(PAGE_JUMP as isize)),
        KeyCode::PageDown => move_selection(app, PAGE_JUMP as isize),
        KeyCode::Home => jump_selection(app, 0),
        KeyCode::End => jump_selection(app, usize::MAX),
        KeyCode::Backspace => {
            match app.focus {
                Focus::Search => {
                    app.filters.search_term.pop();
                }
                Focus::MinExperience => {
                    app.min_experience_input.pop();
                }
            }
            crate::logic::refresh_results(app);
        }
        KeyCode::Char(c) => {
            match app.focus {
                Focus::Search => app.filters.search_term.push(c),
                // Garbage is tolerated here; the lenient parser simply
                // deactivates the bound until the text is a number again.
                Focus::MinExperience => app.min_experience_input.push(c),
            }
            crate::logic::refresh_results(app);
        }
        _ => {}
    }
    false
}

/// What: Move the highlighted row by a signed delta, clamped to the view.
///
/// Inputs:
/// - `app`: Application state
/// - `delta`: Rows to move (negative = up)
///
/// Output: none (side effect: `selected` and `table_state` updated).
fn move_selection(app: &mut AppState, delta: isize) {
    if app.results.is_empty() {
        return;
    }
    let last = app.results.len() - 1;
    let next = app.selected.saturating_add_signed(delta).min(last);
    jump_selection(app, next);
}

/// Jump directly to a row index, clamped to the view.
fn jump_selection(app: &mut AppState, idx: usize) {
    if app.results.is_empty() {
        return;
    }
    app.selected = idx.min(app.results.len() - 1);
    app.table_state.select(Some(app.selected));
}
