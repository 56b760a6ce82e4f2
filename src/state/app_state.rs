//! Central `AppState` container mutated by the event and UI layers.

use ratatui::widgets::TableState;

use crate::state::filters::FilterState;
use crate::state::types::{Candidate, Focus};

/// Global application state shared by the event and UI layers.
///
/// `candidates` is loaded once at startup and treated as read-only from then
/// on; `results` is the derived view recomputed after every state change.
#[derive(Debug, Default)]
pub struct AppState {
    /// Full dataset as loaded at startup. Never mutated afterwards.
    pub candidates: Vec<Candidate>,
    /// Derived view currently displayed, ordered per the active sort.
    pub results: Vec<Candidate>,
    /// Distinct roles present in the dataset, sorted for the role cycle.
    pub roles: Vec<String>,
    /// Active filter, search, and sort selections.
    pub filters: FilterState,
    /// Raw text of the minimum-experience box. Lenient-parsed into
    /// `filters.min_experience` on every change; garbage means "no bound".
    pub min_experience_input: String,
    /// Which text box receives typed characters.
    pub focus: Focus,
    /// Index into `results` that is currently highlighted.
    pub selected: usize,
    /// Table selection state for the results table.
    pub table_state: TableState,
}

impl AppState {
    /// What: Build the initial state for a loaded dataset.
    ///
    /// Inputs:
    /// - `candidates`: Full dataset from the loader
    /// - `filters`: Initial selections (CLI/config may preset the sort)
    ///
    /// Output:
    /// - State with roles extracted and `results` derived once.
    #[must_use]
    pub fn new(candidates: Vec<Candidate>, filters: FilterState) -> Self {
        let roles = crate::logic::unique_roles(&candidates);
        let mut app = Self {
            candidates,
            roles,
            filters,
            ..Self::default()
        };
        crate::logic::refresh_results(&mut app);
        app
    }

    /// Identifier of the currently highlighted candidate, if any.
    #[must_use]
    pub fn selected_id(&self) -> Option<u64> {
        self.results.get(self.selected).map(|c| c.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::candidate;

    #[test]
    /// What: new derives roles and an initial descending view
    ///
    /// - Input: Two candidates with distinct roles, default filters
    /// - Output: Sorted role list; results ordered newest first
    fn app_state_new_derives_roles_and_results() {
        let app = AppState::new(
            vec![
                candidate(1, "Ana", "ana@example.com", "Engineer", 2, "2024-01-01T00:00:00Z"),
                candidate(2, "Luz", "luz@example.com", "Designer", 5, "2024-06-01T00:00:00Z"),
            ],
            FilterState::default(),
        );
        assert_eq!(app.roles, vec!["Designer".to_string(), "Engineer".to_string()]);
        assert_eq!(app.results.len(), 2);
        assert_eq!(app.results[0].id, 2);
        assert_eq!(app.selected_id(), Some(2));
    }
}
