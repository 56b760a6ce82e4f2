//! The Filter/Sort Engine: pure derivation of the displayed view from the
//! static dataset and the current [`FilterState`](crate::state::FilterState),
//! plus the selection-preserving refresh used by the event layer.

/// Predicate conjunction and view derivation.
mod filter;
/// Distinct-role extraction for the role cycle.
mod roles;
/// Timestamp comparator.
mod sort;

pub use filter::{filter_candidates, matches_filters};
pub use roles::unique_roles;
pub use sort::sort_by_created_at;

use crate::state::AppState;

/// What: Recompute `app.results` from the dataset and current filters,
/// preserving the highlighted row when possible.
///
/// Inputs:
/// - `app`: Mutable application state (candidates, filters, selection)
///
/// Output:
/// - Updates `app.results`, re-parses the minimum-experience box, and
///   restores selection by candidate id; clamps or clears it otherwise.
///
/// Details:
/// - Malformed text in the experience box deactivates the bound instead of
///   failing; the raw text is kept so the user can continue editing it.
pub fn refresh_results(app: &mut AppState) {
    let prev_id = app.results.get(app.selected).map(|c| c.id);

    app.filters.min_experience = crate::util::parse_min_experience(&app.min_experience_input);
    app.results = filter_candidates(&app.candidates, &app.filters);

    // Restore by id if possible
    if let Some(id) = prev_id
        && let Some(pos) = app.results.iter().position(|c| c.id == id)
    {
        app.selected = pos;
        app.table_state.select(Some(pos));
    } else if app.results.is_empty() {
        app.selected = 0;
        app.table_state.select(None);
    } else {
        app.selected = app.selected.min(app.results.len() - 1);
        app.table_state.select(Some(app.selected));
    }
}
