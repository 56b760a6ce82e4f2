//! The mutable filter/search/sort selections owned by the UI layer.

use crate::state::types::SortDirection;

/// Currently active filter, search, and sort selections.
///
/// Every dimension is optional; an unset dimension is vacuously true during
/// predicate evaluation. The engine reads this struct and never writes it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Exact-match role filter, `None` when inactive.
    pub role: Option<String>,
    /// Tri-state migrant filter: unset / migrants only / non-migrants only.
    pub is_migrant: Option<bool>,
    /// Tri-state RFC filter: unset / with RFC only / without RFC only.
    pub has_rfc: Option<bool>,
    /// Inclusive lower bound on years of experience, `None` when inactive.
    pub min_experience: Option<u32>,
    /// Case-insensitive substring matched against name or email. Empty means
    /// inactive.
    pub search_term: String,
    /// Ordering of the derived view over `created_at`.
    pub sort_direction: SortDirection,
}

impl FilterState {
    /// What: Restore the all-unset default state.
    ///
    /// Inputs: none (mutates `self`)
    ///
    /// Output:
    /// - All predicates cleared, search emptied, descending sort restored.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether any filter dimension (including the search term) is active.
    #[must_use]
    pub fn any_active(&self) -> bool {
        self.role.is_some()
            || self.is_migrant.is_some()
            || self.has_rfc.is_some()
            || self.min_experience.is_some()
            || !self.search_term.is_empty()
    }
}

/// What: Advance a tri-state boolean filter to its next value.
///
/// Inputs:
/// - `v`: Current value of the filter dimension
///
/// Output:
/// - The next value in the cycle unset -> true -> false -> unset.
#[must_use]
pub const fn cycle_tristate(v: Option<bool>) -> Option<bool> {
    match v {
        None => Some(true),
        Some(true) => Some(false),
        Some(false) => None,
    }
}

/// What: Advance the role filter through the known roles and back to unset.
///
/// Inputs:
/// - `current`: Currently selected role, if any
/// - `roles`: Distinct roles present in the dataset, in display order
///
/// Output:
/// - The next role in `roles` after `current`, or `None` after the last one.
///
/// Details:
/// - A `current` value absent from `roles` (stale config) restarts the cycle.
#[must_use]
pub fn cycle_role(current: Option<&str>, roles: &[String]) -> Option<String> {
    if roles.is_empty() {
        return None;
    }
    match current {
        None => Some(roles[0].clone()),
        Some(cur) => match roles.iter().position(|r| r == cur) {
            Some(pos) if pos + 1 < roles.len() => Some(roles[pos + 1].clone()),
            Some(_) => None,
            None => Some(roles[0].clone()),
        },
    }
}
