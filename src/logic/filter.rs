use crate::state::{Candidate, FilterState};

/// What: Evaluate the predicate conjunction for one candidate.
///
/// Inputs:
/// - `c`: Candidate under test
/// - `filters`: Active selections; unset dimensions are vacuously true
///
/// Output:
/// - `true` when the candidate satisfies every active dimension.
///
/// Details:
/// - The search term matches name OR email, case-insensitively.
/// - Dimensions are independent; evaluation order does not affect the result.
#[must_use]
pub fn matches_filters(c: &Candidate, filters: &FilterState) -> bool {
    if let Some(role) = &filters.role
        && c.role != *role
    {
        return false;
    }
    if let Some(migrant) = filters.is_migrant
        && c.is_migrant != migrant
    {
        return false;
    }
    if let Some(rfc) = filters.has_rfc
        && c.has_rfc != rfc
    {
        return false;
    }
    if let Some(min) = filters.min_experience
        && c.experience_years < min
    {
        return false;
    }
    if !filters.search_term.is_empty() {
        let term = filters.search_term.to_lowercase();
        if !c.name.to_lowercase().contains(&term) && !c.email.to_lowercase().contains(&term) {
            return false;
        }
    }
    true
}

/// What: Derive the ordered view for the current selections.
///
/// Inputs:
/// - `all`: Full dataset (read-only)
/// - `filters`: Active filter/search/sort selections
///
/// Output:
/// - New vector with exactly the matching candidates, sorted by
///   `created_at` per `filters.sort_direction`.
///
/// Details:
/// - Pure and idempotent; `all` is never mutated and the result is always a
///   subset of it.
#[must_use]
pub fn filter_candidates(all: &[Candidate], filters: &FilterState) -> Vec<Candidate> {
    let mut out: Vec<Candidate> = all
        .iter()
        .filter(|c| matches_filters(c, filters))
        .cloned()
        .collect();
    crate::logic::sort_by_created_at(&mut out, filters.sort_direction);
    out
}
