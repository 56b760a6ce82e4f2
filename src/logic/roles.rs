use std::collections::BTreeSet;

use crate::state::Candidate;

/// What: Collect the distinct roles present in the dataset.
///
/// Inputs:
/// - `all`: Full candidate collection
///
/// Output:
/// - Sorted vector of unique role strings, for the role-cycle control.
#[must_use]
pub fn unique_roles(all: &[Candidate]) -> Vec<String> {
    let set: BTreeSet<&str> = all.iter().map(|c| c.role.as_str()).collect();
    set.into_iter().map(str::to_string).collect()
}
