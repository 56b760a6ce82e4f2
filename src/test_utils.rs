//! Test utilities for common test setup.
//!
//! This module provides shared test helpers used across multiple test modules.

#[cfg(test)]
use crate::state::Candidate;

#[cfg(test)]
/// What: Build a candidate record for tests.
///
/// Inputs:
/// - `id`, `name`, `email`, `role`, `years`: Record fields
/// - `created_at`: RFC 3339 timestamp string
///
/// Output: Candidate with both boolean flags unset (false)
pub fn candidate(
    id: u64,
    name: &str,
    email: &str,
    role: &str,
    years: u32,
    created_at: &str,
) -> Candidate {
    Candidate {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        experience_years: years,
        has_rfc: false,
        is_migrant: false,
        created_at: created_at
            .parse()
            .unwrap_or_else(|_| panic!("bad test timestamp: {created_at}")),
    }
}
