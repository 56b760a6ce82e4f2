//! Core application state for Candidex's TUI.
//!
//! This module defines the dataset record type, the mutable
//! [`FilterState`] owned by the UI, and the central [`AppState`] container
//! mutated by the event and UI layers.

/// Central `AppState` container.
mod app_state;
/// Filter/search/sort selections and cycling helpers.
mod filters;
/// Value types: candidate records, sort direction, focus.
mod types;

pub use app_state::AppState;
pub use filters::{FilterState, cycle_role, cycle_tristate};
pub use types::{Candidate, Focus, SortDirection};
