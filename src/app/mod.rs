//! Candidex application runtime (terminal lifecycle and event loop).
//!
//! This module encapsulates the TUI runtime so that the binary entrypoint
//! stays minimal.

/// Runtime event loop and startup wiring.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

// Re-export the public entrypoint so callers keep using `app::run(...)`.
pub use runtime::{build_initial_state, run};
