//! Runtime wiring: dataset load, initial state, and the blocking event loop.

use std::time::Duration;

use crossterm::event;
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::args::Args;
use crate::state::{AppState, FilterState, SortDirection};
use crate::ui::ui;

/// Result alias matching the application-wide error convention.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Redraw cadence while idle; input is handled as soon as it arrives.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// What: Build the initial application state from CLI and settings.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
///
/// Output:
/// - Loaded [`AppState`], or the dataset error to surface at startup.
///
/// Details:
/// - Sort precedence: `--sort` flag > settings file > descending default.
pub fn build_initial_state(args: &Args) -> Result<AppState> {
    let settings = crate::util::config::load_settings();
    let data_path = crate::data::resolve_data_path(args.data.clone(), settings.data_path.clone());
    let candidates = crate::data::load_candidates(&data_path)?;

    let sort_direction = args
        .sort
        .as_deref()
        .and_then(SortDirection::from_config_key)
        .unwrap_or(settings.sort_direction);
    let filters = FilterState {
        sort_direction,
        ..FilterState::default()
    };
    Ok(AppState::new(candidates, filters))
}

/// What: Run the TUI until the user quits.
///
/// Inputs:
/// - `args`: Parsed command-line arguments
///
/// Output:
/// - `Ok(())` on clean exit; dataset or terminal errors otherwise. The
///   terminal is restored even when the loop fails.
pub fn run(args: &Args) -> Result<()> {
    let mut app = build_initial_state(args)?;
    tracing::info!(
        candidates = app.candidates.len(),
        roles = app.roles.len(),
        sort = app.filters.sort_direction.as_config_key(),
        "starting interface"
    );

    super::terminal::setup_terminal()?;
    let loop_result = event_loop(&mut app);
    let restore_result = super::terminal::restore_terminal();
    loop_result?;
    restore_result
}

/// Draw/input cycle; returns when an event handler signals exit.
fn event_loop(app: &mut AppState) -> Result<()> {
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;
    loop {
        terminal.draw(|f| ui(f, app))?;
        if event::poll(POLL_INTERVAL)? {
            let ev = event::read()?;
            if crate::events::handle_event(&ev, app) {
                tracing::info!("exit requested");
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    /// What: Initial state honors the --sort flag over defaults
    ///
    /// - Input: Bundled sample dataset with --sort ascending
    /// - Output: Oldest candidate first in the initial view
    fn runtime_initial_state_sort_precedence() {
        let args = Args::parse_from(["candidex", "--sort", "ascending"]);
        let app = build_initial_state(&args).unwrap();
        assert!(!app.results.is_empty());
        let first = app.results.first().map(|c| c.created_at);
        let last = app.results.last().map(|c| c.created_at);
        assert!(first <= last);
    }

    #[test]
    /// What: A missing dataset surfaces an error instead of panicking
    ///
    /// - Input: --data pointing at a nonexistent file
    /// - Output: Err mentioning the path
    fn runtime_initial_state_missing_dataset_errors() {
        let args = Args::parse_from(["candidex", "--data", "/definitely/not/here.json"]);
        let err = build_initial_state(&args).unwrap_err();
        assert!(err.to_string().contains("not/here.json"));
    }
}
