//! Rendering layer for Candidex's TUI.
//!
//! The interface is three stacked regions: a filter/search panel, the
//! candidate table, and a keybinding footer. All content is derived from
//! [`AppState`]; rendering never mutates the dataset.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::AppState;
use crate::theme::theme;

/// Filter/search panel rendering.
mod filters;
/// Presentation helpers (labels, pluralization).
pub mod helpers;
/// Candidate table and empty-state rendering.
mod results;

/// What: Draw the whole frame from the current state.
///
/// Inputs:
/// - `f`: Ratatui frame
/// - `app`: Application state (mutable for table scroll state)
///
/// Output: none (side effect: widgets drawn into the frame).
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(f.area());

    filters::render_filters(f, app, chunks[0]);
    results::render_results(f, app, chunks[1]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("Tab", Style::default().fg(th.mauve)),
        Span::styled(" field  ", Style::default().fg(th.subtext)),
        Span::styled("^R", Style::default().fg(th.mauve)),
        Span::styled(" role  ", Style::default().fg(th.subtext)),
        Span::styled("^T", Style::default().fg(th.mauve)),
        Span::styled(" rfc  ", Style::default().fg(th.subtext)),
        Span::styled("^G", Style::default().fg(th.mauve)),
        Span::styled(" migrant  ", Style::default().fg(th.subtext)),
        Span::styled("^S", Style::default().fg(th.mauve)),
        Span::styled(" sort  ", Style::default().fg(th.subtext)),
        Span::styled("^L", Style::default().fg(th.mauve)),
        Span::styled(" clear  ", Style::default().fg(th.subtext)),
        Span::styled("Esc", Style::default().fg(th.mauve)),
        Span::styled(" quit", Style::default().fg(th.subtext)),
    ]));
    f.render_widget(footer, chunks[2]);
}
