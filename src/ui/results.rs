use ratatui::{
    Frame,
    layout::Constraint,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Paragraph, Row, Table},
};

use crate::state::AppState;
use crate::theme::theme;
use crate::ui::helpers::experience_label;
use crate::util::{ellipsize, format_date};

/// Width budget for the name+email column before truncation.
const IDENTITY_WIDTH: usize = 34;

/// Render the candidate table, or the empty-state hint when nothing matches.
///
/// Keeps the selection visible through the shared [`ratatui::widgets::TableState`]
/// and shows a "shown of total" count in the block title.
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme();

    let title = Line::from(vec![
        Span::styled(
            format!("Candidates ({} of {})", app.results.len(), app.candidates.len()),
            Style::default().fg(th.overlay),
        ),
    ]);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(th.lavender))
        .title(title);

    if app.results.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(Span::styled(
                "No candidates match the current filters",
                Style::default().fg(th.yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Adjust the filters or press Ctrl+L to clear them",
                Style::default().fg(th.subtext),
            )),
        ])
        .block(block)
        .centered();
        f.render_widget(hint, area);
        return;
    }

    let header = Row::new(
        ["Candidate", "Role", "Experience", "RFC", "Migrant", "Registered"]
            .into_iter()
            .map(|h| Cell::from(Span::styled(h, Style::default().fg(th.mauve)))),
    )
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows = app.results.iter().map(|c| {
        let identity = ellipsize(&format!("{}  {}", c.name, c.email), IDENTITY_WIDTH);
        let flag = |on: bool| {
            if on {
                Cell::from(Span::styled("Yes", Style::default().fg(th.green)))
            } else {
                Cell::from(Span::styled("No", Style::default().fg(th.subtext)))
            }
        };
        Row::new(vec![
            Cell::from(Span::styled(identity, Style::default().fg(th.text))),
            Cell::from(Span::styled(c.role.clone(), Style::default().fg(th.sapphire))),
            Cell::from(Span::styled(
                experience_label(c.experience_years),
                Style::default().fg(th.text),
            )),
            flag(c.has_rfc),
            flag(c.is_migrant),
            Cell::from(Span::styled(
                format_date(&c.created_at),
                Style::default().fg(th.subtext),
            )),
        ])
    });

    let table = Table::new(
        rows,
        [
            Constraint::Min(24),
            Constraint::Length(14),
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Length(8),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(block)
    .row_highlight_style(
        Style::default()
            .fg(th.crust)
            .bg(th.sapphire)
            .add_modifier(Modifier::BOLD),
    )
    .highlight_symbol("> ");

    f.render_stateful_widget(table, area, &mut app.table_state);
}
