use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::state::{AppState, Focus};
use crate::theme::theme;
use crate::ui::helpers::tristate_label;

/// Render the filter/search panel.
///
/// Shows the two text boxes (search and minimum experience) with a caret on
/// the focused one, and the toggle row reflecting the current role, RFC,
/// migrant, and sort selections.
pub fn render_filters(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme();

    let caret = |focused: bool| if focused { "▏" } else { " " };
    let box_style = |focused: bool| {
        if focused {
            Style::default().fg(th.text).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(th.subtext)
        }
    };

    let search_focused = app.focus == Focus::Search;
    let exp_focused = app.focus == Focus::MinExperience;

    let input_line = Line::from(vec![
        Span::styled("Search ", Style::default().fg(th.overlay)),
        Span::styled(
            format!("{}{}", app.filters.search_term, caret(search_focused)),
            box_style(search_focused),
        ),
        Span::raw("   "),
        Span::styled("Min exp ", Style::default().fg(th.overlay)),
        Span::styled(
            format!("{}{}", app.min_experience_input, caret(exp_focused)),
            box_style(exp_focused),
        ),
    ]);

    // Toggle chips: [Role: …] [RFC: …] [Migrant: …] [Sort: …]
    let chip = |label: String, active: bool| -> Span<'static> {
        let (fg, bg) = if active {
            (th.crust, th.green)
        } else {
            (th.mauve, th.surface)
        };
        Span::styled(
            format!("[{label}]"),
            Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
        )
    };
    let role_label = app
        .filters
        .role
        .clone()
        .unwrap_or_else(|| "All".to_string());
    let sort_label = match app.filters.sort_direction {
        crate::state::SortDirection::Descending => "Newest first",
        crate::state::SortDirection::Ascending => "Oldest first",
    };
    let toggle_line = Line::from(vec![
        chip(format!("Role: {role_label}"), app.filters.role.is_some()),
        Span::raw(" "),
        chip(
            format!("RFC: {}", tristate_label(app.filters.has_rfc, "Yes", "No")),
            app.filters.has_rfc.is_some(),
        ),
        Span::raw(" "),
        chip(
            format!(
                "Migrant: {}",
                tristate_label(app.filters.is_migrant, "Yes", "No")
            ),
            app.filters.is_migrant.is_some(),
        ),
        Span::raw(" "),
        chip(format!("Sort: {sort_label}"), false),
    ]);

    let title = if app.filters.any_active() {
        Line::from(vec![
            Span::styled("Filters ", Style::default().fg(th.overlay)),
            Span::styled("(active)", Style::default().fg(th.green)),
        ])
    } else {
        Line::from(Span::styled("Filters", Style::default().fg(th.overlay)))
    };

    let panel = Paragraph::new(vec![input_line, toggle_line]).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(th.lavender))
            .title(title),
    );
    f.render_widget(panel, area);
}
