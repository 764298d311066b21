// Available players widget: searchable table of undrafted players.
//
// Columns: #, Name, Pos, Team. Rows follow pool order; the search text
// narrows them by case-insensitive substring on the label.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the available players table into the given area.
///
/// When `focused` is true the border is highlighted and the selected row
/// is marked.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, focused: bool) {
    let filtered = state.filtered_players();

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("Name"),
        Cell::from("Pos"),
        Cell::from("Team"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(0);

    let rows: Vec<Row> = filtered
        .iter()
        .enumerate()
        .map(|(i, p)| {
            Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(p.name.clone()),
                Cell::from(p.position.display_str()),
                Cell::from(p.team.clone().unwrap_or_else(|| "--".to_string())),
            ])
        })
        .collect();

    let title = build_title(state, filtered.len());

    let widths = [
        Constraint::Length(4),
        Constraint::Min(18),
        Constraint::Length(5),
        Constraint::Min(12),
    ];

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(title),
        )
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let selected = if focused && !filtered.is_empty() {
        Some(state.player_selected)
    } else {
        None
    };
    let mut table_state = TableState::default().with_selected(selected);
    frame.render_stateful_widget(table, area, &mut table_state);
}

/// Build the title with the search text and the match count.
fn build_title(state: &ViewState, filtered_count: usize) -> Line<'static> {
    let mut title = String::from("Available Players");
    if state.filter_mode || !state.filter_text.is_empty() {
        title.push_str(&format!(" /{}", state.filter_text));
        if state.filter_mode {
            title.push('_');
        }
    }
    title.push_str(&format!(" ({})", filtered_count));
    Line::from(title)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
