// Teams widget: every user's roster fill and drafted players.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use crate::protocol::ManagerSnapshot;
use crate::tui::ViewState;

/// Render the teams overview into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let header = Row::new(vec![
        Cell::from("User"),
        Cell::from("Filled"),
        Cell::from("Players"),
    ])
    .style(
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(0);

    let current = state.current_user.as_deref();

    let rows: Vec<Row> = if state.managers.is_empty() {
        vec![Row::new(vec![Cell::from("  No teams yet")])]
    } else {
        state
            .managers
            .iter()
            .map(|m| {
                let style = if Some(m.user.as_str()) == current {
                    Style::default().fg(Color::Cyan)
                } else {
                    Style::default()
                };
                Row::new(vec![
                    Cell::from(m.user.clone()),
                    Cell::from(format!("{}/{}", m.filled(), m.slots.len())),
                    Cell::from(format_players(m)),
                ])
                .style(style)
            })
            .collect()
    };

    let widths = [
        Constraint::Length(12),
        Constraint::Length(7),
        Constraint::Min(20),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title("Teams"));
    frame.render_widget(table, area);
}

/// Drafted player names in slot order, e.g. "QB Josh Allen, RB James Cook".
pub fn format_players(manager: &ManagerSnapshot) -> String {
    let names: Vec<String> = manager
        .slots
        .iter()
        .filter_map(|s| {
            s.player
                .as_ref()
                .map(|p| format!("{} {}", s.position.display_str(), p.name))
        })
        .collect();
    if names.is_empty() {
        "--".to_string()
    } else {
        names.join(", ")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
