// Login screen: pick which configured user is drafting.
//
// A centered list of user names with the selected row highlighted.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

use crate::tui::ViewState;

const PANEL_WIDTH: u16 = 36;

/// Render the login screen into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let [title_area, list_area] = login_areas(area, state.users.len());

    let title = if state.draft_name.is_empty() {
        "Draft Board".to_string()
    } else {
        state.draft_name.clone()
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )))
        .centered(),
        title_area,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Log in as ");

    if state.users.is_empty() {
        frame.render_widget(
            Paragraph::new("  Waiting for draft data...")
                .style(Style::default().fg(Color::DarkGray))
                .block(block),
            list_area,
        );
        return;
    }

    let items: Vec<ListItem> = state
        .users
        .iter()
        .map(|u| ListItem::new(format!(" {}", u)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">");

    let mut list_state = ListState::default().with_selected(Some(state.login_selected));
    frame.render_stateful_widget(list, list_area, &mut list_state);
}

/// Title row plus a bordered list sized to the user count, centered in `area`.
fn login_areas(area: Rect, user_count: usize) -> [Rect; 2] {
    // +2 for borders; at least one row for the placeholder
    let list_height = (user_count.max(1) as u16).saturating_add(2);
    let total_height = list_height.saturating_add(2).min(area.height);

    let [column] = Layout::horizontal([Constraint::Length(PANEL_WIDTH.min(area.width))])
        .flex(Flex::Center)
        .areas(area);
    let [panel] = Layout::vertical([Constraint::Length(total_height)])
        .flex(Flex::Center)
        .areas(column);
    Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).areas(panel)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
