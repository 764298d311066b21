// Roster widget: the logged-in user's slots with filled/empty status.
//
// "QB: Josh Allen" or "RB: [empty]"
// The selected slot is highlighted while the roster has focus.

use ratatui::layout::{Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use ratatui::Frame;

use draftboard_core::draft::roster::RosterSlot;

use crate::tui::ViewState;

/// Render the roster sidebar into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, focused: bool) {
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    if state.my_roster.is_empty() {
        let paragraph = Paragraph::new("  No roster slots.")
            .style(Style::default().fg(Color::DarkGray))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border_style)
                    .title("My Roster"),
            );
        frame.render_widget(paragraph, area);
        return;
    }

    // Visible row count: subtract 2 for borders
    let visible_rows = (area.height as usize).saturating_sub(2).max(1);
    let total = state.my_roster.len();

    // Keep the selected slot on screen
    let scroll_offset = state
        .roster_selected
        .saturating_sub(visible_rows - 1)
        .min(total.saturating_sub(visible_rows));

    let items: Vec<ListItem> = state
        .my_roster
        .iter()
        .enumerate()
        .skip(scroll_offset)
        .take(visible_rows)
        .map(|(i, slot)| format_slot(slot, focused && i == state.roster_selected))
        .collect();

    let filled = state.my_roster.iter().filter(|s| s.player.is_some()).count();
    let title = format!("My Roster ({}/{})", filled, total);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title),
    );
    frame.render_widget(list, area);

    if total > visible_rows {
        let mut scrollbar_state = ScrollbarState::new(total.saturating_sub(visible_rows))
            .position(scroll_offset);
        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            area.inner(Margin {
                vertical: 1,
                horizontal: 0,
            }),
            &mut scrollbar_state,
        );
    }
}

/// Format a single roster slot as a ListItem.
fn format_slot<'a>(slot: &RosterSlot, selected: bool) -> ListItem<'a> {
    let base = if slot.player.is_some() {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let style = if selected {
        base.bg(Color::DarkGray)
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        base
    };

    let marker = if selected { ">" } else { " " };
    let content = format!("{}{}", marker, format_slot_text(slot));
    ListItem::new(Line::from(Span::styled(content, style)))
}

/// Format a roster slot as a plain string.
pub fn format_slot_text(slot: &RosterSlot) -> String {
    let pos_label = slot.position.display_str();
    match slot.player {
        Some(ref player) => format!("{}: {}", pos_label, player.name),
        None => format!("{}: [empty]", pos_label),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
