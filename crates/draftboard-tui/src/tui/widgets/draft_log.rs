// Draft log widget: roster changes, newest first.
//
// Each: "#{seq} {HH:MM:SS} {user} drafted {label} ({slot})"
// Color: green for drafts, red for releases.

use ratatui::layout::{Margin, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, List, ListItem, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};
use ratatui::Frame;

use draftboard_core::draft::pick::{DraftPick, PickAction};

use crate::tui::ViewState;

/// Render the draft log into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    if state.draft_log.is_empty() {
        let paragraph = Paragraph::new("  No picks yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title("Draft Log"));
        frame.render_widget(paragraph, area);
        return;
    }

    let scroll_offset = state.scroll_offset.get("draft_log").copied().unwrap_or(0);

    // Visible row count: subtract 2 for borders
    let visible_rows = (area.height as usize).saturating_sub(2);

    let total = state.draft_log.len();
    let max_offset = total.saturating_sub(visible_rows);
    let scroll_offset = scroll_offset.min(max_offset);

    let items: Vec<ListItem> = state
        .draft_log
        .iter()
        .rev()
        .skip(scroll_offset)
        .take(visible_rows.max(1))
        .map(|pick| {
            let style = Style::default().fg(pick_color(pick.action));
            ListItem::new(Line::from(Span::styled(format_pick(pick), style)))
        })
        .collect();

    let title = format!("Draft Log ({})", total);

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(list, area);

    if total > visible_rows {
        let mut scrollbar_state =
            ScrollbarState::new(total.saturating_sub(visible_rows)).position(scroll_offset);
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

/// Format a single log entry for display.
pub fn format_pick(pick: &DraftPick) -> String {
    let verb = match pick.action {
        PickAction::Assigned => "drafted",
        PickAction::Released => "released",
    };
    format!(
        "#{} {} {} {} {} ({})",
        pick.seq,
        pick.at.format("%H:%M:%S"),
        pick.user,
        verb,
        pick.player_label,
        pick.slot.display_str()
    )
}

pub fn pick_color(action: PickAction) -> Color {
    match action {
        PickAction::Assigned => Color::Green,
        PickAction::Released => Color::Red,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use draftboard_core::draft::pick::Position;

    fn make_pick(seq: u32, action: PickAction) -> DraftPick {
        DraftPick {
            seq,
            user: "user1".to_string(),
            player_label: "Derrick Henry (RB)".to_string(),
            slot: Position::Flex,
            action,
            at: chrono::Local
                .with_ymd_and_hms(2025, 1, 11, 13, 5, 9)
                .single()
                .unwrap(),
        }
    }

    #[test]
    fn format_pick_drafted() {
        assert_eq!(
            format_pick(&make_pick(3, PickAction::Assigned)),
            "#3 13:05:09 user1 drafted Derrick Henry (RB) (FLEX)"
        );
    }

    #[test]
    fn format_pick_released() {
        assert_eq!(
            format_pick(&make_pick(4, PickAction::Released)),
            "#4 13:05:09 user1 released Derrick Henry (RB) (FLEX)"
        );
    }

    #[test]
    fn pick_color_by_action() {
        assert_eq!(pick_color(PickAction::Assigned), Color::Green);
        assert_eq!(pick_color(PickAction::Released), Color::Red);
    }

    #[test]
    fn render_does_not_panic_empty() {
        let backend = ratatui::backend::TestBackend::new(80, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_newest_first_with_scroll() {
        let backend = ratatui::backend::TestBackend::new(80, 4);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.draft_log = (1..=5).map(|i| make_pick(i, PickAction::Assigned)).collect();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("#5 "));
        assert!(!text.contains("#1 "));

        state.scroll_offset.insert("draft_log".into(), 10);
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("#1 "));
    }
}
