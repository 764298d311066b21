// Status bar widget: draft name, logged-in user, progress, tab indicator.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::TabId;
use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [draft name] [user] [picks] [pool size] [tab bar]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let separator = || Span::styled(" | ", Style::default().fg(Color::Gray));

    let mut spans = vec![
        Span::styled(
            format!(" {}", state.draft_name),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        separator(),
        Span::styled(
            state.current_user.clone().unwrap_or_default(),
            Style::default().fg(Color::Cyan),
        ),
        separator(),
        Span::styled(
            format!("Picks {}/{}", state.pick_count, state.total_slots),
            Style::default().fg(Color::White),
        ),
        separator(),
        Span::styled(
            format!("{} available", state.available_players.len()),
            Style::default().fg(Color::White),
        ),
        separator(),
    ];
    spans.extend(tab_spans(state.active_tab));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Build tab indicator spans with the active tab highlighted.
/// E.g. "[1:Players] [2:Log] [3:Teams]"
pub fn tab_spans(active: TabId) -> Vec<Span<'static>> {
    let tabs = [
        (TabId::Available, "1:Players"),
        (TabId::DraftLog, "2:Log"),
        (TabId::Teams, "3:Teams"),
    ];

    let mut spans = Vec::new();
    for (tab_id, label) in tabs {
        let style = if tab_id == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("[{}]", label), style));
        spans.push(Span::raw(" "));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::logged_in_snapshot;

    #[test]
    fn tab_spans_highlight_active() {
        let spans = tab_spans(TabId::DraftLog);
        // 0=[1:Players], 1=" ", 2=[2:Log]
        assert!(spans[2].style.add_modifier.contains(Modifier::BOLD));
        assert!(!spans[0].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn tab_spans_labels() {
        let spans = tab_spans(TabId::Available);
        let labels: Vec<&str> = spans
            .iter()
            .step_by(2)
            .map(|s| s.content.as_ref())
            .collect();
        assert_eq!(labels, vec!["[1:Players]", "[2:Log]", "[3:Teams]"]);
    }

    #[test]
    fn render_does_not_panic_with_defaults() {
        let backend = ratatui::backend::TestBackend::new(80, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }

    #[test]
    fn render_shows_user_and_progress() {
        let backend = ratatui::backend::TestBackend::new(120, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.apply_snapshot(logged_in_snapshot());
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();

        let buffer = terminal.backend().buffer().clone();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Test Draft"));
        assert!(text.contains("user1"));
        assert!(text.contains("Picks 1/5"));
        assert!(text.contains("3 available"));
    }
}
