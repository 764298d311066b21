// Screen layout: panel arrangement and sizing.
//
// Divides the terminal area into fixed zones for the draft screen:
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +-------------------------+------------------------+
// | Main Panel (65%)         | My Roster (35%)        |
// +-------------------------+------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+
//
// The login screen uses `body` (everything above the help bar).

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Everything above the help bar.
    pub body: Rect,
    /// Top row: user, draft progress, tab bar.
    pub status_bar: Rect,
    /// Left side of the middle section: tab-switched content area.
    pub main_panel: Rect,
    /// Right side of the middle section: the logged-in user's roster.
    pub roster: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // body
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let body = outer[0];
    let help_bar = outer[1];

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(2),    // main + roster
        ])
        .split(body);

    let status_bar = vertical[0];
    let middle = vertical[1];

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(middle);

    AppLayout {
        body,
        status_bar,
        main_panel: horizontal[0],
        roster: horizontal[1],
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn test_area() -> Rect {
        Rect::new(0, 0, 160, 50)
    }

    #[test]
    fn layout_all_rects_nonzero() {
        let layout = build_layout(test_area());
        let rects = [
            ("body", layout.body),
            ("status_bar", layout.status_bar),
            ("main_panel", layout.main_panel),
            ("roster", layout.roster),
            ("help_bar", layout.help_bar),
        ];
        for (name, rect) in rects {
            assert!(rect.width > 0, "{} has zero width", name);
            assert!(rect.height > 0, "{} has zero height", name);
        }
    }

    #[test]
    fn fixed_rows_are_one_high() {
        let layout = build_layout(test_area());
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.help_bar.height, 1);
        assert_eq!(layout.help_bar.y, 49);
    }

    #[test]
    fn main_panel_wider_than_roster() {
        let layout = build_layout(test_area());
        assert!(layout.main_panel.width > layout.roster.width);
        assert_eq!(layout.main_panel.width + layout.roster.width, 160);
        assert_eq!(layout.main_panel.height, layout.roster.height);
    }

    #[test]
    fn body_covers_everything_but_help() {
        let layout = build_layout(test_area());
        assert_eq!(layout.body.height, 49);
        assert_eq!(layout.body.y, 0);
    }
}
