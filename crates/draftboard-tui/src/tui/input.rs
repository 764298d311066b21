// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages sent to the
// app orchestrator, or into local ViewState mutations (e.g. tab switching,
// selection, search).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{Focus, ViewState};
use crate::protocol::{TabId, UserCommand};

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key press should be forwarded to the
/// app orchestrator (e.g. Assign, Logout, Quit). Returns `None` when the key
/// press was handled locally by mutating `ViewState`.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }

    if view_state.current_user.is_none() {
        return handle_login_screen(key_event, view_state);
    }

    if view_state.filter_mode {
        return handle_filter_mode(key_event, view_state);
    }

    match key_event.code {
        KeyCode::Char('1') => {
            view_state.active_tab = TabId::Available;
            None
        }
        KeyCode::Char('2') => {
            view_state.active_tab = TabId::DraftLog;
            None
        }
        KeyCode::Char('3') => {
            view_state.active_tab = TabId::Teams;
            None
        }

        KeyCode::Tab | KeyCode::BackTab => {
            view_state.focus = match view_state.focus {
                Focus::Players => Focus::Roster,
                Focus::Roster => Focus::Players,
            };
            None
        }

        KeyCode::Up | KeyCode::Char('k') => {
            move_selection(view_state, -1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            move_selection(view_state, 1);
            None
        }
        KeyCode::PageUp => {
            move_selection(view_state, -(PAGE_SIZE as isize));
            None
        }
        KeyCode::PageDown => {
            move_selection(view_state, PAGE_SIZE as isize);
            None
        }

        // Search is only meaningful on the player list
        KeyCode::Char('/') => {
            view_state.active_tab = TabId::Available;
            view_state.focus = Focus::Players;
            view_state.filter_mode = true;
            None
        }
        KeyCode::Esc => {
            view_state.filter_text.clear();
            view_state.clamp_selections();
            None
        }

        KeyCode::Enter => match view_state.focus {
            Focus::Players if view_state.active_tab == TabId::Available => view_state
                .selected_player()
                .map(|p| UserCommand::Assign {
                    label: p.label.clone(),
                }),
            Focus::Roster => unassign_selected(view_state),
            _ => None,
        },
        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace
            if view_state.focus == Focus::Roster =>
        {
            unassign_selected(view_state)
        }

        KeyCode::Char('o') => Some(UserCommand::Logout),

        KeyCode::Char('q') => {
            view_state.confirm_quit = true;
            None
        }

        _ => None,
    }
}

/// Rows moved by PageUp/PageDown.
const PAGE_SIZE: usize = 10;

/// Handle key events while in quit confirmation mode.
///
/// - `y` or `q` confirms quit
/// - `n` or `Esc` cancels
/// - All other keys are blocked
fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(UserCommand::Quit)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None,
    }
}

fn handle_login_screen(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => {
            view_state.login_selected = view_state.login_selected.saturating_sub(1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            let last = view_state.users.len().saturating_sub(1);
            view_state.login_selected = (view_state.login_selected + 1).min(last);
            None
        }
        KeyCode::Enter => view_state
            .users
            .get(view_state.login_selected)
            .map(|u| UserCommand::Login(u.clone())),
        KeyCode::Char('q') => {
            view_state.confirm_quit = true;
            None
        }
        _ => None,
    }
}

/// Handle key events while in search mode.
///
/// - Printable characters are appended to filter_text
/// - Backspace removes the last character
/// - Enter keeps the text and exits search mode; Esc clears it
fn handle_filter_mode(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Esc => {
            view_state.filter_mode = false;
            view_state.filter_text.clear();
        }
        KeyCode::Enter => {
            view_state.filter_mode = false;
        }
        KeyCode::Backspace => {
            view_state.filter_text.pop();
        }
        KeyCode::Char(c) => {
            view_state.filter_text.push(c);
            view_state.player_selected = 0;
        }
        _ => {}
    }
    view_state.clamp_selections();
    None
}

fn unassign_selected(view_state: &ViewState) -> Option<UserCommand> {
    let slot = view_state.selected_slot()?;
    let player = slot.player.as_ref()?;
    Some(UserCommand::Unassign {
        label: player.label.clone(),
        position: slot.position,
    })
}

/// Move the selection in whichever list the current tab and focus point at.
fn move_selection(view_state: &mut ViewState, delta: isize) {
    if view_state.focus == Focus::Roster {
        let len = view_state.my_roster.len();
        view_state.roster_selected = step(view_state.roster_selected, delta, len);
        return;
    }

    match view_state.active_tab {
        TabId::Available => {
            let len = view_state.filtered_players().len();
            view_state.player_selected = step(view_state.player_selected, delta, len);
        }
        TabId::DraftLog => {
            let len = view_state.draft_log.len();
            let offset = view_state
                .scroll_offset
                .entry("draft_log".to_string())
                .or_insert(0);
            *offset = step(*offset, delta, len);
        }
        TabId::Teams => {}
    }
}

fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    current.saturating_add_signed(delta).min(len - 1)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
