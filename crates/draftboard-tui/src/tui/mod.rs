// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` that mirrors the application state. The app
// orchestrator pushes `UiUpdate` messages over an mpsc channel; the TUI
// applies them to `ViewState` and re-renders at ~30 fps.

pub mod input;
pub mod layout;
pub mod widgets;

use std::collections::HashMap;
use std::time::Duration;

use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tokio::sync::mpsc;
use tracing::debug;

use draftboard_core::draft::pick::{DraftPick, Player};
use draftboard_core::draft::pool::filter_players;
use draftboard_core::draft::roster::RosterSlot;

use crate::protocol::{AppSnapshot, ManagerSnapshot, TabId, UiUpdate, UserCommand};

use layout::{build_layout, AppLayout};

/// Which draft-screen panel receives selection keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Players,
    Roster,
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state that mirrors the application state for rendering.
#[derive(Debug, Default)]
pub struct ViewState {
    pub draft_name: String,
    /// Configured login names.
    pub users: Vec<String>,
    /// Logged-in user; `None` shows the login screen.
    pub current_user: Option<String>,
    /// All available players in pool order (unfiltered).
    pub available_players: Vec<Player>,
    /// The logged-in user's roster slots.
    pub my_roster: Vec<RosterSlot>,
    pub managers: Vec<ManagerSnapshot>,
    pub draft_log: Vec<DraftPick>,
    pub pick_count: usize,
    pub total_slots: usize,
    /// Which tab is active in the main panel.
    pub active_tab: TabId,
    pub focus: Focus,
    /// Highlighted row on the login screen.
    pub login_selected: usize,
    /// Highlighted row in the filtered available list.
    pub player_selected: usize,
    /// Highlighted slot in the roster sidebar.
    pub roster_selected: usize,
    /// Per-widget scroll offsets (keyed by widget name).
    pub scroll_offset: HashMap<String, usize>,
    /// Current search text.
    pub filter_text: String,
    /// Whether the search input is capturing keys.
    pub filter_mode: bool,
    /// Whether the quit confirmation dialog is showing.
    pub confirm_quit: bool,
}

impl ViewState {
    /// Apply a full state snapshot from the app orchestrator.
    ///
    /// Local UI state (tab, focus, filter, scroll) is kept; selections are
    /// clamped to the new list lengths.
    pub fn apply_snapshot(&mut self, snapshot: AppSnapshot) {
        if snapshot.current_user != self.current_user {
            self.reset_draft_view();
        }

        self.draft_name = snapshot.draft_name;
        self.users = snapshot.users;
        self.current_user = snapshot.current_user;
        self.available_players = snapshot.available;
        self.my_roster = self
            .current_user
            .as_ref()
            .and_then(|u| snapshot.managers.iter().find(|m| &m.user == u))
            .map(|m| m.slots.clone())
            .unwrap_or_default();
        self.managers = snapshot.managers;
        self.draft_log = snapshot.draft_log;
        self.pick_count = snapshot.pick_count;
        self.total_slots = snapshot.total_slots;

        self.clamp_selections();
    }

    /// Available players matching the current search text.
    pub fn filtered_players(&self) -> Vec<&Player> {
        filter_players(&self.available_players, &self.filter_text)
    }

    /// The available player under the cursor.
    pub fn selected_player(&self) -> Option<&Player> {
        self.filtered_players().get(self.player_selected).copied()
    }

    /// The roster slot under the cursor.
    pub fn selected_slot(&self) -> Option<&RosterSlot> {
        self.my_roster.get(self.roster_selected)
    }

    pub fn clamp_selections(&mut self) {
        let players = self.filtered_players().len();
        self.player_selected = self.player_selected.min(players.saturating_sub(1));
        self.roster_selected = self
            .roster_selected
            .min(self.my_roster.len().saturating_sub(1));
        self.login_selected = self.login_selected.min(self.users.len().saturating_sub(1));
    }

    fn reset_draft_view(&mut self) {
        self.active_tab = TabId::Available;
        self.focus = Focus::Players;
        self.player_selected = 0;
        self.roster_selected = 0;
        self.filter_text.clear();
        self.filter_mode = false;
        self.scroll_offset.clear();
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    match update {
        UiUpdate::StateSnapshot(snapshot) => {
            state.apply_snapshot(*snapshot);
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
fn render_frame(frame: &mut Frame, state: &ViewState) {
    let area = frame.area();
    let layout = build_layout(area);

    if state.current_user.is_none() {
        widgets::login::render(frame, layout.body, state);
    } else {
        widgets::status_bar::render(frame, layout.status_bar, state);
        render_main_panel(frame, &layout, state);
        widgets::roster::render(
            frame,
            layout.roster,
            state,
            state.focus == Focus::Roster,
        );
    }
    render_help_bar(frame, &layout, state);

    if state.confirm_quit {
        widgets::quit_confirm::render(frame, area);
    }
}

fn render_main_panel(frame: &mut Frame, layout: &AppLayout, state: &ViewState) {
    match state.active_tab {
        TabId::Available => widgets::available::render(
            frame,
            layout.main_panel,
            state,
            state.focus == Focus::Players,
        ),
        TabId::DraftLog => widgets::draft_log::render(frame, layout.main_panel, state),
        TabId::Teams => widgets::teams::render(frame, layout.main_panel, state),
    }
}

/// Keyboard hints for the current mode.
pub fn help_text(state: &ViewState) -> &'static str {
    if state.confirm_quit {
        " y:Quit | n:Cancel"
    } else if state.current_user.is_none() {
        " Up/Down:Select | Enter:Login | q:Quit"
    } else if state.filter_mode {
        " Type to search | Enter:Keep | Esc:Clear"
    } else {
        match state.focus {
            Focus::Players => {
                " Enter:Draft | /:Search | Tab:Roster | 1-3:Tabs | o:Logout | q:Quit"
            }
            Focus::Roster => " Enter/d:Remove | Tab:Players | 1-3:Tabs | o:Logout | q:Quit",
        }
    }
}

fn render_help_bar(frame: &mut Frame, layout: &AppLayout, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        help_text(state),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, layout.help_bar);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// This is the main entry point for the terminal UI. It:
/// 1. Initializes the terminal (enters raw mode, enables alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop: UI updates, keyboard input, render ticks.
/// 4. Restores the terminal on clean exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::default();
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    let result = loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update),
                    // Channel closed: app is shutting down
                    None => break Ok(()),
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            debug!("Sending command: {:?}", cmd);
                            let quit = cmd == UserCommand::Quit;
                            if cmd_tx.send(cmd).await.is_err() || quit {
                                break Ok(());
                            }
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => break Err(anyhow::Error::from(e)),
                    None => break Ok(()),
                }
            }

            _ = render_tick.tick() => {
                if let Err(e) = terminal.draw(|frame| render_frame(frame, &view_state)) {
                    break Err(anyhow::Error::from(e));
                }
            }
        }
    };

    ratatui::restore();

    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
