// Messages exchanged between the TUI and the app orchestrator.

use draftboard_core::draft::pick::{DraftPick, Player, Position};
use draftboard_core::draft::roster::RosterSlot;

/// Which tab is active in the main panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TabId {
    #[default]
    Available,
    DraftLog,
    Teams,
}

/// Commands sent from the TUI to the app orchestrator.
#[derive(Debug, Clone, PartialEq)]
pub enum UserCommand {
    Login(String),
    Logout,
    /// Draft a player onto the current user's roster.
    Assign { label: String },
    /// Release a player from one of the current user's slots.
    Unassign { label: String, position: Position },
    Quit,
}

/// One user's roster as shown on the Teams tab and in the sidebar.
#[derive(Debug, Clone)]
pub struct ManagerSnapshot {
    pub user: String,
    pub slots: Vec<RosterSlot>,
}

impl ManagerSnapshot {
    pub fn filled(&self) -> usize {
        self.slots.iter().filter(|s| s.player.is_some()).count()
    }
}

/// Everything the TUI needs to render, captured after each command.
#[derive(Debug, Clone, Default)]
pub struct AppSnapshot {
    pub draft_name: String,
    /// Configured login names, in order.
    pub users: Vec<String>,
    pub current_user: Option<String>,
    /// The available pool, unfiltered, in load order.
    pub available: Vec<Player>,
    pub managers: Vec<ManagerSnapshot>,
    pub draft_log: Vec<DraftPick>,
    pub pick_count: usize,
    pub total_slots: usize,
}

/// Updates pushed from the app orchestrator to the TUI.
#[derive(Debug, Clone)]
pub enum UiUpdate {
    StateSnapshot(Box<AppSnapshot>),
}
