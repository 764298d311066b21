// Application state and orchestration logic.
//
// The app task owns the DraftState. It applies one UserCommand at a time
// and pushes a fresh snapshot to the TUI after each, so every state
// transition is complete before the next render.

use draftboard_core::config::Config;
use draftboard_core::draft::state::DraftState;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::protocol::{AppSnapshot, ManagerSnapshot, UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// The complete application state.
pub struct AppState {
    pub config: Config,
    pub draft_state: DraftState,
}

/// What the event loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Quit,
}

impl AppState {
    pub fn new(config: Config, draft_state: DraftState) -> Self {
        AppState {
            config,
            draft_state,
        }
    }

    /// Apply a single user command to the draft state.
    ///
    /// Rejected draft operations are logged and otherwise ignored; the next
    /// snapshot simply shows the unchanged state.
    pub fn handle_command(&mut self, cmd: UserCommand) -> CommandOutcome {
        match cmd {
            UserCommand::Login(user) => {
                self.draft_state.login(&user);
            }
            UserCommand::Logout => {
                self.draft_state.logout();
            }
            UserCommand::Assign { label } => {
                if let Err(e) = self.draft_state.assign_player(&label) {
                    debug!("Assign ignored: {}", e);
                }
            }
            UserCommand::Unassign { label, position } => {
                if let Err(e) = self.draft_state.unassign_player(&label, position) {
                    debug!("Unassign ignored: {}", e);
                }
            }
            UserCommand::Quit => {
                info!("Quit requested");
                return CommandOutcome::Quit;
            }
        }
        CommandOutcome::Continue
    }

    /// Capture everything the TUI renders.
    pub fn build_snapshot(&self) -> AppSnapshot {
        let state = &self.draft_state;
        AppSnapshot {
            draft_name: self.config.draft.name.clone(),
            users: self.config.draft.users.clone(),
            current_user: state.current_user().map(|u| u.to_string()),
            available: state.pool().as_slice().to_vec(),
            managers: state
                .managers
                .iter()
                .map(|m| ManagerSnapshot {
                    user: m.user.clone(),
                    slots: m.roster.slots.clone(),
                })
                .collect(),
            draft_log: state.log().to_vec(),
            pick_count: state.pick_count(),
            total_slots: state.total_slots(),
        }
    }
}

// ---------------------------------------------------------------------------
// Event loop
// ---------------------------------------------------------------------------

/// Run the app orchestrator until `Quit` arrives or the command channel closes.
///
/// An initial snapshot is pushed before the first command is read.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    send_snapshot(&ui_tx, &state).await?;

    while let Some(cmd) = cmd_rx.recv().await {
        debug!("Command: {:?}", cmd);
        if state.handle_command(cmd) == CommandOutcome::Quit {
            break;
        }
        send_snapshot(&ui_tx, &state).await?;
    }

    info!(
        "App loop finished with {} of {} slots filled",
        state.draft_state.pick_count(),
        state.draft_state.total_slots()
    );
    Ok(())
}

async fn send_snapshot(ui_tx: &mpsc::Sender<UiUpdate>, state: &AppState) -> anyhow::Result<()> {
    ui_tx
        .send(UiUpdate::StateSnapshot(Box::new(state.build_snapshot())))
        .await
        .map_err(|_| anyhow::anyhow!("UI channel closed"))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
