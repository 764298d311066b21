// Draft board entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Load the player pool
// 4. Initialize DraftState and AppState
// 5. Create mpsc channels
// 6. Spawn app logic task
// 7. Run the TUI until the user quits
// 8. Wait for the app task to wind down

use std::path::Path;

use anyhow::Context;
use draftboard_core::config;
use draftboard_core::draft::state::DraftState;
use draftboard_core::players;
use draftboard_tui::{app, tui};
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("Draft board starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: draft={}, {} users",
        config.draft.name,
        config.draft.users.len()
    );

    let players_path = Path::new(&config.data_paths.players);
    let players = players::load_players(players_path)
        .with_context(|| format!("failed to load players from {}", players_path.display()))?;
    info!("Loaded {} players", players.len());

    let draft_state = DraftState::new(
        &config.draft.users,
        players,
        &config.draft.roster,
        &config.draft.flex_positions(),
    );
    let app_state = app::AppState::new(config, draft_state);

    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(256);

    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(cmd_rx, ui_tx, app_state).await {
            error!("Application loop error: {}", e);
        }
    });

    // Blocks until the user confirms quit or presses Ctrl+C.
    if let Err(e) = tui::run(ui_rx, cmd_tx).await {
        error!("TUI error: {}", e);
    }

    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), async {
        let _ = app_handle.await;
    })
    .await;

    info!("Draft board shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;
    let log_file = std::fs::File::create(log_dir.join("draftboard.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new("draftboard_core=info,draftboard_tui=info,draftboard=info,warn")
            }),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
