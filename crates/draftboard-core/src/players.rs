// Player data loading from the static JSON document.
//
// The document is an object whose keys group ordered arrays of player
// records. The key is either a position name or, in scraped depth-chart
// data, a team name:
//
//   { "Kansas City Chiefs": [ { "position": "QB", "name": "Patrick Mahomes" }, ... ] }
//
// Records are read in document order, which becomes the pool order.

use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::warn;

use crate::draft::pick::{Player, Position};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum PlayerDataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },

    #[error("player data validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Deserialize)]
struct RawPlayer {
    name: String,
    position: String,
    #[serde(default)]
    team: Option<String>,
}

/// Parse a player document.
///
/// Records with blank names or positions that are not draftable (e.g. "FB")
/// are skipped. Duplicate labels keep the first occurrence.
pub fn parse_players(text: &str) -> Result<Vec<Player>, serde_json::Error> {
    let groups: Map<String, Value> = serde_json::from_str(text)?;
    let mut players: Vec<Player> = Vec::new();

    for (group, records) in groups {
        let Value::Array(records) = records else {
            warn!("skipping group '{}': expected an array of players", group);
            continue;
        };

        // A group keyed by team name supplies the team for its records.
        let group_team = match Position::from_str_pos(&group) {
            Some(_) => None,
            None => Some(group.as_str()),
        };

        for record in records {
            let raw: RawPlayer = match serde_json::from_value(record) {
                Ok(raw) => raw,
                Err(e) => {
                    warn!("skipping malformed player record in '{}': {}", group, e);
                    continue;
                }
            };

            if raw.name.trim().is_empty() {
                warn!("skipping player with blank name in '{}'", group);
                continue;
            }

            let position = match Position::from_str_pos(&raw.position) {
                Some(pos) if !pos.is_meta_slot() => pos,
                _ => {
                    warn!(
                        "skipping player '{}': undraftable position '{}'",
                        raw.name.trim(),
                        raw.position
                    );
                    continue;
                }
            };

            let team = raw.team.as_deref().or(group_team);
            let player = Player::new(&raw.name, position, team, players.len());
            if players.iter().any(|p| p.label == player.label) {
                warn!("duplicate player '{}', keeping first entry", player.label);
                continue;
            }
            players.push(player);
        }
    }

    Ok(players)
}

/// Load the player document at `path`.
pub fn load_players(path: &Path) -> Result<Vec<Player>, PlayerDataError> {
    let text = std::fs::read_to_string(path).map_err(|e| PlayerDataError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    let players = parse_players(&text).map_err(|e| PlayerDataError::Json {
        path: path.display().to_string(),
        source: e,
    })?;

    if players.is_empty() {
        return Err(PlayerDataError::Validation(format!(
            "{} contains no draftable players",
            path.display()
        )));
    }

    Ok(players)
}
