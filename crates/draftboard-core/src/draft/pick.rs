// Positions, players, and the draft log record.

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Football positions used for roster slot assignment.
///
/// `Flex` is a roster meta-slot; no player ever has it as a primary position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Position {
    Quarterback,
    RunningBack,
    WideReceiver,
    TightEnd,
    Flex,
    Defense,
    Kicker,
}

/// Every position a player can be listed at, in roster display order.
pub const PLAYER_POSITIONS: &[Position] = &[
    Position::Quarterback,
    Position::RunningBack,
    Position::WideReceiver,
    Position::TightEnd,
    Position::Defense,
    Position::Kicker,
];

impl Position {
    /// Parse a position string into a Position enum.
    ///
    /// Besides the canonical abbreviations this accepts the depth-chart
    /// spellings seen in scraped data:
    /// - "LWR"/"SWR"/"RWR" -> WideReceiver
    /// - "PK" -> Kicker
    /// - "DST"/"DEF" -> Defense
    pub fn from_str_pos(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Some(Position::Quarterback),
            "RB" => Some(Position::RunningBack),
            "WR" | "LWR" | "SWR" | "RWR" => Some(Position::WideReceiver),
            "TE" => Some(Position::TightEnd),
            "FLEX" => Some(Position::Flex),
            "D/ST" | "DST" | "DEF" => Some(Position::Defense),
            "K" | "PK" => Some(Position::Kicker),
            _ => None,
        }
    }

    /// Return the display string for this position.
    pub fn display_str(&self) -> &'static str {
        match self {
            Position::Quarterback => "QB",
            Position::RunningBack => "RB",
            Position::WideReceiver => "WR",
            Position::TightEnd => "TE",
            Position::Flex => "FLEX",
            Position::Defense => "D/ST",
            Position::Kicker => "K",
        }
    }

    /// Whether this is a meta-slot (not a concrete playing position).
    pub fn is_meta_slot(&self) -> bool {
        matches!(self, Position::Flex)
    }

    /// Deterministic ordering index for roster slot display.
    pub fn sort_order(&self) -> u8 {
        match self {
            Position::Quarterback => 0,
            Position::RunningBack => 1,
            Position::WideReceiver => 2,
            Position::TightEnd => 3,
            Position::Flex => 4,
            Position::Defense => 5,
            Position::Kicker => 6,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_str())
    }
}

/// A draftable player, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique identifier, e.g. "Patrick Mahomes (QB)".
    pub label: String,
    pub name: String,
    /// Primary position. Never `Position::Flex`.
    pub position: Position,
    /// NFL team, when the data source groups players by team.
    #[serde(default)]
    pub team: Option<String>,
    /// Index in the source document; the available pool is kept in this order.
    pub order: usize,
}

impl Player {
    pub fn new(name: &str, position: Position, team: Option<&str>, order: usize) -> Self {
        let name = name.trim().to_string();
        Player {
            label: Self::make_label(&name, position),
            name,
            position,
            team: team.map(|t| t.to_string()),
            order,
        }
    }

    /// Build the label for a name/position pair.
    pub fn make_label(name: &str, position: Position) -> String {
        format!("{} ({})", name.trim(), position.display_str())
    }
}

/// Whether a log entry records a player being drafted or released.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PickAction {
    Assigned,
    Released,
}

/// A single entry in the draft log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftPick {
    /// Sequential entry number (1-indexed).
    pub seq: u32,
    /// The user whose roster changed.
    pub user: String,
    pub player_label: String,
    /// The slot the player entered or left.
    pub slot: Position,
    pub action: PickAction,
    pub at: DateTime<Local>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_pos_standard_positions() {
        assert_eq!(Position::from_str_pos("QB"), Some(Position::Quarterback));
        assert_eq!(Position::from_str_pos("RB"), Some(Position::RunningBack));
        assert_eq!(Position::from_str_pos("WR"), Some(Position::WideReceiver));
        assert_eq!(Position::from_str_pos("TE"), Some(Position::TightEnd));
        assert_eq!(Position::from_str_pos("D/ST"), Some(Position::Defense));
        assert_eq!(Position::from_str_pos("K"), Some(Position::Kicker));
        assert_eq!(Position::from_str_pos("FLEX"), Some(Position::Flex));
    }

    #[test]
    fn from_str_pos_depth_chart_aliases() {
        assert_eq!(Position::from_str_pos("LWR"), Some(Position::WideReceiver));
        assert_eq!(Position::from_str_pos("SWR"), Some(Position::WideReceiver));
        assert_eq!(Position::from_str_pos("RWR"), Some(Position::WideReceiver));
        assert_eq!(Position::from_str_pos("PK"), Some(Position::Kicker));
        assert_eq!(Position::from_str_pos("DST"), Some(Position::Defense));
        assert_eq!(Position::from_str_pos("DEF"), Some(Position::Defense));
    }

    #[test]
    fn from_str_pos_case_insensitive() {
        assert_eq!(Position::from_str_pos("qb"), Some(Position::Quarterback));
        assert_eq!(Position::from_str_pos("d/st"), Some(Position::Defense));
        assert_eq!(Position::from_str_pos(" te "), Some(Position::TightEnd));
    }

    #[test]
    fn from_str_pos_invalid() {
        assert_eq!(Position::from_str_pos("FB"), None);
        assert_eq!(Position::from_str_pos(""), None);
        assert_eq!(Position::from_str_pos("SS"), None);
        assert_eq!(Position::from_str_pos("W/R/T"), None);
    }

    #[test]
    fn display_str_roundtrip() {
        for pos in PLAYER_POSITIONS.iter().copied().chain([Position::Flex]) {
            let s = pos.display_str();
            assert_eq!(Position::from_str_pos(s), Some(pos), "Roundtrip failed for {}", s);
        }
    }

    #[test]
    fn only_flex_is_meta() {
        assert!(Position::Flex.is_meta_slot());
        assert!(PLAYER_POSITIONS.iter().all(|p| !p.is_meta_slot()));
    }

    #[test]
    fn player_label_combines_name_and_position() {
        let p = Player::new("  Patrick Mahomes ", Position::Quarterback, Some("Kansas City Chiefs"), 0);
        assert_eq!(p.name, "Patrick Mahomes");
        assert_eq!(p.label, "Patrick Mahomes (QB)");
        assert_eq!(p.team.as_deref(), Some("Kansas City Chiefs"));
    }

    #[test]
    fn same_name_different_position_is_distinct() {
        let a = Player::new("Taysom Hill", Position::Quarterback, None, 0);
        let b = Player::new("Taysom Hill", Position::TightEnd, None, 1);
        assert_ne!(a.label, b.label);
    }
}
