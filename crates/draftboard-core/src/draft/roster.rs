// Roster construction and slot assignment.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::pick::{Player, Position};

/// A single slot on a user's roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterSlot {
    /// The position designation of this slot.
    pub position: Position,
    /// The player occupying this slot, if any.
    pub player: Option<Player>,
}

/// A user's complete roster of slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    pub slots: Vec<RosterSlot>,
    /// Positions whose overflow may go to the FLEX slot.
    flex_eligible: Vec<Position>,
}

impl Roster {
    /// Create a new roster from a config mapping position strings to slot counts.
    ///
    /// The roster config comes from draft.toml `[draft.roster]`, e.g.:
    /// `{"QB": 1, "RB": 2, "WR": 2, "TE": 1, "FLEX": 1, "D/ST": 1, "K": 1}`
    ///
    /// Unknown position keys are ignored, aliased keys are summed, and FLEX
    /// is capped at one slot in total.
    /// Slots are created in deterministic order based on `Position::sort_order()`.
    pub fn new(roster_config: &HashMap<String, usize>, flex_eligible: &[Position]) -> Self {
        // Keys that alias the same position share one count.
        let mut counts: HashMap<Position, usize> = HashMap::new();
        for (pos_str, &count) in roster_config {
            if let Some(pos) = Position::from_str_pos(pos_str) {
                *counts.entry(pos).or_insert(0) += count;
            }
        }
        if let Some(flex) = counts.get_mut(&Position::Flex) {
            *flex = (*flex).min(1);
        }

        let mut positions: Vec<Position> = counts.keys().copied().collect();
        positions.sort_by_key(|p| p.sort_order());

        let mut slots: Vec<RosterSlot> = Vec::new();
        for pos in positions {
            for _ in 0..counts[&pos] {
                slots.push(RosterSlot {
                    position: pos,
                    player: None,
                });
            }
        }

        Roster {
            slots,
            flex_eligible: flex_eligible
                .iter()
                .copied()
                .filter(|p| !p.is_meta_slot())
                .collect(),
        }
    }

    /// Number of slots configured for the given position.
    pub fn capacity(&self, pos: Position) -> usize {
        self.slots.iter().filter(|s| s.position == pos).count()
    }

    /// Whether there is an empty slot for the given position.
    pub fn has_empty_slot(&self, pos: Position) -> bool {
        self.slots
            .iter()
            .any(|s| s.position == pos && s.player.is_none())
    }

    /// Whether overflow at this position may be placed in FLEX.
    pub fn is_flex_eligible(&self, pos: Position) -> bool {
        self.flex_eligible.contains(&pos)
    }

    /// The slot a player at `pos` would land in, or `None` if the roster
    /// has no room for them.
    ///
    /// Slot assignment priority:
    /// 1. Dedicated position slot
    /// 2. FLEX slot (flex-eligible positions only)
    pub fn open_slot_for(&self, pos: Position) -> Option<Position> {
        if pos.is_meta_slot() {
            return None;
        }
        if self.has_empty_slot(pos) {
            return Some(pos);
        }
        if self.is_flex_eligible(pos) && self.has_empty_slot(Position::Flex) {
            return Some(Position::Flex);
        }
        None
    }

    /// Add a player to the roster.
    ///
    /// Returns the position of the slot the player was placed in, or hands
    /// the player back if no slot is available.
    pub fn add_player(&mut self, player: Player) -> Result<Position, Player> {
        let Some(target) = self.open_slot_for(player.position) else {
            return Err(player);
        };
        match self
            .slots
            .iter_mut()
            .find(|s| s.position == target && s.player.is_none())
        {
            Some(slot) => {
                slot.player = Some(player);
                Ok(target)
            }
            None => Err(player),
        }
    }

    /// Remove the player with `label` from the slot group at `pos`.
    ///
    /// Remaining players in the group shift up so filled slots stay
    /// contiguous. Returns `None` if no slot in the group holds that label.
    pub fn remove_player(&mut self, label: &str, pos: Position) -> Option<Player> {
        let slot = self.slots.iter_mut().find(|s| {
            s.position == pos && s.player.as_ref().is_some_and(|p| p.label == label)
        })?;
        let removed = slot.player.take();
        self.compact(pos);
        removed
    }

    fn compact(&mut self, pos: Position) {
        let mut remaining = self
            .slots
            .iter_mut()
            .filter(|s| s.position == pos)
            .filter_map(|s| s.player.take())
            .collect::<Vec<_>>()
            .into_iter();
        for slot in self.slots.iter_mut().filter(|s| s.position == pos) {
            slot.player = remaining.next();
        }
    }

    /// Players currently held in the slot group at `pos`, in slot order.
    pub fn players_at(&self, pos: Position) -> Vec<&Player> {
        self.slots
            .iter()
            .filter(|s| s.position == pos)
            .filter_map(|s| s.player.as_ref())
            .collect()
    }

    /// Whether a player with this label is on the roster.
    pub fn has_player(&self, label: &str) -> bool {
        self.slots
            .iter()
            .any(|s| s.player.as_ref().is_some_and(|p| p.label == label))
    }

    /// Number of filled (non-empty) slots.
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.player.is_some()).count()
    }

    /// Total number of slots.
    pub fn total_count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_full(&self) -> bool {
        self.slots.iter().all(|s| s.player.is_some())
    }
}
