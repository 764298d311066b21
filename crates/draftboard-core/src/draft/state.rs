// Draft state: current user, available pool, per-user rosters.

use std::collections::HashMap;

use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::pick::{DraftPick, PickAction, Player, Position};
use super::pool::AvailablePool;
use super::roster::Roster;
use super::DraftError;

/// The state of a single user during the draft.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManagerState {
    /// Login name.
    pub user: String,
    /// The user's roster.
    pub roster: Roster,
}

/// The complete state of a draft session.
///
/// Every mutating operation either applies fully or returns a `DraftError`
/// and leaves the state untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DraftState {
    /// One entry per user, in configured order. Users who log in without
    /// being configured are appended on first login.
    pub managers: Vec<ManagerState>,
    current_user: Option<String>,
    pool: AvailablePool,
    log: Vec<DraftPick>,
    /// The roster configuration (stored for lazily created rosters).
    roster_config: HashMap<String, usize>,
    flex_eligible: Vec<Position>,
}

impl DraftState {
    /// Create a new draft state.
    ///
    /// # Arguments
    /// - `users`: login names, each given an empty roster
    /// - `players`: the full loaded player set, which becomes the available pool
    /// - `roster_config`: Position -> slot count mapping from draft config
    /// - `flex_eligible`: positions whose overflow may use FLEX
    pub fn new(
        users: &[String],
        players: Vec<Player>,
        roster_config: &HashMap<String, usize>,
        flex_eligible: &[Position],
    ) -> Self {
        let mut managers: Vec<ManagerState> = Vec::with_capacity(users.len());
        for user in users {
            if managers.iter().any(|m| &m.user == user) {
                continue;
            }
            managers.push(ManagerState {
                user: user.clone(),
                roster: Roster::new(roster_config, flex_eligible),
            });
        }

        DraftState {
            managers,
            current_user: None,
            pool: AvailablePool::from_players(players),
            log: Vec::new(),
            roster_config: roster_config.clone(),
            flex_eligible: flex_eligible.to_vec(),
        }
    }

    /// Set the current user. Unknown names get an empty roster.
    pub fn login(&mut self, user: &str) {
        self.manager_idx_or_insert(user);
        info!("Logged in as '{}'", user);
        self.current_user = Some(user.to_string());
    }

    /// Clear the current user. Rosters are untouched.
    pub fn logout(&mut self) {
        if let Some(user) = self.current_user.take() {
            info!("Logged out '{}'", user);
        }
    }

    pub fn current_user(&self) -> Option<&str> {
        self.current_user.as_deref()
    }

    /// Draft a player from the pool onto the current user's roster.
    ///
    /// Returns the slot the player was placed in.
    pub fn assign_player(&mut self, label: &str) -> Result<Position, DraftError> {
        let user = self.current_user.clone().ok_or(DraftError::NoActiveUser)?;

        if let Some(owner) = self.owner_of(label) {
            return Err(DraftError::AlreadyAssigned {
                label: label.to_string(),
                owner: owner.to_string(),
            });
        }

        let position = self
            .pool
            .get(label)
            .map(|p| p.position)
            .ok_or_else(|| DraftError::UnknownPlayer {
                label: label.to_string(),
            })?;

        let idx = self.manager_idx_or_insert(&user);
        if self.managers[idx].roster.open_slot_for(position).is_none() {
            debug!("'{}' has no room for '{}'", user, label);
            return Err(DraftError::NoOpenSlot {
                label: label.to_string(),
                position,
            });
        }

        let player = self.pool.take(label).ok_or_else(|| DraftError::UnknownPlayer {
            label: label.to_string(),
        })?;

        match self.managers[idx].roster.add_player(player) {
            Ok(slot) => {
                info!("'{}' drafted '{}' into {}", user, label, slot);
                self.push_log(&user, label, slot, PickAction::Assigned);
                Ok(slot)
            }
            Err(player) => {
                self.return_to_pool(player);
                Err(DraftError::NoOpenSlot {
                    label: label.to_string(),
                    position,
                })
            }
        }
    }

    /// Release a player from the current user's `slot` group back to the pool.
    pub fn unassign_player(&mut self, label: &str, slot: Position) -> Result<(), DraftError> {
        let user = self.current_user.clone().ok_or(DraftError::NoActiveUser)?;

        let not_in_slot = || DraftError::NotInSlot {
            label: label.to_string(),
            position: slot,
        };

        let idx = self
            .managers
            .iter()
            .position(|m| m.user == user)
            .ok_or_else(not_in_slot)?;
        let player = self.managers[idx]
            .roster
            .remove_player(label, slot)
            .ok_or_else(not_in_slot)?;

        self.return_to_pool(player);
        info!("'{}' released '{}' from {}", user, label, slot);
        self.push_log(&user, label, slot, PickAction::Released);
        Ok(())
    }

    /// Players still available, filtered by case-insensitive label substring.
    pub fn available_players(&self, query: &str) -> Vec<&Player> {
        self.pool.search(query)
    }

    pub fn pool(&self) -> &AvailablePool {
        &self.pool
    }

    /// The user currently holding `label`, if any.
    pub fn owner_of(&self, label: &str) -> Option<&str> {
        self.managers
            .iter()
            .find(|m| m.roster.has_player(label))
            .map(|m| m.user.as_str())
    }

    /// Look up a user's roster.
    pub fn roster(&self, user: &str) -> Option<&Roster> {
        self.managers
            .iter()
            .find(|m| m.user == user)
            .map(|m| &m.roster)
    }

    /// The logged-in user's roster, if someone is logged in.
    pub fn my_roster(&self) -> Option<&Roster> {
        self.current_user().and_then(|u| self.roster(u))
    }

    /// Draft log in chronological order.
    pub fn log(&self) -> &[DraftPick] {
        &self.log
    }

    /// Number of players currently on any roster.
    pub fn pick_count(&self) -> usize {
        self.managers.iter().map(|m| m.roster.filled_count()).sum()
    }

    /// Total roster slots across all users.
    pub fn total_slots(&self) -> usize {
        self.managers.iter().map(|m| m.roster.total_count()).sum()
    }

    fn manager_idx_or_insert(&mut self, user: &str) -> usize {
        if let Some(idx) = self.managers.iter().position(|m| m.user == user) {
            return idx;
        }
        self.managers.push(ManagerState {
            user: user.to_string(),
            roster: Roster::new(&self.roster_config, &self.flex_eligible),
        });
        self.managers.len() - 1
    }

    /// Put a player back in the pool. A label already in the pool means
    /// the player was both rostered and available.
    fn return_to_pool(&mut self, player: Player) {
        let label = player.label.clone();
        if !self.pool.restore(player) {
            warn!("'{}' was already in the pool; duplicate dropped", label);
        }
    }

    fn push_log(&mut self, user: &str, label: &str, slot: Position, action: PickAction) {
        let seq = next_seq(self.log.len());
        self.log.push(DraftPick {
            seq,
            user: user.to_string(),
            player_label: label.to_string(),
            slot,
            action,
            at: Local::now(),
        });
    }
}

/// Sequence number for the entry after `len` existing ones, saturating.
fn next_seq(len: usize) -> u32 {
    u32::try_from(len)
        .ok()
        .and_then(|n| n.checked_add(1))
        .unwrap_or(u32::MAX)
}
