// Available player pool: every loaded player not yet on a roster.

use serde::{Deserialize, Serialize};

use super::pick::Player;

/// Undrafted players, kept in source-document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AvailablePool {
    players: Vec<Player>,
}

impl AvailablePool {
    /// Build a pool from loaded players. Duplicate labels keep the first entry.
    pub fn from_players(mut players: Vec<Player>) -> Self {
        players.sort_by_key(|p| p.order);
        let mut pool = AvailablePool {
            players: Vec::with_capacity(players.len()),
        };
        for player in players {
            pool.restore(player);
        }
        pool
    }

    pub fn get(&self, label: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.label == label)
    }

    pub fn contains(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    /// Remove a player from the pool, returning it.
    pub fn take(&mut self, label: &str) -> Option<Player> {
        let idx = self.players.iter().position(|p| p.label == label)?;
        Some(self.players.remove(idx))
    }

    /// Put a player back at its load-order position.
    ///
    /// Returns `false` (and drops nothing from the pool) if a player with the
    /// same label is already present.
    pub fn restore(&mut self, player: Player) -> bool {
        if self.contains(&player.label) {
            return false;
        }
        let idx = self.players.partition_point(|p| p.order <= player.order);
        self.players.insert(idx, player);
        true
    }

    /// Players whose label contains `query`, case-insensitively.
    pub fn search(&self, query: &str) -> Vec<&Player> {
        filter_players(&self.players, query)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    pub fn as_slice(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

/// Filter players by case-insensitive substring match on the label.
///
/// An empty query matches everything.
pub fn filter_players<'a>(players: &'a [Player], query: &str) -> Vec<&'a Player> {
    let query_lower = query.to_lowercase();

    players
        .iter()
        .filter(|p| query_lower.is_empty() || p.label.to_lowercase().contains(&query_lower))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draft::pick::Position;

    fn sample() -> Vec<Player> {
        vec![
            Player::new("Patrick Mahomes", Position::Quarterback, None, 0),
            Player::new("Travis Kelce", Position::TightEnd, None, 1),
            Player::new("Josh Allen", Position::Quarterback, None, 2),
            Player::new("James Cook", Position::RunningBack, None, 3),
        ]
    }

    #[test]
    fn take_removes_exactly_one() {
        let mut pool = AvailablePool::from_players(sample());
        let taken = pool.take("Travis Kelce (TE)");
        assert_eq!(taken.map(|p| p.name), Some("Travis Kelce".to_string()));
        assert_eq!(pool.len(), 3);
        assert!(!pool.contains("Travis Kelce (TE)"));
        assert!(pool.take("Travis Kelce (TE)").is_none());
    }

    #[test]
    fn restore_returns_player_to_load_order() {
        let mut pool = AvailablePool::from_players(sample());
        let kelce = pool.take("Travis Kelce (TE)").unwrap();
        let cook = pool.take("James Cook (RB)").unwrap();
        assert!(pool.restore(cook));
        assert!(pool.restore(kelce));

        let labels: Vec<&str> = pool.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Patrick Mahomes (QB)",
                "Travis Kelce (TE)",
                "Josh Allen (QB)",
                "James Cook (RB)",
            ]
        );
    }

    #[test]
    fn restore_rejects_duplicate_label() {
        let mut pool = AvailablePool::from_players(sample());
        let dup = Player::new("Josh Allen", Position::Quarterback, None, 9);
        assert!(!pool.restore(dup));
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn from_players_dedupes_and_sorts() {
        let mut players = sample();
        players.reverse();
        players.push(Player::new("Josh Allen", Position::Quarterback, None, 7));
        let pool = AvailablePool::from_players(players);
        assert_eq!(pool.len(), 4);
        assert_eq!(pool.as_slice()[0].label, "Patrick Mahomes (QB)");
        assert_eq!(pool.get("Josh Allen (QB)").map(|p| p.order), Some(2));
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let pool = AvailablePool::from_players(sample());
        let result = pool.search("mahomes");
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].label, "Patrick Mahomes (QB)");

        let result = pool.search("JOSH");
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn search_matches_position_in_label() {
        let pool = AvailablePool::from_players(sample());
        assert_eq!(pool.search("(qb)").len(), 2);
    }

    #[test]
    fn empty_query_returns_everything() {
        let pool = AvailablePool::from_players(sample());
        assert_eq!(pool.search("").len(), 4);
    }

    #[test]
    fn filter_empty_players() {
        let players: Vec<Player> = Vec::new();
        assert!(filter_players(&players, "test").is_empty());
    }
}
