// src/game.rs
// Local mirror of a server-side game

use crate::api::GameRecord;

/// Game identity and occupancy as last reported by the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub game_id: String,
    pub players: u32,
    pub players_connected: u32,
}

impl GameState {
    pub fn is_full(&self) -> bool {
        self.players_connected >= self.players
    }

    pub fn open_seats(&self) -> u32 {
        self.players.saturating_sub(self.players_connected)
    }
}

impl From<GameRecord> for GameState {
    fn from(record: GameRecord) -> Self {
        Self {
            game_id: record.game_id,
            players: record.players,
            players_connected: record.players_connected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_record() {
        let record = GameRecord { game_id: "g1".to_string(), players: 4, players_connected: 3 };
        let state = GameState::from(record);
        assert_eq!(state.game_id, "g1");
        assert_eq!(state.open_seats(), 1);
        assert!(!state.is_full());
    }

    #[test]
    fn test_overfull_game_has_no_open_seats() {
        let state = GameState { game_id: "g".to_string(), players: 2, players_connected: 3 };
        assert!(state.is_full());
        assert_eq!(state.open_seats(), 0);
    }
}
