// src/player.rs
// Local mirror of the joined player's server record

use crate::api::PlayerRecord;
use crate::card::{decode_hand, Card};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub position: i64,
    pub dealer: bool,
    /// Absent until the server has dealt
    pub hand: Option<Vec<Card>>,
}

impl PlayerState {
    /// Decode a player record. A record without a hand keeps `previous_hand`,
    /// so the hand is only ever replaced by a record that carries one.
    pub fn from_record(record: &PlayerRecord, previous_hand: Option<&[Card]>) -> Result<Self> {
        let hand = match &record.hand {
            Some(wire_hand) => Some(decode_hand(wire_hand)?),
            None => previous_hand.map(<[Card]>::to_vec),
        };

        Ok(Self {
            position: record.position,
            dealer: record.dealer,
            hand,
        })
    }

    pub fn hand_size(&self) -> usize {
        self.hand.as_ref().map_or(0, Vec::len)
    }
}
