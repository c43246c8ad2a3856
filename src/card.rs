// src/card.rs
// Card representation and the mapping between local cards and the server's
// wire format.
//
// The server sends Ace and face cards as symbolic strings ("Ace", "Jack",
// "Queen", "King") and every other rank as a two-element array whose second
// element is the number, e.g. ["Number", 7].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::defs::{CardValue, NUMBER_TAG, SYMBOLIC_RANKS, ACE, KING};
use crate::error::{ClientError, Result};

/// A card as held by the client: opaque suit, value 1..=13 (1 = Ace, 13 = King)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Card {
    pub suit: String,
    pub value: CardValue,
}

impl Card {
    pub fn new(suit: &str, value: CardValue) -> Self {
        Self { suit: suit.to_string(), value }
    }

    /// Symbolic name of the rank, if it has one
    pub fn rank_name(&self) -> Option<&'static str> {
        rank_name(self.value)
    }
}

/// Value part of a card on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireValue {
    Symbol(String),
    Numeric(String, CardValue),
}

/// A card as the server sends and expects it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WireCard {
    pub suit: String,
    pub value: WireValue,
}

pub fn rank_name(value: CardValue) -> Option<&'static str> {
    SYMBOLIC_RANKS
        .iter()
        .find(|(_, v)| *v == value)
        .map(|(name, _)| *name)
}

/// Exact-match lookup, as used for server payloads
pub fn rank_from_name(name: &str) -> Option<CardValue> {
    SYMBOLIC_RANKS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| *v)
}

/// Convert a wire card into a local card
pub fn decode(wire: &WireCard) -> Result<Card> {
    let value = match &wire.value {
        WireValue::Symbol(name) => {
            rank_from_name(name).ok_or_else(|| ClientError::InvalidCard(name.clone()))?
        }
        WireValue::Numeric(_, number) => *number,
    };

    Ok(Card { suit: wire.suit.clone(), value })
}

/// Convert a local card into the wire representation
pub fn encode(card: &Card) -> WireCard {
    let value = match rank_name(card.value) {
        Some(name) => WireValue::Symbol(name.to_string()),
        None => WireValue::Numeric(NUMBER_TAG.to_string(), card.value),
    };

    WireCard { suit: card.suit.clone(), value }
}

/// Decode a whole hand; one bad card fails the lot
pub fn decode_hand(wire_hand: &[WireCard]) -> Result<Vec<Card>> {
    wire_hand.iter().map(decode).collect()
}

pub fn encode_cards(cards: &[Card]) -> Vec<WireCard> {
    cards.iter().map(encode).collect()
}

// Text notation "Suit:Rank", e.g. "Hearts:Queen" or "Spades:7"
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank_name() {
            Some(name) => write!(f, "{}:{}", self.suit, name),
            None => write!(f, "{}:{}", self.suit, self.value),
        }
    }
}

impl FromStr for Card {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self> {
        let (suit, rank) = s
            .split_once(':')
            .ok_or_else(|| ClientError::InvalidCard(s.to_string()))?;
        let suit = suit.trim();
        let rank = rank.trim();
        if suit.is_empty() {
            return Err(ClientError::InvalidCard(s.to_string()));
        }

        let value = match rank.parse::<CardValue>() {
            Ok(number) if (ACE..=KING).contains(&number) => number,
            Ok(_) => return Err(ClientError::InvalidCard(s.to_string())),
            Err(_) => SYMBOLIC_RANKS
                .iter()
                .find(|(name, _)| name.eq_ignore_ascii_case(rank))
                .map(|(_, v)| *v)
                .ok_or_else(|| ClientError::InvalidCard(s.to_string()))?,
        };

        Ok(Card::new(suit, value))
    }
}
