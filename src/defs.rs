// src/defs.rs
// Shared constants for the cheat client

pub type CardValue = u8;

pub const DEFAULT_API_URL: &str = "https://cheatcardgame.com/api/";
pub const DEFAULT_PLAYERS: u32 = 2;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONFIG_PATH: &str = "conf/client.conf";

pub const ACE: CardValue = 1;
pub const JACK: CardValue = 11;
pub const QUEEN: CardValue = 12;
pub const KING: CardValue = 13;

// Symbolic rank names used by the server for Ace and face cards.
pub const SYMBOLIC_RANKS: [(&str, CardValue); 4] = [
    ("Ace", ACE),
    ("Jack", JACK),
    ("Queen", QUEEN),
    ("King", KING),
];

// Tag carried as first element of a numeric wire value: ["Number", 7]
pub const NUMBER_TAG: &str = "Number";
