// src/api.rs
// Request and response bodies exchanged with the cheat server

use serde::{Deserialize, Deserializer, Serialize};

use crate::card::WireCard;

// ============================================================================
// Requests
// ============================================================================

/// Body of `POST /games`
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NewGameRequest {
    pub username: String,
    pub players: u32,
}

/// Body of `POST /games/{id}/players`
#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct JoinRequest {
    pub username: String,
}

// ============================================================================
// Responses
// ============================================================================

/// Game record returned by the game endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GameRecord {
    #[serde(deserialize_with = "identifier")]
    pub game_id: String,
    pub players: u32,
    pub players_connected: u32,
}

/// Player record returned by the player endpoints
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlayerRecord {
    #[serde(deserialize_with = "identifier")]
    pub id: String,
    pub position: i64,
    pub dealer: bool,
    #[serde(default)]
    pub hand: Option<Vec<WireCard>>,
}

// Ids show up as strings or numbers depending on the server build.
fn identifier<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(i64),
    }

    Ok(match Raw::deserialize(deserializer)? {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    })
}
