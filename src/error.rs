// src/error.rs
// Error types returned by the cheat client

use thiserror::Error;

/// Every way a client operation can fail
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable response
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A success response whose body did not match the expected shape
    #[error("Malformed response body: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    /// The server answered with a non-success status
    #[error("HTTP request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    /// A card in a player record could not be decoded
    #[error("Invalid card returned: {0}")]
    InvalidCard(String),

    #[error("No game id set")]
    NoGame,

    #[error("Username is empty")]
    MissingUsername,

    #[error("Client has not joined a game")]
    NotJoined,

    /// The base URL is locked once a game is running
    #[error("Cannot change the API url while a game is running")]
    GameRunning,

    #[error("Config error: {0}")]
    Config(String),
}

impl ClientError {
    /// True for failures detected locally, before any request was sent
    #[must_use]
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            ClientError::NoGame | ClientError::MissingUsername | ClientError::NotJoined | ClientError::GameRunning
        )
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
