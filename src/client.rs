// src/client.rs
// Session-scoped client for the cheat game server
//
// Each operation maps to one server endpoint. Successful responses update the
// local mirrors (game occupancy, player id, seat, dealer flag, hand); failed
// ones are logged and returned as errors without touching local state.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::api::{GameRecord, JoinRequest, NewGameRequest, PlayerRecord};
use crate::card::{encode_cards, Card};
use crate::config::ClientConfig;
use crate::defs::{DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use crate::error::{ClientError, Result};
use crate::game::GameState;
use crate::logging::{log_error, log_info, log_request_failure, log_warning};
use crate::player::PlayerState;

#[derive(Debug)]
pub struct CheatClient {
    api_url: String,
    username: String,
    game_id: Option<String>,
    player_id: Option<String>,
    players: u32,
    players_connected: u32,
    game_running: bool,
    player: Option<PlayerState>,
    http_client: reqwest::Client,
}

// Empty identifiers are the same as no identifier.
fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

impl CheatClient {
    /// Create a client against the default server
    pub fn new(username: &str, game_id: Option<&str>) -> Result<Self> {
        Self::build(DEFAULT_API_URL, username, game_id, DEFAULT_TIMEOUT_SECS)
    }

    /// Create a client from a loaded configuration
    pub fn with_config(config: &ClientConfig, game_id: Option<&str>) -> Result<Self> {
        Self::build(&config.api_url, &config.username, game_id, config.timeout)
    }

    fn build(api_url: &str, username: &str, game_id: Option<&str>, timeout: u64) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()?;

        Ok(Self {
            api_url: api_url.to_string(),
            username: username.to_string(),
            game_id: non_empty(game_id),
            player_id: None,
            players: 0,
            players_connected: 0,
            game_running: false,
            player: None,
            http_client,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Change the server base URL. Refused once a game is running.
    pub fn set_api_url(&mut self, api_url: &str) -> Result<()> {
        if self.game_running {
            log_warning(&format!("Ignoring API url change to {api_url}: game is running"));
            return Err(ClientError::GameRunning);
        }
        self.api_url = api_url.to_string();
        Ok(())
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn game_id(&self) -> Option<&str> {
        self.game_id.as_deref()
    }

    /// Point the session at another game. Switching games drops the
    /// player identity and state tied to the old one.
    pub fn set_game_id(&mut self, game_id: Option<&str>) {
        let game_id = non_empty(game_id);
        if game_id != self.game_id {
            self.reset_session();
        }
        self.game_id = game_id;
    }

    // Forget everything tied to the current game.
    fn reset_session(&mut self) {
        self.player_id = None;
        self.player = None;
        self.players = 0;
        self.players_connected = 0;
        self.game_running = false;
    }

    pub fn player_id(&self) -> Option<&str> {
        self.player_id.as_deref()
    }

    pub fn players(&self) -> u32 {
        self.players
    }

    pub fn players_connected(&self) -> u32 {
        self.players_connected
    }

    pub fn is_joined(&self) -> bool {
        self.player_id.is_some()
    }

    pub fn is_game_running(&self) -> bool {
        self.game_running
    }

    pub fn player(&self) -> Option<&PlayerState> {
        self.player.as_ref()
    }

    pub fn hand(&self) -> Option<&[Card]> {
        self.player.as_ref().and_then(|p| p.hand.as_deref())
    }

    pub fn game_state(&self) -> Option<GameState> {
        self.game_id.as_ref().map(|game_id| GameState {
            game_id: game_id.clone(),
            players: self.players,
            players_connected: self.players_connected,
        })
    }

    // ========================================================================
    // URLs
    // ========================================================================

    fn base_url(&self) -> &str {
        self.api_url.trim_end_matches('/')
    }

    fn games_url(&self) -> String {
        format!("{}/games", self.base_url())
    }

    fn game_url(&self, game_id: &str) -> String {
        format!("{}/games/{game_id}", self.base_url())
    }

    fn player_url(&self, game_id: &str, player_id: &str) -> String {
        format!("{}/players/{player_id}", self.game_url(game_id))
    }

    fn turns_url(&self, game_id: &str, player_id: &str) -> String {
        format!("{}/turns", self.player_url(game_id, player_id))
    }

    // ========================================================================
    // Preconditions
    // ========================================================================

    fn require_game(&self, action: &str) -> Result<String> {
        match &self.game_id {
            Some(game_id) => Ok(game_id.clone()),
            None => {
                log_error(&format!("Cannot {action}: no game id set"));
                Err(ClientError::NoGame)
            }
        }
    }

    fn require_joined(&self, action: &str) -> Result<(String, String)> {
        match (&self.game_id, &self.player_id) {
            (Some(game_id), Some(player_id)) => Ok((game_id.clone(), player_id.clone())),
            _ => {
                log_error(&format!("Cannot {action}: client has not joined a game"));
                Err(ClientError::NotJoined)
            }
        }
    }

    // ========================================================================
    // HTTP plumbing
    // ========================================================================

    async fn send_raw(&self, request: reqwest::RequestBuilder, action: &str) -> Result<String> {
        let response = request.send().await.map_err(|e| {
            log_error(&format!("{action} failed: {e}"));
            ClientError::Transport(e)
        })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            log_error(&format!("{action} failed reading body: {e}"));
            ClientError::Transport(e)
        })?;

        if !status.is_success() {
            log_request_failure(action, status.as_u16(), &body);
            return Err(ClientError::Http { status: status.as_u16(), body });
        }

        Ok(body)
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder, action: &str) -> Result<T> {
        let body = self.send_raw(request, action).await?;
        serde_json::from_str(&body).map_err(|e| {
            log_error(&format!("{action} returned an unexpected body: {e}"));
            ClientError::MalformedResponse(e)
        })
    }

    // Turn payloads are owned by the server; an empty body is a valid answer.
    async fn send_opaque(&self, request: reqwest::RequestBuilder, action: &str) -> Result<serde_json::Value> {
        let body = self.send_raw(request, action).await?;
        if body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&body).map_err(|e| {
            log_error(&format!("{action} returned an unexpected body: {e}"));
            ClientError::MalformedResponse(e)
        })
    }

    fn apply_game(&mut self, record: GameRecord) -> GameState {
        let state = GameState::from(record);
        if self.game_id.as_deref() != Some(state.game_id.as_str()) {
            self.reset_session();
        }
        self.game_id = Some(state.game_id.clone());
        self.players = state.players;
        self.players_connected = state.players_connected;
        state
    }

    // ========================================================================
    // Game operations
    // ========================================================================

    /// Create a new game for `players` players and make it the current game
    pub async fn create_game(&mut self, players: u32) -> Result<GameState> {
        let url = self.games_url();
        log_info(&format!("Creating game at {url} for {players} players"));

        let request = NewGameRequest { username: self.username.clone(), players };
        let record: GameRecord = self
            .send(self.http_client.post(&url).json(&request), "create game")
            .await?;

        let state = self.apply_game(record);
        log_info(&format!("Created game {}", state.game_id));
        Ok(state)
    }

    /// Fetch the raw game listing
    pub async fn list_games(&self) -> Result<serde_json::Value> {
        let url = self.games_url();
        self.send(self.http_client.get(&url), "list games").await
    }

    /// Refresh occupancy of the current game
    pub async fn update_game(&mut self) -> Result<GameState> {
        let game_id = self.require_game("update game")?;
        let url = self.game_url(&game_id);
        log_info(&format!("Updating game from {url}"));

        let record: GameRecord = self.send(self.http_client.get(&url), "update game").await?;
        Ok(self.apply_game(record))
    }

    /// Join the current game as `username`
    pub async fn join_game(&mut self) -> Result<PlayerState> {
        if self.username.trim().is_empty() {
            log_error("Cannot join game: username is empty");
            return Err(ClientError::MissingUsername);
        }
        let game_id = self.require_game("join game")?;
        let url = format!("{}/players", self.game_url(&game_id));

        let request = JoinRequest { username: self.username.clone() };
        let record: PlayerRecord = self
            .send(self.http_client.post(&url).json(&request), "join game")
            .await?;

        let state = PlayerState::from_record(&record, None)?;
        log_info(&format!(
            "Joined game {game_id} as player {} (position {}, dealer: {})",
            record.id, state.position, state.dealer
        ));
        self.player_id = Some(record.id);
        self.player = Some(state.clone());
        Ok(state)
    }

    /// Start the current game, then refresh the player's record if joined.
    /// Once the start request succeeds the call succeeds; a failed player
    /// refresh is only logged and leaves the previous player state.
    pub async fn start_game(&mut self) -> Result<GameState> {
        let game_id = self.require_game("start game")?;
        let url = format!("{}/start", self.game_url(&game_id));

        let record: GameRecord = self.send(self.http_client.post(&url), "start game").await?;
        let state = self.apply_game(record);
        self.game_running = true;
        log_info(&format!("Game {} started", state.game_id));

        if self.is_joined() {
            if let Err(e) = self.update_player_info().await {
                log_warning(&format!("Game {} started but player refresh failed: {e}", state.game_id));
            }
        } else {
            log_warning("Game started without joining; no player info to refresh");
        }

        Ok(state)
    }

    // ========================================================================
    // Player operations
    // ========================================================================

    /// Re-fetch this player's record and re-decode it
    pub async fn update_player_info(&mut self) -> Result<PlayerState> {
        let (game_id, player_id) = self.require_joined("update player info")?;
        let url = self.player_url(&game_id, &player_id);

        let record: PlayerRecord = self.send(self.http_client.get(&url), "update player info").await?;

        let previous_hand = self.hand();
        let state = PlayerState::from_record(&record, previous_hand)?;
        self.player = Some(state.clone());
        Ok(state)
    }

    pub async fn get_current_turn(&self) -> Result<serde_json::Value> {
        let (game_id, player_id) = self.require_joined("get current turn")?;
        let url = self.turns_url(&game_id, &player_id);
        self.send_opaque(self.http_client.get(&url), "get current turn").await
    }

    pub async fn play_pass(&self) -> Result<serde_json::Value> {
        let (game_id, player_id) = self.require_joined("pass")?;
        let url = format!("{}/pass", self.turns_url(&game_id, &player_id));
        self.send_opaque(self.http_client.post(&url), "pass").await
    }

    /// Call (challenge) the previous play
    pub async fn play_call(&self) -> Result<serde_json::Value> {
        let (game_id, player_id) = self.require_joined("call")?;
        let url = format!("{}/call", self.turns_url(&game_id, &player_id));
        self.send_opaque(self.http_client.post(&url), "call").await
    }

    pub async fn play_cards(&self, cards: &[Card]) -> Result<serde_json::Value> {
        let (game_id, player_id) = self.require_joined("play cards")?;
        let url = format!("{}/play", self.turns_url(&game_id, &player_id));

        let body = encode_cards(cards);
        self.send_opaque(self.http_client.post(&url).json(&body), "play cards").await
    }
}
