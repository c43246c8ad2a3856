// lib.rs
// Client library for the Cheat card game server

pub mod defs;
pub mod error;
pub mod logging;
pub mod config;
pub mod card;
pub mod api;
pub mod game;
pub mod player;
pub mod client;

pub use card::Card;
pub use client::CheatClient;
pub use error::{ClientError, Result};
pub use game::GameState;
pub use player::PlayerState;
