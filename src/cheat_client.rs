// src/cheat_client.rs
// Command line client for the cheat card game server.
//
// Commands:
// - list:     show the games known to the server
// - create:   create a new game
// - session:  join a game and play it interactively from stdin
//
// Session commands: status, start, hand, turn, pass, call,
// play <Suit:Rank>..., quit

use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use cheat::config::ClientConfig;
use cheat::{Card, CheatClient};

#[derive(Parser)]
#[command(name = env!("CARGO_BIN_NAME"))]
#[command(about = "Cheat card game client")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Path to the client configuration file
    #[arg(long)]
    config: Option<String>,

    /// Server base URL (overrides the config file)
    #[arg(long)]
    api_url: Option<String>,

    /// Username to play as (overrides the config file)
    #[arg(long)]
    username: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List games on the server
    List,
    /// Create a new game
    Create {
        /// Number of players
        #[arg(long)]
        players: Option<u32>,
    },
    /// Join a game and play it from the terminal
    Session {
        #[arg(long)]
        game_id: String,
    },
}

fn load_config(args: &Args) -> ClientConfig {
    let mut config = match &args.config {
        Some(path) => ClientConfig::load_from_or_default(path),
        None => ClientConfig::load_or_default(),
    };
    if let Some(api_url) = &args.api_url {
        config.api_url = api_url.clone();
    }
    if let Some(username) = &args.username {
        config.username = username.clone();
    }
    config
}

fn print_hand(client: &CheatClient) {
    match client.hand() {
        Some(hand) if !hand.is_empty() => {
            let cards: Vec<String> = hand.iter().map(Card::to_string).collect();
            println!("Hand ({}): {}", hand.len(), cards.join(" "));
        }
        _ => println!("No cards dealt yet."),
    }
}

fn print_status(client: &CheatClient) {
    match client.game_state() {
        Some(game) => println!(
            "Game {} - {}/{} players connected, {} open{}",
            game.game_id,
            game.players_connected,
            game.players,
            game.open_seats(),
            if client.is_game_running() { " (running)" } else { "" }
        ),
        None => println!("No game selected."),
    }
    if let Some(player) = client.player() {
        println!(
            "Player {} - position {}{}",
            client.player_id().unwrap_or("-"),
            player.position,
            if player.dealer { ", dealer" } else { "" }
        );
    }
}

fn print_payload(payload: &serde_json::Value) {
    match serde_json::to_string_pretty(payload) {
        Ok(text) => println!("{text}"),
        Err(_) => println!("{payload}"),
    }
}

async fn run_command<'a>(
    client: &mut CheatClient,
    command: &str,
    words: impl Iterator<Item = &'a str>,
) -> cheat::Result<()> {
    match command {
        "status" => {
            client.update_game().await?;
            client.update_player_info().await?;
            print_status(client);
        }
        "start" => {
            client.start_game().await?;
            print_status(client);
            print_hand(client);
        }
        "hand" => {
            client.update_player_info().await?;
            print_hand(client);
        }
        "turn" => print_payload(&client.get_current_turn().await?),
        "pass" => print_payload(&client.play_pass().await?),
        "call" => print_payload(&client.play_call().await?),
        "play" => {
            let cards = match words.map(str::parse::<Card>).collect::<cheat::Result<Vec<Card>>>() {
                Ok(cards) => cards,
                Err(e) => {
                    println!("{e}");
                    return Ok(());
                }
            };
            if cards.is_empty() {
                println!("Usage: play <Suit:Rank>...");
            } else {
                print_payload(&client.play_cards(&cards).await?);
            }
        }
        other => println!("Unknown command: {other}"),
    }
    Ok(())
}

async fn run_session(client: &mut CheatClient) -> Result<(), Box<dyn Error>> {
    client.update_game().await?;
    client.join_game().await?;
    print_status(client);
    print_hand(client);

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else { continue };

        match command {
            "quit" | "exit" => break,
            // Failures are logged by the client; only local misuse gets a hint.
            _ => {
                if let Err(e) = run_command(client, command, words).await
                    && e.is_precondition()
                {
                    println!("Hint: {e}. Try 'status' or restart the session.");
                }
            }
        }
    }

    Ok(())
}

async fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let config = load_config(&args);

    match args.command {
        Command::List => {
            let client = CheatClient::with_config(&config, None)?;
            print_payload(&client.list_games().await?);
        }
        Command::Create { players } => {
            let mut client = CheatClient::with_config(&config, None)?;
            let game = client.create_game(players.unwrap_or(config.players)).await?;
            println!(
                "Created game {} ({}/{} players connected)",
                game.game_id, game.players_connected, game.players
            );
        }
        Command::Session { game_id } => {
            let mut client = CheatClient::with_config(&config, Some(&game_id))?;
            run_session(&mut client).await?;
        }
    }

    Ok(())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    if let Err(e) = run(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
