//! Headless replay of a click sequence through a game session
//!
//! ```text
//! duel-chess --clicks "6,5 5,5 1,4 3,4 6,6 4,6 0,3 4,7"
//! duel-chess --settings my_settings.json --clicks "6,4 4,4" --json
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use chess_engine::Square;
use clap::Parser;
use tracing::info;

use duel_chess::core::{init_logging, load_settings_or_default, settings::SETTINGS_FILENAME};
use duel_chess::game::ChessGame;

#[derive(Parser, Debug)]
#[command(name = "duel-chess", version, about = "Replay board clicks through a two-player chess game")]
struct Cli {
    /// Settings file (JSON); defaults are used when it is missing or invalid
    #[arg(long, default_value = SETTINGS_FILENAME)]
    settings: PathBuf,

    /// Space-separated row,col clicks, e.g. "6,4 4,4"
    #[arg(long, default_value = "")]
    clicks: String,

    /// Print the final board snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn parse_click(token: &str) -> Result<Square> {
    let (row, col) = token
        .split_once(',')
        .with_context(|| format!("click {:?} is not a row,col pair", token))?;
    let row: u8 = row
        .trim()
        .parse()
        .with_context(|| format!("invalid row in click {:?}", token))?;
    let col: u8 = col
        .trim()
        .parse()
        .with_context(|| format!("invalid column in click {:?}", token))?;

    Square::try_from((row, col)).with_context(|| format!("click {:?} is off the board", token))
}

/// Whitespace-separated clicks; the first bad token fails the whole list
fn parse_clicks(input: &str) -> Result<Vec<Square>> {
    input.split_whitespace().map(parse_click).collect()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = load_settings_or_default(&cli.settings);
    init_logging(&settings.log_filter);

    let clicks = parse_clicks(&cli.clicks)?;

    let mut game = ChessGame::new(settings);
    for square in clicks {
        let outcome = game.handle_click(square);
        info!("[SESSION] Click {} -> {:?}", square, outcome);
    }

    let view = game.view();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", view.summary());
    }

    Ok(())
}
