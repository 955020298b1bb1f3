#[macro_use]
extern crate impl_ops;

mod agents;
mod boards;
mod errors;
mod game;
mod game_state;
mod moves;
mod pieces;
mod reach;
mod squares;
mod utils;

use agents::*;
use clap::{Parser, ValueEnum};
use env_logger::Env;
use game::{Agent, Game};

// The program keeps, for every piece on the board, its currently
// reachable squares and the pieces it blocks, and repairs those maps
// incrementally after each move instead of rescanning the board. The
// game loop on top is deliberately thin: two agents take turns
// submitting moves against the tracker.

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AgentKind {
    Random,
    Human,
}

#[derive(Parser)]
#[command(
    name = "chessmap",
    version,
    about = "Chess position tracker with incrementally maintained move maps"
)]
struct Cli {
    /// Who plays the white pieces
    #[arg(long, value_enum, default_value = "random")]
    white: AgentKind,
    /// Who plays the black pieces
    #[arg(long, value_enum, default_value = "random")]
    black: AgentKind,
    /// Stop after this many turns
    #[arg(long, default_value_t = 40)]
    turns: u32,
}

fn make_agent(kind: AgentKind) -> Box<dyn Agent> {
    match kind {
        AgentKind::Random => Box::new(RandomAgent::new()),
        AgentKind::Human => Box::new(HumanAgent::new()),
    }
}

// ---------------------------------------------
// Main
// ---------------------------------------------

fn main() {
    let env = Env::default().filter_or("CHESSMAP_LOG", "info");
    env_logger::Builder::from_env(env).init();

    let cli = Cli::parse();
    let mut game = Game::new(make_agent(cli.white), make_agent(cli.black));
    game.play(cli.turns);
}
