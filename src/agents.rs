/// Differing kinds of agents that can play the game
use crate::game::Agent;
use crate::game_state::BoardState;
use crate::moves::Move;
use crate::pieces::Color;
use crate::squares::Square;
use std::io::{stdout, Write};
use text_io::read;

pub struct HumanAgent {}

impl HumanAgent {
    pub fn new() -> Self {
        HumanAgent {}
    }
}

impl Agent for HumanAgent {
    fn choose_move(&self, state: &BoardState, color: Color) -> Option<Move> {
        println!("Your turn ({}):", color);
        loop {
            print!("From: ");
            stdout().flush().unwrap();
            let token: String = read!();
            let from: Square = match token.parse() {
                Ok(sq) => sq,
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            };
            let piece = match state.get_piece(from) {
                Some(p) => p,
                None => {
                    println!("No piece on {}", from);
                    continue;
                }
            };
            if piece.color() != color {
                println!("Not your piece");
                continue;
            }
            if piece.legal_moves().is_empty() {
                println!("That piece cannot move, choose another");
                continue;
            }

            let listing: Vec<String> = piece.legal_moves().iter().map(|s| s.to_string()).collect();
            println!("Legal moves: {}", listing.join(" "));

            print!("To: ");
            stdout().flush().unwrap();
            let token: String = read!();
            let to: Square = match token.parse() {
                Ok(sq) => sq,
                Err(e) => {
                    println!("{}", e);
                    continue;
                }
            };
            if !piece.legal_moves().contains(&to) {
                println!("Not a legal move");
                continue;
            }
            return Some(Move::new(piece.id(), from, to));
        }
    }
}

pub struct RandomAgent {}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {}
    }
}

impl Agent for RandomAgent {
    fn choose_move(&self, state: &BoardState, color: Color) -> Option<Move> {
        use rand::seq::SliceRandom;
        let moves = state.all_moves(color);
        moves.choose(&mut rand::thread_rng()).copied()
    }
}
