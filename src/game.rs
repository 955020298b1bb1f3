use crate::game_state::*;
use crate::moves::*;
use crate::pieces::*;
use log::info;

/// An agent is an object that can play chess by choosing moves
/// appropriate to a current board state. Returning None means the agent
/// has no move to offer (out of moves, or resigned).
pub trait Agent {
    fn choose_move(&self, state: &BoardState, color: Color) -> Option<Move>;
}

impl Agent for Box<dyn Agent> {
    fn choose_move(&self, state: &BoardState, color: Color) -> Option<Move> {
        (**self).choose_move(state, color)
    }
}

pub struct Game<A1: Agent, A2: Agent> {
    white: A1,
    black: A2,
    state: BoardState,
    current_player: Color,
    turn_count: u32,
}

impl<A1: Agent, A2: Agent> Game<A1, A2> {
    pub fn new(white: A1, black: A2) -> Game<A1, A2> {
        Game {
            white,
            black,
            state: BoardState::standard_setup(),
            current_player: Color::White,
            turn_count: 0,
        }
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Alternates the two agents until one has no move left or the turn
    /// limit is reached.
    pub fn play(&mut self, max_turns: u32) {
        println!("{}", self.state);
        while self.turn_count < max_turns {
            let chosen = match self.current_player {
                Color::White => self.white.choose_move(&self.state, Color::White),
                Color::Black => self.black.choose_move(&self.state, Color::Black),
            };
            let mv = match chosen {
                Some(mv) => mv,
                None => {
                    info!("{} has no moves left", self.current_player);
                    break;
                }
            };
            match self.state.player_move(self.current_player, mv.from, mv.to) {
                Ok(applied) => info!(
                    "{} plays {} {}",
                    self.current_player,
                    self.state.piece(applied.piece),
                    applied
                ),
                Err(e) => {
                    // An invalid choice costs the agent a retry, not
                    // the turn.
                    info!("{}", e);
                    continue;
                }
            }
            println!("{}", self.state);
            self.switch_turn();
        }
    }

    fn switch_turn(&mut self) {
        self.turn_count += 1;
        self.current_player = self.current_player.opposite();
    }
}
