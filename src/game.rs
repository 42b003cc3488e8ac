//! A headless game loop over the authoritative board.
//!
//! This is the only place that mutates the shared board: each turn asks the
//! current player for a move, applies it, and rescores that player's goal.
//! Rendering and real input are external concerns; automated players are
//! armed programmatically here.

use crate::block::{Block, generate_board};
use crate::moves::{Move, apply_move};
use crate::player::{InputEvent, Player};

/// What happened during one turn.
#[derive(Clone, Debug)]
pub struct TurnOutcome {
    pub player_id: usize,
    pub mv: Move,
    /// Whether the move applied cleanly to the board.
    pub applied: bool,
    /// The player's score after the move.
    pub score: usize,
}

/// Game state: the authoritative board, the players, and their scores.
pub struct Game {
    pub board: Block,
    pub players: Vec<Player>,
    pub scores: Vec<usize>,
    current: usize,
    rng: fastrand::Rng,
}

impl Game {
    /// Start a game on a freshly generated random board.
    pub fn new(max_depth: usize, size: usize, players: Vec<Player>, mut rng: fastrand::Rng) -> Game {
        let board = generate_board(max_depth, size, &mut rng);
        let scores = players.iter().map(|p| p.goal.score(&board)).collect();
        Game {
            board,
            players,
            scores,
            current: 0,
            rng,
        }
    }

    /// Play one turn: arm the current player, take its move, apply it to
    /// the authoritative board, and rescore. Returns `None` if the player
    /// produced no move (only possible for humans with no pending input).
    pub fn turn(&mut self) -> Option<TurnOutcome> {
        let idx = self.current;
        self.current = (self.current + 1) % self.players.len();

        let player = &mut self.players[idx];
        player.process_event(InputEvent::Proceed);
        let mv = player.generate_move(&self.board, &mut self.rng)?;
        let applied = apply_move(&mut self.board, &mv, &mut self.rng);
        let score = player.goal.score(&self.board);
        self.scores[idx] = score;
        Some(TurnOutcome {
            player_id: player.id,
            mv,
            applied,
            score,
        })
    }

    /// Play `rounds` full rounds (one turn per player each).
    pub fn run(&mut self, rounds: usize) -> Vec<TurnOutcome> {
        let turns = rounds * self.players.len();
        (0..turns).filter_map(|_| self.turn()).collect()
    }

    /// Ids of the players with the highest score.
    pub fn leaders(&self) -> Vec<usize> {
        let best = self.scores.iter().copied().max().unwrap_or(0);
        self.players
            .iter()
            .zip(&self.scores)
            .filter(|(_, score)| **score == best)
            .map(|(player, _)| player.id)
            .collect()
    }
}
