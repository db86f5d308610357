//! Single-game sessions and the samples they produce.

use crazyhouse_core::{BoardState, GameResult, MoveEncoder, MoveToken};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::DatagenError;

/// One training position: the state before `token` was played.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSample {
    pub game: usize,
    pub ply: u32,
    /// Canonical 79-character position key
    pub key: String,
    pub fen: String,
    /// Flattened (1, 1, 104, 8) tensor
    pub planes: Vec<f32>,
    /// Move played from this position
    pub token: String,
    /// Final result label of the game (2 = unfinished, 0 = draw, 1 / -1 = white / black win)
    pub result: i8,
}

/// A finished (or abandoned) game and its samples.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub index: usize,
    pub tokens: Vec<MoveToken>,
    pub samples: Vec<TrainingSample>,
    pub result: GameResult,
}

impl GameRecord {
    /// Action vectors for every move, each computed against the position it
    /// was played from.
    pub fn action_vectors<E: MoveEncoder>(
        &self,
        encoder: &E,
    ) -> Result<Vec<Vec<f32>>, DatagenError> {
        let mut board = BoardState::new();
        let mut actions = Vec::with_capacity(self.tokens.len());
        for token in &self.tokens {
            let action = encoder.encode(token, &board);
            debug_assert_eq!(action.len(), encoder.action_len());
            actions.push(action);
            board
                .apply(token)
                .map_err(|source| DatagenError::Move {
                    game: self.index,
                    ply: board.plies(),
                    token: token.to_string(),
                    source,
                })?;
        }
        Ok(actions)
    }
}

/// Owns the board for one game. Once a terminal result is reached it is
/// kept, and the session accepts no further moves.
struct Session {
    index: usize,
    board: BoardState,
    tokens: Vec<MoveToken>,
    samples: Vec<TrainingSample>,
    result: GameResult,
}

impl Session {
    fn new(index: usize) -> Self {
        Self {
            index,
            board: BoardState::new(),
            tokens: Vec::new(),
            samples: Vec::new(),
            result: GameResult::InProgress,
        }
    }

    fn is_over(&self) -> bool {
        self.result.is_terminal()
    }

    fn move_error(&self, token: &str, source: crazyhouse_core::MoveError) -> DatagenError {
        DatagenError::Move {
            game: self.index,
            ply: self.board.plies(),
            token: token.to_string(),
            source,
        }
    }

    fn play(&mut self, token: MoveToken) -> Result<(), DatagenError> {
        let sample = TrainingSample {
            game: self.index,
            ply: self.board.plies(),
            key: self.board.canonical_key(),
            fen: self.board.export_rules_string(),
            planes: self.board.encode().into_vec(),
            token: token.to_string(),
            result: GameResult::InProgress.label(),
        };
        self.board
            .apply(&token)
            .map_err(|e| self.move_error(&sample.token, e))?;

        self.samples.push(sample);
        self.tokens.push(token);
        self.result = self.board.game_result();
        Ok(())
    }

    fn finish(mut self) -> GameRecord {
        let label = self.result.label();
        for sample in &mut self.samples {
            sample.result = label;
        }
        debug!(
            game = self.index,
            plies = self.board.plies(),
            result = %self.result,
            "game finished"
        );
        GameRecord {
            index: self.index,
            tokens: self.tokens,
            samples: self.samples,
            result: self.result,
        }
    }
}

/// Replay a recorded game. Moves after a terminal position are ignored.
pub fn replay_game<S: AsRef<str>>(index: usize, tokens: &[S]) -> Result<GameRecord, DatagenError> {
    let mut session = Session::new(index);
    for (i, txt) in tokens.iter().enumerate() {
        if session.is_over() {
            warn!(
                game = index,
                ignored = tokens.len() - i,
                "moves recorded after the game ended"
            );
            break;
        }
        let token = MoveToken::parse(txt.as_ref())
            .map_err(|e| session.move_error(txt.as_ref(), e))?;
        session.play(token)?;
    }
    Ok(session.finish())
}

/// Play uniformly random legal moves until the game ends or `max_plies` is hit.
pub fn random_game(index: usize, seed: u64, max_plies: u32) -> Result<GameRecord, DatagenError> {
    let mut rng = StdRng::seed_from_u64(seed.wrapping_add(index as u64));
    let mut session = Session::new(index);
    while !session.is_over() && session.board.plies() < max_plies {
        let moves = session.board.legal_moves();
        let Some(&token) = moves.choose(&mut rng) else {
            break;
        };
        session.play(token)?;
    }
    Ok(session.finish())
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
