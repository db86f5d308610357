//! Terminal outcome of a game, read from the rules engine.

use std::fmt;

use crate::board::BoardState;
use crate::oracle::LegalityOracle;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameResult {
    InProgress,
    Draw,
    WhiteWin,
    BlackWin,
}

impl GameResult {
    /// Numeric training label: 2 ongoing, 0 draw, 1 white win, -1 black win.
    pub fn label(self) -> i8 {
        match self {
            GameResult::InProgress => 2,
            GameResult::Draw => 0,
            GameResult::WhiteWin => 1,
            GameResult::BlackWin => -1,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != GameResult::InProgress
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            GameResult::InProgress => "Game is in progress.",
            GameResult::Draw => "Draw.",
            GameResult::WhiteWin => "White Victory",
            GameResult::BlackWin => "Black Victory",
        };
        f.write_str(text)
    }
}

/// Evaluate the outcome of the current position.
///
/// Predicates are consulted in a fixed order and the first that holds wins:
/// insufficient material, stalemate, claimable draw, checkmate.
///
/// The checkmate winner comes from ply parity, not from asking which king is
/// in check: an even ply count means white is to move and mated, so black
/// won; an odd count means white won.
pub fn evaluate<O: LegalityOracle>(state: &BoardState<O>) -> GameResult {
    let oracle = state.oracle();
    if oracle.is_insufficient_material() {
        return GameResult::Draw;
    }
    if oracle.is_stalemate() {
        return GameResult::Draw;
    }
    if oracle.can_claim_draw() {
        return GameResult::Draw;
    }
    if oracle.is_checkmate() {
        return if state.plies() % 2 == 0 {
            GameResult::BlackWin
        } else {
            GameResult::WhiteWin
        };
    }
    GameResult::InProgress
}

impl<O: LegalityOracle> BoardState<O> {
    /// Shorthand for [`evaluate`].
    pub fn game_result(&self) -> GameResult {
        evaluate(self)
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod result_tests;
