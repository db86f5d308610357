//! Errors surfaced by move application.
//!
//! Every failure leaves the board untouched; callers decide whether to abort
//! the game or try another move.

use thiserror::Error;

use crate::types::{ReserveKind, Square};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// The token does not follow the move grammar.
    #[error("malformed move token {token:?}: {reason}")]
    MalformedToken { token: String, reason: &'static str },

    /// The token is well formed but the rules engine does not allow it here.
    #[error("illegal move {token}")]
    IllegalMove { token: String },

    /// A drop would take a reserve below zero.
    #[error("reserve underflow: no {kind:?} left to drop")]
    ReserveUnderflow { kind: ReserveKind },

    /// The array board and the rules engine no longer agree.
    #[error("board out of sync with rules engine at {square}: {detail}")]
    Desync { square: Square, detail: String },
}

impl MoveError {
    pub(crate) fn malformed(token: &str, reason: &'static str) -> Self {
        MoveError::MalformedToken {
            token: token.to_string(),
            reason,
        }
    }
}
