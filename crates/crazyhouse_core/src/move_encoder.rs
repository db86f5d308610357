//! Interface to the action codec used by the policy network.
//!
//! The codec itself lives with the model code; the core only fixes the shape
//! of the seam so data generation can be written against it.

use crate::board::BoardState;
use crate::oracle::LegalityOracle;
use crate::token::MoveToken;

/// Converts move tokens to and from fixed-length action vectors.
pub trait MoveEncoder {
    /// Length of every vector produced by [`MoveEncoder::encode`].
    fn action_len(&self) -> usize;

    /// Action vector for `token` played from `board`.
    fn encode<O: LegalityOracle>(&self, token: &MoveToken, board: &BoardState<O>) -> Vec<f32>;

    /// Token for `action` in `board`; the board's oracle is the legality
    /// context. `None` if no legal move corresponds.
    fn decode<O: LegalityOracle>(&self, action: &[f32], board: &BoardState<O>)
    -> Option<MoveToken>;
}
