//! Interface to the rules engine that decides legality and game termination.
//!
//! The board state never implements chess rules itself. It asks an oracle
//! whether a token is legal, advances the oracle in lockstep with its own
//! array board, and reads terminal predicates from it.

use crate::error::MoveError;
use crate::token::MoveToken;
use crate::types::{CastleSide, Color, Piece, Square};

/// Trait implemented by every crazyhouse rules engine the board can be driven by.
///
/// Implementations must start from the standard initial position.
pub trait LegalityOracle {
    /// Whether `token` is legal in the current position.
    fn is_legal(&self, token: &MoveToken) -> bool;

    /// All legal tokens in the current position.
    fn legal_moves(&self) -> Vec<MoveToken>;

    /// Play a legal move. Returns `IllegalMove` and leaves the oracle
    /// untouched otherwise.
    fn push(&mut self, token: &MoveToken) -> Result<(), MoveError>;

    fn is_insufficient_material(&self) -> bool;
    fn is_stalemate(&self) -> bool;
    fn can_claim_draw(&self) -> bool;
    fn is_checkmate(&self) -> bool;

    fn has_castling_rights(&self, color: Color, side: CastleSide) -> bool;

    /// Standard interchange string (crazyhouse FEN) for the current position.
    fn export_fen(&self) -> String;

    /// The oracle's own view of a square, used to check synchronization.
    fn piece_at(&self, sq: Square) -> Option<Piece>;
}
