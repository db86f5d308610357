//! Crazyhouse legality oracle backed by `shakmaty`.

use std::collections::HashMap;

use shakmaty::fen::Fen;
use shakmaty::uci::Uci;
use shakmaty::variant::Crazyhouse;
use shakmaty::{CastlingMode, CastlingSide, EnPassantMode, File, Position, Rank, Role};

use crate::error::MoveError;
use crate::oracle::LegalityOracle;
use crate::token::MoveToken;
use crate::types::{CastleSide, Color, Piece, PieceKind, Square};

/// Halfmove clock value at which the fifty-move rule can be claimed.
const FIFTY_MOVE_PLIES: u32 = 100;

/// Rules engine for a single crazyhouse game.
#[derive(Clone, Debug)]
pub struct CrazyhouseRules {
    pos: Crazyhouse,
    /// Occurrence count per position, for threefold repetition.
    seen: HashMap<String, u32>,
}

impl Default for CrazyhouseRules {
    fn default() -> Self {
        Self::new()
    }
}

impl CrazyhouseRules {
    pub fn new() -> Self {
        let pos = Crazyhouse::default();
        let mut seen = HashMap::new();
        seen.insert(repetition_key(&pos), 1);
        Self { pos, seen }
    }

    fn resolve(&self, token: &MoveToken) -> Option<shakmaty::Move> {
        let uci: Uci = token.to_string().parse().ok()?;
        uci.to_move(&self.pos).ok()
    }

    fn occurrences(&self, pos: &Crazyhouse) -> u32 {
        self.seen.get(&repetition_key(pos)).copied().unwrap_or(0)
    }

    /// Whether some legal move reaches a third occurrence or the fifty-move
    /// limit.
    fn draw_after_any_move(&self) -> bool {
        let near_fifty = self.pos.halfmoves() + 1 >= FIFTY_MOVE_PLIES;
        let has_repeat = self.seen.values().any(|&n| n >= 2);
        if !near_fifty && !has_repeat {
            return false;
        }
        self.pos.legal_moves().iter().any(|m| {
            let mut next = self.pos.clone();
            next.play_unchecked(m);
            next.halfmoves() >= FIFTY_MOVE_PLIES
                || (has_repeat && self.occurrences(&next) + 1 >= 3)
        })
    }
}

impl LegalityOracle for CrazyhouseRules {
    fn is_legal(&self, token: &MoveToken) -> bool {
        self.resolve(token).is_some()
    }

    fn legal_moves(&self) -> Vec<MoveToken> {
        self.pos
            .legal_moves()
            .iter()
            .filter_map(|m| MoveToken::parse(&m.to_uci(CastlingMode::Standard).to_string()).ok())
            .collect()
    }

    fn push(&mut self, token: &MoveToken) -> Result<(), MoveError> {
        let m = self.resolve(token).ok_or_else(|| MoveError::IllegalMove {
            token: token.to_string(),
        })?;
        self.pos.play_unchecked(&m);
        *self.seen.entry(repetition_key(&self.pos)).or_insert(0) += 1;
        Ok(())
    }

    fn is_insufficient_material(&self) -> bool {
        self.pos.is_insufficient_material()
    }

    fn is_stalemate(&self) -> bool {
        self.pos.is_stalemate()
    }

    /// Claimable now, or by playing one more move.
    fn can_claim_draw(&self) -> bool {
        self.pos.halfmoves() >= FIFTY_MOVE_PLIES
            || self.occurrences(&self.pos) >= 3
            || self.draw_after_any_move()
    }

    fn is_checkmate(&self) -> bool {
        self.pos.is_checkmate()
    }

    fn has_castling_rights(&self, color: Color, side: CastleSide) -> bool {
        let side = match side {
            CastleSide::KingSide => CastlingSide::KingSide,
            CastleSide::QueenSide => CastlingSide::QueenSide,
        };
        self.pos.castles().has(to_shakmaty_color(color), side)
    }

    fn export_fen(&self) -> String {
        Fen::from_position(self.pos.clone(), EnPassantMode::Legal).to_string()
    }

    fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.pos
            .board()
            .piece_at(to_shakmaty_square(sq))
            .map(from_shakmaty_piece)
    }
}

/// FEN without the move counters: board with pockets, side, castling, en passant.
fn repetition_key(pos: &Crazyhouse) -> String {
    let fen = Fen::from_position(pos.clone(), EnPassantMode::Legal).to_string();
    fen.split_whitespace().take(4).collect::<Vec<_>>().join(" ")
}

fn to_shakmaty_color(color: Color) -> shakmaty::Color {
    match color {
        Color::White => shakmaty::Color::White,
        Color::Black => shakmaty::Color::Black,
    }
}

/// Row 0 = rank 8, row 7 = rank 1.
fn to_shakmaty_square(sq: Square) -> shakmaty::Square {
    let file = File::new(sq.col as u32);
    let rank = Rank::new(7 - sq.row as u32);
    shakmaty::Square::from_coords(file, rank)
}

fn from_shakmaty_piece(piece: shakmaty::Piece) -> Piece {
    let kind = match piece.role {
        Role::Pawn => PieceKind::Pawn,
        Role::Knight => PieceKind::Knight,
        Role::Bishop => PieceKind::Bishop,
        Role::Rook => PieceKind::Rook,
        Role::Queen => PieceKind::Queen,
        Role::King => PieceKind::King,
    };
    let color = match piece.color {
        shakmaty::Color::White => Color::White,
        shakmaty::Color::Black => Color::Black,
    };
    Piece { color, kind }
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
