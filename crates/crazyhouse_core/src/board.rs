use crate::bitplanes::BitplaneSet;
use crate::error::MoveError;
use crate::oracle::LegalityOracle;
use crate::reserve::ReserveSet;
use crate::rules::CrazyhouseRules;
use crate::token::MoveToken;
use crate::types::*;

/// Length of [`BoardState::canonical_key`]: 64 squares, 10 reserve digits,
/// 4 castling flags, 1 turn digit.
pub const KEY_LEN: usize = 64 + 10 + 4 + 1;

/// Fixed crazyhouse material per reserve kind (pawn, knight, bishop, rook, queen).
pub const STARTING_MATERIAL: [u32; 5] = [16, 4, 4, 4, 2];

const KEY_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Everything a move can change besides the ply counter. Moves build the next
/// value on a copy and commit it in one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Contents {
    pub(crate) squares: [Option<Piece>; 64],
    /// True where the piece was created by promotion from a pawn.
    pub(crate) promoted: [bool; 64],
    /// Indexed by `Color::idx()`.
    pub(crate) reserves: [ReserveSet; 2],
}

impl Contents {
    fn startpos() -> Self {
        let mut squares = [None; 64];
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, &kind) in back.iter().enumerate() {
            squares[col] = Some(Piece::new(Color::Black, kind));
            squares[8 + col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            squares[48 + col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            squares[56 + col] = Some(Piece::new(Color::White, kind));
        }
        Self {
            squares,
            promoted: [false; 64],
            reserves: [ReserveSet::new(); 2],
        }
    }
}

/// Authoritative crazyhouse position for one game session.
///
/// Holds the array board, promotion-origin flags, both reserves and the ply
/// counter, and drives its rules engine in lockstep. The bitplanes are a
/// derived view rebuilt after every move; there is no way to edit them.
///
/// Not meant to be shared between threads: create one per game.
#[derive(Clone, Debug)]
pub struct BoardState<O = CrazyhouseRules> {
    pub(crate) contents: Contents,
    bitplanes: BitplaneSet,
    plies: u32,
    oracle: O,
}

impl BoardState<CrazyhouseRules> {
    /// Standard starting position with the `shakmaty` rules engine.
    pub fn new() -> Self {
        Self::with_oracle(CrazyhouseRules::new())
    }
}

impl Default for BoardState<CrazyhouseRules> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: LegalityOracle> BoardState<O> {
    /// Starting position driven by `oracle`, which must itself be at the
    /// starting position.
    pub fn with_oracle(oracle: O) -> Self {
        let contents = Contents::startpos();
        Self {
            bitplanes: BitplaneSet::from_squares(&contents.squares),
            contents,
            plies: 0,
            oracle,
        }
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.contents.squares[sq.index()]
    }

    pub fn squares(&self) -> &[Option<Piece>; 64] {
        &self.contents.squares
    }

    /// Whether the piece on `sq` came from a pawn promotion.
    pub fn is_promoted(&self, sq: Square) -> bool {
        self.contents.promoted[sq.index()]
    }

    pub fn reserve(&self, color: Color) -> &ReserveSet {
        &self.contents.reserves[color.idx()]
    }

    pub fn plies(&self) -> u32 {
        self.plies
    }

    pub fn side_to_move(&self) -> Color {
        Color::from_ply(self.plies)
    }

    pub fn bitplanes(&self) -> &BitplaneSet {
        &self.bitplanes
    }

    pub fn oracle(&self) -> &O {
        &self.oracle
    }

    pub(crate) fn oracle_mut(&mut self) -> &mut O {
        &mut self.oracle
    }

    pub fn legal_moves(&self) -> Vec<MoveToken> {
        self.oracle.legal_moves()
    }

    /// Install the next contents, rebuild the bitplanes and advance one ply.
    pub(crate) fn commit(&mut self, next: Contents) {
        self.contents = next;
        self.bitplanes = BitplaneSet::from_squares(&self.contents.squares);
        self.plies += 1;
    }

    /// Fixed-length position identifier.
    ///
    /// 64 board characters in row-major order (`0` for empty), white then
    /// black reserve counts (pawn..queen), castling flags (white king-side,
    /// white queen-side, black king-side, black queen-side) and the ply
    /// parity. Reserve counts of ten or more continue in base 36 (`a` = 10)
    /// so every key is exactly [`KEY_LEN`] characters.
    pub fn canonical_key(&self) -> String {
        let mut key = String::with_capacity(KEY_LEN);
        for slot in &self.contents.squares {
            key.push(slot.map_or('0', Piece::to_char));
        }
        for color in [Color::White, Color::Black] {
            for count in self.reserve(color).counts() {
                key.push(KEY_DIGITS[(count as usize).min(35)] as char);
            }
        }
        for (color, side) in [
            (Color::White, CastleSide::KingSide),
            (Color::White, CastleSide::QueenSide),
            (Color::Black, CastleSide::KingSide),
            (Color::Black, CastleSide::QueenSide),
        ] {
            key.push(if self.oracle.has_castling_rights(color, side) {
                '1'
            } else {
                '0'
            });
        }
        key.push(if self.plies % 2 == 0 { '0' } else { '1' });
        key
    }

    /// Interchange string from the rules engine.
    pub fn export_rules_string(&self) -> String {
        self.oracle.export_fen()
    }

    /// Units of `kind` in play: on the board (promoted pieces count as pawns)
    /// plus both reserves. Always equals `STARTING_MATERIAL[kind.idx()]`.
    pub fn material_count(&self, kind: ReserveKind) -> u32 {
        let on_board = self
            .contents
            .squares
            .iter()
            .zip(self.contents.promoted.iter())
            .filter(|(slot, promoted)| match slot {
                Some(piece) if **promoted => {
                    kind == ReserveKind::Pawn && piece.kind != PieceKind::King
                }
                Some(piece) => piece.kind == kind.piece_kind(),
                None => false,
            })
            .count() as u32;
        on_board
            + self.reserve(Color::White).count(kind) as u32
            + self.reserve(Color::Black).count(kind) as u32
    }

    /// Check the array board square by square against the rules engine.
    pub fn verify_sync(&self) -> Result<(), MoveError> {
        for idx in 0..64 {
            let sq = Square::from_index(idx);
            let ours = self.piece_at(sq);
            let theirs = self.oracle.piece_at(sq);
            if ours != theirs {
                return Err(MoveError::Desync {
                    square: sq,
                    detail: format!(
                        "array board has {}, rules engine has {}",
                        ours.map_or('.', Piece::to_char),
                        theirs.map_or('.', Piece::to_char)
                    ),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
