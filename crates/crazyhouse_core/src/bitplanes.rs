//! Per-piece occupancy planes derived from the array board.
//!
//! A bitplane is a 64-bit integer where each bit marks one square.
//! Bit 0 = a8, bit 7 = h8, ..., bit 63 = h1 (row-major, matching the array
//! board and the encoded tensor).

use crate::types::{Color, Piece, PieceKind, Square};

/// A set of squares on the board.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitplane(pub u64);

impl Bitplane {
    pub const EMPTY: Bitplane = Bitplane(0);

    #[inline(always)]
    pub const fn from_square(sq: Square) -> Self {
        Bitplane(1u64 << (sq.row as u32 * 8 + sq.col as u32))
    }

    #[inline(always)]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline(always)]
    pub const fn contains(self, sq: Square) -> bool {
        (self.0 & Self::from_square(sq).0) != 0
    }

    #[inline(always)]
    fn set(&mut self, sq: Square) {
        self.0 |= Self::from_square(sq).0;
    }

    #[inline(always)]
    pub const fn popcount(self) -> u32 {
        self.0.count_ones()
    }

    /// Get and remove the lowest set square.
    #[inline(always)]
    pub fn pop_lsb(&mut self) -> Option<Square> {
        if self.0 == 0 {
            None
        } else {
            let idx = self.0.trailing_zeros() as usize;
            self.0 &= self.0 - 1;
            Some(Square::from_index(idx))
        }
    }
}

impl Iterator for Bitplane {
    type Item = Square;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        self.pop_lsb()
    }
}

/// The 12 occupancy planes, in encoding order:
/// white pawn, knight, bishop, rook, queen, king, then black in the same order.
///
/// Only [`BitplaneSet::from_squares`] builds one, so the planes can never drift
/// from the board they were computed from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitplaneSet {
    planes: [Bitplane; 12],
}

impl BitplaneSet {
    pub const COUNT: usize = 12;

    /// Plane index of a piece in encoding order.
    #[inline]
    pub fn plane_index(piece: Piece) -> usize {
        let color_offset = if piece.color == Color::White { 0 } else { 6 };
        color_offset + piece.kind.idx()
    }

    pub fn from_squares(squares: &[Option<Piece>; 64]) -> Self {
        let mut planes = [Bitplane::EMPTY; 12];
        for (idx, slot) in squares.iter().enumerate() {
            if let Some(piece) = slot {
                planes[Self::plane_index(*piece)].set(Square::from_index(idx));
            }
        }
        Self { planes }
    }

    pub fn plane(&self, piece: Piece) -> Bitplane {
        self.planes[Self::plane_index(piece)]
    }

    pub fn planes(&self) -> &[Bitplane; 12] {
        &self.planes
    }

    /// Number of pieces of `kind` on the board, both colors.
    pub fn count_kind(&self, kind: PieceKind) -> u32 {
        self.plane(Piece::new(Color::White, kind)).popcount()
            + self.plane(Piece::new(Color::Black, kind)).popcount()
    }
}

#[cfg(test)]
#[path = "bitplanes_tests.rs"]
mod bitplanes_tests;
