//! Tensor encoding of a board state for the policy network.
//!
//! The encoding is 13 planes of 8×8, stacked vertically into a 104×8 image
//! with singleton batch and channel dimensions: shape `(1, 1, 104, 8)`.
//!
//! - Planes 0-5: White pieces (Pawn, Knight, Bishop, Rook, Queen, King)
//! - Planes 6-11: Black pieces (Pawn, Knight, Bishop, Rook, Queen, King)
//! - Plane 12: reserves and side to move
//!
//! Reserve plane layout (rows 0-3 white, rows 4-7 black):
//!
//! ```text
//! row 0 / 4   pawns 1-8          (left to right)
//! row 1 / 5   pawns 9-16
//! row 2 / 6   knights 1-4 | bishops 1-4
//! row 3 / 7   rooks 1-4   | queens 1-4
//! ```
//!
//! Cells (7,6) and (7,7) hold the ply parity (1.0 when black is to move).
//! They overlap black's third and fourth queen slot, which no legal game
//! reaches: captured promoted queens return as pawns, so a reserve holds at
//! most two queens.

use crate::bitplanes::BitplaneSet;
use crate::board::BoardState;
use crate::oracle::LegalityOracle;
use crate::reserve::ReserveSet;
use crate::types::{Color, ReserveKind};

/// Number of 8×8 planes.
pub const NUM_PLANES: usize = 13;

/// Total number of values: 13 × 64 = 832.
pub const NUM_FEATURES: usize = NUM_PLANES * 64;

/// Reserve pawns representable per side; more are not encoded.
pub const PAWN_CAPACITY: u8 = 16;

/// Reserve knights, bishops, rooks or queens representable per side and kind.
pub const PIECE_CAPACITY: u8 = 4;

const TURN_CELLS: [(usize, usize); 2] = [(7, 6), (7, 7)];

/// (kind, row offset, first column) of each half-row in a side's block.
const PIECE_SLOTS: [(ReserveKind, usize, usize); 4] = [
    (ReserveKind::Knight, 2, 0),
    (ReserveKind::Bishop, 2, 4),
    (ReserveKind::Rook, 3, 0),
    (ReserveKind::Queen, 3, 4),
];

/// Encoded board, row-major over the `(1, 1, 104, 8)` shape.
#[derive(Clone, Debug, PartialEq)]
pub struct EncodedState {
    data: Vec<f32>,
}

impl EncodedState {
    pub const SHAPE: [usize; 4] = [1, 1, NUM_PLANES * 8, 8];

    pub fn shape(&self) -> [usize; 4] {
        Self::SHAPE
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Value at `row` (0..104) and `col` (0..8) of the image.
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.data[row * 8 + col]
    }

    /// The 64 values of plane `index`.
    pub fn plane(&self, index: usize) -> &[f32] {
        &self.data[index * 64..(index + 1) * 64]
    }
}

/// Encode `state` from scratch. Pure: reading the board is all it does.
pub fn encode<O: LegalityOracle>(state: &BoardState<O>) -> EncodedState {
    let mut data = Vec::with_capacity(NUM_FEATURES);
    data.resize(BitplaneSet::COUNT * 64, 0.0f32);

    for (i, &plane) in state.bitplanes().planes().iter().enumerate() {
        for sq in plane {
            data[i * 64 + sq.index()] = 1.0;
        }
    }

    data.extend_from_slice(&encode_reserve_plane(
        state.reserve(Color::White),
        state.reserve(Color::Black),
        state.plies(),
    ));

    debug_assert_eq!(data.len(), NUM_FEATURES);
    EncodedState { data }
}

/// Pack both reserves and the side to move into one 8×8 plane.
///
/// Counts beyond [`PAWN_CAPACITY`] / [`PIECE_CAPACITY`] are not represented.
pub fn encode_reserve_plane(white: &ReserveSet, black: &ReserveSet, ply: u32) -> [f32; 64] {
    let mut plane = [0.0f32; 64];

    for (reserve, base_row) in [(white, 0usize), (black, 4usize)] {
        let pawns = reserve.count(ReserveKind::Pawn).min(PAWN_CAPACITY) as usize;
        for i in 0..pawns {
            plane[(base_row + i / 8) * 8 + i % 8] = 1.0;
        }

        for (kind, row, first_col) in PIECE_SLOTS {
            let n = reserve.count(kind).min(PIECE_CAPACITY) as usize;
            for i in 0..n {
                plane[(base_row + row) * 8 + first_col + i] = 1.0;
            }
        }
    }

    let turn = (ply % 2) as f32;
    for (row, col) in TURN_CELLS {
        plane[row * 8 + col] = turn;
    }

    plane
}

impl<O: LegalityOracle> BoardState<O> {
    /// Shorthand for [`encode`].
    pub fn encode(&self) -> EncodedState {
        encode(self)
    }
}

#[cfg(test)]
#[path = "encoder_tests.rs"]
mod encoder_tests;
