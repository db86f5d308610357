//! Move classification and application.
//!
//! Tokens carry no move-type tag, so the kind of mutation is inferred from
//! the squares involved and the current array board. Classification happens
//! once per move; the resulting [`MoveClass`] drives a single exhaustive
//! mutation routine.

use tracing::{debug, trace};

use crate::board::{BoardState, Contents};
use crate::error::MoveError;
use crate::oracle::LegalityOracle;
use crate::token::MoveToken;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveClass {
    Castle {
        color: Color,
        side: CastleSide,
    },
    /// `victim` is the captured pawn's square: source row, destination column.
    EnPassant {
        from: Square,
        to: Square,
        victim: Square,
    },
    Drop {
        kind: ReserveKind,
        to: Square,
    },
    Normal {
        from: Square,
        to: Square,
    },
    Promotion {
        from: Square,
        to: Square,
        kind: PieceKind,
    },
}

/// King and rook squares for one castling move.
struct CastleSquares {
    king_from: Square,
    king_to: Square,
    rook_from: Square,
    rook_to: Square,
}

fn castle_squares(color: Color, side: CastleSide) -> CastleSquares {
    let row = match color {
        Color::White => 7,
        Color::Black => 0,
    };
    let (king_to, rook_from, rook_to) = match side {
        CastleSide::KingSide => (6, 7, 5),
        CastleSide::QueenSide => (2, 0, 3),
    };
    CastleSquares {
        king_from: Square::new(row, 4),
        king_to: Square::new(row, king_to),
        rook_from: Square::new(row, rook_from),
        rook_to: Square::new(row, rook_to),
    }
}

/// The four king start/end pairs: e1g1, e1c1, e8g8, e8c8.
fn castle_for(from: Square, to: Square) -> Option<(Color, CastleSide)> {
    let color = match from {
        Square { row: 7, col: 4 } => Color::White,
        Square { row: 0, col: 4 } => Color::Black,
        _ => return None,
    };
    if to.row != from.row {
        return None;
    }
    match to.col {
        6 => Some((color, CastleSide::KingSide)),
        2 => Some((color, CastleSide::QueenSide)),
        _ => None,
    }
}

/// Work out what kind of mutation `token` performs on `board`.
pub fn classify<O: LegalityOracle>(
    board: &BoardState<O>,
    token: &MoveToken,
) -> Result<MoveClass, MoveError> {
    let (from, to, promotion) = match *token {
        MoveToken::Drop { kind, to } => {
            let kind = ReserveKind::try_from(kind).map_err(|_| MoveError::MalformedToken {
                token: token.to_string(),
                reason: "kings cannot be dropped",
            })?;
            return Ok(MoveClass::Drop { kind, to });
        }
        MoveToken::Normal {
            from,
            to,
            promotion,
        } => (from, to, promotion),
    };

    let moving = board.piece_at(from).ok_or_else(|| MoveError::Desync {
        square: from,
        detail: format!("no piece to move for {token}"),
    })?;

    if let Some((color, side)) = castle_for(from, to)
        && promotion.is_none()
        && moving == Piece::new(color, PieceKind::King)
    {
        return Ok(MoveClass::Castle { color, side });
    }

    // A pawn moving diagonally onto an empty square next to an enemy pawn.
    if moving.kind == PieceKind::Pawn && from.col != to.col && board.piece_at(to).is_none() {
        let victim = Square::new(from.row, to.col);
        if board.piece_at(victim) == Some(Piece::new(moving.color.other(), PieceKind::Pawn)) {
            return Ok(MoveClass::EnPassant { from, to, victim });
        }
    }

    Ok(match promotion {
        Some(kind) => MoveClass::Promotion { from, to, kind },
        None => MoveClass::Normal { from, to },
    })
}

impl Contents {
    fn relocate(&mut self, from: Square, to: Square) {
        self.squares[to.index()] = self.squares[from.index()].take();
        self.promoted[to.index()] = std::mem::take(&mut self.promoted[from.index()]);
    }

    fn clear(&mut self, sq: Square) {
        self.squares[sq.index()] = None;
        self.promoted[sq.index()] = false;
    }

    /// Credit the mover for whatever stands on `to`. Promoted pieces return
    /// to the reserve as pawns.
    fn capture(&mut self, to: Square, mover: Color) -> Result<(), MoveError> {
        let Some(victim) = self.squares[to.index()] else {
            return Ok(());
        };
        let kind = if self.promoted[to.index()] {
            ReserveKind::Pawn
        } else {
            ReserveKind::try_from(victim.kind).map_err(|_| MoveError::Desync {
                square: to,
                detail: "move captures a king".to_string(),
            })?
        };
        self.reserves[mover.idx()].add(kind);
        Ok(())
    }

    /// Contents after playing `class` for `mover`. `self` is left untouched.
    fn after(&self, class: MoveClass, mover: Color) -> Result<Contents, MoveError> {
        let mut next = *self;
        match class {
            MoveClass::Castle { color, side } => {
                let sq = castle_squares(color, side);
                next.relocate(sq.king_from, sq.king_to);
                next.relocate(sq.rook_from, sq.rook_to);
            }
            MoveClass::EnPassant { from, to, victim } => {
                next.clear(victim);
                next.relocate(from, to);
                next.reserves[mover.idx()].add(ReserveKind::Pawn);
            }
            MoveClass::Drop { kind, to } => {
                if let Some(occupant) = next.squares[to.index()] {
                    return Err(MoveError::Desync {
                        square: to,
                        detail: format!("drop onto occupied square ({})", occupant.to_char()),
                    });
                }
                next.reserves[mover.idx()].remove(kind)?;
                next.squares[to.index()] = Some(Piece::new(mover, kind.piece_kind()));
                next.promoted[to.index()] = false;
            }
            MoveClass::Normal { from, to } => {
                next.capture(to, mover)?;
                next.relocate(from, to);
            }
            MoveClass::Promotion { from, to, kind } => {
                next.capture(to, mover)?;
                next.relocate(from, to);
                next.squares[to.index()] = Some(Piece::new(mover, kind));
                next.promoted[to.index()] = true;
            }
        }
        Ok(next)
    }
}

impl<O: LegalityOracle> BoardState<O> {
    /// Parse and apply one move token.
    pub fn make_move(&mut self, txt: &str) -> Result<MoveClass, MoveError> {
        let token = MoveToken::parse(txt)?;
        self.apply(&token)
    }

    /// Validate `token` with the rules engine and apply it.
    ///
    /// On success the array board, promotion flags, reserves and bitplanes
    /// are updated and the ply counter advances by one. On any error nothing
    /// changes.
    pub fn apply(&mut self, token: &MoveToken) -> Result<MoveClass, MoveError> {
        if !self.oracle().is_legal(token) {
            debug!(%token, ply = self.plies(), "rejected illegal move");
            return Err(MoveError::IllegalMove {
                token: token.to_string(),
            });
        }

        let mover = self.side_to_move();
        let class = classify(self, token)?;
        let next = self.contents.after(class, mover)?;

        // Everything fallible on our side is done; advance the oracle first so
        // a refusal there still leaves both views on the old position.
        self.oracle_mut().push(token)?;
        self.commit(next);

        trace!(%token, ?class, ply = self.plies(), "applied move");
        Ok(class)
    }
}

#[cfg(test)]
#[path = "apply_tests.rs"]
mod apply_tests;
