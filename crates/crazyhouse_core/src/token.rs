//! Move token grammar.
//!
//! ```text
//! normal     e2e4      <file><rank><file><rank>
//! promotion  e7e8q     normal + n|b|r|q
//! drop       N@c5      P|N|B|R|Q @ <file><rank>
//! ```
//!
//! Castling travels as a plain king move (`e1g1`, `e1c1`, `e8g8`, `e8c8`).

use std::fmt;
use std::str::FromStr;

use crate::error::MoveError;
use crate::types::{PieceKind, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MoveToken {
    Normal {
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    },
    Drop {
        kind: PieceKind,
        to: Square,
    },
}

impl MoveToken {
    pub fn parse(txt: &str) -> Result<MoveToken, MoveError> {
        if !txt.is_ascii() {
            return Err(MoveError::malformed(txt, "non-ascii characters"));
        }
        if txt.len() == 4 && txt.as_bytes()[1] == b'@' {
            let kind = txt
                .chars()
                .next()
                .and_then(PieceKind::from_letter)
                .filter(|k| *k != PieceKind::King)
                .ok_or_else(|| MoveError::malformed(txt, "drop letter must be one of PNBRQ"))?;
            let to = Square::from_coord(&txt[2..4])
                .ok_or_else(|| MoveError::malformed(txt, "bad drop square"))?;
            return Ok(MoveToken::Drop { kind, to });
        }

        if txt.len() != 4 && txt.len() != 5 {
            return Err(MoveError::malformed(txt, "expected 4 or 5 characters"));
        }
        let from = Square::from_coord(&txt[0..2])
            .ok_or_else(|| MoveError::malformed(txt, "bad source square"))?;
        let to = Square::from_coord(&txt[2..4])
            .ok_or_else(|| MoveError::malformed(txt, "bad destination square"))?;
        let promotion = match txt.as_bytes().get(4) {
            None => None,
            Some(&b) => match PieceKind::from_letter(b as char) {
                Some(k) if !matches!(k, PieceKind::Pawn | PieceKind::King) => Some(k),
                _ => return Err(MoveError::malformed(txt, "bad promotion letter")),
            },
        };
        Ok(MoveToken::Normal { from, to, promotion })
    }

    pub fn to(self) -> Square {
        match self {
            MoveToken::Normal { to, .. } | MoveToken::Drop { to, .. } => to,
        }
    }

    pub fn is_drop(self) -> bool {
        matches!(self, MoveToken::Drop { .. })
    }
}

impl FromStr for MoveToken {
    type Err = MoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        MoveToken::parse(s)
    }
}

impl fmt::Display for MoveToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            MoveToken::Normal { from, to, promotion } => {
                write!(f, "{from}{to}")?;
                if let Some(kind) = promotion {
                    write!(f, "{}", kind.letter())?;
                }
                Ok(())
            }
            MoveToken::Drop { kind, to } => {
                write!(f, "{}@{to}", kind.letter().to_ascii_uppercase())
            }
        }
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod token_tests;
