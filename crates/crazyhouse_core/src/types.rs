use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
    /// Side to move after `ply` half-moves: even = white, odd = black.
    pub fn from_ply(ply: u32) -> Color {
        if ply % 2 == 0 {
            Color::White
        } else {
            Color::Black
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub fn idx(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    /// Lowercase letter for this kind.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// One of the 12 piece codes. An empty square is `None` in an `Option<Piece>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    pub fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }

    /// Uppercase for white, lowercase for black.
    pub fn to_char(self) -> char {
        let c = self.kind.letter();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn from_char(c: char) -> Option<Piece> {
        let kind = PieceKind::from_letter(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece { color, kind })
    }
}

/// The five kinds a reserve can hold, in reserve order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReserveKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
}

impl ReserveKind {
    pub const ALL: [ReserveKind; 5] = [
        ReserveKind::Pawn,
        ReserveKind::Knight,
        ReserveKind::Bishop,
        ReserveKind::Rook,
        ReserveKind::Queen,
    ];

    pub fn idx(self) -> usize {
        match self {
            ReserveKind::Pawn => 0,
            ReserveKind::Knight => 1,
            ReserveKind::Bishop => 2,
            ReserveKind::Rook => 3,
            ReserveKind::Queen => 4,
        }
    }

    pub fn piece_kind(self) -> PieceKind {
        match self {
            ReserveKind::Pawn => PieceKind::Pawn,
            ReserveKind::Knight => PieceKind::Knight,
            ReserveKind::Bishop => PieceKind::Bishop,
            ReserveKind::Rook => PieceKind::Rook,
            ReserveKind::Queen => PieceKind::Queen,
        }
    }
}

impl TryFrom<PieceKind> for ReserveKind {
    type Error = PieceKind;

    fn try_from(kind: PieceKind) -> Result<Self, Self::Error> {
        match kind {
            PieceKind::Pawn => Ok(ReserveKind::Pawn),
            PieceKind::Knight => Ok(ReserveKind::Knight),
            PieceKind::Bishop => Ok(ReserveKind::Bishop),
            PieceKind::Rook => Ok(ReserveKind::Rook),
            PieceKind::Queen => Ok(ReserveKind::Queen),
            PieceKind::King => Err(kind),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// Board coordinate with row 0 = rank 8 (top of the board) and col 0 = file a.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / 8) as u8,
            col: (idx % 8) as u8,
        }
    }

    /// Row-major index, 0 = a8, 63 = h1.
    pub fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    pub fn from_coord(c: &str) -> Option<Square> {
        let b = c.as_bytes();
        if b.len() != 2 {
            return None;
        }
        let f = b[0];
        let r = b[1];
        if !(b'a'..=b'h').contains(&f) || !(b'1'..=b'8').contains(&r) {
            return None;
        }
        Some(Square::new(b'8' - r, f - b'a'))
    }

    pub fn coord(self) -> String {
        let f = (b'a' + self.col) as char;
        let r = (b'8' - self.row) as char;
        format!("{f}{r}")
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.coord())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
