//! Per-side pool of captured pieces available for dropping.

use crate::error::MoveError;
use crate::types::ReserveKind;

/// Counts in reserve order: pawn, knight, bishop, rook, queen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReserveSet {
    counts: [u8; 5],
}

impl ReserveSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_counts(counts: [u8; 5]) -> Self {
        Self { counts }
    }

    #[inline]
    pub fn count(&self, kind: ReserveKind) -> u8 {
        self.counts[kind.idx()]
    }

    pub fn counts(&self) -> [u8; 5] {
        self.counts
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|&c| c as u32).sum()
    }

    pub fn add(&mut self, kind: ReserveKind) {
        self.counts[kind.idx()] += 1;
    }

    /// Take one unit out of the reserve. Never clamps at zero.
    pub fn remove(&mut self, kind: ReserveKind) -> Result<(), MoveError> {
        let slot = &mut self.counts[kind.idx()];
        *slot = slot
            .checked_sub(1)
            .ok_or(MoveError::ReserveUnderflow { kind })?;
        Ok(())
    }
}
