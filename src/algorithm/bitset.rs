use crate::spatial::pieces::PieceId;
use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset recording which piece kinds a branch has placed
///
/// Uses 1-based indexing to match piece ids stored in board cells.
/// Cloning copies the bits, so a forked branch owns its own set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PieceSet {
    bits: BitVec,
    max_pieces: usize,
}

impl PieceSet {
    /// Create a set with no pieces present
    pub fn new(max_pieces: usize) -> Self {
        Self {
            bits: bitvec![0; max_pieces],
            max_pieces,
        }
    }

    /// Insert a piece id
    ///
    /// Takes 1-based ids, storing at id-1 internally
    pub fn insert(&mut self, piece: PieceId) {
        let piece = piece as usize;
        if piece > 0 && piece <= self.max_pieces {
            self.bits.set(piece - 1, true);
        }
    }

    /// Remove a piece id
    pub fn remove(&mut self, piece: PieceId) {
        let piece = piece as usize;
        if piece > 0 && piece <= self.max_pieces {
            self.bits.set(piece - 1, false);
        }
    }

    /// Test piece membership
    pub fn contains(&self, piece: PieceId) -> bool {
        (piece as usize)
            .checked_sub(1)
            .and_then(|index| self.bits.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Test if no pieces are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count pieces in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Extract all piece ids in ascending order
    pub fn to_vec(&self) -> Vec<PieceId> {
        self.bits
            .iter_ones()
            .filter_map(|index| PieceId::try_from(index + 1).ok())
            .collect()
    }
}

impl fmt::Display for PieceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PieceSet({} pieces: {:?})", self.count(), self.to_vec())
    }
}
