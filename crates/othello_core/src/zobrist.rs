//! Zobrist hashing for Othello boards.
//!
//! A board hash is the XOR of one random key per occupied cell and disc
//! colour (2 colours × 36 cells = 72 values). The side to move is not part of
//! a board, so it is not hashed; callers that need it keep one table per
//! colour.

use crate::types::{CELLS, Color};

/// Pre-computed random values for Zobrist hashing.
/// Generated using a fixed seed for reproducibility.
pub struct ZobristKeys {
    /// Random values for each disc colour on each cell.
    /// Indexed by [color][cell]
    pub cells: [[u64; CELLS]; 2],
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl ZobristKeys {
    /// Generate Zobrist keys using xorshift64 with a fixed seed.
    pub const fn new() -> Self {
        const fn xorshift64(mut state: u64) -> u64 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state
        }

        let mut state = 0x0DD0_5EED_1234_ABCDu64;

        let mut cells = [[0u64; CELLS]; 2];
        let mut color = 0;
        while color < 2 {
            let mut cell = 0;
            while cell < CELLS {
                state = xorshift64(state);
                cells[color][cell] = state;
                cell += 1;
            }
            color += 1;
        }

        ZobristKeys { cells }
    }

    /// Get the Zobrist key for a disc of `color` on `cell`.
    #[inline(always)]
    pub fn cell_key(&self, color: Color, cell: usize) -> u64 {
        self.cells[color.index()][cell]
    }
}

/// Global static Zobrist keys, computed at compile time.
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
