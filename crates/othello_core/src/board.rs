//! 6x6 Othello board.
//!
//! Discs are stored as two 36-bit masks indexed by cell number (see
//! [`LAYOUT`](crate::types::LAYOUT)). Boards are `Copy` and every move
//! produces a new board, which is what the search engines expect.

use std::fmt;

use crate::GameState;
use crate::types::{CELLS, Color, LAYOUT, PASS, cell_at, col_of, row_of};
use crate::zobrist::ZOBRIST;

const FULL: u64 = (1u64 << CELLS) - 1;

const DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    black: u64,
    white: u64,
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

impl Board {
    /// Opening position: Black on centre cells 1 and 2, White on 0 and 3.
    pub fn initial() -> Self {
        Self {
            black: (1 << 1) | (1 << 2),
            white: (1 << 0) | (1 << 3),
        }
    }

    /// Builds a board from raw disc masks. Bits above cell 35 are dropped and
    /// a cell claimed by both colours is given to Black.
    pub fn from_masks(black: u64, white: u64) -> Self {
        let black = black & FULL;
        Self {
            black,
            white: white & FULL & !black,
        }
    }

    pub fn black(&self) -> u64 {
        self.black
    }

    pub fn white(&self) -> u64 {
        self.white
    }

    pub fn disc_count(&self, color: Color) -> u32 {
        match color {
            Color::Max => self.black.count_ones(),
            Color::Min => self.white.count_ones(),
        }
    }

    pub fn is_free(&self, cell: usize) -> bool {
        (self.black | self.white) & (1u64 << cell) == 0
    }

    pub fn owner(&self, cell: usize) -> Option<Color> {
        let bit = 1u64 << cell;
        if self.black & bit != 0 {
            Some(Color::Max)
        } else if self.white & bit != 0 {
            Some(Color::Min)
        } else {
            None
        }
    }

    pub fn is_full(&self) -> bool {
        (self.black | self.white) == FULL
    }

    fn sides(&self, color: Color) -> (u64, u64) {
        match color {
            Color::Max => (self.black, self.white),
            Color::Min => (self.white, self.black),
        }
    }

    /// Discs flipped by `color` playing on `cell`; zero when the move does
    /// not outflank anything or the cell is taken.
    pub fn flips(&self, color: Color, cell: usize) -> u64 {
        if cell >= CELLS || !self.is_free(cell) {
            return 0;
        }
        let (own, opp) = self.sides(color);
        let (row, col) = (row_of(cell), col_of(cell));

        let mut flipped = 0u64;
        for (dr, dc) in DIRECTIONS {
            let mut run = 0u64;
            let (mut r, mut c) = (row + dr, col + dc);
            while let Some(next) = cell_at(r, c) {
                let bit = 1u64 << next;
                if opp & bit != 0 {
                    run |= bit;
                    r += dr;
                    c += dc;
                    continue;
                }
                if own & bit != 0 {
                    flipped |= run;
                }
                break;
            }
        }
        flipped
    }

    /// Whether `color` can play on `cell` (the move outflanks something).
    pub fn outflank(&self, color: Color, cell: usize) -> bool {
        self.flips(color, cell) != 0
    }

    pub fn has_move(&self, color: Color) -> bool {
        (0..CELLS).any(|cell| self.outflank(color, cell))
    }

    pub fn legal_cells(&self, color: Color) -> impl Iterator<Item = usize> + '_ {
        (0..CELLS).filter(move |&cell| self.outflank(color, cell))
    }

    /// Places a `color` disc on `cell` and flips every outflanked run.
    /// The move is not validated: an unflanking placement just adds the disc.
    pub fn apply(&self, color: Color, cell: usize) -> Board {
        let flipped = self.flips(color, cell);
        let placed = flipped | (1u64 << cell);
        match color {
            Color::Max => Board {
                black: self.black | placed,
                white: self.white & !placed,
            },
            Color::Min => Board {
                black: self.black & !placed,
                white: self.white | placed,
            },
        }
    }

    /// Like [`Board::apply`], but [`PASS`] leaves the board unchanged.
    pub fn apply_or_pass(&self, color: Color, slot: usize) -> Board {
        if slot == PASS { *self } else { self.apply(color, slot) }
    }

    /// Black discs minus White discs.
    pub fn disc_difference(&self) -> i32 {
        self.black.count_ones() as i32 - self.white.count_ones() as i32
    }

    /// Zobrist hash of the disc placement.
    pub fn zobrist(&self) -> u64 {
        let mut hash = 0u64;
        for cell in 0..CELLS {
            if let Some(color) = self.owner(cell) {
                hash ^= ZOBRIST.cell_key(color, cell);
            }
        }
        hash
    }
}

impl GameState for Board {
    const MOVE_SLOTS: usize = CELLS;

    fn is_terminal(&self) -> bool {
        self.is_full() || (!self.has_move(Color::Max) && !self.has_move(Color::Min))
    }

    fn value(&self) -> i32 {
        self.disc_difference()
    }

    fn is_legal(&self, color: Color, slot: usize) -> bool {
        self.outflank(color, slot)
    }

    fn play(&self, color: Color, slot: usize) -> Self {
        self.apply(color, slot)
    }

    fn hash_key(&self) -> u64 {
        self.zobrist()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  a b c d e f")?;
        for (row, cells) in LAYOUT.iter().enumerate() {
            write!(f, "{}", row + 1)?;
            for &cell in cells {
                let mark = match self.owner(cell as usize) {
                    Some(Color::Max) => 'x',
                    Some(Color::Min) => 'o',
                    None => '.',
                };
                write!(f, " {mark}")?;
            }
            writeln!(f)?;
        }
        write!(
            f,
            "black={} white={}",
            self.disc_count(Color::Max),
            self.disc_count(Color::Min)
        )
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
