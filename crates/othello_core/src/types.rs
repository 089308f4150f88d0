use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of cells on the board, and therefore of move slots probed per ply.
pub const CELLS: usize = 36;
/// Board side length.
pub const SIDE: usize = 6;
/// Slot used by a principal variation to encode a pass.
pub const PASS: usize = CELLS;

/// Player to move. `Max` is Black and moves first, `Min` is White.
///
/// Negamax-family engines multiply absolute values by [`Color::sign`] to view
/// them from the mover's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "black")]
    Max,
    #[serde(rename = "white")]
    Min,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::Max => Color::Min,
            Color::Min => Color::Max,
        }
    }

    /// `+1` for the maximizer, `-1` for the minimizer.
    pub fn sign(self) -> i32 {
        match self {
            Color::Max => 1,
            Color::Min => -1,
        }
    }

    pub fn from_sign(sign: i32) -> Option<Color> {
        match sign {
            1 => Some(Color::Max),
            -1 => Some(Color::Min),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Color::Max => 0,
            Color::Min => 1,
        }
    }

    /// Othello name of the side.
    pub fn name(self) -> &'static str {
        match self {
            Color::Max => "Black",
            Color::Min => "White",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Cell index at each (row, col). The four centre cells come first, the
/// outer ring is numbered row-major around them.
pub const LAYOUT: [[u8; SIDE]; SIDE] = [
    [4, 5, 6, 7, 8, 9],
    [10, 11, 12, 13, 14, 15],
    [16, 17, 0, 1, 18, 19],
    [20, 21, 2, 3, 22, 23],
    [24, 25, 26, 27, 28, 29],
    [30, 31, 32, 33, 34, 35],
];

const fn invert_layout() -> [(u8, u8); CELLS] {
    let mut coords = [(0u8, 0u8); CELLS];
    let mut row = 0;
    while row < SIDE {
        let mut col = 0;
        while col < SIDE {
            coords[LAYOUT[row][col] as usize] = (row as u8, col as u8);
            col += 1;
        }
        row += 1;
    }
    coords
}

/// (row, col) of each cell index.
pub const COORDS: [(u8, u8); CELLS] = invert_layout();

// Helpers
pub fn row_of(cell: usize) -> i8 {
    COORDS[cell].0 as i8
}
pub fn col_of(cell: usize) -> i8 {
    COORDS[cell].1 as i8
}
pub fn cell_at(row: i8, col: i8) -> Option<usize> {
    if (0..SIDE as i8).contains(&row) && (0..SIDE as i8).contains(&col) {
        Some(LAYOUT[row as usize][col as usize] as usize)
    } else {
        None
    }
}

/// Algebraic name of a cell: columns `a`-`f`, rows `1`-`6` from the top.
pub fn cell_to_coord(cell: usize) -> String {
    let (row, col) = COORDS[cell];
    let f = (b'a' + col) as char;
    let r = (b'1' + row) as char;
    format!("{f}{r}")
}

pub fn coord_to_cell(c: &str) -> Option<usize> {
    let b = c.as_bytes();
    if b.len() != 2 {
        return None;
    }
    let f = b[0];
    let r = b[1];
    if !(b'a'..=b'f').contains(&f) || !(b'1'..=b'6').contains(&r) {
        return None;
    }
    cell_at((r - b'1') as i8, (f - b'a') as i8)
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
