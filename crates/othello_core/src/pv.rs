//! Principal variation used to generate benchmark positions.

use thiserror::Error;

use crate::board::Board;
use crate::types::{CELLS, Color, PASS, cell_to_coord};

/// Reference line of play from the initial board, Black first. Black has no
/// move at ply 30, encoded as [`PASS`].
pub const PRINCIPAL_VARIATION: &[usize] = &[
    12, 21, 26, 13, 22, 18, 7, 6, 5, 27, 33, 23, 17, 11, 19, 15, 14, 31, 20, 32, 30, 10, 25, 24,
    34, 28, 16, 4, 29, 35, 36, 8, 9,
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PvError {
    #[error("ply {ply}: slot {slot} is outside the board")]
    SlotOutOfRange { ply: usize, slot: usize },
    #[error("ply {ply}: {color} cannot play {coord} (slot {slot})")]
    IllegalMove {
        ply: usize,
        slot: usize,
        coord: String,
        color: Color,
    },
    #[error("ply {ply}: {color} passes but has a legal move")]
    IllegalPass { ply: usize, color: Color },
}

/// One position along a replayed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PvPosition {
    /// Number of plies played to reach this position.
    pub ply: usize,
    pub board: Board,
    pub to_move: Color,
}

/// Side to move after `ply` plies of a line that Black opens.
pub fn mover_at(ply: usize) -> Color {
    if ply % 2 == 0 { Color::Max } else { Color::Min }
}

/// Replays `line` from the initial board.
///
/// Returns `line.len() + 1` positions: the one before each ply, then the
/// final position. Every move is checked for legality and a pass is only
/// accepted when the mover has no legal move.
pub fn replay(line: &[usize]) -> Result<Vec<PvPosition>, PvError> {
    let mut board = Board::initial();
    let mut positions = Vec::with_capacity(line.len() + 1);

    for (ply, &slot) in line.iter().enumerate() {
        let color = mover_at(ply);
        positions.push(PvPosition {
            ply,
            board,
            to_move: color,
        });

        if slot > PASS {
            return Err(PvError::SlotOutOfRange { ply, slot });
        }
        if slot == PASS {
            if board.has_move(color) {
                return Err(PvError::IllegalPass { ply, color });
            }
        } else if !board.outflank(color, slot) {
            return Err(PvError::IllegalMove {
                ply,
                slot,
                coord: cell_to_coord(slot),
                color,
            });
        }
        board = board.apply_or_pass(color, slot);
    }

    positions.push(PvPosition {
        ply: line.len(),
        board,
        to_move: mover_at(line.len()),
    });
    Ok(positions)
}

/// Renders a line in algebraic notation, `pass` for passes.
pub fn format_line(line: &[usize]) -> String {
    line.iter()
        .map(|&slot| match slot {
            PASS => "pass".to_string(),
            s if s < CELLS => cell_to_coord(s),
            s => format!("?{s}"),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "pv_tests.rs"]
mod pv_tests;
