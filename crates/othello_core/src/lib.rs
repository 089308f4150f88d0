pub mod board;
pub mod pv;
pub mod types;
pub mod zobrist;

// Re-export game logic (not engine-specific)
pub use board::Board;
pub use pv::{PRINCIPAL_VARIATION, PvError, PvPosition, format_line, mover_at, replay};
pub use types::*;
pub use zobrist::ZOBRIST;

// =============================================================================
// GameState trait: the only view of a game the search engines have
// =============================================================================

/// A game position as seen by the search engines.
///
/// Positions are immutable values: [`GameState::play`] returns a new
/// position and never mutates `self`. Whose turn it is lives in the search
/// recursion, not in the position.
pub trait GameState: Clone {
    /// Number of move slots probed per ply. Engines only ask about
    /// `0..MOVE_SLOTS`.
    const MOVE_SLOTS: usize;

    /// True iff neither player can move any more.
    fn is_terminal(&self) -> bool;

    /// Heuristic or exact utility from the maximizer's fixed perspective.
    fn value(&self) -> i32;

    /// Whether `color` may play `slot` from this position.
    fn is_legal(&self, color: Color, slot: usize) -> bool;

    /// Position after `color` plays `slot`.
    fn play(&self, color: Color, slot: usize) -> Self;

    /// Stable hash used to key transposition tables.
    fn hash_key(&self) -> u64;
}
