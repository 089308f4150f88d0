//! Plain negamax: full-width search without pruning.
//!
//! Every other engine must return the same value as this one on the same
//! input, so it doubles as the reference for their tests.

use othello_core::{Color, GameState};

use crate::INFINITY;
use crate::context::SearchContext;
use crate::table::Bound;

/// Value of `state` for `color` to move, searched `depth` plies deep.
///
/// When `color` has no legal move it passes: the same position is searched
/// one ply shallower with the opponent to move.
pub fn negamax<S: GameState>(state: &S, depth: u8, color: Color, ctx: &mut SearchContext) -> i32 {
    ctx.expand();
    if depth == 0 || state.is_terminal() {
        return color.sign() * state.value();
    }

    let mut alpha = -INFINITY;
    let mut no_moves = true;
    for slot in 0..S::MOVE_SLOTS {
        if !state.is_legal(color, slot) {
            continue;
        }
        ctx.generate();
        no_moves = false;
        let child = state.play(color, slot);
        alpha = alpha.max(-negamax(&child, depth - 1, color.opponent(), ctx));
    }

    if no_moves {
        ctx.generate();
        alpha = alpha.max(-negamax(state, depth - 1, color.opponent(), ctx));
    }

    ctx.record(state, depth, color, alpha, Bound::Exact);
    alpha
}

#[cfg(test)]
#[path = "negamax_tests.rs"]
mod negamax_tests;
