//! Negascout (principal variation search).
//!
//! The first child gets the full window. Later children are probed with a
//! null window `(alpha, alpha + 1)` that only proves whether they beat
//! `alpha`; a child that does is searched again with the real window.

use othello_core::{Color, GameState};

use crate::context::SearchContext;
use crate::table::Bound;

/// Fail-hard negascout of `state` for `color` to move.
///
/// Same window contract as [`negamax_ab`](crate::negamax_ab): exact inside
/// `(alpha, beta)`, a bound outside. On a fail low the original `alpha` is
/// returned.
pub fn negascout<S: GameState>(
    state: &S,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    color: Color,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.expand();
    if depth == 0 || state.is_terminal() {
        return color.sign() * state.value();
    }

    let alpha_orig = alpha;
    let opponent = color.opponent();
    let mut first_child = true;
    for slot in 0..S::MOVE_SLOTS {
        if !state.is_legal(color, slot) {
            continue;
        }
        ctx.generate();
        let child = state.play(color, slot);

        let score = if first_child {
            first_child = false;
            -negascout(&child, depth - 1, -beta, -alpha, opponent, ctx)
        } else {
            let probe = -negascout(&child, depth - 1, -alpha - 1, -alpha, opponent, ctx);
            if alpha < probe && probe < beta {
                -negascout(&child, depth - 1, -beta, -probe, opponent, ctx)
            } else {
                probe
            }
        };

        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }

    if first_child {
        ctx.generate();
        let score = -negascout(state, depth - 1, -beta, -alpha, opponent, ctx);
        alpha = alpha.max(score);
    }

    ctx.record(
        state,
        depth,
        color,
        alpha,
        Bound::classify(alpha, alpha_orig, beta),
    );
    alpha
}

#[cfg(test)]
#[path = "negascout_tests.rs"]
mod negascout_tests;
