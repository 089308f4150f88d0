//! Negamax with alpha-beta pruning

use othello_core::{Color, GameState};

use crate::INFINITY;
use crate::context::SearchContext;
use crate::table::Bound;

/// Fail-soft alpha-beta search of `state` for `color` to move.
///
/// The result is exact when the true value lies strictly inside
/// `(alpha, beta)`. Otherwise it is only a bound on that side: at most
/// `alpha` on a fail low, at least `beta` on a fail high. Pass `-INFINITY`
/// and `INFINITY` (or a known score bound) for an unrestricted search;
/// `i32::MIN` cannot be negated and must not be used.
pub fn negamax_ab<S: GameState>(
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
    let mut value = -INFINITY;
    let mut no_moves = true;
    for slot in 0..S::MOVE_SLOTS {
        if !state.is_legal(color, slot) {
            continue;
        }
        ctx.generate();
        no_moves = false;
        let child = state.play(color, slot);
        value = value.max(-negamax_ab(
            &child,
            depth - 1,
            -beta,
            -alpha,
            color.opponent(),
            ctx,
        ));
        alpha = alpha.max(value);
        if alpha >= beta {
            break; // Beta cutoff
        }
    }

    // A pass is the only child, so it can never cut anything off.
    if no_moves {
        ctx.generate();
        value = value.max(-negamax_ab(
            state,
            depth - 1,
            -beta,
            -alpha,
            color.opponent(),
            ctx,
        ));
    }

    ctx.record(
        state,
        depth,
        color,
        value,
        Bound::classify(value, alpha_orig, beta),
    );
    value
}

#[cfg(test)]
#[path = "alphabeta_tests.rs"]
mod alphabeta_tests;
