//! Scout search.
//!
//! Scout works with absolute (maximizer-perspective) values. The first child
//! of each node is evaluated exactly; every later child is first put through
//! [`test`], a boolean probe asking whether it can beat the best value so far,
//! and only searched exactly when the probe says yes.

use othello_core::{Color, GameState};

use crate::context::SearchContext;
use crate::table::Bound;

/// Comparison a [`test`] probe checks the minimax value against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// `value > threshold`
    Greater,
    /// `value >= threshold`
    GreaterOrEqual,
}

impl Comparison {
    #[inline]
    pub fn holds(self, value: i32, threshold: i32) -> bool {
        match self {
            Comparison::Greater => value > threshold,
            Comparison::GreaterOrEqual => value >= threshold,
        }
    }
}

/// Exact value of `state` for `color` to move.
///
/// Returned from the mover's perspective like the other engines, although the
/// search itself runs on absolute values.
pub fn scout<S: GameState>(state: &S, depth: u8, color: Color, ctx: &mut SearchContext) -> i32 {
    color.sign() * minimax_value(state, depth, color, ctx)
}

fn minimax_value<S: GameState>(
    state: &S,
    depth: u8,
    color: Color,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.expand();
    if depth == 0 || state.is_terminal() {
        return state.value();
    }

    let mut score = 0;
    let mut first_child = true;
    for slot in 0..S::MOVE_SLOTS {
        if !state.is_legal(color, slot) {
            continue;
        }
        ctx.generate();
        let child = state.play(color, slot);
        if first_child {
            score = minimax_value(&child, depth - 1, color.opponent(), ctx);
            first_child = false;
            continue;
        }

        let improves = match color {
            Color::Max => test(
                &child,
                depth - 1,
                score,
                Comparison::Greater,
                color.opponent(),
                ctx,
            ),
            Color::Min => !test(
                &child,
                depth - 1,
                score,
                Comparison::GreaterOrEqual,
                color.opponent(),
                ctx,
            ),
        };
        if improves {
            score = minimax_value(&child, depth - 1, color.opponent(), ctx);
        }
    }

    if first_child {
        ctx.generate();
        score = minimax_value(state, depth - 1, color.opponent(), ctx);
    }

    ctx.record(state, depth, color, color.sign() * score, Bound::Exact);
    score
}

/// Whether the minimax value of `state`, `color` to move, satisfies
/// `value <comparison> threshold`.
///
/// The maximizer needs one child passing the probe, the minimizer needs all
/// of them to; both stop at the first child that settles the answer.
pub fn test<S: GameState>(
    state: &S,
    depth: u8,
    threshold: i32,
    comparison: Comparison,
    color: Color,
    ctx: &mut SearchContext,
) -> bool {
    ctx.probe();
    if depth == 0 || state.is_terminal() {
        return comparison.holds(state.value(), threshold);
    }

    let mut no_moves = true;
    for slot in 0..S::MOVE_SLOTS {
        if !state.is_legal(color, slot) {
            continue;
        }
        no_moves = false;
        let child = state.play(color, slot);
        let holds = test(
            &child,
            depth - 1,
            threshold,
            comparison,
            color.opponent(),
            ctx,
        );
        match color {
            Color::Max if holds => return true,
            Color::Min if !holds => return false,
            _ => {}
        }
    }

    if no_moves {
        return test(
            state,
            depth - 1,
            threshold,
            comparison,
            color.opponent(),
            ctx,
        );
    }
    color == Color::Min
}

#[cfg(test)]
#[path = "scout_tests.rs"]
mod scout_tests;
