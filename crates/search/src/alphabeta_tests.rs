use super::*;
use crate::negamax;
use othello_core::Board;

fn positions() -> Vec<(Board, Color)> {
    let start = Board::initial();
    let after_one = start.play(Color::Max, 12);
    let after_two = after_one.play(Color::Min, 21);
    vec![
        (start, Color::Max),
        (after_one, Color::Min),
        (after_two, Color::Max),
    ]
}

#[test]
fn test_full_window_matches_negamax() {
    for (board, color) in positions() {
        for depth in 0..=5 {
            let expected = negamax(&board, depth, color, &mut SearchContext::new());
            let mut ctx = SearchContext::new();
            let value = negamax_ab(&board, depth, -INFINITY, INFINITY, color, &mut ctx);
            assert_eq!(value, expected, "depth {depth}");
        }
    }
}

#[test]
fn test_pruning_never_generates_more_than_negamax() {
    let board = Board::initial();
    let mut plain = SearchContext::new();
    negamax(&board, 5, Color::Max, &mut plain);
    let mut pruned = SearchContext::new();
    negamax_ab(&board, 5, -INFINITY, INFINITY, Color::Max, &mut pruned);
    assert!(pruned.stats().generated < plain.stats().generated);
    assert!(pruned.stats().expanded < plain.stats().expanded);
}

#[test]
fn test_narrow_window_containing_value() {
    let board = Board::initial();
    let exact = negamax(&board, 4, Color::Max, &mut SearchContext::new());
    for (alpha, beta) in [(exact - 1, exact + 1), (exact - 3, exact + 10), (-200, 200)] {
        let value = negamax_ab(&board, 4, alpha, beta, Color::Max, &mut SearchContext::new());
        assert_eq!(value, exact, "window ({alpha}, {beta})");
    }
}

#[test]
fn test_window_outside_value_returns_bound() {
    let board = Board::initial();
    let exact = negamax(&board, 4, Color::Max, &mut SearchContext::new());

    // Window entirely below: fail high, result is a lower bound.
    let high = negamax_ab(&board, 4, exact - 10, exact - 5, Color::Max, &mut SearchContext::new());
    assert!(high >= exact - 5);
    assert!(high <= exact);

    // Window entirely above: fail low, result is an upper bound.
    let low = negamax_ab(&board, 4, exact + 5, exact + 10, Color::Max, &mut SearchContext::new());
    assert!(low <= exact + 5);
    assert!(low >= exact);
}

#[test]
fn test_depth_zero_ignores_window() {
    let board = Board::initial().play(Color::Max, 12);
    let value = negamax_ab(&board, 0, 50, 60, Color::Min, &mut SearchContext::new());
    assert_eq!(value, -3);
}
