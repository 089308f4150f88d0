use super::*;
use othello_core::{Color, PRINCIPAL_VARIATION, replay};
use search::Algorithm;

fn tail_config(algorithm: Algorithm) -> BenchConfig {
    BenchConfig {
        algorithm,
        max_positions: Some(6),
        ..Default::default()
    }
}

#[test]
fn test_runs_backwards_from_end_of_line() {
    let positions = replay(PRINCIPAL_VARIATION).unwrap();
    let results = BenchRunner::new(tail_config(Algorithm::Negamax)).run(&positions);

    assert_eq!(results.line_length, 33);
    assert_eq!(results.positions.len(), 6);
    let labels: Vec<usize> = results.positions.iter().map(|p| p.label).collect();
    assert_eq!(labels, vec![34, 33, 32, 31, 30, 29]);

    let last = &results.positions[0];
    assert_eq!(last.mover, Color::Min);
    assert_eq!(last.value, 4);
    assert_eq!(last.stats.expanded, 1);
    assert_eq!(last.stats.generated, 0);
}

#[test]
fn test_every_engine_reports_the_same_values() {
    let positions = replay(PRINCIPAL_VARIATION).unwrap();
    for algorithm in Algorithm::ALL {
        let results = BenchRunner::new(tail_config(algorithm)).run(&positions);
        for report in &results.positions {
            assert_eq!(report.black_value, -4, "{algorithm} ply {}", report.ply);
            assert_eq!(report.value, report.mover.sign() * -4);
        }
    }
}

#[test]
fn test_table_exhaustion_is_not_fatal() {
    let positions = replay(PRINCIPAL_VARIATION).unwrap();
    let config = BenchConfig {
        algorithm: Algorithm::AlphaBeta,
        use_table: true,
        table_capacity: 1,
        table_min_depth: 1,
        max_positions: Some(8),
        ..Default::default()
    };
    let results = BenchRunner::new(config).run(&positions);

    assert_eq!(results.positions.len(), 8);
    assert!(results.table_error.is_some());
    assert!(results.positions[0].table);
    assert!(!results.positions.last().unwrap().table);
    assert!(results.positions.iter().all(|p| p.black_value == -4));
}

#[test]
fn test_limit_larger_than_line() {
    let positions = replay(&PRINCIPAL_VARIATION[..2]).unwrap();
    let config = BenchConfig {
        depth: 2,
        max_positions: Some(100),
        ..Default::default()
    };
    let results = BenchRunner::new(config).run(&positions);
    assert_eq!(results.positions.len(), 3);
    assert_eq!(results.positions[2].label, 1);
}
