//! Runs one engine on every position of a replayed line

use othello_core::PvPosition;
use search::Searcher;
use tracing::{info, warn};

use crate::config::BenchConfig;
use crate::results::{BenchResults, PositionReport};

/// Searches the positions of a line, end of game first.
pub struct BenchRunner {
    config: BenchConfig,
}

impl BenchRunner {
    pub fn new(config: BenchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Searches `positions` (as returned by [`othello_core::replay`]) from
    /// the last one backwards, so the quick endgame searches come first.
    ///
    /// If the transposition table runs out of room it is switched off and
    /// the remaining positions are searched without it.
    pub fn run(&self, positions: &[PvPosition]) -> BenchResults {
        let line_length = positions.len().saturating_sub(1);
        let mut results = BenchResults::new(self.config.clone(), line_length);
        let mut searcher = Searcher::new(self.config.search_config());
        let algorithm = self.config.algorithm;
        let limit = self.config.max_positions.unwrap_or(positions.len());

        info!(
            %algorithm,
            depth = self.config.depth,
            positions = limit.min(positions.len()),
            table = self.config.use_table,
            "running along principal variation"
        );

        for pos in positions.iter().rev().take(limit) {
            let table = searcher.table_enabled();
            let outcome = searcher.search(algorithm, &pos.board, pos.to_move);

            if let Some(err) = &outcome.table_error {
                let [max_entries, min_entries] = outcome.table_sizes.unwrap_or_default();
                warn!(
                    %err,
                    ply = pos.ply,
                    max_entries,
                    min_entries,
                    "disabling transposition table"
                );
                results.table_error = Some(err.to_string());
            }

            let report = PositionReport {
                label: pos.ply + 1,
                ply: pos.ply,
                mover: pos.to_move,
                value: outcome.value,
                black_value: outcome.absolute_value(),
                stats: outcome.stats,
                seconds: outcome.elapsed.as_secs_f64(),
                generated_per_second: outcome.generated_per_second(),
                table,
            };
            info!(
                label = report.label,
                mover = %pos.to_move,
                value = report.black_value,
                expanded = report.stats.expanded,
                generated = report.stats.generated,
                seconds = report.seconds,
                "position searched"
            );
            results.add(report);
        }

        results
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod runner_tests;
