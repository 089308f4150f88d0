//! Benchmark results storage and reporting

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use othello_core::Color;
use search::NodeStats;

use crate::config::BenchConfig;

#[derive(Debug, Error)]
pub enum ResultsError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode or decode results: {0}")]
    Json(#[from] serde_json::Error),
}

/// Outcome of searching one position of the line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionReport {
    /// Countdown label: 1 for the initial position, highest for the last.
    pub label: usize,
    /// Plies played to reach the position.
    pub ply: usize,
    /// Side to move.
    pub mover: Color,
    /// Value from the mover's perspective.
    pub value: i32,
    /// Value from Black's perspective.
    pub black_value: i32,
    pub stats: NodeStats,
    pub seconds: f64,
    pub generated_per_second: f64,
    /// Whether a transposition table was active for this search.
    #[serde(default)]
    pub table: bool,
}

impl PositionReport {
    /// One report line in the classic benchmark format.
    pub fn line(&self) -> String {
        format!(
            "{}. {} moves: value={}, #expanded={}, #generated={}, seconds={:.6}, #generated/second={:.0}",
            self.label,
            self.mover,
            self.black_value,
            self.stats.expanded,
            self.stats.generated,
            self.seconds,
            self.generated_per_second
        )
    }
}

/// Complete benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchResults {
    pub config: BenchConfig,
    /// Number of plies in the replayed line
    pub line_length: usize,
    /// Positions in the order they were searched
    pub positions: Vec<PositionReport>,
    /// Table failure that switched the table off, if one happened
    #[serde(default)]
    pub table_error: Option<String>,
}

impl BenchResults {
    pub fn new(config: BenchConfig, line_length: usize) -> Self {
        Self {
            config,
            line_length,
            positions: Vec::new(),
            table_error: None,
        }
    }

    pub fn add(&mut self, report: PositionReport) {
        self.positions.push(report);
    }

    /// Summed node counts over every position
    pub fn totals(&self) -> NodeStats {
        self.positions
            .iter()
            .fold(NodeStats::default(), |acc, p| acc + p.stats)
    }

    pub fn total_seconds(&self) -> f64 {
        self.positions.iter().map(|p| p.seconds).sum()
    }

    /// Save results to JSON file
    pub fn save(&self, path: &Path) -> Result<(), ResultsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json).map_err(|source| ResultsError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load results from JSON file
    pub fn load(path: &Path) -> Result<Self, ResultsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ResultsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Generate a text report
    pub fn generate_report(&self) -> String {
        let mut report = String::new();
        let config = &self.config;
        report.push_str(&format!("Algorithm: {}", config.algorithm.label()));
        if config.use_table {
            report.push_str(" w/ transposition table");
        }
        report.push('\n');
        report.push_str(&format!("Line: {} plies, depth {}", self.line_length, config.depth));
        if config.algorithm.uses_window() {
            report.push_str(&format!(", window ({}, {})", config.window.0, config.window.1));
        }
        report.push('\n');
        report.push_str("Moving along PV:\n");

        for entry in &self.positions {
            report.push_str(&entry.line());
            report.push('\n');
        }

        if let Some(err) = &self.table_error {
            report.push_str(&format!("Transposition table disabled: {err}\n"));
        }

        let totals = self.totals();
        let seconds = self.total_seconds();
        // Loaded files may carry any float here
        let rate = if seconds > 0.0 && seconds.is_finite() {
            totals.generated as f64 / seconds
        } else {
            0.0
        };
        report.push_str(&"-".repeat(60));
        report.push('\n');
        report.push_str(&format!(
            "Total: #expanded={}, #generated={}, #tested={}, #nodes={}, seconds={:.6}, #generated/second={:.0}\n",
            totals.expanded,
            totals.generated,
            totals.tested,
            totals.total(),
            seconds,
            rate
        ));

        report
    }

    /// Print report to stdout
    pub fn print_report(&self) {
        print!("{}", self.generate_report());
    }
}

#[cfg(test)]
#[path = "results_tests.rs"]
mod results_tests;
