//! Game-tree search engines
//!
//! Four searches over any [`GameState`], all returning the value of a
//! position from the side to move's perspective:
//! - [`negamax`]: full-width negamax, the reference
//! - [`negamax_ab`]: negamax with alpha-beta pruning
//! - [`scout`]: exact search driven by boolean threshold tests
//! - [`negascout`]: principal variation search with null-window probes
//!
//! On the same position, depth and colour they all agree (the windowed ones
//! when given a window containing the true value). [`Searcher`] runs one of
//! them as a top-level search, resetting the node counters first and timing
//! the call.

mod alphabeta;
mod context;
mod negamax;
mod negascout;
mod scout;
mod stats;
mod table;

use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use othello_core::{Color, GameState};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use alphabeta::negamax_ab;
pub use context::SearchContext;
pub use negamax::negamax;
pub use negascout::negascout;
pub use scout::{Comparison, scout, test};
pub use stats::{NodeStats, nodes_per_second};
pub use table::{Bound, TableConfig, TableEntry, TableError, TranspositionTable};

/// Largest score magnitude; `-INFINITY` is the "nothing found yet" value.
pub const INFINITY: i32 = i32::MAX;

/// Which engine to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Negamax,
    AlphaBeta,
    Scout,
    Negascout,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Negamax,
        Algorithm::AlphaBeta,
        Algorithm::Scout,
        Algorithm::Negascout,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Negamax => "negamax",
            Algorithm::AlphaBeta => "alpha-beta",
            Algorithm::Scout => "scout",
            Algorithm::Negascout => "negascout",
        }
    }

    /// Human readable description used in reports.
    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Negamax => "Negamax (minmax version)",
            Algorithm::AlphaBeta => "Negamax (alpha-beta version)",
            Algorithm::Scout => "Scout",
            Algorithm::Negascout => "Negascout",
        }
    }

    /// Numeric selector, 1 to 4.
    pub fn code(self) -> u8 {
        match self {
            Algorithm::Negamax => 1,
            Algorithm::AlphaBeta => 2,
            Algorithm::Scout => 3,
            Algorithm::Negascout => 4,
        }
    }

    /// Whether the engine takes an alpha-beta window.
    pub fn uses_window(self) -> bool {
        matches!(self, Algorithm::AlphaBeta | Algorithm::Negascout)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown algorithm `{0}` (expected negamax, alpha-beta, scout, negascout or 1-4)")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "negamax" | "minmax" => Ok(Algorithm::Negamax),
            "2" | "alpha-beta" | "alphabeta" | "ab" => Ok(Algorithm::AlphaBeta),
            "3" | "scout" => Ok(Algorithm::Scout),
            "4" | "negascout" | "pvs" => Ok(Algorithm::Negascout),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Alpha-beta window handed to the root of a windowed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    pub alpha: i32,
    pub beta: i32,
}

impl Window {
    /// Never cuts off the root.
    pub const FULL: Window = Window {
        alpha: -INFINITY,
        beta: INFINITY,
    };

    pub fn new(alpha: i32, beta: i32) -> Self {
        Self { alpha, beta }
    }

    /// True if `value` lies strictly inside the window.
    pub fn contains(&self, value: i32) -> bool {
        self.alpha < value && value < self.beta
    }
}

impl Default for Window {
    fn default() -> Self {
        Self::FULL
    }
}

/// Settings shared by every search a [`Searcher`] runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Maximum search depth in plies.
    pub depth: u8,
    pub window: Window,
    /// Record deep nodes in a transposition table.
    pub table: Option<TableConfig>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 33,
            window: Window::FULL,
            table: None,
        }
    }
}

/// Result of one top-level search.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub algorithm: Algorithm,
    pub color: Color,
    pub depth: u8,
    /// Value from `color`'s perspective.
    pub value: i32,
    pub stats: NodeStats,
    pub elapsed: Duration,
    /// Set when the table ran out of room during this search; the table has
    /// been switched off for later searches.
    pub table_error: Option<TableError>,
    /// Table entry counts `[max, min]` after the search, if a table was used.
    pub table_sizes: Option<[usize; 2]>,
}

impl SearchOutcome {
    /// Value from the maximizer's perspective.
    pub fn absolute_value(&self) -> i32 {
        self.color.sign() * self.value
    }

    pub fn generated_per_second(&self) -> f64 {
        self.stats.generated_per_second(self.elapsed)
    }
}

/// Runs `algorithm` on `state`, recursing with `ctx`. Window engines get
/// `window`; the others ignore it.
pub fn run<S: GameState>(
    algorithm: Algorithm,
    state: &S,
    depth: u8,
    window: Window,
    color: Color,
    ctx: &mut SearchContext,
) -> i32 {
    match algorithm {
        Algorithm::Negamax => negamax(state, depth, color, ctx),
        Algorithm::AlphaBeta => negamax_ab(state, depth, window.alpha, window.beta, color, ctx),
        Algorithm::Scout => scout(state, depth, color, ctx),
        Algorithm::Negascout => negascout(state, depth, window.alpha, window.beta, color, ctx),
    }
}

/// Runs top-level searches and owns the state they share.
#[derive(Debug, Clone)]
pub struct Searcher {
    config: SearchConfig,
    ctx: SearchContext,
}

impl Searcher {
    pub fn new(config: SearchConfig) -> Self {
        let ctx = match config.table {
            Some(table) => SearchContext::with_table(TranspositionTable::new(table)),
            None => SearchContext::new(),
        };
        Self { config, ctx }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn table_enabled(&self) -> bool {
        self.ctx.table().is_some()
    }

    /// Searches `state` with `color` to move.
    ///
    /// Counters and table are reset first. If the table runs out of room the
    /// search still completes with a correct value, the error is reported in
    /// the outcome and the table is dropped for every later search.
    pub fn search<S: GameState>(
        &mut self,
        algorithm: Algorithm,
        state: &S,
        color: Color,
    ) -> SearchOutcome {
        self.ctx.reset();
        let depth = self.config.depth;

        let start = Instant::now();
        let value = run(algorithm, state, depth, self.config.window, color, &mut self.ctx);
        let elapsed = start.elapsed();

        let stats = self.ctx.stats();
        let table_sizes = self.ctx.table().map(TranspositionTable::sizes);
        let table_error = self.ctx.take_table_error();
        if table_error.is_some() {
            self.ctx.disable_table();
        }

        debug!(
            %algorithm,
            %color,
            depth,
            value,
            expanded = stats.expanded,
            generated = stats.generated,
            tested = stats.tested,
            elapsed_ms = elapsed.as_secs_f64() * 1000.0,
            "search finished"
        );

        SearchOutcome {
            algorithm,
            color,
            depth,
            value,
            stats,
            elapsed,
            table_error,
            table_sizes,
        }
    }
}
