use othello_core::{Color, GameState};
use tracing::warn;

use crate::stats::NodeStats;
use crate::table::{Bound, TableEntry, TableError, TranspositionTable};

/// Per-search mutable state threaded through every engine call: the node
/// counters and the optional transposition table.
///
/// Owned by the caller and reset before each top-level search, so engines
/// stay free of globals and independent searches never share counters.
#[derive(Debug, Clone, Default)]
pub struct SearchContext {
    stats: NodeStats,
    table: Option<TranspositionTable>,
    table_error: Option<TableError>,
}

impl SearchContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(table: TranspositionTable) -> Self {
        Self {
            table: Some(table),
            ..Self::default()
        }
    }

    /// Zeroes the counters and clears the table before a new search.
    pub fn reset(&mut self) {
        self.stats.reset();
        self.table_error = None;
        if let Some(table) = self.table.as_mut() {
            table.clear();
        }
    }

    pub fn stats(&self) -> NodeStats {
        self.stats
    }

    pub fn table(&self) -> Option<&TranspositionTable> {
        self.table.as_ref()
    }

    /// Removes the table so later searches run without one.
    pub fn disable_table(&mut self) -> Option<TranspositionTable> {
        self.table.take()
    }

    /// Error raised by the table during the last search, if any.
    pub fn take_table_error(&mut self) -> Option<TableError> {
        self.table_error.take()
    }

    #[inline]
    pub(crate) fn expand(&mut self) {
        self.stats.expanded += 1;
    }

    #[inline]
    pub(crate) fn generate(&mut self) {
        self.stats.generated += 1;
    }

    #[inline]
    pub(crate) fn probe(&mut self) {
        self.stats.tested += 1;
    }

    /// Stores a searched node. After the first failure nothing more is
    /// stored until the next [`SearchContext::reset`].
    pub(crate) fn record<S: GameState>(
        &mut self,
        state: &S,
        depth: u8,
        color: Color,
        value: i32,
        bound: Bound,
    ) {
        if self.table_error.is_some() {
            return;
        }
        let Some(table) = self.table.as_mut() else {
            return;
        };
        if depth < table.config().min_depth {
            return;
        }

        let entry = TableEntry {
            value,
            bound,
            depth,
        };
        if let Err(err) = table.store(color, state.hash_key(), entry) {
            let [max_entries, min_entries] = table.sizes();
            warn!(%err, max_entries, min_entries, "transposition table exhausted");
            self.table_error = Some(err);
        }
    }
}
