//! Transposition table.
//!
//! Engines record what they computed for deep nodes, one map per side to
//! move, keyed by [`GameState::hash_key`](othello_core::GameState::hash_key).
//! Entries are never consulted during search, so keeping a table has no
//! effect on values or node counts; it only costs memory, and running out of
//! it is the one failure a search can hit.

use std::collections::HashMap;
use std::collections::TryReserveError;

use othello_core::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a stored value relates to the true minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bound {
    Exact,
    /// True value is at least the stored one (search failed high).
    Lower,
    /// True value is at most the stored one (search failed low).
    Upper,
}

impl Bound {
    /// Classifies a result searched with window `(alpha, beta)`.
    pub fn classify(value: i32, alpha: i32, beta: i32) -> Bound {
        if value <= alpha {
            Bound::Upper
        } else if value >= beta {
            Bound::Lower
        } else {
            Bound::Exact
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableEntry {
    /// Value from the perspective of the side to move.
    pub value: i32,
    pub bound: Bound,
    /// Remaining depth the value was searched with.
    pub depth: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Entry limit per side to move.
    pub max_entries: usize,
    /// Only nodes searched with at least this much depth left are stored.
    pub min_depth: u8,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            max_entries: 1 << 22,
            min_depth: 32,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("transposition table for {color} is full ({limit} entries)")]
    Full { color: Color, limit: usize },
    #[error("transposition table allocation failed: {0}")]
    Alloc(#[from] TryReserveError),
}

#[derive(Debug, Clone)]
pub struct TranspositionTable {
    maps: [HashMap<u64, TableEntry>; 2],
    config: TableConfig,
}

impl TranspositionTable {
    pub fn new(config: TableConfig) -> Self {
        Self {
            maps: [HashMap::new(), HashMap::new()],
            config,
        }
    }

    pub fn config(&self) -> TableConfig {
        self.config
    }

    /// Inserts or replaces the entry for `key` in `color`'s map.
    pub fn store(&mut self, color: Color, key: u64, entry: TableEntry) -> Result<(), TableError> {
        let limit = self.config.max_entries;
        let map = &mut self.maps[color.index()];
        if !map.contains_key(&key) {
            if map.len() >= limit {
                return Err(TableError::Full { color, limit });
            }
            map.try_reserve(1)?;
        }
        map.insert(key, entry);
        Ok(())
    }

    pub fn get(&self, color: Color, key: u64) -> Option<&TableEntry> {
        self.maps[color.index()].get(&key)
    }

    pub fn len(&self, color: Color) -> usize {
        self.maps[color.index()].len()
    }

    /// Entry counts as `[max, min]`.
    pub fn sizes(&self) -> [usize; 2] {
        [self.maps[0].len(), self.maps[1].len()]
    }

    pub fn is_empty(&self) -> bool {
        self.maps.iter().all(HashMap::is_empty)
    }

    pub fn clear(&mut self) {
        for map in &mut self.maps {
            map.clear();
        }
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;
