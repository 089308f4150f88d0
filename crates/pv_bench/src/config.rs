//! Benchmark configuration, loadable from TOML

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use search::{Algorithm, SearchConfig, TableConfig, Window};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("window ({alpha}, {beta}) is empty")]
    InvalidWindow { alpha: i32, beta: i32 },
    #[error("window bound {0} cannot be negated")]
    WindowOverflow(i32),
    #[error("search depth must be at least 1")]
    InvalidDepth(u8),
    #[error("table capacity must be positive")]
    EmptyTable,
}

/// Benchmark settings.
///
/// Every field has a default, so a config file only needs the keys it
/// changes:
///
/// ```toml
/// algorithm = "negascout"
/// depth = 33
/// window = [-200, 200]
/// max_positions = 12
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    /// Engine to benchmark
    pub algorithm: Algorithm,
    /// Search depth in plies
    pub depth: u8,
    /// Root window for alpha-beta and negascout
    pub window: (i32, i32),
    /// Record deep nodes in a transposition table
    pub use_table: bool,
    /// Table entries per side to move
    pub table_capacity: usize,
    /// Shallowest remaining depth that gets recorded
    pub table_min_depth: u8,
    /// Only search this many positions, counted back from the end of the line
    pub max_positions: Option<usize>,
    /// Where to save results as JSON
    pub output: Option<PathBuf>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        let table = TableConfig::default();
        Self {
            algorithm: Algorithm::Negamax,
            depth: 33,
            window: (-200, 200),
            use_table: false,
            table_capacity: table.max_entries,
            table_min_depth: table.min_depth,
            max_positions: None,
            output: None,
        }
    }
}

impl BenchConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: BenchConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.depth == 0 {
            return Err(ConfigError::InvalidDepth(self.depth));
        }
        let (alpha, beta) = self.window;
        for bound in [alpha, beta] {
            if bound == i32::MIN {
                return Err(ConfigError::WindowOverflow(bound));
            }
        }
        if alpha >= beta {
            return Err(ConfigError::InvalidWindow { alpha, beta });
        }
        if self.use_table && self.table_capacity == 0 {
            return Err(ConfigError::EmptyTable);
        }
        Ok(())
    }

    /// Search settings derived from this config
    pub fn search_config(&self) -> SearchConfig {
        SearchConfig {
            depth: self.depth,
            window: Window::new(self.window.0, self.window.1),
            table: self.use_table.then_some(TableConfig {
                max_entries: self.table_capacity,
                min_depth: self.table_min_depth,
            }),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
