//! Principal variation benchmark
//!
//! Replays the reference Othello line, then searches every position along it
//! with one engine and records value, node counts and throughput, so the
//! engines can be compared on identical inputs.
//!
//! # Usage
//!
//! ```bash
//! # Negascout on the twelve positions closest to the end of the game
//! cargo run --release -p pv_bench -- run --algorithm negascout --positions 12
//!
//! # Same, from a config file, saving results
//! cargo run --release -p pv_bench -- run --config bench.toml --output ns.json
//! ```

mod config;
mod results;
mod runner;

pub use config::*;
pub use results::*;
pub use runner::*;
