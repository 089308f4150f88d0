//! Principal variation benchmark CLI
//!
//! Search every position of the reference line with one engine and report
//! node counts and throughput.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use othello_core::{PRINCIPAL_VARIATION, format_line, replay};
use pv_bench::{BenchConfig, BenchResults, BenchRunner};
use search::Algorithm;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the positions of the principal variation
    Run(RunArgs),
    /// Print a saved results file
    Show {
        /// Results file written by `run --output`
        path: PathBuf,
    },
    /// Print the principal variation and its positions
    Line,
}

#[derive(clap::Args, Debug)]
struct RunArgs {
    /// Engine: negamax, alpha-beta, scout, negascout (or 1-4)
    #[arg(short, long)]
    algorithm: Option<Algorithm>,

    /// Search depth in plies
    #[arg(short, long)]
    depth: Option<u8>,

    /// Record deep nodes in a transposition table
    #[arg(short, long)]
    table: bool,

    /// Only search this many positions, from the end of the line
    #[arg(short, long)]
    positions: Option<usize>,

    /// TOML config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Save results as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl RunArgs {
    fn into_config(self) -> Result<BenchConfig> {
        let mut config = match &self.config {
            Some(path) => BenchConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => BenchConfig::default(),
        };
        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm;
        }
        if let Some(depth) = self.depth {
            config.depth = depth;
        }
        if self.table {
            config.use_table = true;
        }
        if self.positions.is_some() {
            config.max_positions = self.positions;
        }
        if self.output.is_some() {
            config.output = self.output;
        }
        config.validate()?;
        Ok(config)
    }
}

fn run(args: RunArgs) -> Result<()> {
    let config = args.into_config()?;
    let positions = replay(PRINCIPAL_VARIATION).context("Failed to replay principal variation")?;

    println!(
        "Extracted principal variation (PV) with {} plays",
        PRINCIPAL_VARIATION.len()
    );

    let runner = BenchRunner::new(config);
    let results = runner.run(&positions);
    results.print_report();

    if let Some(path) = &runner.config().output {
        results
            .save(path)
            .with_context(|| format!("Failed to save results to {}", path.display()))?;
        println!("Results saved to {}", path.display());
    }
    Ok(())
}

fn show(path: PathBuf) -> Result<()> {
    let results = BenchResults::load(&path)
        .with_context(|| format!("Failed to load results {}", path.display()))?;
    results.print_report();
    Ok(())
}

fn show_line() -> Result<()> {
    let positions = replay(PRINCIPAL_VARIATION).context("Failed to replay principal variation")?;
    println!("PV: {}", format_line(PRINCIPAL_VARIATION));
    for pos in &positions {
        println!();
        println!("Ply {} ({} to move)", pos.ply, pos.to_move);
        println!("{}", pos.board);
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Run(args) => run(args),
        Command::Show { path } => show(path),
        Command::Line => show_line(),
    }
}
