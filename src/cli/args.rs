//! CLI argument definitions

use clap::{Parser, Subcommand};

/// Top-level CLI arguments.
#[derive(Parser)]
#[command(name = "librecency")]
#[command(about = "Capacity-bounded recency (LRU) list demonstrations")]
#[command(version)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Replay a touch sequence and print the resulting recency order
    Trace {
        /// Maximum number of retained entries
        #[arg(short, long, default_value = "4")]
        capacity: usize,

        /// Use the hash-indexed container instead of the linear one
        #[arg(short, long)]
        indexed: bool,

        /// Print the outcome of every touch, not just evictions
        #[arg(short, long)]
        verbose: bool,

        /// Values to touch, in order
        #[arg(required = true)]
        values: Vec<i64>,
    },
}
