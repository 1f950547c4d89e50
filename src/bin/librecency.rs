//! librecency - capacity-bounded recency (LRU) list demonstrations
//!
//! Replays touch sequences against the recency containers and prints the
//! resulting order.

use clap::Parser;
use colored::Colorize;
use std::process;

use librecency::cli::{commands, Cli};

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli.command) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }
}
