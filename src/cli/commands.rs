//! CLI command execution

use anyhow::Result;
use colored::Colorize;

use crate::cli::Commands;
use crate::list::{IndexedRecencyList, RecencyList, Touch};

/// Executes a parsed CLI command.
pub fn execute(command: Commands) -> Result<()> {
    match command {
        Commands::Trace {
            capacity,
            indexed,
            verbose,
            values,
        } => trace(capacity, indexed, verbose, &values),
    }
}

/// Replays `values` as touches against a fresh container and prints the
/// final head-to-tail order. Each run constructs its own instance; no
/// state survives between invocations.
fn trace(capacity: usize, indexed: bool, verbose: bool, values: &[i64]) -> Result<()> {
    if indexed {
        let mut list = IndexedRecencyList::new(capacity)?;
        for &value in values {
            report(value, list.touch(value), verbose);
        }
        print_order(list.iter());
    } else {
        let mut list = RecencyList::new(capacity)?;
        for &value in values {
            report(value, list.touch(value), verbose);
        }
        print_order(list.iter());
    }
    Ok(())
}

fn report(value: i64, outcome: Touch<i64>, verbose: bool) {
    match outcome {
        Touch::Inserted if verbose => {
            println!("touch {value}: {}", "inserted".green());
        }
        Touch::Promoted if verbose => {
            println!("touch {value}: {}", "promoted".cyan());
        }
        Touch::Evicted(old) => {
            println!("touch {value}: inserted, {} {old}", "evicted".red().bold());
        }
        Touch::Inserted | Touch::Promoted => {}
    }
}

fn print_order<'a>(values: impl Iterator<Item = &'a i64>) {
    let order: Vec<String> = values.map(|v| v.to_string()).collect();
    println!("{} {}", "order:".bold(), order.join(" -> "));
}
