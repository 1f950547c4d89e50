//! CLI interface for librecency
//!
//! Provides a command-line harness for replaying touch sequences against
//! the recency containers and inspecting the resulting order.

pub mod args;
pub mod commands;

pub use args::{Cli, Commands};
