//! # librecency
//!
//! Capacity-bounded recency (LRU) lists.
//!
//! A recency list keeps a set of unique values ordered from most- to
//! least-recently touched under a fixed capacity bound. A single operation,
//! `touch`, is simultaneously a lookup, an insert, and an eviction trigger:
//! when a new value would exceed the bound, the least-recently-used entry
//! is evicted first.
//!
//! Two containers share the contract:
//!
//! - [`RecencyList`](list::RecencyList) — singly-linked scan-and-splice,
//!   O(n), requires only `T: PartialEq`.
//! - [`IndexedRecencyList`](list::IndexedRecencyList) — hash-indexed and
//!   doubly-linked, O(1), requires `T: Eq + Hash + Clone`.
//!
//! ## Example
//!
//! ```rust
//! use librecency::prelude::*;
//!
//! let mut recent = RecencyList::new(4).unwrap();
//! for value in [1, 3, 4, 5, 3] {
//!     recent.touch(value);
//! }
//!
//! let order: Vec<i32> = recent.iter().copied().collect();
//! assert_eq!(order, vec![3, 5, 4, 1]);
//!
//! // One more distinct value evicts the oldest entry.
//! assert_eq!(recent.touch(6), Touch::Evicted(1));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod list;

/// CLI interface and utilities
#[cfg(feature = "cli")]
pub mod cli;

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::error::RecencyError;
    pub use crate::list::{IndexedRecencyList, RecencyList, Touch};
}
