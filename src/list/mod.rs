//! Capacity-bounded recency containers.
//!
//! This module provides two containers that maintain a set of unique values
//! ordered by recency of access, evicting the least-recently-used value when
//! a new one would exceed the capacity bound.
//!
//! # Overview
//!
//! Both containers expose the same contract through a single mutating
//! operation, [`RecencyList::touch`] / [`IndexedRecencyList::touch`], which
//! is simultaneously a lookup, an insert, and an eviction trigger:
//!
//! - a value already present is relocated to the most-recent position,
//! - a new value is inserted at the most-recent position,
//! - an insert at capacity first evicts the least-recent (tail) value.
//!
//! # Architecture
//!
//! Entries live in an arena of slots addressed by stable indices; links
//! between entries are slot indices, never pointers, and vacated slots are
//! threaded into a free list for reuse. The arena therefore never grows
//! beyond `capacity` slots once the bound has been reached.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                     RecencyList<T>                        │
//! │  head ──► [slot 2] ──► [slot 0] ──► [slot 3] ──► (none)  │
//! │            most                       least               │
//! │           recent                     recent               │
//! │                                                           │
//! │  free_head ──► [slot 1] ──► (none)       len: 3 ≤ cap    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Available containers
//!
//! - **[`RecencyList`]**: singly-linked chain, linear scan-and-splice.
//!   Requires only `T: PartialEq`; `touch` and `find` are O(n).
//! - **[`IndexedRecencyList`]**: doubly-linked chain plus a hash index from
//!   value to slot. Requires `T: Eq + Hash + Clone`; `touch` and `find`
//!   are O(1).
//!
//! The two containers observe identical orders and outcomes for identical
//! touch sequences; the indexed variant only changes the cost model.
//!
//! # Examples
//!
//! ```rust
//! use librecency::prelude::*;
//!
//! let mut recent = RecencyList::new(4).unwrap();
//! for value in [1, 3, 4, 5] {
//!     recent.touch(value);
//! }
//!
//! // Re-touching an existing value relocates it to the front.
//! assert_eq!(recent.touch(3), Touch::Promoted);
//! let order: Vec<i32> = recent.iter().copied().collect();
//! assert_eq!(order, vec![3, 5, 4, 1]);
//!
//! // A fifth distinct value evicts the least-recently-used entry.
//! assert_eq!(recent.touch(6), Touch::Evicted(1));
//! assert_eq!(recent.len(), 4);
//! ```

pub mod indexed;
pub mod linked;

pub use indexed::IndexedRecencyList;
pub use linked::RecencyList;

/// The observable outcome of a `touch` operation.
///
/// A touch never fails; each variant is a normal result, not an error.
/// Callers that only care about the recency side effect can ignore it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Touch<T> {
    /// The value was absent and was inserted with room to spare.
    Inserted,
    /// The value was already present and was relocated to the most-recent
    /// position. Touching the value already at the front also reports this.
    Promoted,
    /// The value was absent and the list was full: the least-recently-used
    /// entry was evicted to make room. Carries the evicted value.
    Evicted(T),
}

impl<T> Touch<T> {
    /// Returns `true` when the touch displaced the least-recently-used entry.
    #[inline]
    pub fn is_eviction(&self) -> bool {
        matches!(self, Touch::Evicted(_))
    }

    /// Consumes the outcome, returning the evicted value if there was one.
    #[inline]
    pub fn into_evicted(self) -> Option<T> {
        match self {
            Touch::Evicted(value) => Some(value),
            Touch::Inserted | Touch::Promoted => None,
        }
    }
}
