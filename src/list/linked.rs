//! Singly-linked recency list with linear scan-and-splice.
//!
//! This is the faithful rendering of the classic exercise: a chain of
//! entries, most-recently-touched at the front, relocated by unlinking at
//! the predecessor and relinking at the head. The chain lives in a slot
//! arena instead of heap-allocated nodes, so relocation and eviction are
//! index splices and freed slots are reused rather than reallocated.
//!
//! `touch`, `find`, and `remove` are O(n) in the current length; every
//! operation is bounded by `len`. For an O(1) variant with the same
//! contract, see [`IndexedRecencyList`](crate::list::IndexedRecencyList).
//!
//! # Examples
//!
//! ```rust
//! use librecency::prelude::*;
//!
//! let mut recent = RecencyList::new(2).unwrap();
//! assert_eq!(recent.touch("alpha"), Touch::Inserted);
//! assert_eq!(recent.touch("beta"), Touch::Inserted);
//!
//! // "alpha" is now the eviction candidate; re-touching it saves it.
//! assert_eq!(recent.touch("alpha"), Touch::Promoted);
//! assert_eq!(recent.touch("gamma"), Touch::Evicted("beta"));
//! ```

use std::iter::FusedIterator;

use crate::error::RecencyError;
use crate::list::Touch;

/// One arena slot: either an occupied chain entry or a vacant slot
/// threaded into the free list.
#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied { value: T, next: Option<usize> },
    Vacant { next_free: Option<usize> },
}

/// A capacity-bounded, singly-linked recency list.
///
/// Maintains a total recency order over a set of unique values: the entry
/// nearest the head was touched most recently, the tail entry is the next
/// eviction victim. `len()` never exceeds `capacity()`.
///
/// Requires only `T: PartialEq` for the mutating operations; lookup is a
/// linear scan from the head.
///
/// # Examples
///
/// ```rust
/// use librecency::prelude::*;
///
/// let mut recent = RecencyList::new(4).unwrap();
/// for value in [1, 3, 4, 5, 3] {
///     recent.touch(value);
/// }
///
/// let order: Vec<i32> = recent.iter().copied().collect();
/// assert_eq!(order, vec![3, 5, 4, 1]);
/// assert_eq!(recent.peek_lru(), Some(&1));
/// ```
#[derive(Debug, Clone)]
pub struct RecencyList<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    head: Option<usize>,
    len: usize,
    capacity: usize,
}

impl<T> RecencyList<T> {
    /// Creates an empty list bounded to `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`RecencyError::ZeroCapacity`] when `capacity == 0`; the
    /// bound is never clamped.
    pub fn new(capacity: usize) -> Result<Self, RecencyError> {
        if capacity == 0 {
            return Err(RecencyError::ZeroCapacity);
        }
        Ok(Self {
            slots: Vec::with_capacity(capacity),
            free_head: None,
            head: None,
            len: 0,
            capacity,
        })
    }

    /// Current number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when no entries are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The capacity bound.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The least-recently-used value: the next eviction victim.
    pub fn peek_lru(&self) -> Option<&T> {
        let mut cur = self.head?;
        while let Some(next) = self.next_of(cur) {
            cur = next;
        }
        Some(self.value_of(cur))
    }

    /// Changes the capacity bound, eagerly shrinking to fit.
    ///
    /// When the new bound is smaller than the current length, tail entries
    /// are evicted oldest-first until the list fits; the evicted values are
    /// returned in eviction order. Growing the bound evicts nothing.
    ///
    /// # Errors
    ///
    /// Returns [`RecencyError::ZeroCapacity`] when `capacity == 0`, leaving
    /// the list untouched.
    pub fn set_capacity(&mut self, capacity: usize) -> Result<Vec<T>, RecencyError> {
        if capacity == 0 {
            return Err(RecencyError::ZeroCapacity);
        }
        let mut evicted = Vec::new();
        while self.len > capacity {
            match self.evict_tail() {
                Some(value) => evicted.push(value),
                None => break,
            }
        }
        self.capacity = capacity;
        Ok(evicted)
    }

    /// Releases all entries, retaining the capacity bound.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.head = None;
        self.len = 0;
    }

    /// Borrowing iterator over the values, most- to least-recent.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cur: self.head,
            remaining: self.len,
        }
    }

    fn value_of(&self, idx: usize) -> &T {
        match &self.slots[idx] {
            Slot::Occupied { value, .. } => value,
            Slot::Vacant { .. } => unreachable!("recency chain references a vacant slot"),
        }
    }

    fn next_of(&self, idx: usize) -> Option<usize> {
        match &self.slots[idx] {
            Slot::Occupied { next, .. } => *next,
            Slot::Vacant { .. } => unreachable!("recency chain references a vacant slot"),
        }
    }

    fn set_next(&mut self, idx: usize, next: Option<usize>) {
        match &mut self.slots[idx] {
            Slot::Occupied { next: slot_next, .. } => *slot_next = next,
            Slot::Vacant { .. } => unreachable!("recency chain references a vacant slot"),
        }
    }

    /// Claims a slot for `value`, reusing the free list before growing.
    fn alloc(&mut self, value: T, next: Option<usize>) -> usize {
        match self.free_head {
            Some(idx) => {
                self.free_head = match self.slots[idx] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied { .. } => unreachable!("free list references an occupied slot"),
                };
                self.slots[idx] = Slot::Occupied { value, next };
                idx
            }
            None => {
                self.slots.push(Slot::Occupied { value, next });
                self.slots.len() - 1
            }
        }
    }

    /// Vacates an unlinked slot, returning its value.
    fn release(&mut self, idx: usize) -> T {
        let slot = std::mem::replace(
            &mut self.slots[idx],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        self.free_head = Some(idx);
        match slot {
            Slot::Occupied { value, .. } => value,
            Slot::Vacant { .. } => unreachable!("released a vacant slot"),
        }
    }

    /// Unlinks and vacates the tail entry, returning its value.
    fn evict_tail(&mut self) -> Option<T> {
        let mut cur = self.head?;
        let mut prev = None;
        while let Some(next) = self.next_of(cur) {
            prev = Some(cur);
            cur = next;
        }
        match prev {
            Some(p) => self.set_next(p, None),
            None => self.head = None,
        }
        self.len -= 1;
        Some(self.release(cur))
    }
}

impl<T: PartialEq> RecencyList<T> {
    /// Marks `value` as most-recently-used.
    ///
    /// One logical step: find-or-evict-then-insert. A present value is
    /// relocated to the front (no size change); an absent value is inserted
    /// at the front, evicting the tail entry first when the list is full.
    /// Eviction and insertion are never skipped together.
    ///
    /// Returns the observed [`Touch`] outcome; callers that only care about
    /// the ordering side effect can ignore it.
    pub fn touch(&mut self, value: T) -> Touch<T> {
        if let Some((prev, idx)) = self.locate(&value) {
            // Present: splice out at the predecessor, relink at the front.
            // `prev == None` means the value is already the head.
            if let Some(p) = prev {
                let after = self.next_of(idx);
                self.set_next(p, after);
                let old_head = self.head;
                self.set_next(idx, old_head);
                self.head = Some(idx);
            }
            return Touch::Promoted;
        }

        let evicted = if self.len >= self.capacity {
            self.evict_tail()
        } else {
            None
        };
        let old_head = self.head;
        let idx = self.alloc(value, old_head);
        self.head = Some(idx);
        self.len += 1;

        match evicted {
            Some(old) => Touch::Evicted(old),
            None => Touch::Inserted,
        }
    }

    /// Looks up `value` without changing recency.
    ///
    /// `None` is the normal not-found outcome, not an error.
    pub fn find(&self, value: &T) -> Option<&T> {
        self.locate(value).map(|(_, idx)| self.value_of(idx))
    }

    /// Membership test via [`find`](Self::find).
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Removes `value` from the list, returning it if it was present.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let (prev, idx) = self.locate(value)?;
        let after = self.next_of(idx);
        match prev {
            Some(p) => self.set_next(p, after),
            None => self.head = after,
        }
        self.len -= 1;
        Some(self.release(idx))
    }

    /// Scans from the head for `value`, returning `(predecessor, slot)`.
    fn locate(&self, value: &T) -> Option<(Option<usize>, usize)> {
        let mut prev = None;
        let mut cur = self.head;
        while let Some(idx) = cur {
            if self.value_of(idx) == value {
                return Some((prev, idx));
            }
            prev = cur;
            cur = self.next_of(idx);
        }
        None
    }
}

impl<'a, T> IntoIterator for &'a RecencyList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over a [`RecencyList`], most- to least-recent.
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a RecencyList<T>,
    cur: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.cur?;
        self.cur = self.list.next_of(idx);
        self.remaining -= 1;
        Some(self.list.value_of(idx))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}
