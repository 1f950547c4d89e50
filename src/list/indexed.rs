//! Hash-indexed recency list with O(1) touch and find.
//!
//! Same external contract as [`RecencyList`](crate::list::RecencyList),
//! different cost model: entries form a doubly-linked chain through the
//! slot arena, and an `FxHashMap` maps each value to its slot. Relocation
//! and eviction become constant-time index splices, and the tail is
//! tracked directly instead of found by walking.
//!
//! The index keys are clones of the stored values, so `T` must be
//! `Eq + Hash + Clone`. For cheaply comparable payloads (integers, small
//! strings) the clone is the same cost a key/value cache pays to key its
//! metadata map.
//!
//! # Examples
//!
//! ```rust
//! use librecency::prelude::*;
//!
//! let mut recent = IndexedRecencyList::new(4).unwrap();
//! for value in [1, 3, 4, 5] {
//!     recent.touch(value);
//! }
//!
//! assert_eq!(recent.touch(3), Touch::Promoted);
//! assert_eq!(recent.touch(6), Touch::Evicted(1));
//! let order: Vec<i32> = recent.iter().copied().collect();
//! assert_eq!(order, vec![6, 3, 5, 4]);
//! ```

use std::hash::Hash;
use std::iter::FusedIterator;

use rustc_hash::FxHashMap;

use crate::error::RecencyError;
use crate::list::Touch;

#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied {
        value: T,
        prev: Option<usize>,
        next: Option<usize>,
    },
    Vacant {
        next_free: Option<usize>,
    },
}

/// A capacity-bounded recency list with a hash index from value to slot.
///
/// Maintains the same invariants as [`RecencyList`](crate::list::RecencyList)
/// (total recency order, unique values, `len() <= capacity()`) while making
/// `touch`, `find`, and `remove` O(1).
#[derive(Debug, Clone)]
pub struct IndexedRecencyList<T> {
    slots: Vec<Slot<T>>,
    index: FxHashMap<T, usize>,
    free_head: Option<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    capacity: usize,
}

impl<T> IndexedRecencyList<T> {
    /// Creates an empty list bounded to `capacity` entries.
    ///
    /// # Errors
    ///
    /// Returns [`RecencyError::ZeroCapacity`] when `capacity == 0`.
    pub fn new(capacity: usize) -> Result<Self, RecencyError> {
        if capacity == 0 {
            return Err(RecencyError::ZeroCapacity);
        }
        Ok(Self {
            slots: Vec::with_capacity(capacity),
            index: FxHashMap::default(),
            free_head: None,
            head: None,
            tail: None,
            capacity,
        })
    }

    /// Current number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` when no entries are present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// The capacity bound.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The least-recently-used value: the next eviction victim.
    pub fn peek_lru(&self) -> Option<&T> {
        self.tail.map(|idx| self.value_of(idx))
    }

    /// Releases all entries, retaining the capacity bound.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.index.clear();
        self.free_head = None;
        self.head = None;
        self.tail = None;
    }

    /// Borrowing iterator over the values, most- to least-recent.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            cur: self.head,
            remaining: self.index.len(),
        }
    }

    fn value_of(&self, idx: usize) -> &T {
        match &self.slots[idx] {
            Slot::Occupied { value, .. } => value,
            Slot::Vacant { .. } => unreachable!("recency chain references a vacant slot"),
        }
    }

    fn links_of(&self, idx: usize) -> (Option<usize>, Option<usize>) {
        match &self.slots[idx] {
            Slot::Occupied { prev, next, .. } => (*prev, *next),
            Slot::Vacant { .. } => unreachable!("recency chain references a vacant slot"),
        }
    }

    fn next_of(&self, idx: usize) -> Option<usize> {
        self.links_of(idx).1
    }

    fn set_links(&mut self, idx: usize, new_prev: Option<usize>, new_next: Option<usize>) {
        match &mut self.slots[idx] {
            Slot::Occupied { prev, next, .. } => {
                *prev = new_prev;
                *next = new_next;
            }
            Slot::Vacant { .. } => unreachable!("recency chain references a vacant slot"),
        }
    }

    fn set_prev(&mut self, idx: usize, new_prev: Option<usize>) {
        let (_, next) = self.links_of(idx);
        self.set_links(idx, new_prev, next);
    }

    fn set_next(&mut self, idx: usize, new_next: Option<usize>) {
        let (prev, _) = self.links_of(idx);
        self.set_links(idx, prev, new_next);
    }

    /// Claims a slot for `value`, reusing the free list before growing.
    /// The slot starts unlinked.
    fn alloc(&mut self, value: T) -> usize {
        let slot = Slot::Occupied {
            value,
            prev: None,
            next: None,
        };
        match self.free_head {
            Some(idx) => {
                self.free_head = match self.slots[idx] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied { .. } => unreachable!("free list references an occupied slot"),
                };
                self.slots[idx] = slot;
                idx
            }
            None => {
                self.slots.push(slot);
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

    /// Detaches `idx` from the chain, fixing head/tail as needed.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = self.links_of(idx);
        match prev {
            Some(p) => self.set_next(p, next),
            None => self.head = next,
        }
        match next {
            Some(n) => self.set_prev(n, prev),
            None => self.tail = prev,
        }
    }

    /// Links a detached `idx` at the most-recent position.
    fn link_front(&mut self, idx: usize) {
        let old_head = self.head;
        self.set_links(idx, None, old_head);
        match old_head {
            Some(h) => self.set_prev(h, Some(idx)),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }
}

impl<T: Eq + Hash + Clone> IndexedRecencyList<T> {
    /// Marks `value` as most-recently-used.
    ///
    /// Identical contract to
    /// [`RecencyList::touch`](crate::list::RecencyList::touch), in O(1):
    /// a present value is spliced to the front, an absent value is inserted
    /// at the front, evicting the tail first when the list is full.
    pub fn touch(&mut self, value: T) -> Touch<T> {
        if let Some(&idx) = self.index.get(&value) {
            self.unlink(idx);
            self.link_front(idx);
            return Touch::Promoted;
        }

        let evicted = if self.index.len() >= self.capacity {
            self.evict_tail()
        } else {
            None
        };
        let idx = self.alloc(value.clone());
        self.link_front(idx);
        self.index.insert(value, idx);

        match evicted {
            Some(old) => Touch::Evicted(old),
            None => Touch::Inserted,
        }
    }

    /// Looks up `value` without changing recency.
    pub fn find(&self, value: &T) -> Option<&T> {
        self.index.get(value).map(|&idx| self.value_of(idx))
    }

    /// Membership test via the hash index.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.index.contains_key(value)
    }

    /// Removes `value` from the list, returning it if it was present.
    pub fn remove(&mut self, value: &T) -> Option<T> {
        let idx = self.index.remove(value)?;
        self.unlink(idx);
        Some(self.release(idx))
    }

    /// Changes the capacity bound, eagerly shrinking to fit.
    ///
    /// Same policy as
    /// [`RecencyList::set_capacity`](crate::list::RecencyList::set_capacity):
    /// tail entries are evicted oldest-first until the list fits, and the
    /// evicted values are returned in eviction order.
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
        while self.index.len() > capacity {
            match self.evict_tail() {
                Some(value) => evicted.push(value),
                None => break,
            }
        }
        self.capacity = capacity;
        Ok(evicted)
    }

    /// Unlinks and vacates the tail entry, dropping its index entry.
    fn evict_tail(&mut self) -> Option<T> {
        let idx = self.tail?;
        self.unlink(idx);
        let value = self.release(idx);
        self.index.remove(&value);
        Some(value)
    }
}

impl<'a, T> IntoIterator for &'a IndexedRecencyList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Borrowing iterator over an [`IndexedRecencyList`], most- to least-recent.
#[derive(Debug)]
pub struct Iter<'a, T> {
    list: &'a IndexedRecencyList<T>,
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

#[cfg(test)]
mod tests {
    use super::*;

    fn order(list: &IndexedRecencyList<i32>) -> Vec<i32> {
        list.iter().copied().collect()
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            IndexedRecencyList::<i32>::new(0).err(),
            Some(RecencyError::ZeroCapacity)
        );
    }

    #[test]
    fn test_touch_insert_promote_evict() {
        let mut list = IndexedRecencyList::new(2).unwrap();
        assert_eq!(list.touch(1), Touch::Inserted);
        assert_eq!(list.touch(2), Touch::Inserted);
        assert_eq!(list.touch(1), Touch::Promoted);
        assert_eq!(list.touch(3), Touch::Evicted(2));
        assert_eq!(order(&list), vec![3, 1]);
    }

    #[test]
    fn test_exercise_sequence_without_overflow() {
        let mut list = IndexedRecencyList::new(4).unwrap();
        for v in [1, 3, 4, 5, 3] {
            list.touch(v);
        }
        assert_eq!(order(&list), vec![3, 5, 4, 1]);
        assert_eq!(list.peek_lru(), Some(&1));
    }

    #[test]
    fn test_exercise_sequence_with_overflow() {
        let mut list = IndexedRecencyList::new(4).unwrap();
        for v in [1, 3, 4, 5] {
            list.touch(v);
        }
        assert_eq!(list.touch(6), Touch::Evicted(1));
        assert_eq!(order(&list), vec![6, 5, 4, 3]);
    }

    #[test]
    fn test_touch_head_keeps_tail_links() {
        let mut list = IndexedRecencyList::new(3).unwrap();
        for v in [1, 2, 3] {
            list.touch(v);
        }
        // Promote the value already at the head; tail must stay intact.
        assert_eq!(list.touch(3), Touch::Promoted);
        assert_eq!(order(&list), vec![3, 2, 1]);
        assert_eq!(list.peek_lru(), Some(&1));
    }

    #[test]
    fn test_promote_tail_updates_tail() {
        let mut list = IndexedRecencyList::new(3).unwrap();
        for v in [1, 2, 3] {
            list.touch(v);
        }
        assert_eq!(list.touch(1), Touch::Promoted);
        assert_eq!(order(&list), vec![1, 3, 2]);
        assert_eq!(list.peek_lru(), Some(&2));
    }

    #[test]
    fn test_find_does_not_change_recency() {
        let mut list = IndexedRecencyList::new(3).unwrap();
        for v in [1, 2, 3] {
            list.touch(v);
        }
        assert_eq!(list.find(&1), Some(&1));
        assert_eq!(list.find(&9), None);
        assert_eq!(order(&list), vec![3, 2, 1]);
    }

    #[test]
    fn test_remove_head_middle_tail() {
        let mut list = IndexedRecencyList::new(4).unwrap();
        for v in [1, 2, 3, 4] {
            list.touch(v);
        }
        assert_eq!(list.remove(&3), Some(3));
        assert_eq!(order(&list), vec![4, 2, 1]);
        assert_eq!(list.remove(&4), Some(4));
        assert_eq!(order(&list), vec![2, 1]);
        assert_eq!(list.remove(&1), Some(1));
        assert_eq!(order(&list), vec![2]);
        assert_eq!(list.peek_lru(), Some(&2));
        assert_eq!(list.remove(&9), None);
    }

    #[test]
    fn test_set_capacity_shrinks_eagerly() {
        let mut list = IndexedRecencyList::new(4).unwrap();
        for v in [1, 2, 3, 4] {
            list.touch(v);
        }
        let evicted = list.set_capacity(2).unwrap();
        assert_eq!(evicted, vec![1, 2]);
        assert_eq!(order(&list), vec![4, 3]);
        assert_eq!(list.set_capacity(0), Err(RecencyError::ZeroCapacity));
    }

    #[test]
    fn test_clear() {
        let mut list = IndexedRecencyList::new(3).unwrap();
        for v in [1, 2, 3] {
            list.touch(v);
        }
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.peek_lru(), None);
        assert!(!list.contains(&1));

        list.touch(9);
        assert_eq!(order(&list), vec![9]);
    }

    #[test]
    fn test_slot_reuse_bounds_arena() {
        let mut list = IndexedRecencyList::new(4).unwrap();
        for v in 0..1000 {
            list.touch(v);
        }
        assert_eq!(list.len(), 4);
        assert!(list.slots.len() <= 4);
        assert_eq!(list.index.len(), 4);
        assert_eq!(order(&list), vec![999, 998, 997, 996]);
    }

    #[test]
    fn test_index_agrees_with_chain() {
        let mut list = IndexedRecencyList::new(8).unwrap();
        for v in [5, 1, 9, 1, 5, 2, 7, 9] {
            list.touch(v);
        }
        let chain = order(&list);
        assert_eq!(chain.len(), list.len());
        for v in &chain {
            assert!(list.contains(v));
        }
    }

    #[test]
    fn test_works_with_string_values() {
        let mut list = IndexedRecencyList::new(2).unwrap();
        list.touch("alpha".to_string());
        list.touch("beta".to_string());
        assert_eq!(
            list.touch("gamma".to_string()),
            Touch::Evicted("alpha".to_string())
        );
        assert!(list.contains(&"beta".to_string()));
    }
}
