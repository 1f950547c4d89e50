//! Property-based tests for the recency containers using proptest
//!
//! A naive `Vec` model (most-recent-first) plays the role of the oracle;
//! both containers are driven in lockstep and must observe the same
//! outcomes and orders for every touch.

use librecency::prelude::*;
use proptest::prelude::*;

/// Oracle: most-recent-first `Vec` with the same touch contract.
struct ModelLru {
    entries: Vec<i32>,
    capacity: usize,
}

impl ModelLru {
    fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity,
        }
    }

    fn touch(&mut self, value: i32) -> Touch<i32> {
        if let Some(pos) = self.entries.iter().position(|&e| e == value) {
            let existing = self.entries.remove(pos);
            self.entries.insert(0, existing);
            return Touch::Promoted;
        }
        let evicted = if self.entries.len() >= self.capacity {
            self.entries.pop()
        } else {
            None
        };
        self.entries.insert(0, value);
        match evicted {
            Some(old) => Touch::Evicted(old),
            None => Touch::Inserted,
        }
    }
}

// Small value domain so repeat touches and evictions are both common
fn touches_strategy() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(0i32..16, 0..64)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// Property: both containers match the oracle outcome-for-outcome and
    /// order-for-order across arbitrary touch sequences.
    #[test]
    fn prop_containers_match_model(
        touches in touches_strategy(),
        capacity in 1usize..8
    ) {
        let mut model = ModelLru::new(capacity);
        let mut linked = RecencyList::new(capacity).unwrap();
        let mut indexed = IndexedRecencyList::new(capacity).unwrap();

        for &value in &touches {
            let expected = model.touch(value);
            prop_assert_eq!(linked.touch(value), expected.clone());
            prop_assert_eq!(indexed.touch(value), expected);

            let linked_order: Vec<i32> = linked.iter().copied().collect();
            let indexed_order: Vec<i32> = indexed.iter().copied().collect();
            prop_assert_eq!(&linked_order, &model.entries);
            prop_assert_eq!(&indexed_order, &model.entries);
        }
    }

    /// Property: the length never exceeds the capacity bound and always
    /// matches the number of distinct retained values.
    #[test]
    fn prop_len_bounded_and_duplicate_free(
        touches in touches_strategy(),
        capacity in 1usize..8
    ) {
        let mut linked = RecencyList::new(capacity).unwrap();

        for &value in &touches {
            linked.touch(value);
            prop_assert!(linked.len() <= capacity);

            let mut seen: Vec<i32> = linked.iter().copied().collect();
            prop_assert_eq!(seen.len(), linked.len());
            seen.sort_unstable();
            seen.dedup();
            prop_assert_eq!(seen.len(), linked.len());
        }
    }

    /// Property: re-touching any present value promotes it to the front
    /// without changing the length.
    #[test]
    fn prop_retouch_promotes_in_place(
        touches in touches_strategy(),
        capacity in 1usize..8
    ) {
        let mut linked = RecencyList::new(capacity).unwrap();
        for &value in &touches {
            linked.touch(value);
        }

        let before: Vec<i32> = linked.iter().copied().collect();
        if let Some(&tail) = before.last() {
            let len = linked.len();
            prop_assert_eq!(linked.touch(tail), Touch::Promoted);
            prop_assert_eq!(linked.len(), len);
            prop_assert_eq!(linked.iter().next(), Some(&tail));
        }
    }

    /// Property: a touched value stays findable until `capacity` distinct
    /// other values are touched without re-touching it.
    #[test]
    fn prop_presence_window(capacity in 1usize..8) {
        let mut indexed = IndexedRecencyList::new(capacity).unwrap();
        indexed.touch(-1);

        for v in 0..capacity as i32 - 1 {
            indexed.touch(v);
            prop_assert!(indexed.contains(&-1));
        }
        indexed.touch(capacity as i32);
        prop_assert!(!indexed.contains(&-1));
    }

    /// Property: eager shrink evicts exactly the oldest entries, in order,
    /// and restores the bound.
    #[test]
    fn prop_shrink_to_fit(
        touches in touches_strategy(),
        capacity in 2usize..8,
        shrink_by in 1usize..4
    ) {
        let mut model = ModelLru::new(capacity);
        let mut linked = RecencyList::new(capacity).unwrap();
        for &value in &touches {
            model.touch(value);
            linked.touch(value);
        }

        let new_capacity = capacity.saturating_sub(shrink_by).max(1);
        let mut expected_evicted = Vec::new();
        while model.entries.len() > new_capacity {
            if let Some(old) = model.entries.pop() {
                expected_evicted.push(old);
            }
        }

        let evicted = linked.set_capacity(new_capacity).unwrap();
        prop_assert_eq!(evicted, expected_evicted);
        prop_assert!(linked.len() <= new_capacity);
        let order: Vec<i32> = linked.iter().copied().collect();
        prop_assert_eq!(&order, &model.entries);
    }
}
