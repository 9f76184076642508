//! Property-based tests for positional list copies.
//!
//! - **Prefix Law**: the first `min(source, destination)` elements are
//!   assigned and every other destination element keeps its value
//! - **Sizing Law**: an empty `Vec` takes the length of a non-empty source
//! - **Array Law**: arrays never change length

use std::collections::VecDeque;

use assign::Assigner;
use proptest::prelude::*;

const SENTINEL: i64 = 7;

fn expected_prefix(source: &[i32], destination_len: usize) -> Vec<i64> {
    (0..destination_len)
        .map(|index| match source.get(index) {
            Some(&value) if value != 0 => i64::from(value),
            _ => SENTINEL,
        })
        .collect()
}

// =============================================================================
// Prefix Law
// =============================================================================

proptest! {
    #[test]
    fn prop_allocated_vec_keeps_its_length(
        source in prop::collection::vec(any::<i32>(), 1..16),
        destination_len in 1_usize..16,
    ) {
        let mut destination = vec![SENTINEL; destination_len];
        Assigner::new(&source).to(&mut destination).unwrap();
        prop_assert_eq!(destination, expected_prefix(&source, destination_len));
    }

    #[test]
    fn prop_deque_source_matches_vec_source(source in prop::collection::vec(any::<u8>(), 0..16)) {
        let deque: VecDeque<u8> = source.iter().copied().collect();
        let mut from_vec = vec![0_u16; 8];
        let mut from_deque = vec![0_u16; 8];
        Assigner::new(&source).to(&mut from_vec).unwrap();
        Assigner::new(&deque).to(&mut from_deque).unwrap();
        prop_assert_eq!(from_vec, from_deque);
    }
}

// =============================================================================
// Sizing Law
// =============================================================================

proptest! {
    #[test]
    fn prop_empty_vec_takes_source_length(source in prop::collection::vec(any::<i32>(), 0..16)) {
        let mut destination: Vec<i64> = Vec::new();
        Assigner::new(&source).to(&mut destination).unwrap();
        let expected: Vec<i64> = source.iter().copied().map(i64::from).collect();
        prop_assert_eq!(destination, expected);
    }
}

// =============================================================================
// Array Law
// =============================================================================

proptest! {
    #[test]
    fn prop_array_copies_prefix(source in prop::collection::vec(any::<i32>(), 1..8)) {
        let mut destination = [SENTINEL; 4];
        Assigner::new(&source).to(&mut destination).unwrap();
        prop_assert_eq!(destination.to_vec(), expected_prefix(&source, 4));
    }

    #[test]
    fn prop_array_into_empty_vec(source in prop::array::uniform3(1_i32..)) {
        let mut destination: Vec<i32> = Vec::new();
        Assigner::new(&source).to(&mut destination).unwrap();
        prop_assert_eq!(destination, source.to_vec());
    }
}
