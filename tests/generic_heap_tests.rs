//! Generic tests for Heap implementations
//!
//! These tests only use the `Heap` trait, so any min-heap over (priority, item)
//! pairs can be plugged into `heap_test!`.

use binomial_forest::binomial::BinomialHeap;
use binomial_forest::Heap;

// Test helpers that work with any Heap implementation

/// Test that empty heap behaves correctly
fn test_empty_heap<H: Heap<String, i32>>() {
    let mut heap = H::new();
    assert!(heap.is_empty());
    assert_eq!(heap.len(), 0);
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.pop(), None);
}

/// Test basic insert and pop operations
fn test_basic_operations<H: Heap<&'static str, i32>>() {
    let mut heap = H::new();

    heap.push(5, "five");
    heap.push(1, "one");
    heap.push(10, "ten");
    heap.push(3, "three");

    assert!(!heap.is_empty());
    assert_eq!(heap.len(), 4);
    assert_eq!(heap.peek(), Some((&1, &"one")));

    // Pop should return minimums in order
    assert_eq!(heap.pop(), Some((1, "one")));
    assert_eq!(heap.pop(), Some((3, "three")));
    assert_eq!(heap.pop(), Some((5, "five")));
    assert_eq!(heap.pop(), Some((10, "ten")));
    assert_eq!(heap.pop(), None);
    assert!(heap.is_empty());
}

/// Test merge operations
fn test_merge_operations<H: Heap<&'static str, i32>>() {
    let mut heap1 = H::new();
    heap1.push(5, "five");
    heap1.push(1, "one");

    let mut heap2 = H::new();
    heap2.push(10, "ten");
    heap2.push(3, "three");

    heap1.merge(heap2);

    assert_eq!(heap1.len(), 4);
    assert_eq!(heap1.peek(), Some((&1, &"one")));
    assert_eq!(heap1.pop(), Some((1, "one")));
    assert_eq!(heap1.pop(), Some((3, "three")));
    assert_eq!(heap1.pop(), Some((5, "five")));
    assert_eq!(heap1.pop(), Some((10, "ten")));
}

/// Test merge with empty heap on either side
fn test_merge_empty<H: Heap<i32, i32>>() {
    let mut heap1 = H::new();
    heap1.push(5, 1);
    heap1.push(1, 2);

    let len_before = heap1.len();
    heap1.merge(H::new());
    assert_eq!(heap1.len(), len_before);
    assert_eq!(heap1.peek(), Some((&1, &2)));

    let mut heap3 = H::new();
    let mut heap4 = H::new();
    heap4.push(3, 3);

    heap3.merge(heap4);
    assert_eq!(heap3.len(), 1);
    assert_eq!(heap3.peek(), Some((&3, &3)));
}

/// Test with duplicate priorities
fn test_duplicate_priorities<H: Heap<&'static str, i32>>() {
    let mut heap = H::new();

    heap.push(5, "a");
    heap.push(5, "b");
    heap.push(5, "c");
    heap.push(1, "d");

    assert_eq!(heap.pop(), Some((1, "d")));

    // Items with same priority can come in any order
    let mut seen = std::collections::HashSet::new();
    for _ in 0..3 {
        let (pri, item) = heap.pop().unwrap();
        assert_eq!(pri, 5);
        assert!(seen.insert(item));
    }
    assert_eq!(seen.len(), 3);
}

/// Test that peek doesn't modify heap
fn test_peek_idempotent<H: Heap<&'static str, i32>>() {
    let mut heap = H::new();
    heap.push(5, "five");
    heap.push(1, "one");

    assert_eq!(heap.peek(), Some((&1, &"one")));
    assert_eq!(heap.peek(), Some((&1, &"one")));
    assert_eq!(heap.len(), 2);
    assert_eq!(heap.pop(), Some((1, "one")));
}

/// Test merge then operations
fn test_merge_then_operations<H: Heap<i32, i32>>() {
    let mut heap1 = H::new();
    for i in 0..10 {
        heap1.push(i * 10, i);
    }

    let mut heap2 = H::new();
    for i in 10..20 {
        heap2.push(i * 10, i);
    }

    heap1.merge(heap2);
    heap1.push(-5, -1);

    let mut count = 0;
    let mut last_priority = i32::MIN;
    while let Some((priority, _)) = heap1.pop() {
        assert!(priority >= last_priority);
        last_priority = priority;
        count += 1;
    }
    assert_eq!(count, 21);
}

/// Test rapid insert and pop
fn test_rapid_operations<H: Heap<i32, i32>>() {
    let mut heap = H::new();

    for i in 0..50 {
        heap.push(i, i);
        if i % 3 == 0 {
            heap.pop();
        }
    }

    // 50 pushes, 17 pops
    assert_eq!(heap.len(), 33);
    let mut count = 0;
    while heap.pop().is_some() {
        count += 1;
    }
    assert_eq!(count, 33);
}

/// Test with large priorities
fn test_large_priorities<H: Heap<i32, i64>>() {
    let mut heap = H::new();

    heap.push(1_000_000_000, 1);
    heap.push(2_000_000_000, 2);
    heap.push(-1_000_000_000, 3);

    assert_eq!(heap.peek(), Some((&-1_000_000_000, &3)));
    assert_eq!(heap.pop(), Some((-1_000_000_000, 3)));
    assert_eq!(heap.pop(), Some((1_000_000_000, 1)));
    assert_eq!(heap.pop(), Some((2_000_000_000, 2)));
}

/// Test ascending order insertion
fn test_ascending_insertion<H: Heap<i32, i32>>() {
    let mut heap = H::new();
    for i in 0..50 {
        heap.push(i, i);
    }
    for i in 0..50 {
        assert_eq!(heap.pop(), Some((i, i)));
    }
}

/// Test descending order insertion
fn test_descending_insertion<H: Heap<i32, i32>>() {
    let mut heap = H::new();
    for i in (0..50).rev() {
        heap.push(i, i);
    }
    for i in 0..50 {
        assert_eq!(heap.pop(), Some((i, i)));
    }
}

/// Test interleaved order insertion
fn test_interleaved_insertion<H: Heap<i32, i32>>() {
    let mut heap = H::new();
    // 37 is coprime with 101, so this visits every residue once
    for i in 0..101 {
        let p = (i * 37) % 101;
        heap.push(p, p);
    }
    for i in 0..101 {
        assert_eq!(heap.pop(), Some((i, i)));
    }
}

/// Test all elements with the same priority
fn test_all_same_priority<H: Heap<i32, i32>>() {
    let mut heap = H::new();
    for i in 0..20 {
        heap.push(7, i);
    }

    let mut items: Vec<i32> = std::iter::from_fn(|| heap.pop())
        .map(|(priority, item)| {
            assert_eq!(priority, 7);
            item
        })
        .collect();
    items.sort_unstable();
    assert_eq!(items, (0..20).collect::<Vec<_>>());
}

/// Test negative priorities
fn test_negative_priorities<H: Heap<i32, i32>>() {
    let mut heap = H::new();
    heap.push(-5, 1);
    heap.push(0, 2);
    heap.push(-10, 3);
    heap.push(5, 4);

    assert_eq!(heap.pop(), Some((-10, 3)));
    assert_eq!(heap.pop(), Some((-5, 1)));
    assert_eq!(heap.pop(), Some((0, 2)));
    assert_eq!(heap.pop(), Some((5, 4)));
}

/// Test merge of two large heaps
fn test_merge_large<H: Heap<i32, i32>>() {
    let mut heap1 = H::new();
    let mut heap2 = H::new();
    for i in 0..100 {
        heap1.push(i * 2, i);
        heap2.push(i * 2 + 1, i);
    }

    heap1.merge(heap2);
    assert_eq!(heap1.len(), 200);
    for i in 0..200 {
        assert_eq!(heap1.pop().map(|(p, _)| p), Some(i));
    }
}

/// Test string items
fn test_string_items<H: Heap<String, i32>>() {
    let mut heap = H::new();
    heap.push(2, "two".to_string());
    heap.push(1, "one".to_string());
    heap.push(3, "three".to_string());

    assert_eq!(heap.pop(), Some((1, "one".to_string())));
    assert_eq!(heap.pop(), Some((2, "two".to_string())));
    assert_eq!(heap.pop(), Some((3, "three".to_string())));
}

/// Test tuple items
fn test_tuple_items<H: Heap<(i32, i32), i32>>() {
    let mut heap = H::new();
    heap.push(3, (3, 3));
    heap.push(1, (1, 1));
    heap.push(2, (2, 2));

    assert_eq!(heap.pop(), Some((1, (1, 1))));
    assert_eq!(heap.pop(), Some((2, (2, 2))));
    assert_eq!(heap.pop(), Some((3, (3, 3))));
}

// Macro to generate a single test function
macro_rules! heap_test {
    ($name:ident, $heap:ty, $func:ident) => {
        #[test]
        fn $name() {
            $func::<$heap>();
        }
    };
}

heap_test!(test_binomial_empty, BinomialHeap<i32, String>, test_empty_heap);
heap_test!(test_binomial_basic, BinomialHeap<i32, &'static str>, test_basic_operations);
heap_test!(test_binomial_merge, BinomialHeap<i32, &'static str>, test_merge_operations);
heap_test!(test_binomial_merge_empty, BinomialHeap<i32, i32>, test_merge_empty);
heap_test!(test_binomial_duplicate_priorities, BinomialHeap<i32, &'static str>, test_duplicate_priorities);
heap_test!(test_binomial_peek_idempotent, BinomialHeap<i32, &'static str>, test_peek_idempotent);
heap_test!(test_binomial_merge_then_operations, BinomialHeap<i32, i32>, test_merge_then_operations);
heap_test!(test_binomial_rapid_operations, BinomialHeap<i32, i32>, test_rapid_operations);
heap_test!(test_binomial_large_priorities, BinomialHeap<i64, i32>, test_large_priorities);
heap_test!(test_binomial_ascending_insertion, BinomialHeap<i32, i32>, test_ascending_insertion);
heap_test!(test_binomial_descending_insertion, BinomialHeap<i32, i32>, test_descending_insertion);
heap_test!(test_binomial_interleaved_insertion, BinomialHeap<i32, i32>, test_interleaved_insertion);
heap_test!(test_binomial_all_same_priority, BinomialHeap<i32, i32>, test_all_same_priority);
heap_test!(test_binomial_negative_priorities, BinomialHeap<i32, i32>, test_negative_priorities);
heap_test!(test_binomial_merge_large, BinomialHeap<i32, i32>, test_merge_large);
heap_test!(test_binomial_string_items, BinomialHeap<i32, String>, test_string_items);
heap_test!(test_binomial_tuple_items, BinomialHeap<i32, (i32, i32)>, test_tuple_items);
