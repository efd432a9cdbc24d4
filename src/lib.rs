//! Mergeable Binomial Heap for Rust
//!
//! This crate provides a binomial heap (a mergeable priority queue) whose
//! entries are (key, value) pairs ordered by a caller-supplied comparator.
//!
//! # Features
//!
//! - **Insert**: O(log n) worst-case, carry propagation like binary addition
//! - **Min / Extract-min**: O(log n) worst-case
//! - **Decrease-key** and **Delete** by key, bubbling entries up the tree
//! - **Union**: consumes both heaps and returns one
//! - Custom key orders through [`Comparator`], including plain closures
//!
//! # Example
//!
//! ```rust
//! use binomial_forest::binomial::BinomialHeap;
//!
//! let mut a = BinomialHeap::new();
//! a.insert(7, "seven");
//! let mut b = BinomialHeap::new();
//! b.insert(3, "three");
//!
//! let mut heap = a.union(b);
//! assert_eq!(heap.min(), Some(&"three"));
//! assert_eq!(heap.delete(&7), Some("seven"));
//! assert_eq!(heap.extract_min(), Some("three"));
//! assert!(heap.is_empty());
//! ```

pub mod binomial;
pub mod compare;
pub mod traits;

// Re-export the main types for convenience
pub use binomial::BinomialHeap;
pub use compare::{Comparator, NaturalOrder};
pub use traits::{Heap, HeapError};
