//! Key ordering for heaps that do not rely on `Ord`
//!
//! A [`BinomialHeap`](crate::binomial::BinomialHeap) orders its keys through a
//! [`Comparator`]. The default is [`NaturalOrder`], which defers to `Ord`.
//! Any closure of the form `Fn(&K, &K) -> Ordering` is also a comparator, so a
//! max-heap is just a reversed closure:
//!
//! ```rust
//! use binomial_forest::binomial::BinomialHeap;
//!
//! let mut heap = BinomialHeap::with_comparator(|a: &i32, b: &i32| b.cmp(a));
//! heap.insert(1, "low");
//! heap.insert(9, "high");
//! assert_eq!(heap.min(), Some(&"high"));
//! ```

use std::cmp::Ordering;

/// A total order over keys of type `K`
pub trait Comparator<K> {
    /// Compares two keys
    fn compare(&self, a: &K, b: &K) -> Ordering;
}

/// Orders keys by their `Ord` implementation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct NaturalOrder;

impl<K: Ord> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        a.cmp(b)
    }
}

impl<K, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &K, b: &K) -> Ordering {
        self(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_natural_order() {
        assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
        assert_eq!(NaturalOrder.compare(&"b", &"a"), Ordering::Greater);
        assert_eq!(NaturalOrder.compare(&7u8, &7u8), Ordering::Equal);
    }

    #[test]
    fn test_closure_comparator() {
        let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
        assert_eq!(by_len.compare(&"aaa", &"b"), Ordering::Greater);
        assert_eq!(by_len.compare(&"aa", &"bb"), Ordering::Equal);
    }
}
