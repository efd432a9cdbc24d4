//! Tree rendering for `print`-style inspection
//!
//! ```text
//! head
//! ├──3:c
//! └──1:a
//!    ├──4:d
//!    │  └──5:e
//!    └──2:b
//! ```

use super::link::Link;
use super::BinomialHeap;
use crate::compare::Comparator;
use std::fmt;

impl<K, V, C> fmt::Display for BinomialHeap<K, V, C>
where
    K: fmt::Display,
    V: fmt::Display,
    C: Comparator<K>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("head")?;
        render(self, f, self.forest.head(), &mut String::new())
    }
}

fn render<K, V, C>(
    heap: &BinomialHeap<K, V, C>,
    f: &mut fmt::Formatter<'_>,
    list: Link,
    indent: &mut String,
) -> fmt::Result
where
    K: fmt::Display,
    V: fmt::Display,
    C: Comparator<K>,
{
    let arena = heap.forest.arena();
    for key in arena.siblings(list) {
        let node = arena.node(key);
        let last = node.sibling == Link::Leaf;
        let (branch, guide) = if last { ("└──", "   ") } else { ("├──", "│  ") };
        write!(f, "\n{}{}{}:{}", indent, branch, node.entry.key, node.entry.value)?;

        let depth = indent.len();
        indent.push_str(guide);
        render(heap, f, node.child, indent)?;
        indent.truncate(depth);
    }
    Ok(())
}
