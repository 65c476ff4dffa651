//! Min-ordered open list shared by Dijkstra and A*.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Heap entry referring to a node by arena index.
///
/// Ordered so that `BinaryHeap` (a max-heap) pops the smallest `key` first,
/// then the smallest `tie`, then the earliest insertion.
#[derive(Clone, Copy, Debug)]
struct Entry {
    idx: usize,
    key: f32,
    tie: f32,
    seq: u64,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .key
            .total_cmp(&self.key)
            .then_with(|| other.tie.total_cmp(&self.tie))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

/// Priority queue of node indices with deterministic tie-breaking.
///
/// The same index may be pushed several times (once per improvement);
/// callers skip stale pops by checking the node's `visited` flag.
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Entry>,
    seq: u64,
}

impl Frontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, idx: usize, key: f32, tie: f32) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Entry { idx, key, tie, seq });
    }

    pub(crate) fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|e| e.idx)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
