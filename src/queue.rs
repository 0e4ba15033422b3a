use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Min-priority queue keyed by weight that pops equal weights in insertion order.
///
/// `BinaryHeap` alone gives no guarantee among equal keys, so every entry
/// carries a monotonically increasing sequence number as a secondary key.
#[derive(Debug)]
pub(crate) struct WeightQueue<T> {
    heap: BinaryHeap<Reverse<Entry<T>>>,
    next_seq: u64,
}

#[derive(Debug)]
struct Entry<T> {
    weight: u64,
    seq: u64,
    item: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.seq.cmp(&other.seq))
    }
}

impl<T> WeightQueue<T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub(crate) fn push(&mut self, weight: u64, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Reverse(Entry { weight, seq, item }));
    }

    /// Removes the lightest entry, oldest first among ties.
    pub(crate) fn pop(&mut self) -> Option<(u64, T)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.weight, entry.item))
    }

    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_lightest_first() {
        let mut queue = WeightQueue::new();
        queue.push(5, 'a');
        queue.push(1, 'b');
        queue.push(3, 'c');

        assert_eq!(queue.pop(), Some((1, 'b')));
        assert_eq!(queue.pop(), Some((3, 'c')));
        assert_eq!(queue.pop(), Some((5, 'a')));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_ties_are_fifo() {
        let mut queue = WeightQueue::new();
        for item in ['x', 'y', 'z', 'w'] {
            queue.push(2, item);
        }
        queue.push(1, 'f');

        let order: Vec<char> = std::iter::from_fn(|| queue.pop().map(|(_, c)| c)).collect();
        assert_eq!(order, vec!['f', 'x', 'y', 'z', 'w']);
    }

    #[test]
    fn test_len() {
        let mut queue = WeightQueue::new();
        assert_eq!(queue.len(), 0);
        queue.push(0, ());
        queue.push(0, ());
        assert_eq!(queue.len(), 2);
        queue.pop();
        assert_eq!(queue.len(), 1);
    }
}
