use std::{cmp::Ordering, collections::BinaryHeap};

/// Heap entry ordered by ascending cost, then by push order.
#[derive(Debug, Clone)]
pub(crate) struct Frontier<T> {
    pub(crate) cost: f64,
    pub(crate) sequence: u64,
    pub(crate) item: T,
}

impl<T> PartialEq for Frontier<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T> Eq for Frontier<T> {}

impl<T> Ord for Frontier<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<T> PartialOrd for Frontier<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue that breaks cost ties by insertion order.
#[derive(Debug, Clone)]
pub(crate) struct FrontierQueue<T> {
    heap: BinaryHeap<Frontier<T>>,
    next_sequence: u64,
}

impl<T> FrontierQueue<T> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    /// Returns the sequence number assigned to the entry.
    pub(crate) fn push(&mut self, cost: f64, item: T) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Frontier {
            cost,
            sequence,
            item,
        });
        sequence
    }

    pub(crate) fn pop(&mut self) -> Option<Frontier<T>> {
        self.heap.pop()
    }

    pub(crate) fn clear(&mut self) {
        self.heap.clear();
    }
}
