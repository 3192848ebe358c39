//! Priority frontier shared by uniform-cost and A* search.

use std::{cmp::Ordering, collections::BinaryHeap};

use super::problem::Cost;

/// Pending frontier entry: a state, the path that reached it and its
/// accumulated cost.
#[derive(Debug, Clone)]
pub(crate) struct Entry<S> {
    pub state: S,
    pub path: Vec<S>,
    pub cost: Cost,
}

struct Ranked<S> {
    priority: Cost,
    sequence: u64,
    entry: Entry<S>,
}

impl<S> PartialEq for Ranked<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S> Eq for Ranked<S> {}

impl<S> PartialOrd for Ranked<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S> Ord for Ranked<S> {
    // BinaryHeap is a max-heap: reverse both keys so the lowest priority,
    // then the earliest insertion, comes out first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Min-priority queue with insertion-order tie-breaking.
///
/// Popping always yields what a stable sort of every pending entry by
/// priority would put first.
pub(crate) struct Frontier<S> {
    heap: BinaryHeap<Ranked<S>>,
    next_sequence: u64,
}

impl<S> Frontier<S> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn push(&mut self, priority: Cost, entry: Entry<S>) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Ranked {
            priority,
            sequence,
            entry,
        });
    }

    pub fn pop(&mut self) -> Option<Entry<S>> {
        self.heap.pop().map(|ranked| ranked.entry)
    }
}
