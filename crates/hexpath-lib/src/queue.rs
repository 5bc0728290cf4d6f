use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Binary min-heap keyed by an `f64` priority.
///
/// There is no decrease-key: callers that improve an item's priority push it
/// again and skip the stale copy when it surfaces. Equal priorities dequeue
/// in insertion order.
#[derive(Debug, Clone)]
pub struct PriorityQueue<T> {
    heap: BinaryHeap<QueueEntry<T>>,
    next_sequence: u64,
}

impl<T> PriorityQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    pub fn enqueue(&mut self, item: T, priority: f64) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(QueueEntry {
            item,
            priority: FloatOrd(priority),
            sequence,
        });
    }

    /// Remove and return the item with the lowest priority.
    pub fn dequeue(&mut self) -> Option<T> {
        self.dequeue_with_priority().map(|(item, _)| item)
    }

    pub fn dequeue_with_priority(&mut self) -> Option<(T, f64)> {
        self.heap.pop().map(|entry| (entry.item, entry.priority.0))
    }

    /// Lowest priority currently queued.
    pub fn peek_priority(&self) -> Option<f64> {
        self.heap.peek().map(|entry| entry.priority.0)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Copy, Clone, Debug, Default)]
struct FloatOrd(f64);

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FloatOrd {}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

#[derive(Clone, Debug)]
struct QueueEntry<T> {
    item: T,
    priority: FloatOrd,
    sequence: u64,
}

impl<T> PartialEq for QueueEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.sequence == other.sequence
    }
}

impl<T> Eq for QueueEntry<T> {}

impl<T> Ord for QueueEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by priority.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl<T> PartialOrd for QueueEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
