use std::collections::VecDeque;

/// Fixed-capacity FIFO window over the most recent samples.
///
/// Invariant: `len() <= capacity` at all times. Pushing onto a full
/// buffer evicts the oldest entry.
#[derive(Debug, Clone)]
pub struct SampleBuffer<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> SampleBuffer<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append at the tail, evicting from the head when full. O(1)
    /// amortized.
    pub fn push(&mut self, entry: T) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Current contents, oldest first. Non-mutating and restartable.
    pub fn items(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
