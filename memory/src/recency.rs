use serde::{Serialize, Serializer};
use std::collections::VecDeque;

/// Ordered list holding at most `capacity` items, newest first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecencyList<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T> RecencyList<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert `item` at the front, evicting the oldest entries past capacity.
    pub fn push(&mut self, item: T) {
        self.items.push_front(item);
        self.items.truncate(self.capacity);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate newest to oldest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// The `n` most recent items.
    pub fn first(&self, n: usize) -> impl Iterator<Item = &T> {
        self.items.iter().take(n)
    }
}

impl<T: Clone> RecencyList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T: Serialize> Serialize for RecencyList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.items.iter())
    }
}
