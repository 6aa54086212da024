//! Array-backed binary min-heap keyed by each item's priority.
//!
//! Uses 0-indexed storage: parent = (i - 1) / 2, children = 2i + 1 and 2i + 2.

use crate::error::SearchError;

/// Accumulated path cost, optionally plus a heuristic estimate.
pub type Cost = u64;

/// Anything that can be ordered inside a [`MinHeap`].
pub trait HeapItem {
    fn priority(&self) -> Cost;
}

impl<T> HeapItem for (Cost, T) {
    fn priority(&self) -> Cost {
        self.0
    }
}

/// A binary min-heap. Ties between equal priorities come out in no
/// particular order.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    items: Vec<T>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: HeapItem> MinHeap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Number of items currently in the heap.
    #[inline]
    pub fn size(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The minimum-priority item, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Appends `item` and sifts it up past every parent with a strictly
    /// larger priority.
    pub fn insert(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the minimum-priority item.
    pub fn extract_min(&mut self) -> Result<T, SearchError> {
        if self.items.is_empty() {
            return Err(SearchError::EmptyHeap);
        }

        // the last item takes the root slot, then sinks into place
        let root = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Ok(root)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[index].priority() < self.items[parent].priority() {
                self.items.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.items[left].priority() < self.items[smallest].priority() {
                smallest = left;
            }
            if right < len && self.items[right].priority() < self.items[smallest].priority() {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.items.swap(index, smallest);
            index = smallest;
        }
    }

    /// Checks the heap property over every parent/child pair.
    #[cfg(test)]
    fn is_heap(&self) -> bool {
        (1..self.items.len())
            .all(|child| self.items[(child - 1) / 2].priority() <= self.items[child].priority())
    }
}
