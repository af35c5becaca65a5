//! Array-backed binary min-heap and the heap sort built on it.
//!
//! Node `idx` has children at `2 * idx + 1` and `2 * idx + 2` and its parent
//! at `(idx - 1) / 2`. Every node is less than or equal to its children
//! between operations.

use crate::error::{HeapError, SortError};
use crate::primitives::swap;
use crate::Sorter;

#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    items: Vec<T>,
}

impl<T: Ord> MinHeap<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Build a heap in O(n) by sifting down every internal node, last first.
    ///
    /// Holds the same elements as inserting them one by one, though the
    /// internal layout may differ.
    pub fn heapify(items: Vec<T>) -> Self {
        let mut heap = Self { items };
        for idx in (0..heap.items.len() / 2).rev() {
            heap.sift_down(idx);
        }
        heap
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The smallest element, if any.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    pub fn insert(&mut self, value: T) {
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
    }

    /// Remove and return the smallest element.
    pub fn extract_min(&mut self) -> Result<T, HeapError> {
        if self.items.is_empty() {
            return Err(HeapError::Empty);
        }

        let last = self.items.len() - 1;
        swap(&mut self.items, 0, last);
        let min = self.items.pop().ok_or(HeapError::Empty)?;
        self.sift_down(0);
        Ok(min)
    }

    /// Drain the heap by repeated extraction, smallest first.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.items.len());
        while let Ok(min) = self.extract_min() {
            sorted.push(min);
        }
        sorted
    }

    /// Check the heap property on every parent/child pair.
    pub fn is_valid(&self) -> bool {
        (1..self.items.len()).all(|idx| self.items[(idx - 1) / 2] <= self.items[idx])
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if self.items[idx] < self.items[parent] {
                swap(&mut self.items, idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            if left >= len {
                break;
            }

            let mut smaller = left;
            if right < len && self.items[right] < self.items[left] {
                smaller = right;
            }

            if self.items[smaller] < self.items[idx] {
                swap(&mut self.items, smaller, idx);
                idx = smaller;
            } else {
                break;
            }
        }
    }
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Builds by sequential insertion, O(n log n).
impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut heap = Self::with_capacity(iter.size_hint().0);
        heap.extend(iter);
        heap
    }
}

/// Heap sort - O(n log n), O(n) auxiliary heap, not stable.
///
/// Inserts a copy of every element into a [`MinHeap`], extracts them back in
/// ascending order and writes the result over the input.
pub struct HeapSort;

impl<T: Ord + Clone> Sorter<T> for HeapSort {
    fn name(&self) -> &'static str {
        "heap_sort"
    }

    fn sort(&self, data: &mut [T]) -> Result<(), SortError> {
        let mut heap: MinHeap<T> = data.iter().cloned().collect();

        let mut sorted = Vec::with_capacity(data.len());
        for _ in 0..data.len() {
            sorted.push(heap.extract_min()?);
        }

        data.clone_from_slice(&sorted);
        Ok(())
    }
}
