use crate::error::SortError;
use crate::primitives::{Depth, DEFAULT_RECURSION_LIMIT};
use crate::Sorter;

/// Top-down merge sort - O(n log n), O(n) scratch space, stable.
pub struct MergeSort {
    pub recursion_limit: usize,
}

impl MergeSort {
    pub fn new(recursion_limit: usize) -> Self {
        Self { recursion_limit }
    }
}

impl Default for MergeSort {
    fn default() -> Self {
        Self::new(DEFAULT_RECURSION_LIMIT)
    }
}

impl<T: Ord + Clone> Sorter<T> for MergeSort {
    fn name(&self) -> &'static str {
        "merge_recursive"
    }

    fn sort(&self, data: &mut [T]) -> Result<(), SortError> {
        let mut scratch = Vec::with_capacity(data.len());
        let len = data.len();
        sort_range(data, &mut scratch, 0, len, Depth::root(self.recursion_limit)?)
    }
}

fn sort_range<T: Ord + Clone>(
    data: &mut [T],
    scratch: &mut Vec<T>,
    start: usize,
    end: usize,
    depth: Depth,
) -> Result<(), SortError> {
    if end - start < 2 {
        return Ok(());
    }

    let mid = (start + end) / 2;
    sort_range(data, scratch, start, mid, depth.descend()?)?;
    sort_range(data, scratch, mid, end, depth.descend()?)?;
    merge(data, scratch, start, mid, end);
    Ok(())
}

/// Bottom-up merge sort.
///
/// Merges blocks of width 2, 4, 8, ... and finishes with one merge of the
/// sorted power-of-two prefix against the remaining tail when the length is
/// not a power of two.
pub struct BottomUpMergeSort;

impl<T: Ord + Clone> Sorter<T> for BottomUpMergeSort {
    fn name(&self) -> &'static str {
        "merge_iterative"
    }

    fn sort(&self, data: &mut [T]) -> Result<(), SortError> {
        let len = data.len();
        let mut scratch = Vec::with_capacity(len);

        let mut width = 2;
        while width <= len {
            let mut start = 0;
            while start < len {
                let end = (start + width).min(len);
                let mid = (start + width / 2).min(len);
                merge(data, &mut scratch, start, mid, end);
                start = end;
            }
            width *= 2;
        }

        if width / 2 < len {
            merge(data, &mut scratch, 0, width / 2, len);
        }
        Ok(())
    }
}

/// Merge the sorted runs `data[start..mid]` and `data[mid..end]` in place.
///
/// Ties take the left run first. `scratch` is cleared and reused; callers
/// size it once per sort.
pub fn merge<T: Ord + Clone>(
    data: &mut [T],
    scratch: &mut Vec<T>,
    start: usize,
    mid: usize,
    end: usize,
) {
    scratch.clear();

    let (mut i, mut j) = (start, mid);
    while i < mid && j < end {
        if data[j] < data[i] {
            scratch.push(data[j].clone());
            j += 1;
        } else {
            scratch.push(data[i].clone());
            i += 1;
        }
    }

    // One of the runs is exhausted
    scratch.extend_from_slice(&data[i..mid]);
    scratch.extend_from_slice(&data[j..end]);

    data[start..end].clone_from_slice(scratch);
}
