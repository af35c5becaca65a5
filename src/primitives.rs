//! Helpers shared by every sort: the swap primitive, the max scan used by
//! selection sort, and the depth guard carried by recursive variants.

use crate::error::SortError;

/// Recursion depth the recursive variants accept unless told otherwise.
pub const DEFAULT_RECURSION_LIMIT: usize = 1000;

/// Exchange the elements at `i` and `j`.
///
/// Panics if either index is out of bounds.
#[inline]
pub fn swap<T>(buffer: &mut [T], i: usize, j: usize) {
    buffer.swap(i, j);
}

/// Index of the largest element in `buffer[..=end]`.
///
/// The scan walks downward from `end` and only moves on a strictly larger
/// value, so among equal maxima the highest index wins.
pub fn index_of_largest<T: Ord>(buffer: &[T], end: usize) -> usize {
    let mut largest = end;
    for j in (0..end).rev() {
        if buffer[largest] < buffer[j] {
            largest = j;
        }
    }
    largest
}

/// Returns true when `data` is in non-descending order.
pub fn is_sorted<T: Ord>(data: &[T]) -> bool {
    data.windows(2).all(|w| w[0] <= w[1])
}

/// Call depth of a recursive sort, checked against its limit on every call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Depth {
    current: usize,
    limit: usize,
}

impl Depth {
    /// Depth of the outermost call.
    pub(crate) fn root(limit: usize) -> Result<Self, SortError> {
        Depth { current: 0, limit }.descend()
    }

    /// Depth of a nested call, or an error once it would exceed the limit.
    pub(crate) fn descend(self) -> Result<Self, SortError> {
        let current = self.current + 1;
        if current > self.limit {
            tracing::trace!(limit = self.limit, "recursion limit reached");
            return Err(SortError::RecursionLimit { limit: self.limit });
        }
        Ok(Depth {
            current,
            limit: self.limit,
        })
    }
}
