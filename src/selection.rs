use crate::error::SortError;
use crate::primitives::{index_of_largest, swap, Depth, DEFAULT_RECURSION_LIMIT};
use crate::Sorter;

/// Selection sort - O(n²), in-place, not stable.
///
/// Moves the largest element of the unsorted prefix to its end, shrinking the
/// prefix by one each step.
pub struct SelectionSort;

impl<T: Ord> Sorter<T> for SelectionSort {
    fn name(&self) -> &'static str {
        "selection_iterative"
    }

    fn sort(&self, data: &mut [T]) -> Result<(), SortError> {
        for i in (0..data.len()).rev() {
            let largest = index_of_largest(data, i);
            swap(data, i, largest);
        }
        Ok(())
    }
}

/// Selection sort with the outer loop written as recursion.
///
/// One call per element plus the base case, so inputs longer than
/// `recursion_limit - 1` fail with [`SortError::RecursionLimit`]. The buffer
/// is left a permutation of the input when that happens.
pub struct RecursiveSelectionSort {
    pub recursion_limit: usize,
}

impl RecursiveSelectionSort {
    pub fn new(recursion_limit: usize) -> Self {
        Self { recursion_limit }
    }
}

impl Default for RecursiveSelectionSort {
    fn default() -> Self {
        Self::new(DEFAULT_RECURSION_LIMIT)
    }
}

impl<T: Ord> Sorter<T> for RecursiveSelectionSort {
    fn name(&self) -> &'static str {
        "selection_recursive"
    }

    fn sort(&self, data: &mut [T]) -> Result<(), SortError> {
        let len = data.len();
        select_into_place(data, len, Depth::root(self.recursion_limit)?)
    }
}

// `unsorted` is the length of the prefix still to be sorted.
fn select_into_place<T: Ord>(
    data: &mut [T],
    unsorted: usize,
    depth: Depth,
) -> Result<(), SortError> {
    if unsorted == 0 {
        return Ok(());
    }

    let i = unsorted - 1;
    let largest = index_of_largest(data, i);
    swap(data, i, largest);

    select_into_place(data, i, depth.descend()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::is_sorted;
    use crate::config::MAX_RECURSION_LIMIT;
    use crate::{test_sorter, Tagged};

    #[test]
    fn test_selection_iterative() {
        test_sorter(&SelectionSort);
    }

    #[test]
    fn test_selection_recursive() {
        test_sorter(&RecursiveSelectionSort::default());
    }

    #[test]
    fn test_recursive_matches_iterative() {
        let input = vec![12, -4, 7, 7, 0, 33, -18, 5, 5, 2];
        let mut a = input.clone();
        let mut b = input;
        SelectionSort.sort(&mut a).unwrap();
        RecursiveSelectionSort::default().sort(&mut b).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_recursion_limit_boundary() {
        // n elements need n + 1 calls
        let sorter = RecursiveSelectionSort::new(10);

        let mut fits: Vec<i64> = (0..9).rev().collect();
        sorter.sort(&mut fits).unwrap();
        assert!(is_sorted(&fits));

        let mut too_long: Vec<i64> = (0..10).rev().collect();
        assert_eq!(
            sorter.sort(&mut too_long),
            Err(SortError::RecursionLimit { limit: 10 })
        );
        let mut restored = too_long.clone();
        restored.sort();
        assert_eq!(restored, (0..10).collect::<Vec<i64>>());
    }

    #[test]
    fn test_max_limit_fits_main_thread_stack() {
        let limit = MAX_RECURSION_LIMIT;
        let handle = std::thread::Builder::new()
            .stack_size(8 << 20)
            .spawn(move || {
                let mut data: Vec<i64> = (0..(limit - 2) as i64).rev().collect();
                let result = RecursiveSelectionSort::new(limit).sort(&mut data);
                (result, is_sorted(&data))
            })
            .unwrap();

        let (result, sorted) = handle.join().unwrap();
        assert_eq!(result, Ok(()));
        assert!(sorted);
    }

    #[test]
    fn test_picks_last_equal_maximum() {
        let mut data = vec![
            Tagged { value: 5, index: 0 },
            Tagged { value: 1, index: 1 },
            Tagged { value: 5, index: 2 },
        ];
        SelectionSort.sort(&mut data).unwrap();
        // The last 5 is already at the boundary, the first one lands before it
        let order: Vec<usize> = data.iter().map(|t| t.index).collect();
        assert_eq!(order, vec![1, 0, 2]);
    }
}
