use crate::error::SortError;
use crate::primitives::{swap, Depth, DEFAULT_RECURSION_LIMIT};
use crate::Sorter;

/// Insertion sort - O(n²) worst case, O(n) on sorted input, in-place, stable.
pub struct InsertionSort;

impl<T: Ord> Sorter<T> for InsertionSort {
    fn name(&self) -> &'static str {
        "insertion_iterative"
    }

    fn sort(&self, data: &mut [T]) -> Result<(), SortError> {
        for i in 1..data.len() {
            shift_left(data, i);
        }
        Ok(())
    }
}

/// Insertion sort whose outer loop recurses once per element.
///
/// The shifting itself stays iterative. Needs `len + 1` calls.
pub struct RecursiveInsertionSort {
    pub recursion_limit: usize,
}

impl RecursiveInsertionSort {
    pub fn new(recursion_limit: usize) -> Self {
        Self { recursion_limit }
    }
}

impl Default for RecursiveInsertionSort {
    fn default() -> Self {
        Self::new(DEFAULT_RECURSION_LIMIT)
    }
}

impl<T: Ord> Sorter<T> for RecursiveInsertionSort {
    fn name(&self) -> &'static str {
        "insertion_recursive"
    }

    fn sort(&self, data: &mut [T]) -> Result<(), SortError> {
        insert_from(data, 0, Depth::root(self.recursion_limit)?)
    }
}

fn insert_from<T: Ord>(data: &mut [T], i: usize, depth: Depth) -> Result<(), SortError> {
    if i == data.len() {
        return Ok(());
    }

    shift_left(data, i);

    insert_from(data, i + 1, depth.descend()?)
}

/// Move `data[i]` left past every strictly larger neighbour.
#[inline]
fn shift_left<T: Ord>(data: &mut [T], i: usize) {
    let mut j = i;
    while j > 0 && data[j] < data[j - 1] {
        swap(data, j, j - 1);
        j -= 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BenchConfig, MAX_RECURSION_LIMIT};
    use crate::{test_sorter, test_stable_sorter};

    #[test]
    fn test_insertion_iterative() {
        test_sorter(&InsertionSort);
        test_stable_sorter(&InsertionSort);
    }

    #[test]
    fn test_insertion_recursive() {
        test_sorter(&RecursiveInsertionSort::default());
        test_stable_sorter(&RecursiveInsertionSort::default());
    }

    #[test]
    fn test_recursion_limit() {
        let sorter = RecursiveInsertionSort::new(5);

        let mut fits = vec![4, 3, 2, 1];
        sorter.sort(&mut fits).unwrap();
        assert_eq!(fits, vec![1, 2, 3, 4]);

        let mut too_long = vec![5, 4, 3, 2, 1];
        assert_eq!(
            sorter.sort(&mut too_long),
            Err(SortError::RecursionLimit { limit: 5 })
        );
    }

    #[test]
    fn test_max_limit_fits_main_thread_stack() {
        let limit = MAX_RECURSION_LIMIT;
        let handle = std::thread::Builder::new()
            .stack_size(8 << 20)
            .spawn(move || {
                let mut data: Vec<i64> = (0..(limit - 2) as i64).collect();
                let result = RecursiveInsertionSort::new(limit).sort(&mut data);
                (result, data.len())
            })
            .unwrap();

        let (result, len) = handle.join().unwrap();
        assert_eq!(result, Ok(()));
        assert_eq!(len, limit - 2);
        assert!(BenchConfig {
            recursion_limit: limit,
            ..BenchConfig::default()
        }
        .validate()
        .is_ok());
    }

    #[test]
    fn test_empty_input_uses_one_call() {
        let sorter = RecursiveInsertionSort::new(1);
        let mut empty: Vec<i64> = vec![];
        assert!(sorter.sort(&mut empty).is_ok());

        let mut single = vec![7];
        assert!(sorter.sort(&mut single).is_err());
    }
}
