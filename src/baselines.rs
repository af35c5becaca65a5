use crate::error::SortError;
use crate::Sorter;

/// Standard library stable sort, the reference the classical sorts are
/// measured against.
pub struct StdSort;

impl<T: Ord> Sorter<T> for StdSort {
    fn name(&self) -> &'static str {
        "std_sort"
    }

    #[inline]
    fn sort(&self, data: &mut [T]) -> Result<(), SortError> {
        data.sort();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{test_sorter, test_stable_sorter};

    #[test]
    fn test_std_sort() {
        test_sorter(&StdSort);
        test_stable_sorter(&StdSort);
    }
}
