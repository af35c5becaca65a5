//! Classical Sorting Benchmark
//!
//! Selection, insertion, merge and heap sort in iterative and recursive
//! forms, measured against the standard library sort over random, sorted,
//! reverse-sorted and all-equal inputs.

pub mod baselines;
pub mod bench;
pub mod config;
pub mod dataset;
pub mod error;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod primitives;
pub mod report;
pub mod selection;

pub use error::{BenchError, HeapError, SortError};
pub use heap::MinHeap;

/// Trait for sorting implementations
pub trait Sorter<T: Ord> {
    /// Short identifier used in reports
    fn name(&self) -> &'static str;

    /// Sort the slice in-place in ascending order
    fn sort(&self, data: &mut [T]) -> Result<(), SortError>;
}

#[cfg(test)]
pub(crate) use tests::{test_sorter, test_stable_sorter, Tagged};
