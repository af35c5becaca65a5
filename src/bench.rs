//! Timing driver: runs every algorithm over every dataset kind and size.

use std::time::{Duration, Instant};

use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::baselines::StdSort;
use crate::config::BenchConfig;
use crate::dataset::{generate, DatasetKind};
use crate::error::{BenchError, SortError};
use crate::heap::HeapSort;
use crate::insertion::{InsertionSort, RecursiveInsertionSort};
use crate::merge::{BottomUpMergeSort, MergeSort};
use crate::selection::{RecursiveSelectionSort, SelectionSort};
use crate::Sorter;

/// The benchmarked algorithms, in table column order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    SelectionIterative,
    SelectionRecursive,
    InsertionIterative,
    InsertionRecursive,
    StdSort,
    MergeRecursive,
    MergeIterative,
    HeapSort,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::SelectionIterative,
        Algorithm::SelectionRecursive,
        Algorithm::InsertionIterative,
        Algorithm::InsertionRecursive,
        Algorithm::StdSort,
        Algorithm::MergeRecursive,
        Algorithm::MergeIterative,
        Algorithm::HeapSort,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Algorithm::SelectionIterative => "Selection Sort (iterative)",
            Algorithm::SelectionRecursive => "Selection Sort (recursive)",
            Algorithm::InsertionIterative => "Insertion Sort (iterative)",
            Algorithm::InsertionRecursive => "Insertion Sort (recursive)",
            Algorithm::StdSort => "Library sort()",
            Algorithm::MergeRecursive => "Merge Sort (recursive)",
            Algorithm::MergeIterative => "Merge Sort (iterative)",
            Algorithm::HeapSort => "Heap Sort",
        }
    }

    /// Build the sorter, giving recursive variants `recursion_limit`.
    pub fn sorter(self, recursion_limit: usize) -> Box<dyn Sorter<i64>> {
        match self {
            Algorithm::SelectionIterative => Box::new(SelectionSort),
            Algorithm::SelectionRecursive => Box::new(RecursiveSelectionSort::new(recursion_limit)),
            Algorithm::InsertionIterative => Box::new(InsertionSort),
            Algorithm::InsertionRecursive => Box::new(RecursiveInsertionSort::new(recursion_limit)),
            Algorithm::StdSort => Box::new(StdSort),
            Algorithm::MergeRecursive => Box::new(MergeSort::new(recursion_limit)),
            Algorithm::MergeIterative => Box::new(BottomUpMergeSort),
            Algorithm::HeapSort => Box::new(HeapSort),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    Timed { avg_secs: f64 },
    RecursionLimit,
}

#[derive(Debug, Clone, Serialize)]
pub struct Cell {
    pub algorithm: &'static str,
    #[serde(flatten)]
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub kind: DatasetKind,
    pub size: usize,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub runs: u32,
    pub seed: u64,
    pub recursion_limit: usize,
    pub rows: Vec<Row>,
}

/// Verify `sorter` on a copy of `data`, then average `runs` timed sorts of
/// fresh copies.
///
/// Copying happens outside the timed section. Hitting the recursion limit
/// is an outcome, not an error; wrong output is an error.
pub fn measure(
    sorter: &dyn Sorter<i64>,
    kind: DatasetKind,
    data: &[i64],
    runs: u32,
) -> Result<Outcome, BenchError> {
    let mut checked = data.to_vec();
    if !completed(sorter, sorter.sort(&mut checked))? {
        return Ok(Outcome::RecursionLimit);
    }

    let mut expected = data.to_vec();
    expected.sort();
    if checked != expected {
        return Err(BenchError::Incorrect {
            algorithm: sorter.name(),
            kind: kind.to_string(),
            len: data.len(),
        });
    }

    let mut total_time = Duration::ZERO;
    for _ in 0..runs {
        let mut copy = data.to_vec();

        let start = Instant::now();
        let result = sorter.sort(&mut copy);
        total_time += start.elapsed();

        if !completed(sorter, result)? {
            return Ok(Outcome::RecursionLimit);
        }
    }

    Ok(Outcome::Timed {
        avg_secs: total_time.as_secs_f64() / runs.max(1) as f64,
    })
}

fn completed(sorter: &dyn Sorter<i64>, result: Result<(), SortError>) -> Result<bool, BenchError> {
    match result {
        Ok(()) => Ok(true),
        Err(SortError::RecursionLimit { limit }) => {
            warn!(algorithm = sorter.name(), limit, "recursion limit exceeded");
            Ok(false)
        }
        Err(source) => Err(BenchError::Sort {
            algorithm: sorter.name(),
            source,
        }),
    }
}

/// Run the full table described by `config`.
///
/// All algorithms in a row sort the same generated input.
pub fn run(config: &BenchConfig) -> Result<Report, BenchError> {
    config.validate()?;

    let sorters: Vec<(Algorithm, Box<dyn Sorter<i64>>)> = Algorithm::ALL
        .iter()
        .map(|&algorithm| (algorithm, algorithm.sorter(config.recursion_limit)))
        .collect();

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(config.seed);
    let mut rows = Vec::with_capacity(config.kinds.len() * config.sizes.len());

    for &kind in &config.kinds {
        for &size in &config.sizes {
            let data = generate(kind, size, &mut rng);

            let mut cells = Vec::with_capacity(sorters.len());
            for (algorithm, sorter) in &sorters {
                let outcome = measure(sorter.as_ref(), kind, &data, config.runs)?;
                debug!(%kind, size, algorithm = algorithm.header(), ?outcome, "measured");
                cells.push(Cell {
                    algorithm: sorter.name(),
                    outcome,
                });
            }

            info!(%kind, size, "row complete");
            rows.push(Row { kind, size, cells });
        }
    }

    Ok(Report {
        runs: config.runs,
        seed: config.seed,
        recursion_limit: config.recursion_limit,
        rows,
    })
}
