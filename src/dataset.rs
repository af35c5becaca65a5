//! Input generation for the benchmark table.

use std::fmt;

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Smallest value a random dataset may contain.
pub const MIN_VALUE: i64 = -10_000;
/// Largest value a random dataset may contain.
pub const MAX_VALUE: i64 = 10_000;

/// Shape of a generated input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DatasetKind {
    Random,
    Sorted,
    ReverseSorted,
    #[serde(rename = "ALL_ELEMENTS_EQUAL")]
    AllEqual,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 4] = [
        DatasetKind::Random,
        DatasetKind::Sorted,
        DatasetKind::ReverseSorted,
        DatasetKind::AllEqual,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DatasetKind::Random => "RANDOM",
            DatasetKind::Sorted => "SORTED",
            DatasetKind::ReverseSorted => "REVERSE_SORTED",
            DatasetKind::AllEqual => "ALL_ELEMENTS_EQUAL",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Generate `len` values shaped by `kind`.
///
/// Every kind starts from the same uniform draw in `[MIN_VALUE, MAX_VALUE]`;
/// `AllEqual` repeats its first value.
pub fn generate<R: Rng>(kind: DatasetKind, len: usize, rng: &mut R) -> Vec<i64> {
    let mut data: Vec<i64> = (0..len)
        .map(|_| rng.gen_range(MIN_VALUE..=MAX_VALUE))
        .collect();

    match kind {
        DatasetKind::Random => {}
        DatasetKind::Sorted => data.sort(),
        DatasetKind::ReverseSorted => {
            data.sort();
            data.reverse();
        }
        DatasetKind::AllEqual => {
            if let Some(&first) = data.first() {
                data.fill(first);
            }
        }
    }
    data
}
