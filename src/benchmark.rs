//! Benchmark the classical sorts
//!
//! Prints the average running time of every algorithm for each dataset kind
//! and input size, as a table or as JSON.

use std::path::PathBuf;

use clap::Parser;
use sortbench::bench;
use sortbench::config::{BenchConfig, OutputFormat};
use sortbench::dataset::DatasetKind;
use sortbench::report::{render_table, to_json};
use sortbench::BenchError;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "benchmark")]
#[command(about = "Compare classical sorting algorithms across input sizes and shapes")]
struct Cli {
    /// TOML file with run parameters; flags override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Input sizes, comma separated
    #[arg(long, value_delimiter = ',')]
    sizes: Option<Vec<usize>>,

    /// Dataset kinds, comma separated
    #[arg(long, value_enum, value_delimiter = ',')]
    kinds: Option<Vec<DatasetKind>>,

    /// Timed repetitions per cell
    #[arg(long)]
    runs: Option<u32>,

    #[arg(long)]
    seed: Option<u64>,

    /// Maximum call depth for the recursive variants
    #[arg(long)]
    recursion_limit: Option<usize>,

    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

impl Cli {
    fn into_config(self) -> Result<BenchConfig, BenchError> {
        let mut config = match &self.config {
            Some(path) => BenchConfig::from_file(path)?,
            None => BenchConfig::default(),
        };

        if let Some(sizes) = self.sizes {
            config.sizes = sizes;
        }
        if let Some(kinds) = self.kinds {
            config.kinds = kinds;
        }
        if let Some(runs) = self.runs {
            config.runs = runs;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(limit) = self.recursion_limit {
            config.recursion_limit = limit;
        }
        if let Some(format) = self.format {
            config.format = format;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), BenchError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("sortbench=info,benchmark=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Cli::parse().into_config()?;
    info!(
        sizes = ?config.sizes,
        kinds = ?config.kinds,
        runs = config.runs,
        seed = config.seed,
        "starting benchmark"
    );

    let report = bench::run(&config)?;

    match config.format {
        OutputFormat::Table => print!("{}", render_table(&report)),
        OutputFormat::Json => println!("{}", to_json(&report)?),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::parse_from([
            "benchmark",
            "--sizes",
            "3,30",
            "--kinds",
            "sorted,all-equal",
            "--runs",
            "4",
            "--format",
            "json",
        ]);
        let config = cli.into_config().unwrap();

        assert_eq!(config.sizes, vec![3, 30]);
        assert_eq!(config.kinds, vec![DatasetKind::Sorted, DatasetKind::AllEqual]);
        assert_eq!(config.runs, 4);
        assert_eq!(config.format, OutputFormat::Json);
        assert_eq!(config.seed, BenchConfig::default().seed);
    }

    #[test]
    fn test_invalid_flags_rejected() {
        let cli = Cli::parse_from(["benchmark", "--recursion-limit", "0"]);
        assert!(matches!(cli.into_config(), Err(BenchError::InvalidConfig(_))));
    }
}
