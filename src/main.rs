use std::error::Error;
use std::io;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use chunked_reduce::bench::config::{self, BenchConfig};
use chunked_reduce::bench::{time_it, DataGenerator, Operation, Policy, Report};

/// Compares the partitioned reducer against the reductions of std and rayon
#[derive(Parser, Debug)]
#[command(name = "reduce-bench", version, about)]
struct Args {
    /// Sequence lengths to benchmark (e.g. 10K,1M,100M)
    #[arg(long, env = "REDUCE_BENCH_SIZES", value_delimiter = ',')]
    sizes: Option<Vec<String>>,

    /// Size profile: quick (10K), standard (10K+1M), full (10K+1M+100M)
    #[arg(long, conflicts_with = "sizes")]
    profile: Option<String>,

    /// Timed calls per policy [default: 1000 below 1M elements, 100 above]
    #[arg(long)]
    repeats: Option<usize>,

    /// The partitioned reducer runs for 2..=N workers [default: 2 x logical CPUs]
    #[arg(long)]
    max_workers: Option<usize>,

    /// Seed of the sequence generator
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Combining operations to measure
    #[arg(long, value_delimiter = ',', default_values_t = [Operation::Light, Operation::Heavy])]
    ops: Vec<Operation>,

    /// Raise the log level (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn into_config(self) -> Result<BenchConfig, config::ConfigError> {
        let defaults = BenchConfig::default();

        let sizes = match (&self.sizes, &self.profile) {
            (Some(raw), _) => config::parse_sizes(raw)?,
            (None, Some(profile)) => config::get_profile(profile)?,
            (None, None) => defaults.sizes,
        };

        let config = BenchConfig {
            sizes,
            repeats: self.repeats,
            max_workers: self.max_workers.unwrap_or(defaults.max_workers),
            seed: self.seed,
            operations: self.ops,
        };
        config.validate()?;

        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(io::stderr)
        .init();

    let config = args.into_config()?;
    info!(
        sizes = ?config.sizes,
        max_workers = config.max_workers,
        seed = config.seed,
        "starting benchmark"
    );

    let mut generator = DataGenerator::new(config.seed);
    let mut report = Report::new(io::stdout().lock());

    for &size in &config.sizes {
        let sequence = generator.sequence(size);
        let repeats = config.repeats_for(size);

        report.sequence(size)?;

        for &operation in &config.operations {
            info!(size, repeats, %operation, "measuring");

            let policies: Vec<Policy> = Policy::BASELINES
                .iter()
                .copied()
                .chain(config.worker_counts().map(|workers| Policy::Custom { workers }))
                .collect();

            verify(&sequence, operation, &policies)?;

            report.operation(operation)?;
            for &policy in &policies {
                if policy == (Policy::Custom { workers: 2 }) {
                    report.custom_heading()?;
                }

                let timing = time_it(repeats, || policy.run(&sequence, 0, operation.combine()));
                report.policy(policy, &timing.stats)?;
            }

            report.blank()?;
            report.flush()?;
        }
    }

    Ok(())
}

/// Runs every policy once, failing on errors and warning when an
/// associative operation yields different results.
fn verify(sequence: &[i32], operation: Operation, policies: &[Policy]) -> Result<(), Box<dyn Error>> {
    let combine = operation.combine();
    let expected = Policy::NoPolicy.run(sequence, 0, combine)?;

    for &policy in policies {
        let value = policy.run(sequence, 0, combine)?;

        if operation.is_associative() && value != expected {
            warn!(%policy, %operation, value, expected, "result differs from the sequential fold");
        }
    }

    Ok(())
}
