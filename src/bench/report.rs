//! Console output of a benchmark run.

use std::fmt;
use std::io::{self, Write};
use std::time::Duration;

use super::ops::Operation;
use super::policy::Policy;
use super::stats::Stats;

const LABEL_WIDTH: usize = 24;

/// Writes the result lines of a run to `W`.
pub struct Report<W> {
    out: W,
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn sequence(&mut self, len: usize) -> io::Result<()> {
        writeln!(self.out, "Test sequence with length {}", len)
    }

    pub fn operation(&mut self, operation: Operation) -> io::Result<()> {
        writeln!(self.out, "{}", operation.title())
    }

    /// Heading printed once before the per worker count lines.
    pub fn custom_heading(&mut self) -> io::Result<()> {
        writeln!(self.out, "{:<width$}", "partitioned reduce", width = LABEL_WIDTH)
    }

    pub fn policy(&mut self, policy: Policy, stats: &Stats) -> io::Result<()> {
        let label = match policy {
            Policy::Custom { workers } => format!("   for {} threads:", workers),
            policy => policy.to_string(),
        };

        writeln!(
            self.out,
            "{:<width$}{} (min {}, max {}, n={})",
            label,
            Elapsed(stats.mean),
            Elapsed(stats.min),
            Elapsed(stats.max),
            stats.sample_count,
            width = LABEL_WIDTH,
        )
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Formats a duration with a unit chosen by magnitude.
#[derive(Clone, Copy, Debug)]
pub struct Elapsed(pub Duration);

impl fmt::Display for Elapsed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nanos = self.0.as_nanos();

        if nanos < 1_000 {
            write!(f, "{}ns", nanos)
        } else if nanos < 1_000_000 {
            write!(f, "{:.2}us", nanos as f64 / 1e3)
        } else if nanos < 1_000_000_000 {
            write!(f, "{:.2}ms", nanos as f64 / 1e6)
        } else {
            write!(f, "{:.3}s", self.0.as_secs_f64())
        }
    }
}
