use super::ops::Operation;

/// Sequences of at least this length get [`LARGE_REPEATS`] instead of
/// [`SMALL_REPEATS`].
pub const LARGE_SIZE: usize = 1_000_000;
pub const SMALL_REPEATS: usize = 1000;
pub const LARGE_REPEATS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid size '{input}': {reason}")]
    InvalidSize { input: String, reason: String },

    #[error("unknown profile '{0}', expected one of: quick, standard, full")]
    UnknownProfile(String),

    #[error("unknown operation '{0}', expected 'light' or 'heavy'")]
    UnknownOperation(String),

    #[error("maximum worker count must be at least 2, got {0}")]
    InvalidMaxWorkers(usize),

    #[error("nothing to benchmark: {0} list is empty")]
    Empty(&'static str),
}

/// Settings of one benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchConfig {
    pub sizes: Vec<usize>,
    /// Fixed repeat count; derived from the size when `None`.
    pub repeats: Option<usize>,
    /// The custom reducer is measured for `2..=max_workers` workers.
    pub max_workers: usize,
    pub seed: u64,
    pub operations: Vec<Operation>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: full_profile(),
            repeats: None,
            max_workers: 2 * num_cpus::get(),
            seed: 42,
            operations: vec![Operation::Light, Operation::Heavy],
        }
    }
}

impl BenchConfig {
    pub fn repeats_for(&self, size: usize) -> usize {
        match self.repeats {
            Some(repeats) => repeats,
            None if size >= LARGE_SIZE => LARGE_REPEATS,
            None => SMALL_REPEATS,
        }
    }

    pub fn worker_counts(&self) -> impl Iterator<Item = usize> {
        2..=self.max_workers
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sizes.is_empty() {
            return Err(ConfigError::Empty("size"));
        }
        if self.operations.is_empty() {
            return Err(ConfigError::Empty("operation"));
        }
        if self.max_workers < 2 {
            return Err(ConfigError::InvalidMaxWorkers(self.max_workers));
        }

        Ok(())
    }
}

pub fn quick_profile() -> Vec<usize> {
    vec![10_000]
}

pub fn standard_profile() -> Vec<usize> {
    vec![10_000, 1_000_000]
}

/// Every size, up to the 100M element sequence.
pub fn full_profile() -> Vec<usize> {
    vec![10_000, 1_000_000, 100_000_000]
}

pub fn get_profile(name: &str) -> Result<Vec<usize>, ConfigError> {
    match name {
        "quick" => Ok(quick_profile()),
        "standard" => Ok(standard_profile()),
        "full" => Ok(full_profile()),
        _ => Err(ConfigError::UnknownProfile(name.to_owned())),
    }
}

/// Parse a human-readable size string.
///
/// Supports `K`/`M` suffixes (either case), underscores and plain numbers:
/// `10K`, `1M`, `2.5m`, `1_000_000`, `1000000`.
pub fn parse_size(s: &str) -> Result<usize, ConfigError> {
    let s = s.trim();
    let invalid = |reason: String| ConfigError::InvalidSize {
        input: s.to_owned(),
        reason,
    };

    let (digits, multiplier) = if let Some(prefix) = s.strip_suffix(['M', 'm']) {
        (prefix, 1_000_000.0)
    } else if let Some(prefix) = s.strip_suffix(['K', 'k']) {
        (prefix, 1_000.0)
    } else {
        return s
            .replace('_', "")
            .parse::<usize>()
            .map_err(|e| invalid(e.to_string()));
    };

    let num: f64 = digits
        .replace('_', "")
        .parse()
        .map_err(|e: std::num::ParseFloatError| invalid(e.to_string()))?;
    if !num.is_finite() || num < 0.0 {
        return Err(invalid("size must be a non-negative number".to_owned()));
    }

    Ok((num * multiplier) as usize)
}

/// Parse a list of size strings.
pub fn parse_sizes<S: AsRef<str>>(raw: &[S]) -> Result<Vec<usize>, ConfigError> {
    raw.iter().map(|s| parse_size(s.as_ref())).collect()
}

/// Render a size the way [`parse_size`] reads it.
pub fn format_size(size: usize) -> String {
    if size >= 1_000_000 && size % 1_000_000 == 0 {
        format!("{}M", size / 1_000_000)
    } else if size >= 1_000 && size % 1_000 == 0 {
        format!("{}K", size / 1_000)
    } else {
        format!("{}", size)
    }
}
