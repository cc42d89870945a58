use std::time::Duration;

/// Descriptive statistics for a set of timing samples.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Stats {
    pub mean: Duration,
    pub median: Duration,
    pub min: Duration,
    pub max: Duration,
    pub stddev: Duration,
    pub sample_count: usize,
}

impl Stats {
    pub fn from_samples(samples: &[Duration]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let mut sorted = samples.to_vec();
        sorted.sort_unstable();

        let n = sorted.len();
        let secs: Vec<f64> = sorted.iter().map(Duration::as_secs_f64).collect();
        let mean = secs.iter().sum::<f64>() / n as f64;
        let variance = if n > 1 {
            secs.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64
        } else {
            0.0
        };

        let median = if n % 2 == 0 {
            (sorted[n / 2 - 1] + sorted[n / 2]) / 2
        } else {
            sorted[n / 2]
        };

        Self {
            mean: Duration::from_secs_f64(mean),
            median,
            min: sorted[0],
            max: sorted[n - 1],
            stddev: Duration::from_secs_f64(variance.sqrt()),
            sample_count: n,
        }
    }
}
