use std::hint::black_box;
use std::time::{Duration, Instant};

use super::stats::Stats;

/// Outcome of [`time_it`].
#[derive(Debug, Clone, Copy)]
pub struct Timing {
    pub repeats: usize,
    pub total: Duration,
    pub stats: Stats,
}

/// Calls `op` once to warm up, then `repeats` more times, timing every call.
pub fn time_it<R, F>(repeats: usize, mut op: F) -> Timing
where
    F: FnMut() -> R,
{
    black_box(op());

    let mut samples = Vec::with_capacity(repeats);
    let started = Instant::now();

    for _ in 0..repeats {
        let call = Instant::now();
        black_box(op());
        samples.push(call.elapsed());
    }

    Timing {
        repeats,
        total: started.elapsed(),
        stats: Stats::from_samples(&samples),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn calls_op_once_more_than_repeats() {
        let calls = Cell::new(0);

        let timing = time_it(10, || calls.set(calls.get() + 1));

        assert_eq!(calls.get(), 11);
        assert_eq!(timing.repeats, 10);
        assert_eq!(timing.stats.sample_count, 10);
        assert!(timing.stats.max <= timing.total);
    }

    #[test]
    fn measures_elapsed_time() {
        let timing = time_it(3, || std::thread::sleep(Duration::from_millis(2)));

        assert!(timing.stats.min >= Duration::from_millis(2));
        assert!(timing.total >= Duration::from_millis(6));
    }
}
