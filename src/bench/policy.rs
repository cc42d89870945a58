use std::fmt;

use rayon::prelude::*;

use crate::{Driver, Error, Reduce, ThreadExecutor};

const LANES: usize = 8;
const PAR_CHUNK: usize = LANES * 1024;

/// A way of reducing a sequence the benchmark compares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Policy {
    /// `Iterator::fold`, the plain sequential loop.
    NoPolicy,
    /// `Iterator::reduce` over the sequence, combined with `init` at the end.
    Sequential,
    /// rayon's `reduce_with` over a parallel iterator.
    Parallel,
    /// Eight independent lane accumulators, merged at the end. Allows the
    /// compiler to vectorize but reorders the operations.
    Unsequenced,
    /// rayon over large chunks, each folded with lane accumulators.
    ParallelUnsequenced,
    /// The partitioned reducer on fresh threads.
    Custom { workers: usize },
}

impl Policy {
    pub const BASELINES: [Policy; 5] = [
        Policy::NoPolicy,
        Policy::Sequential,
        Policy::Parallel,
        Policy::Unsequenced,
        Policy::ParallelUnsequenced,
    ];

    pub fn run<T, O>(&self, items: &[T], init: T, operation: O) -> Result<T, Error>
    where
        T: Copy + Send + Sync,
        O: Fn(T, T) -> T + Send + Sync,
    {
        let value = match *self {
            Self::NoPolicy => items.iter().copied().fold(init, &operation),
            Self::Sequential => items
                .iter()
                .copied()
                .reduce(&operation)
                .map_or(init, |x| operation(init, x)),
            Self::Parallel => items
                .par_iter()
                .copied()
                .reduce_with(&operation)
                .map_or(init, |x| operation(init, x)),
            Self::Unsequenced => lane_fold(items, &operation).map_or(init, |x| operation(init, x)),
            Self::ParallelUnsequenced => items
                .par_chunks(PAR_CHUNK)
                .filter_map(|chunk| lane_fold(chunk, &operation))
                .reduce_with(&operation)
                .map_or(init, |x| operation(init, x)),
            Self::Custom { workers } => {
                return Reduce::new(items, init, operation)
                    .workers(workers)
                    .exec_with(ThreadExecutor::new());
            }
        };

        Ok(value)
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPolicy => f.write_str("no policy"),
            Self::Sequential => f.write_str("seq"),
            Self::Parallel => f.write_str("parallel"),
            Self::Unsequenced => f.write_str("unsequenced"),
            Self::ParallelUnsequenced => f.write_str("parallel unsequenced"),
            Self::Custom { workers } => write!(f, "for {} threads", workers),
        }
    }
}

fn lane_fold<T, O>(items: &[T], operation: &O) -> Option<T>
where
    T: Copy,
    O: Fn(T, T) -> T,
{
    let mut chunks = items.chunks_exact(LANES);
    let mut lanes: Option<[T; LANES]> = chunks.next().and_then(|chunk| chunk.try_into().ok());

    if let Some(lanes) = lanes.as_mut() {
        for chunk in chunks.by_ref() {
            for (lane, &x) in lanes.iter_mut().zip(chunk) {
                *lane = operation(*lane, x);
            }
        }
    }

    let head = lanes.and_then(|lanes| lanes.into_iter().reduce(operation));

    chunks
        .remainder()
        .iter()
        .fold(head, |acc, &x| Some(acc.map_or(x, |a| operation(a, x))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bench::ops::add;

    #[test]
    fn every_policy_agrees_on_addition() {
        let items: Vec<i32> = (0..100_003).map(|i| (i * 7) % 2001 - 1000).collect();
        let expected = items.iter().fold(17i32, |a, &b| a.wrapping_add(b));

        for policy in Policy::BASELINES
            .iter()
            .copied()
            .chain([2, 3, 16].iter().map(|&workers| Policy::Custom { workers }))
        {
            assert_eq!(policy.run(&items, 17, add).unwrap(), expected, "{}", policy);
        }
    }

    #[test]
    fn empty_input_returns_init() {
        for policy in Policy::BASELINES.iter().copied().chain(Some(Policy::Custom { workers: 4 })) {
            assert_eq!(policy.run(&[], 5, add).unwrap(), 5, "{}", policy);
        }
    }

    #[test]
    fn lane_fold_short_inputs() {
        assert_eq!(lane_fold(&[] as &[i32], &add), None);
        assert_eq!(lane_fold(&[3], &add), Some(3));
        assert_eq!(lane_fold(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10], &add), Some(55));
    }

    #[test]
    fn labels() {
        assert_eq!(Policy::ParallelUnsequenced.to_string(), "parallel unsequenced");
        assert_eq!(Policy::Custom { workers: 4 }.to_string(), "for 4 threads");
    }

    #[test]
    fn custom_rejects_zero_workers() {
        assert!(Policy::Custom { workers: 0 }.run(&[1, 2], 0, add).is_err());
    }
}
