use crate::{
    core::{Driver, Error, Executor, Folder},
    misc::{ChunkPlan, Try},
};

use super::dispatch;

/* TryReduce */

/// Partitioned parallel reduction with a fallible operation.
///
/// Chunks are planned and combined exactly like [`Reduce`](super::reduce::Reduce).
/// A chunk stops folding at its first failure. Once every worker has been
/// joined, the failure of the lowest failing chunk is returned.
pub struct TryReduce<'a, T, O> {
    items: &'a [T],
    init: T,
    operation: O,
    workers: usize,
}

impl<'a, T, O> TryReduce<'a, T, O> {
    pub fn new(items: &'a [T], init: T, operation: O) -> Self {
        Self {
            items,
            init,
            operation,
            workers: num_cpus::get(),
        }
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;

        self
    }
}

impl<'a, T, O, R> Driver for TryReduce<'a, T, O>
where
    T: Clone + Send + Sync,
    O: Fn(T, T) -> R + Sync,
    R: Try<Output = T>,
    R::Residual: Send,
{
    type Output = Result<T, Error<R::Residual>>;

    fn exec_with<X>(self, executor: X) -> Self::Output
    where
        X: Executor,
    {
        let Self {
            items,
            init,
            operation,
            workers,
        } = self;

        if workers == 0 {
            return Err(Error::InvalidWorkerCount);
        }

        if workers == 1 {
            return TryReduceFolder::<_, R>::new(&operation, init)
                .consume_iter(items.iter().cloned())
                .complete()
                .map_err(|source| Error::Combine { chunk: 0, source });
        }

        if items.is_empty() {
            return Ok(init);
        }

        let plan = ChunkPlan::new(items.len(), workers);
        let partials = dispatch(&executor, &plan, |chunk| {
            items[chunk.range()].split_first().map(|(first, rest)| {
                TryReduceFolder::<_, R>::new(&operation, first.clone())
                    .consume_iter(rest.iter().cloned())
                    .complete()
            })
        })?;

        partials
            .into_iter()
            .enumerate()
            .try_fold(init, |acc, (chunk, partial)| match partial {
                Some(Ok(partial)) => operation(acc, partial)
                    .branch()
                    .map_err(|source| Error::Combine { chunk, source }),
                Some(Err(source)) => Err(Error::Combine { chunk, source }),
                None => Ok(acc),
            })
    }
}

/// Reduces `items` with a fallible `operation` on the default executor.
#[cfg(feature = "default-executor")]
pub fn try_reduce<T, O, R>(
    items: &[T],
    init: T,
    operation: O,
    workers: usize,
) -> Result<T, Error<R::Residual>>
where
    T: Clone + Send + Sync,
    O: Fn(T, T) -> R + Sync,
    R: Try<Output = T>,
    R::Residual: Send,
{
    TryReduce::new(items, init, operation)
        .workers(workers)
        .exec()
}

/* TryReduceFolder */

struct TryReduceFolder<O, R>
where
    R: Try,
{
    operation: O,
    item: Result<R::Output, R::Residual>,
}

impl<O, R> TryReduceFolder<O, R>
where
    R: Try,
{
    fn new(operation: O, item: R::Output) -> Self {
        Self {
            operation,
            item: Ok(item),
        }
    }
}

impl<O, R> Folder<R::Output> for TryReduceFolder<O, R>
where
    O: Fn(R::Output, R::Output) -> R,
    R: Try,
{
    type Result = Result<R::Output, R::Residual>;

    fn consume(mut self, item: R::Output) -> Self {
        if let Ok(left) = self.item {
            self.item = (self.operation)(left, item).branch();
        }

        self
    }

    fn complete(self) -> Self::Result {
        self.item
    }

    fn is_full(&self) -> bool {
        self.item.is_err()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::{misc::NoneError, SequentialExecutor, ThreadExecutor};

    fn checked_add(a: i32, b: i32) -> Option<i32> {
        a.checked_add(b)
    }

    #[test]
    fn succeeds_like_reduce() {
        let items: Vec<i32> = (1..=10).collect();

        for workers in [1, 2, 3, 7, 64] {
            let x = TryReduce::new(&items, 0, checked_add)
                .workers(workers)
                .exec_with(ThreadExecutor::new())
                .unwrap();

            assert_eq!(x, 55, "workers = {}", workers);
        }
    }

    #[test]
    fn empty_input_returns_init() {
        for workers in [1, 5] {
            let x = TryReduce::new(&[], 9, checked_add)
                .workers(workers)
                .exec_with(ThreadExecutor::new())
                .unwrap();

            assert_eq!(x, 9);
        }
    }

    #[test]
    fn lowest_failing_chunk_is_reported() {
        let items: Vec<i32> = (0..40).collect();
        let op = |a: i32, b: i32| -> Result<i32, String> {
            if b == 17 || b == 33 {
                Err(format!("rejected {}", b))
            } else {
                Ok(a + b)
            }
        };

        let err = TryReduce::new(&items, 0, op)
            .workers(4)
            .exec_with(ThreadExecutor::new())
            .unwrap_err();

        match err {
            Error::Combine { chunk, source } => {
                assert_eq!(chunk, 1);
                assert_eq!(source, "rejected 17");
            }
            err => panic!("unexpected error: {:?}", err),
        }
    }

    #[test]
    fn failing_chunk_stops_folding() {
        let items = vec![1i32; 100];
        let calls = AtomicUsize::new(0);
        let op = |_: i32, _: i32| -> Result<i32, &'static str> {
            calls.fetch_add(1, Ordering::SeqCst);
            Err("nope")
        };

        let err = TryReduce::new(&items, 0, op)
            .workers(2)
            .exec_with(SequentialExecutor)
            .unwrap_err();

        assert_eq!(err.chunk(), Some(0));
        // one failed combine per chunk, the final combination never runs
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn failure_while_combining_partials() {
        let items = vec![i32::MAX, i32::MAX];

        let err = TryReduce::new(&items, 0, checked_add)
            .workers(2)
            .exec_with(ThreadExecutor::new())
            .unwrap_err();

        assert!(matches!(
            err,
            Error::Combine {
                chunk: 1,
                source: NoneError
            }
        ));
    }

    #[test]
    fn single_worker_failures_belong_to_chunk_zero() {
        let items = vec![i32::MAX, 1];

        let err = try_reduce(&items, 0, checked_add, 1).unwrap_err();

        assert_eq!(err.chunk(), Some(0));
        assert_eq!(err.to_string(), "combine operation failed in chunk 0");
    }
}
