use crate::{
    core::{Driver, Error, Executor, Folder},
    misc::ChunkPlan,
};

use super::dispatch;

/* Reduce */

/// Partitioned parallel reduction of a slice.
///
/// The slice is split into at most `workers` contiguous chunks. Every chunk is
/// folded on its own worker, seeded with its first element. The partials are
/// then folded on the calling thread in chunk order, seeded with `init`.
///
/// For an associative `operation` the result is the same as
/// `items.iter().fold(init, operation)`.
pub struct Reduce<'a, T, O> {
    items: &'a [T],
    init: T,
    operation: O,
    workers: usize,
}

impl<'a, T, O> Reduce<'a, T, O> {
    /// Uses one worker per logical CPU unless configured otherwise.
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

impl<'a, T, O> Driver for Reduce<'a, T, O>
where
    T: Clone + Send + Sync,
    O: Fn(T, T) -> T + Sync,
{
    type Output = Result<T, Error>;

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
            return Ok(ReduceFolder::new(&operation, init)
                .consume_iter(items.iter().cloned())
                .complete());
        }

        if items.is_empty() {
            return Ok(init);
        }

        let plan = ChunkPlan::new(items.len(), workers);
        let partials = dispatch(&executor, &plan, |chunk| {
            items[chunk.range()].split_first().map(|(first, rest)| {
                ReduceFolder::new(&operation, first.clone())
                    .consume_iter(rest.iter().cloned())
                    .complete()
            })
        })?;

        Ok(ReduceFolder::new(&operation, init)
            .consume_iter(partials.into_iter().flatten())
            .complete())
    }
}

/// Reduces `items` with `workers` workers on the default executor.
#[cfg(feature = "default-executor")]
pub fn reduce<T, O>(items: &[T], init: T, operation: O, workers: usize) -> Result<T, Error>
where
    T: Clone + Send + Sync,
    O: Fn(T, T) -> T + Sync,
{
    Reduce::new(items, init, operation).workers(workers).exec()
}

/* ReduceFolder */

struct ReduceFolder<O, T> {
    operation: O,
    item: T,
}

impl<O, T> ReduceFolder<O, T> {
    fn new(operation: O, item: T) -> Self {
        Self { operation, item }
    }
}

impl<O, T> Folder<T> for ReduceFolder<O, T>
where
    O: Fn(T, T) -> T,
{
    type Result = T;

    fn consume(mut self, item: T) -> Self {
        self.item = (self.operation)(self.item, item);

        self
    }

    fn consume_iter<X>(self, iter: X) -> Self
    where
        X: IntoIterator<Item = T>,
    {
        let Self { operation, item } = self;
        let item = iter.into_iter().fold(item, &operation);

        Self { operation, item }
    }

    fn complete(self) -> Self::Result {
        self.item
    }
}
