use crate::{
    inner::{reduce::Reduce, try_reduce::TryReduce},
    misc::Try,
};

/// Entry point for partitioned reductions over slices (and anything that
/// derefs to one, like `Vec`).
pub trait ParallelReduce<T> {
    fn par_reduce<O>(&self, init: T, operation: O) -> Reduce<'_, T, O>
    where
        O: Fn(T, T) -> T + Sync;

    fn par_try_reduce<O, R>(&self, init: T, operation: O) -> TryReduce<'_, T, O>
    where
        O: Fn(T, T) -> R + Sync,
        R: Try<Output = T>;
}

impl<T> ParallelReduce<T> for [T] {
    fn par_reduce<O>(&self, init: T, operation: O) -> Reduce<'_, T, O>
    where
        O: Fn(T, T) -> T + Sync,
    {
        Reduce::new(self, init, operation)
    }

    fn par_try_reduce<O, R>(&self, init: T, operation: O) -> TryReduce<'_, T, O>
    where
        O: Fn(T, T) -> R + Sync,
        R: Try<Output = T>,
    {
        TryReduce::new(self, init, operation)
    }
}
