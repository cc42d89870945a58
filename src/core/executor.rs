use std::thread;

/// Fork-join primitive the partitioned reducers dispatch their chunks through.
///
/// An executor receives a batch of independent tasks, runs all of them and
/// blocks until every task has finished. The outcome of task `i` is returned
/// in slot `i` of the result, regardless of the order the tasks completed in.
///
/// A panicking task must not take the others down with it: its slot holds the
/// panic payload and the remaining tasks still run to completion.
pub trait Executor {
    fn execute<'a, T, F>(&self, tasks: Vec<F>) -> Vec<thread::Result<T>>
    where
        F: FnOnce() -> T + Send + 'a,
        T: Send + 'a;
}

impl<X> Executor for &X
where
    X: Executor + ?Sized,
{
    fn execute<'a, T, F>(&self, tasks: Vec<F>) -> Vec<thread::Result<T>>
    where
        F: FnOnce() -> T + Send + 'a,
        T: Send + 'a,
    {
        (**self).execute(tasks)
    }
}
