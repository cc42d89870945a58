use std::panic::{catch_unwind, AssertUnwindSafe};
use std::thread;

use crate::core::Executor;

/// Runs every task on the calling thread, one after another.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sequential;

impl Executor for Sequential {
    fn execute<'a, T, F>(&self, tasks: Vec<F>) -> Vec<thread::Result<T>>
    where
        F: FnOnce() -> T + Send + 'a,
        T: Send + 'a,
    {
        tasks
            .into_iter()
            .map(|task| catch_unwind(AssertUnwindSafe(task)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runs_on_the_caller() {
        let caller = thread::current().id();
        let tasks: Vec<_> = (0..3).map(|_| || thread::current().id()).collect();

        for id in Sequential.execute(tasks) {
            assert_eq!(id.unwrap(), caller);
        }
    }

    #[test]
    fn keeps_going_after_a_panic() {
        let tasks: Vec<Box<dyn FnOnce() -> &'static str + Send>> =
            vec![Box::new(|| panic!("first")), Box::new(|| "second")];

        let results = Sequential.execute(tasks);

        assert!(results[0].is_err());
        assert_eq!(*results[1].as_ref().unwrap(), "second");
    }
}
