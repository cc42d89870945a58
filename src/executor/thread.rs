use std::any::Any;
use std::thread::{self, Builder};

use tracing::trace;

use crate::core::Executor;

/// Spawns one fresh OS thread per task and joins all of them before returning.
///
/// Threads are scoped to the call, so tasks may borrow from the caller's stack.
/// Nothing is pooled or reused between calls.
#[derive(Clone, Debug, Default)]
pub struct Thread {
    name: Option<String>,
}

impl Thread {
    pub fn new() -> Self {
        Self::default()
    }

    /// Names the spawned threads `{prefix}-{task index}`.
    pub fn with_name(prefix: impl Into<String>) -> Self {
        Self {
            name: Some(prefix.into()),
        }
    }
}

impl Executor for Thread {
    fn execute<'a, T, F>(&self, tasks: Vec<F>) -> Vec<thread::Result<T>>
    where
        F: FnOnce() -> T + Send + 'a,
        T: Send + 'a,
    {
        trace!(tasks = tasks.len(), "spawning scoped worker threads");

        thread::scope(|scope| {
            let handles: Vec<_> = tasks
                .into_iter()
                .enumerate()
                .map(|(index, task)| {
                    let mut builder = Builder::new();
                    if let Some(prefix) = &self.name {
                        builder = builder.name(format!("{}-{}", prefix, index));
                    }

                    builder.spawn_scoped(scope, task)
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle {
                    Ok(handle) => handle.join(),
                    Err(err) => Err(Box::new(format!("unable to spawn worker thread: {}", err))
                        as Box<dyn Any + Send>),
                })
                .collect()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Mutex;

    use super::*;

    #[test]
    fn results_follow_task_order() {
        let tasks: Vec<_> = (0..8usize).map(|i| move || i * 10).collect();

        let results: Vec<usize> = Thread::new()
            .execute(tasks)
            .into_iter()
            .map(|r| r.unwrap())
            .collect();

        assert_eq!(results, vec![0, 10, 20, 30, 40, 50, 60, 70]);
    }

    #[test]
    fn every_task_gets_its_own_thread() {
        let ids = Mutex::new(HashSet::new());
        let tasks: Vec<_> = (0..4)
            .map(|_| {
                let ids = &ids;
                move || {
                    ids.lock().unwrap().insert(thread::current().id());
                }
            })
            .collect();

        Thread::new().execute(tasks);

        let ids = ids.into_inner().unwrap();
        assert_eq!(ids.len(), 4);
        assert!(!ids.contains(&thread::current().id()));
    }

    #[test]
    fn named_threads() {
        let tasks: Vec<_> = (0..2)
            .map(|_| || thread::current().name().map(ToOwned::to_owned))
            .collect();

        let names: Vec<_> = Thread::with_name("reduce")
            .execute(tasks)
            .into_iter()
            .map(|r| r.unwrap())
            .collect();

        assert_eq!(
            names,
            vec![Some("reduce-0".to_owned()), Some("reduce-1".to_owned())]
        );
    }

    #[test]
    fn panicking_task_does_not_block_the_others() {
        let tasks: Vec<Box<dyn FnOnce() -> u32 + Send>> = vec![
            Box::new(|| 1),
            Box::new(|| panic!("chunk failed")),
            Box::new(|| 3),
        ];

        let results = Thread::new().execute(tasks);

        assert_eq!(results.len(), 3);
        assert_eq!(*results[0].as_ref().unwrap(), 1);
        assert!(results[1].is_err());
        assert_eq!(*results[2].as_ref().unwrap(), 3);
    }
}
