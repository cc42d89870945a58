use std::iter;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

use rayon_core::{Scope, ThreadPool};
use tracing::trace;

use crate::core::Executor;

/// Dispatches the tasks into a rayon scope.
///
/// Each task owns exactly one pre-allocated result slot, so nothing but the
/// scope itself is shared between the workers.
#[derive(Clone, Debug, Default)]
pub struct Rayon {
    pool: Option<Arc<ThreadPool>>,
}

impl Rayon {
    /// Runs on rayon's global pool.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pool(pool: Arc<ThreadPool>) -> Self {
        Self { pool: Some(pool) }
    }
}

impl Executor for Rayon {
    fn execute<'a, T, F>(&self, tasks: Vec<F>) -> Vec<thread::Result<T>>
    where
        F: FnOnce() -> T + Send + 'a,
        T: Send + 'a,
    {
        trace!(tasks = tasks.len(), "spawning rayon scope");

        let mut slots: Vec<Option<thread::Result<T>>> =
            iter::repeat_with(|| None).take(tasks.len()).collect();

        let targets = &mut slots[..];
        match &self.pool {
            Some(pool) => pool.scope(move |scope| spawn_all(scope, targets, tasks)),
            None => rayon_core::scope(move |scope| spawn_all(scope, targets, tasks)),
        }

        // every spawned task filled its slot before the scope returned
        slots.into_iter().flatten().collect()
    }
}

fn spawn_all<'scope, T, F>(
    scope: &Scope<'scope>,
    slots: &'scope mut [Option<thread::Result<T>>],
    tasks: Vec<F>,
) where
    F: FnOnce() -> T + Send + 'scope,
    T: Send + 'scope,
{
    for (slot, task) in slots.iter_mut().zip(tasks) {
        scope.spawn(move |_| {
            *slot = Some(catch_unwind(AssertUnwindSafe(task)));
        });
    }
}
