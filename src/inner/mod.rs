pub mod reduce;
pub mod try_reduce;

use tracing::{debug, trace};

use crate::{
    core::{Error, Executor},
    misc::{panic_message, Chunk, ChunkPlan},
};

/// Runs `task` once per planned chunk on `executor` and waits for all of them.
///
/// Partials are returned in chunk order. If any worker panicked, every
/// worker is still joined first and the panic of the lowest chunk index is
/// reported.
pub(crate) fn dispatch<X, F, R>(executor: &X, plan: &ChunkPlan, task: F) -> Result<Vec<R>, Panicked>
where
    X: Executor,
    F: Fn(Chunk) -> R + Sync,
    R: Send,
{
    debug!(
        chunks = plan.len(),
        chunk_size = plan.chunk_size(),
        "dispatching chunks"
    );

    let task = &task;
    let tasks: Vec<_> = plan
        .iter()
        .map(|chunk| {
            move || {
                trace!(chunk = chunk.index, start = chunk.start, end = chunk.end, "reducing chunk");

                task(chunk)
            }
        })
        .collect();

    let mut partials = Vec::with_capacity(tasks.len());
    let mut failure = None;

    for (chunk, result) in executor.execute(tasks).into_iter().enumerate() {
        match result {
            Ok(partial) => partials.push(partial),
            Err(payload) if failure.is_none() => {
                failure = Some(Panicked {
                    chunk,
                    message: panic_message(&*payload),
                });
            }
            Err(_) => (),
        }
    }

    match failure {
        Some(error) => Err(error),
        None => Ok(partials),
    }
}

/// A chunk worker that panicked, see [`Error::WorkerPanicked`].
#[derive(Debug)]
pub(crate) struct Panicked {
    chunk: usize,
    message: String,
}

impl<E> From<Panicked> for Error<E> {
    fn from(panicked: Panicked) -> Self {
        Error::WorkerPanicked {
            chunk: panicked.chunk,
            message: panicked.message,
        }
    }
}
