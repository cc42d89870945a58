use std::convert::Infallible;

/// Failure of a partitioned reduction.
///
/// `E` is the error type of a fallible combine operation; infallible
/// reductions use the default.
#[derive(Debug, thiserror::Error)]
pub enum Error<E = Infallible> {
    #[error("worker count must be at least 1")]
    InvalidWorkerCount,

    #[error("worker for chunk {chunk} panicked: {message}")]
    WorkerPanicked { chunk: usize, message: String },

    #[error("combine operation failed in chunk {chunk}")]
    Combine {
        chunk: usize,
        #[source]
        source: E,
    },
}

impl<E> Error<E> {
    /// Index of the chunk the failure is attributed to, if any.
    pub fn chunk(&self) -> Option<usize> {
        match self {
            Self::InvalidWorkerCount => None,
            Self::WorkerPanicked { chunk, .. } | Self::Combine { chunk, .. } => Some(*chunk),
        }
    }
}
