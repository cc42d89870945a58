//! Fixed fan-out, manually partitioned parallel reduce.
//!
//! The input slice is cut into at most `workers` contiguous chunks, every
//! chunk is folded by its own worker and the partials are combined in chunk
//! order, starting from `init`. The [`bench`] module compares this against
//! the reductions offered by `std` and `rayon`.

mod core;
mod executor;
mod inner;
mod misc;
mod slice;

pub mod bench;

pub use self::core::{Driver, Error, Executor, Folder};
#[cfg(feature = "rayon-executor")]
pub use self::executor::RayonExecutor;
pub use self::executor::{DefaultExecutor, SequentialExecutor, ThreadExecutor};
pub use self::inner::{reduce::Reduce, try_reduce::TryReduce};
#[cfg(feature = "default-executor")]
pub use self::inner::{reduce::reduce, try_reduce::try_reduce};
pub use self::misc::{Chunk, ChunkPlan, NoneError, Try};
pub use self::slice::ParallelReduce;
