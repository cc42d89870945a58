#[cfg(feature = "rayon-executor")]
mod rayon;
mod sequential;
mod thread;

#[cfg(feature = "rayon-executor")]
pub use self::rayon::Rayon as RayonExecutor;
pub use self::sequential::Sequential as SequentialExecutor;
pub use self::thread::Thread as ThreadExecutor;

#[cfg(feature = "thread-executor")]
pub type DefaultExecutor = ThreadExecutor;

#[cfg(all(not(feature = "thread-executor"), feature = "rayon-executor"))]
pub type DefaultExecutor = RayonExecutor;

#[cfg(all(not(feature = "thread-executor"), not(feature = "rayon-executor")))]
pub type DefaultExecutor = SequentialExecutor;
