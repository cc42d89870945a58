#[cfg(feature = "default-executor")]
use crate::DefaultExecutor;
use crate::Executor;

/// A fully configured operation that only waits for an executor to run on.
pub trait Driver: Sized {
    type Output;

    fn exec_with<X>(self, executor: X) -> Self::Output
    where
        X: Executor;

    #[cfg(feature = "default-executor")]
    fn exec(self) -> Self::Output {
        self.exec_with(DefaultExecutor::default())
    }
}
