/// Outcome of a fallible combine operation.
///
/// Implemented for `Result<T, E>` and `Option<T>` so `try_reduce` accepts
/// either kind of operation.
pub trait Try {
    type Output;
    type Residual;

    fn branch(self) -> Result<Self::Output, Self::Residual>;
    fn from_output(v: Self::Output) -> Self;
}

impl<T> Try for Option<T> {
    type Output = T;
    type Residual = NoneError;

    fn branch(self) -> Result<T, NoneError> {
        self.ok_or(NoneError)
    }

    fn from_output(v: T) -> Self {
        Some(v)
    }
}

impl<T, E> Try for Result<T, E> {
    type Output = T;
    type Residual = E;

    fn branch(self) -> Result<T, E> {
        self
    }

    fn from_output(v: T) -> Self {
        Ok(v)
    }
}

/// Residual of an `Option` based operation that returned `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("combine operation returned `None`")]
pub struct NoneError;
