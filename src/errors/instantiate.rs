use core::convert::Infallible;

use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug)]
pub enum InstantiateErrorKind {
    #[error("Cannot instantiate abstract type")]
    Abstract,
    #[error("Wrong number of arguments; expected {expected} but received {actual}")]
    ArgumentCount { expected: usize, actual: usize },
    #[error("Argument {position} type mismatch; expected {expected} but received {actual}")]
    ArgumentMismatch {
        position: usize,
        expected: TypeInfo,
        actual: TypeInfo,
    },
    /// Failure raised by the constructor body itself.
    #[error(transparent)]
    Custom(#[from] anyhow::Error),
}

impl From<Infallible> for InstantiateErrorKind {
    fn from(value: Infallible) -> Self {
        match value {}
    }
}
