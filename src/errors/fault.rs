use crate::any::TypeInfo;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidateErrorKind {
    #[error("Incorrect error type; expected {expected} but received {actual}")]
    IncorrectType { expected: TypeInfo, actual: TypeInfo },
    #[error("Incorrect error message; expected {expected} but received {actual}")]
    IncorrectMessage { expected: String, actual: String },
}
