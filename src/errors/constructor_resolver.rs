use super::instantiate::InstantiateErrorKind;
use crate::{any::TypeInfo, signature::Signature};

#[derive(thiserror::Error, Debug)]
pub enum ResolveErrorKind {
    /// Resolver was asked to create an instance before any signature was registered.
    #[error("No parameter lists provided, please use try_parameters method")]
    NoSignatures,
    #[error("{type_info} does not have expected constructor")]
    ConstructorNotFound {
        type_info: TypeInfo,
        /// Lookup failure of the last candidate signature.
        #[source]
        source: LookupError,
    },
    #[error("Could not create instance of {type_info}")]
    Instantiation {
        type_info: TypeInfo,
        #[source]
        source: InstantiateErrorKind,
    },
}

impl ResolveErrorKind {
    /// Type the resolution was attempted for, if the failure is tied to one.
    #[must_use]
    pub fn target(&self) -> Option<TypeInfo> {
        match self {
            Self::NoSignatures => None,
            Self::ConstructorNotFound { type_info, .. } | Self::Instantiation { type_info, .. } => Some(*type_info),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("{type_info}.<init>({signature})")]
    NoSuchConstructor { type_info: TypeInfo, signature: Signature },
}
