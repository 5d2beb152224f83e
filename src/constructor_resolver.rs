use core::marker::PhantomData;
use tracing::{debug, debug_span, error, warn};

use crate::{
    any::TypeInfo,
    constructor::{Constructible, Declared},
    errors::{LookupError, ResolveErrorKind},
    signature::{IntoArguments, Parameters, Signature},
};

/// Finds the first of the registered signatures that `T` declares a constructor for and invokes it.
///
/// Candidates are tried in registration order. Once a constructor is found no other candidate is tried,
/// even if invoking it fails.
pub struct ConstructorResolver<T> {
    type_info: TypeInfo,
    signatures: Vec<Signature>,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Constructible> ConstructorResolver<T> {
    #[inline]
    #[must_use]
    pub fn using() -> Self {
        Self {
            type_info: TypeInfo::of::<T>(),
            signatures: Vec::new(),
            _marker: PhantomData,
        }
    }

    #[inline]
    #[must_use]
    pub fn try_parameters<Params: Parameters>(self) -> Self {
        self.try_signature(Params::signature())
    }

    #[inline]
    #[must_use]
    pub fn try_signature(mut self, signature: Signature) -> Self {
        self.signatures.push(signature);
        self
    }

    #[inline]
    #[must_use]
    pub const fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    #[inline]
    #[must_use]
    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    /// Creates a new `T` from `arguments`.
    ///
    /// # Errors
    /// - [`ResolveErrorKind::NoSignatures`] if no signature was registered
    /// - [`ResolveErrorKind::ConstructorNotFound`] if `T` declares none of the signatures
    /// - [`ResolveErrorKind::Instantiation`] if the found constructor could not be invoked or failed
    pub fn create(&self, arguments: impl IntoArguments) -> Result<T, ResolveErrorKind> {
        let span = debug_span!("resolve", constructible = self.type_info.name);
        let _guard = span.enter();

        let mut declared = self.resolve()?;
        match declared.invoke(arguments.into_arguments()) {
            Ok(instance) => {
                debug!("Created");
                Ok(instance)
            }
            Err(source) => {
                let err = ResolveErrorKind::Instantiation {
                    type_info: self.type_info,
                    source,
                };
                error!("{}", err);
                Err(err)
            }
        }
    }

    fn resolve(&self) -> Result<Declared<T>, ResolveErrorKind> {
        let mut constructors = T::constructors();
        let mut not_found = None;

        for signature in &self.signatures {
            if let Some(declared) = constructors.remove(signature) {
                debug!(%signature, "Constructor found");
                return Ok(declared);
            }
            debug!(%signature, "Constructor not found");

            not_found = Some(LookupError::NoSuchConstructor {
                type_info: self.type_info,
                signature: signature.clone(),
            });
        }

        let err = match not_found {
            Some(source) => ResolveErrorKind::ConstructorNotFound {
                type_info: self.type_info,
                source,
            },
            None => ResolveErrorKind::NoSignatures,
        };
        warn!("{}", err);
        Err(err)
    }
}
