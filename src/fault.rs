use core::{
    fmt::{self, Debug, Display, Formatter},
    hash::{Hash, Hasher},
    marker::PhantomData,
};
use std::{
    error::Error,
    io::{self, Write},
};
use tracing::{debug, debug_span, warn};

use crate::{
    any::{Object, TypeInfo},
    constructor::Constructible,
    constructor_resolver::ConstructorResolver,
    errors::{ResolveErrorKind, ValidateErrorKind},
    streams::Streams,
    throwable::{is_instance_of, write_trace, Cause, Throwable},
};

/// An expected error: the type of a throwable and its message.
///
/// A `Fault` can build new instances of the error and check that an observed error
/// has exactly this type and message.
///
/// ## Example
/// ```rust
/// use core::convert::Infallible;
/// use fault::{Constructible, Constructors, Fault};
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("{0}")]
/// struct NotFound(String);
///
/// impl Constructible for NotFound {
///     fn constructors() -> Constructors<Self> {
///         Constructors::new().constructor(|message: String| Ok::<_, Infallible>(Self(message)))
///     }
/// }
///
/// let fault = Fault::<NotFound>::new("user not found");
/// let error = fault.build().unwrap();
///
/// assert_eq!(error.0, "user not found");
/// assert!(fault.validate(&error).is_ok());
/// ```
pub struct Fault<E> {
    type_info: TypeInfo,
    message: String,
    _marker: PhantomData<fn() -> E>,
}

impl<E> Fault<E> {
    /// Type of the error this fault builds and expects.
    #[inline]
    #[must_use]
    pub const fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Writes `(<type>) <message>` and a line break to standard output.
    ///
    /// ## Example
    /// ```rust
    /// use fault::Fault;
    ///
    /// #[derive(Debug, thiserror::Error)]
    /// #[error("{0}")]
    /// struct NotFound(String);
    ///
    /// // (<crate>::NotFound) user not found
    /// let fault = Fault::<NotFound>::new("user not found");
    /// let printed = fault.print().unwrap();
    ///
    /// assert_eq!(printed.message(), "user not found");
    /// ```
    ///
    /// # Errors
    /// If writing to the stream fails
    pub fn print(&self) -> io::Result<&Self> {
        self.print_with(&Streams::standard())
    }

    /// Writes `(<type>) <message>` and a line break to the output stream of `streams`.
    ///
    /// # Errors
    /// If writing to the stream fails
    pub fn print_with(&self, streams: &Streams) -> io::Result<&Self> {
        self.print_to(&mut *streams.out())
    }

    /// Writes `(<type>) <message>` and a line break to `stream`.
    ///
    /// # Errors
    /// If writing to the stream fails
    pub fn print_to<W>(&self, stream: &mut W) -> io::Result<&Self>
    where
        W: Write + ?Sized,
    {
        writeln!(stream, "{self}")?;
        stream.flush()?;
        Ok(self)
    }
}

impl<E: Error + 'static> Fault<E> {
    #[inline]
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            type_info: TypeInfo::of::<E>(),
            message: message.into(),
            _marker: PhantomData,
        }
    }

    /// Checks that `error` has exactly the type and message of this fault.
    /// On mismatch the trace of `error` is written to standard error.
    ///
    /// `error` may be the expected error itself, the error behind a `Box` or an `Arc`,
    /// or a type-erased `dyn Error` such as a [`Cause`] or the result of [`Error::source`](std::error::Error::source).
    ///
    /// # Errors
    /// - [`ValidateErrorKind::IncorrectType`] if the runtime type of `error` is not the expected one
    /// - [`ValidateErrorKind::IncorrectMessage`] if the type matches but the message does not
    pub fn validate<T>(&self, error: &T) -> Result<&Self, ValidateErrorKind>
    where
        T: Throwable + ?Sized,
    {
        self.validate_with(error, &Streams::standard())
    }

    /// Same as [`Fault::validate`], the trace is written to the error stream of `streams`.
    ///
    /// # Errors
    /// See [`Fault::validate`]
    pub fn validate_with<T>(&self, error: &T, streams: &Streams) -> Result<&Self, ValidateErrorKind>
    where
        T: Throwable + ?Sized,
    {
        self.validate_to(error, &mut *streams.err())
    }

    /// Same as [`Fault::validate`], the trace is written to `stream`.
    ///
    /// # Errors
    /// See [`Fault::validate`]
    pub fn validate_to<T, W>(&self, error: &T, stream: &mut W) -> Result<&Self, ValidateErrorKind>
    where
        T: Throwable + ?Sized,
        W: Write + ?Sized,
    {
        let span = debug_span!("validate", expected = %self);
        let _guard = span.enter();

        if let Err(err) = self.validate_type(error).and_then(|()| self.validate_message(error)) {
            debug!("{}", err);
            if let Err(io_err) = write_trace(error, stream) {
                warn!("Trace of the received error not written: {}", io_err);
            }
            return Err(err);
        }

        debug!("Validated");
        Ok(self)
    }

    fn validate_type<T>(&self, error: &T) -> Result<(), ValidateErrorKind>
    where
        T: Throwable + ?Sized,
    {
        if is_instance_of::<E>(error.as_error()) {
            return Ok(());
        }
        Err(ValidateErrorKind::IncorrectType {
            expected: self.type_info,
            actual: error.type_info(),
        })
    }

    fn validate_message<T>(&self, error: &T) -> Result<(), ValidateErrorKind>
    where
        T: Throwable + ?Sized,
    {
        let actual = error.message();
        if actual == self.message {
            return Ok(());
        }
        Err(ValidateErrorKind::IncorrectMessage {
            expected: self.message.clone(),
            actual,
        })
    }
}

impl<E: Constructible> Fault<E> {
    /// Creates a new `E` carrying the message, using its `(String)` constructor,
    /// or its `(Object)` constructor when there is none.
    ///
    /// # Errors
    /// If `E` declares neither constructor or the constructor fails, see [`ConstructorResolver::create`]
    pub fn build(&self) -> Result<E, ResolveErrorKind> {
        ConstructorResolver::<E>::using()
            .try_parameters::<(String,)>()
            .try_parameters::<(Object,)>()
            .create((self.message.clone(),))
    }

    /// Creates a new `E` carrying the message and `cause`, using its `(String, Cause)` constructor,
    /// or its `(Object, Cause)` constructor when there is none.
    ///
    /// # Errors
    /// If `E` declares neither constructor or the constructor fails, see [`ConstructorResolver::create`]
    pub fn build_with_cause(&self, cause: Cause) -> Result<E, ResolveErrorKind> {
        ConstructorResolver::<E>::using()
            .try_parameters::<(String, Cause)>()
            .try_parameters::<(Object, Cause)>()
            .create((self.message.clone(), cause))
    }
}

impl<E> Clone for Fault<E> {
    fn clone(&self) -> Self {
        Self {
            type_info: self.type_info,
            message: self.message.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E> Display for Fault<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({}) {}", self.type_info, self.message)
    }
}

impl<E> Debug for Fault<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Fault")
            .field("type", &self.type_info.name)
            .field("message", &self.message)
            .finish()
    }
}

impl<E, F> PartialEq<Fault<F>> for Fault<E> {
    fn eq(&self, other: &Fault<F>) -> bool {
        self.type_info == other.type_info && self.message == other.message
    }
}

impl<E> Eq for Fault<E> {}

impl<E> Hash for Fault<E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_info.hash(state);
        self.message.hash(state);
    }
}
