use std::{
    error::Error,
    io::{self, Write},
    sync::Arc,
};

use crate::any::TypeInfo;

/// Cause handed to a throwable constructor. Shared, so the caller can keep comparing against it.
pub type Cause = Arc<dyn Error + Send + Sync + 'static>;

/// An observed error, as accepted by [`Fault::validate`](crate::Fault::validate).
///
/// Implemented for every `'static` [`Error`] (smart pointers such as `Box<T>` and `Arc<T>` included)
/// and for the type-erased `dyn Error` objects, so a [`Cause`] or the result of [`Error::source`] can be passed as is.
/// The message of a throwable is its [`Display`](core::fmt::Display) output, its cause is [`Error::source`].
pub trait Throwable {
    /// Type the throwable is seen as. Type-erased errors report their trait object type.
    #[must_use]
    fn type_info(&self) -> TypeInfo;

    #[must_use]
    fn as_error(&self) -> &(dyn Error + 'static);

    #[must_use]
    fn message(&self) -> String {
        self.as_error().to_string()
    }
}

impl<T: Error + 'static> Throwable for T {
    #[inline]
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<T>()
    }

    #[inline]
    fn as_error(&self) -> &(dyn Error + 'static) {
        self
    }
}

macro_rules! impl_throwable_for_dyn {
    ($($ty:ty),*) => {
        $(
            impl Throwable for $ty {
                #[inline]
                fn type_info(&self) -> TypeInfo {
                    TypeInfo::of::<Self>()
                }

                #[inline]
                fn as_error(&self) -> &(dyn Error + 'static) {
                    self
                }
            }
        )*
    };
}

impl_throwable_for_dyn!(dyn Error + 'static, dyn Error + Send + 'static, dyn Error + Send + Sync + 'static);

/// Returns `true` if `error` is an `E`, directly or behind a `Box` or an `Arc`.
/// A shared `Arc<dyn Error>` (such as a [`Cause`]) is checked by what it points to.
pub(crate) fn is_instance_of<E>(error: &(dyn Error + 'static)) -> bool
where
    E: Error + 'static,
{
    if error.is::<E>() || error.is::<Box<E>>() || error.is::<Arc<E>>() {
        return true;
    }
    shared_inner(error).map_or(false, is_instance_of::<E>)
}

fn shared_inner<'a>(error: &'a (dyn Error + 'static)) -> Option<&'a (dyn Error + 'static)> {
    if let Some(inner) = error.downcast_ref::<Arc<dyn Error + Send + Sync>>() {
        return Some(&**inner);
    }
    if let Some(inner) = error.downcast_ref::<Arc<dyn Error + Send>>() {
        return Some(&**inner);
    }
    error.downcast_ref::<Arc<dyn Error>>().map(|inner| &**inner)
}

/// Writes `<type>: <message>` followed by one `Caused by: <message>` line per source.
pub(crate) fn write_trace<T, W>(throwable: &T, stream: &mut W) -> io::Result<()>
where
    T: Throwable + ?Sized,
    W: Write + ?Sized,
{
    writeln!(stream, "{}: {}", throwable.type_info(), throwable.message())?;

    let mut source = throwable.as_error().source();
    while let Some(cause) = source {
        writeln!(stream, "Caused by: {cause}")?;
        source = cause.source();
    }
    stream.flush()
}
