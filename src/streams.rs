use core::fmt::{self, Debug, Formatter};
use parking_lot::{Mutex, MutexGuard};
use std::{
    io::{self, Write},
    sync::Arc,
};

pub type SharedWriter = Arc<Mutex<dyn Write + Send>>;

/// Output and error sinks used by [`Fault::print`](crate::Fault::print) and
/// [`Fault::validate`](crate::Fault::validate).
///
/// Clones share the same sinks.
#[derive(Clone)]
pub struct Streams {
    out: SharedWriter,
    err: SharedWriter,
}

impl Default for Streams {
    fn default() -> Self {
        Self::standard()
    }
}

impl Streams {
    #[inline]
    #[must_use]
    pub const fn new(out: SharedWriter, err: SharedWriter) -> Self {
        Self { out, err }
    }

    /// Process standard output and standard error.
    #[must_use]
    pub fn standard() -> Self {
        let out: SharedWriter = Arc::new(Mutex::new(io::stdout()));
        let err: SharedWriter = Arc::new(Mutex::new(io::stderr()));
        Self::new(out, err)
    }

    #[inline]
    #[must_use]
    pub fn with_out(mut self, out: SharedWriter) -> Self {
        self.out = out;
        self
    }

    #[inline]
    #[must_use]
    pub fn with_err(mut self, err: SharedWriter) -> Self {
        self.err = err;
        self
    }

    #[inline]
    pub fn out(&self) -> MutexGuard<'_, dyn Write + Send> {
        self.out.lock()
    }

    #[inline]
    pub fn err(&self) -> MutexGuard<'_, dyn Write + Send> {
        self.err.lock()
    }
}

impl Debug for Streams {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Streams").finish_non_exhaustive()
    }
}
