#[macro_use]
pub(crate) mod macros;

pub(crate) mod any;
pub(crate) mod constructor;
pub(crate) mod constructor_resolver;
pub(crate) mod errors;
pub(crate) mod fault;
pub(crate) mod signature;
pub(crate) mod streams;
pub(crate) mod throwable;

pub use any::{Object, TypeInfo};
pub use constructor::{Constructible, Constructor, Constructors};
pub use constructor_resolver::ConstructorResolver;
pub use errors::{InstantiateErrorKind, LookupError, ResolveErrorKind, ValidateErrorKind};
pub use fault::Fault;
pub use signature::{Arguments, IntoArguments, Parameters, Signature};
pub use streams::{SharedWriter, Streams};
pub use throwable::{Cause, Throwable};
