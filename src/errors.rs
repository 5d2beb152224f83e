mod constructor_resolver;
mod fault;
mod instantiate;

pub use constructor_resolver::{LookupError, ResolveErrorKind};
pub use fault::ValidateErrorKind;
pub use instantiate::InstantiateErrorKind;
