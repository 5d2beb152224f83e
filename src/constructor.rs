use core::{any::Any, convert::Infallible};
use std::io;

use crate::{
    errors::InstantiateErrorKind,
    signature::{Arguments, Parameters, Signature},
};

/// A factory for `Constructs` taking the parameter tuple `Params`.
///
/// Implemented for every `FnMut(T1, ..., Tn) -> Result<Response, Err>` closure (up to 8 parameters),
/// the declared signature is taken from the closure parameter types.
pub trait Constructor<Params>: Send + Sync + 'static
where
    Params: Parameters,
{
    type Constructs: 'static;
    type Error: Into<InstantiateErrorKind>;

    fn construct(&mut self, params: Params) -> Result<Self::Constructs, Self::Error>;
}

pub(crate) type BoxedConstructor<T> = Box<dyn FnMut(Arguments) -> Result<T, InstantiateErrorKind> + Send + Sync>;

#[must_use]
pub(crate) fn boxed_constructor_factory<Ctor, Params>(mut constructor: Ctor) -> BoxedConstructor<Ctor::Constructs>
where
    Ctor: Constructor<Params>,
    Params: Parameters,
{
    Box::new(move |arguments: Arguments| {
        let params = Params::extract(arguments)?;
        constructor.construct(params).map_err(Into::into)
    })
}

macro_rules! impl_constructor {
    (
        [$($ty:ident),*]
    ) => {
        #[allow(non_snake_case)]
        impl<F, Response, Err, $($ty,)*> Constructor<($($ty,)*)> for F
        where
            F: FnMut($($ty,)*) -> Result<Response, Err> + Send + Sync + 'static,
            Response: 'static,
            Err: Into<InstantiateErrorKind>,
            $( $ty: Any, )*
        {
            type Constructs = Response;
            type Error = Err;

            #[inline]
            fn construct(&mut self, ($($ty,)*): ($($ty,)*)) -> Result<Self::Constructs, Self::Error> {
                self($($ty,)*)
            }
        }
    };
}

all_the_tuples!(impl_constructor);

pub(crate) enum Declared<T> {
    Concrete(BoxedConstructor<T>),
    Abstract,
}

impl<T> Declared<T> {
    pub(crate) fn invoke(&mut self, arguments: Arguments) -> Result<T, InstantiateErrorKind> {
        match self {
            Self::Concrete(constructor) => constructor(arguments),
            Self::Abstract => Err(InstantiateErrorKind::Abstract),
        }
    }
}

/// Public constructors of `T`, keyed by their signatures.
///
/// Declaring a signature that is already present replaces the earlier entry.
pub struct Constructors<T> {
    entries: Vec<(Signature, Declared<T>)>,
}

impl<T> Default for Constructors<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> Constructors<T> {
    #[inline]
    #[must_use]
    pub fn constructor<Ctor, Params>(self, constructor: Ctor) -> Self
    where
        Ctor: Constructor<Params, Constructs = T>,
        Params: Parameters,
    {
        self.declare(Params::signature(), Declared::Concrete(boxed_constructor_factory(constructor)))
    }

    /// Declares a signature that can be looked up but never invoked, as a constructor of an abstract type.
    #[inline]
    #[must_use]
    pub fn declare_abstract<Params: Parameters>(self) -> Self {
        self.declare(Params::signature(), Declared::Abstract)
    }

    pub fn signatures(&self) -> impl Iterator<Item = &Signature> {
        self.entries.iter().map(|(signature, _)| signature)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Constructors<T> {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    fn declare(mut self, signature: Signature, declared: Declared<T>) -> Self {
        match self.entries.iter_mut().find(|(existing, _)| *existing == signature) {
            Some((_, entry)) => *entry = declared,
            None => self.entries.push((signature, declared)),
        }
        self
    }

    /// Exact signature lookup, no assignability between parameter types.
    #[must_use]
    pub(crate) fn remove(&mut self, signature: &Signature) -> Option<Declared<T>> {
        let index = self.entries.iter().position(|(existing, _)| existing == signature)?;
        Some(self.entries.remove(index).1)
    }
}

/// A type that publishes its constructors.
///
/// The table is rebuilt for every resolution.
pub trait Constructible: Sized + 'static {
    #[must_use]
    fn constructors() -> Constructors<Self>;
}

impl Constructible for io::Error {
    fn constructors() -> Constructors<Self> {
        Constructors::new().constructor(|message: String| Ok::<_, Infallible>(Self::new(io::ErrorKind::Other, message)))
    }
}
