use core::{
    any::{Any, TypeId},
    fmt::{self, Display, Formatter},
};

use crate::{
    any::{Object, TypeInfo},
    errors::InstantiateErrorKind,
};

/// Ordered parameter types of one constructor overload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Signature(Vec<TypeInfo>);

impl Signature {
    /// Signature of a parameter tuple, e.g. `Signature::of::<(String, Cause)>()`.
    #[inline]
    #[must_use]
    pub fn of<Params: Parameters>() -> Self {
        Params::signature()
    }

    #[inline]
    #[must_use]
    pub fn parameters(&self) -> &[TypeInfo] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<TypeInfo> for Signature {
    fn from_iter<I: IntoIterator<Item = TypeInfo>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, parameter) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            Display::fmt(parameter, f)?;
        }
        Ok(())
    }
}

/// Values passed to a constructor, each erased into an [`Object`].
#[derive(Debug, Default)]
pub struct Arguments(Vec<Object>);

impl Arguments {
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    #[inline]
    #[must_use]
    pub fn with<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.0.push(Object::new(value));
        self
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Runtime types of the arguments, in order.
    #[must_use]
    pub fn types(&self) -> Signature {
        self.0.iter().map(Object::type_info).collect()
    }
}

impl IntoIterator for Arguments {
    type Item = Object;
    type IntoIter = std::vec::IntoIter<Object>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

pub trait IntoArguments {
    fn into_arguments(self) -> Arguments;
}

impl IntoArguments for Arguments {
    #[inline]
    fn into_arguments(self) -> Arguments {
        self
    }
}

/// Tuple of parameter types a constructor declares.
pub trait Parameters: Sized + 'static {
    #[must_use]
    fn signature() -> Signature;

    fn extract(arguments: Arguments) -> Result<Self, InstantiateErrorKind>;
}

/// Converts one argument into the declared parameter type.
///
/// `Object` parameters accept any argument, every other parameter requires the exact type.
pub(crate) fn extract_parameter<T: Any>(argument: Object, position: usize) -> Result<T, InstantiateErrorKind> {
    let actual = argument.type_info();
    let mismatch = || InstantiateErrorKind::ArgumentMismatch {
        position,
        expected: TypeInfo::of::<T>(),
        actual,
    };

    if TypeId::of::<T>() == TypeId::of::<Object>() {
        let mut widened = Some(argument);
        return (&mut widened as &mut dyn Any)
            .downcast_mut::<Option<T>>()
            .and_then(Option::take)
            .ok_or_else(mismatch);
    }

    argument.downcast::<T>().map_err(|_| mismatch())
}

macro_rules! impl_parameters {
    (
        [$($ty:ident),*]
    ) => {
        impl<$($ty,)*> Parameters for ($($ty,)*)
        where
            $( $ty: Any, )*
        {
            #[inline]
            fn signature() -> Signature {
                Signature(vec![$(TypeInfo::of::<$ty>(),)*])
            }

            #[allow(unused_mut, unused_variables)]
            fn extract(arguments: Arguments) -> Result<Self, InstantiateErrorKind> {
                let expected = Self::signature().len();
                let actual = arguments.len();
                if expected != actual {
                    return Err(InstantiateErrorKind::ArgumentCount { expected, actual });
                }

                let mut arguments = arguments.into_iter().enumerate();
                Ok(($({
                    let (position, argument) = arguments
                        .next()
                        .ok_or(InstantiateErrorKind::ArgumentCount { expected, actual })?;
                    extract_parameter::<$ty>(argument, position)?
                },)*))
            }
        }
    };
}

all_the_tuples!(impl_parameters);

macro_rules! impl_into_arguments {
    (
        [$($ty:ident),*]
    ) => {
        #[allow(non_snake_case)]
        impl<$($ty,)*> IntoArguments for ($($ty,)*)
        where
            $( $ty: Any + Send + Sync, )*
        {
            #[inline]
            fn into_arguments(self) -> Arguments {
                let ($($ty,)*) = self;
                Arguments::new()$(.with($ty))*
            }
        }
    };
}

all_the_tuples!(impl_into_arguments);
