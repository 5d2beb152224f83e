use core::{
    any::{type_name, Any, TypeId},
    cmp::Ordering,
    fmt::{self, Debug, Display, Formatter},
    hash::{Hash, Hasher},
};

/// Runtime identity of a type: its [`TypeId`] plus the name used when rendering it.
///
/// Equality, ordering and hashing only look at the id.
#[derive(Debug, Clone, Copy)]
pub struct TypeInfo {
    pub name: &'static str,
    pub id: TypeId,
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl PartialOrd for TypeInfo {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for TypeInfo {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Display for TypeInfo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl TypeInfo {
    #[inline]
    #[must_use]
    pub fn of<T>() -> Self
    where
        T: ?Sized + 'static,
    {
        Self {
            name: type_name::<T>(),
            id: TypeId::of::<T>(),
        }
    }

    #[inline]
    #[must_use]
    pub fn of_val<T>(_val: &T) -> Self
    where
        T: ?Sized + 'static,
    {
        Self::of::<T>()
    }

    #[inline]
    #[must_use]
    pub fn short_name(&self) -> &'static str {
        self.name.rsplit_once("::").map_or(self.name, |(_, name)| name)
    }
}

/// A type-erased value that remembers the type it was created from.
///
/// A constructor declaring an `Object` parameter accepts an argument of any type,
/// the same way a parameter typed with the root of a class hierarchy would.
pub struct Object {
    type_info: TypeInfo,
    value: Box<dyn Any + Send + Sync>,
}

impl Object {
    /// Erases `value`. Wrapping an `Object` again returns it unchanged.
    #[must_use]
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        let value: Box<dyn Any + Send + Sync> = Box::new(value);
        match value.downcast::<Self>() {
            Ok(object) => *object,
            Err(value) => Self {
                type_info: TypeInfo::of::<T>(),
                value,
            },
        }
    }

    /// Type of the wrapped value.
    #[inline]
    #[must_use]
    pub const fn type_info(&self) -> TypeInfo {
        self.type_info
    }

    #[inline]
    #[must_use]
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    #[inline]
    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref()
    }

    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        let type_info = self.type_info;
        self.value
            .downcast::<T>()
            .map(|value| *value)
            .map_err(|value| Self { type_info, value })
    }
}

impl Debug for Object {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Object").field("type", &self.type_info.name).finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::{Object, TypeInfo};

    struct Id(u64);

    #[test]
    fn test_type_info_eq_by_id() {
        assert_eq!(TypeInfo::of::<String>(), TypeInfo::of::<String>());
        assert_ne!(TypeInfo::of::<String>(), TypeInfo::of::<&'static str>());
        assert_eq!(TypeInfo::of_val(&Id(1)), TypeInfo::of::<Id>());
    }

    #[test]
    fn test_type_info_names() {
        let type_info = TypeInfo::of::<Id>();

        assert!(type_info.name.ends_with("::Id"));
        assert_eq!(type_info.short_name(), "Id");
        assert_eq!(type_info.to_string(), type_info.name);
    }

    #[test]
    fn test_object_keeps_type() {
        let object = Object::new(Id(7));

        assert_eq!(object.type_info(), TypeInfo::of::<Id>());
        assert!(object.is::<Id>());
        assert!(!object.is::<u64>());
        assert_eq!(object.downcast_ref::<Id>().map(|id| id.0), Some(7));
    }

    #[test]
    fn test_object_downcast() {
        let object = Object::new(String::from("value"));

        let object = object.downcast::<u64>().unwrap_err();
        assert_eq!(object.type_info(), TypeInfo::of::<String>());
        assert_eq!(object.downcast::<String>().unwrap(), "value");
    }

    #[test]
    fn test_object_not_nested() {
        let object = Object::new(Object::new(5_u8));

        assert_eq!(object.type_info(), TypeInfo::of::<u8>());
        assert_eq!(object.downcast::<u8>().unwrap(), 5);
    }
}
