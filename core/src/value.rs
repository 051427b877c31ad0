//! Type-erased field values.
//!
//! A `Value` carries one field's data between two objects together with the
//! `TypeTag` of the field it was read from. The engine never inspects the data
//! itself; it only compares tags and moves values.

use std::any::{self, Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Static type tag of a field.
///
/// Two tags are equal only when they name exactly the same Rust type.
/// `i32` and `i64`, or `String` and `Option<String>`, are different tags.
#[derive(Clone, Copy)]
pub struct TypeTag {
    id: TypeId,
    name: &'static str,
}

impl TypeTag {
    /// The tag for type `T`.
    pub fn of<T: Any>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: any::type_name::<T>(),
        }
    }

    /// The underlying `TypeId`.
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Human readable type name, for diagnostics only.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if this tag names `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }
}

impl PartialEq for TypeTag {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeTag {}

impl Hash for TypeTag {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeTag({})", self.name)
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// Object-safe view of a field's data.
trait FieldData: Any + fmt::Debug {
    fn clone_data(&self) -> Box<dyn FieldData>;
    fn as_any(&self) -> &dyn Any;
}

impl<T: Any + Clone + fmt::Debug> FieldData for T {
    fn clone_data(&self) -> Box<dyn FieldData> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A field value read from a mappable object.
pub struct Value {
    tag: TypeTag,
    data: Box<dyn FieldData>,
}

impl Value {
    /// Wrap a field's data.
    pub fn new<T: Any + Clone + fmt::Debug>(data: T) -> Self {
        Self {
            tag: TypeTag::of::<T>(),
            data: Box::new(data),
        }
    }

    /// The type tag of the wrapped data.
    pub fn type_tag(&self) -> TypeTag {
        self.tag
    }

    /// Returns the type name of the wrapped data.
    pub fn type_name(&self) -> &'static str {
        self.tag.name()
    }

    /// Returns true if the wrapped data is a `T`.
    pub fn is<T: Any>(&self) -> bool {
        self.tag.is::<T>()
    }

    /// Borrow the data as `T` if the tags match.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        (*self.data).as_any().downcast_ref::<T>()
    }

    /// Get the data as `T`, or the value back unchanged on mismatch.
    ///
    /// The check is made against the data itself, so the returned value always
    /// carries the tag it was built with.
    pub fn downcast<T: Any + Clone>(self) -> Result<T, Value> {
        if let Some(data) = (*self.data).as_any().downcast_ref::<T>() {
            return Ok(data.clone());
        }
        Err(self)
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag,
            data: (*self.data).clone_data(),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.data, f)
    }
}
