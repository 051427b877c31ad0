//! The Schema - immutable per-type field table.

use duckmap_core::{TypeDescriptor, Value};
use std::fmt;

pub(crate) type Getter<T> = Box<dyn Fn(&T) -> Value + Send + Sync>;
pub(crate) type Setter<T> = Box<dyn Fn(&mut T, Value) -> Result<(), Value> + Send + Sync>;

/// Reads and writes one field of a `T`.
pub(crate) struct Accessor<T> {
    pub(crate) get: Getter<T>,
    pub(crate) set: Setter<T>,
}

/// The Schema pairs a type's field metadata with the accessors for each field.
/// It is immutable after construction.
pub struct Schema<T> {
    /// Field metadata in declaration order.
    descriptor: TypeDescriptor,
    /// One accessor per field, same order as `descriptor.fields`.
    accessors: Vec<Accessor<T>>,
    /// Parameterless constructor, if the type has one.
    constructor: Option<fn() -> T>,
}

impl<T> Schema<T> {
    pub(crate) fn new(
        descriptor: TypeDescriptor,
        accessors: Vec<Accessor<T>>,
        constructor: Option<fn() -> T>,
    ) -> Self {
        Self {
            descriptor,
            accessors,
            constructor,
        }
    }

    /// Get the field metadata.
    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    /// Get the type name.
    pub fn type_name(&self) -> &str {
        self.descriptor.type_name()
    }

    /// Read the field at `index`.
    pub fn read(&self, object: &T, index: usize) -> Option<Value> {
        self.accessors.get(index).map(|a| (a.get)(object))
    }

    /// Write the field at `index`. The value is handed back when the index is
    /// out of range or its type does not match the field.
    pub fn write(&self, object: &mut T, index: usize, value: Value) -> Result<(), Value> {
        match self.accessors.get(index) {
            Some(accessor) => (accessor.set)(object, value),
            None => Err(value),
        }
    }

    /// Whether a parameterless constructor was registered.
    pub fn has_constructor(&self) -> bool {
        self.constructor.is_some()
    }

    /// Create a fresh instance with the registered constructor.
    pub fn construct(&self) -> Option<T> {
        self.constructor.map(|ctor| ctor())
    }
}

impl<T> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("descriptor", &self.descriptor)
            .field("has_constructor", &self.has_constructor())
            .finish()
    }
}
