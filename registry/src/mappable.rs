//! Capabilities of mappable types.

use crate::Schema;
use duckmap_core::{TypeDescriptor, Value};

/// A type with a cached, immutable Schema.
///
/// Normally implemented with `#[derive(Describe)]`. A manual implementation
/// builds the schema once and keeps it in a `static`:
///
/// ```ignore
/// impl Describe for Person {
///     fn schema() -> &'static Schema<Self> {
///         static SCHEMA: OnceLock<Schema<Person>> = OnceLock::new();
///         SCHEMA.get_or_init(|| {
///             SchemaBuilder::new("Person")
///                 .field("id", |p: &Person| &p.id, |p: &mut Person| &mut p.id)
///                 .with_default()
///                 .build_unchecked()
///         })
///     }
/// }
/// ```
pub trait Describe: Sized + 'static {
    fn schema() -> &'static Schema<Self>;
}

/// Object-safe access to a value's fields by position.
///
/// Every `Describe` type is `Mappable`. Types whose field set is only known at
/// runtime implement it directly.
pub trait Mappable {
    /// The ordered field metadata of this object.
    fn descriptor(&self) -> &TypeDescriptor;

    /// Read the field at `index` in descriptor order.
    fn read_field(&self, index: usize) -> Option<Value>;

    /// Write the field at `index`. The value is handed back, and the object
    /// left unchanged, when the index is out of range or the type differs.
    fn write_field(&mut self, index: usize, value: Value) -> Result<(), Value>;
}

impl<T: Describe> Mappable for T {
    fn descriptor(&self) -> &TypeDescriptor {
        T::schema().descriptor()
    }

    fn read_field(&self, index: usize) -> Option<Value> {
        T::schema().read(self, index)
    }

    fn write_field(&mut self, index: usize, value: Value) -> Result<(), Value> {
        T::schema().write(self, index, value)
    }
}
