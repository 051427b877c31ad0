//! Enumerate mappable fields.

use duckmap_core::FieldDef;
use duckmap_registry::{Describe, Mappable};

/// The fields of an object, in declaration order.
pub fn fields(object: &dyn Mappable) -> &[FieldDef] {
    object.descriptor().fields()
}

/// The fields of a `Describe` type, in declaration order.
pub fn fields_of<T: Describe>() -> &'static [FieldDef] {
    T::schema().descriptor().fields()
}
