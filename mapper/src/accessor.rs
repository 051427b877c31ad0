//! Read and write a single named field on any mappable object.
//!
//! Lookup is by declared name, ignoring case. Aliases and exclusion only
//! affect mapping, not these accessors.

use duckmap_core::Value;
use duckmap_registry::Mappable;

/// Get a field's value by name, or `None` if the object has no such field.
pub fn get_field_value(object: &dyn Mappable, name: &str) -> Option<Value> {
    let index = object.descriptor().position(name)?;
    object.read_field(index)
}

/// Set a field's value by name.
///
/// Nothing is written, and the value is handed back, when the object has no
/// such field or the value's type differs from the field's.
pub fn set_field_value(object: &mut dyn Mappable, name: &str, value: Value) -> Result<(), Value> {
    match object.descriptor().position(name) {
        Some(index) => object.write_field(index, value),
        None => Err(value),
    }
}
