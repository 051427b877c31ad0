//! Ad-hoc objects whose fields are only known at runtime.
//!
//! A `Record` plays the part of an anonymous object literal: a named, ordered
//! set of typed values that can be used as a mapping source or destination.

use duckmap_core::{FieldConfig, FieldDef, TypeDescriptor, Value};
use duckmap_registry::Mappable;
use std::any::Any;
use std::fmt;

/// An ordered set of named, typed values.
#[derive(Debug, Clone)]
pub struct Record {
    descriptor: TypeDescriptor,
    values: Vec<Value>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::named("Record")
    }

    /// Create an empty record with a type name for diagnostics.
    pub fn named(type_name: impl Into<String>) -> Self {
        Self {
            descriptor: TypeDescriptor::new(type_name),
            values: Vec::new(),
        }
    }

    /// Add a field, builder style.
    pub fn with<T: Any + Clone + fmt::Debug>(mut self, name: impl Into<String>, value: T) -> Self {
        self.insert(name, Value::new(value));
        self
    }

    /// Add a field, or replace the value and type of an existing field with
    /// the same name (ignoring case). Returns the replaced value.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        let name = name.into();
        match self.descriptor.position(&name) {
            Some(index) => {
                self.descriptor.fields[index].type_tag = value.type_tag();
                Some(std::mem::replace(&mut self.values[index], value))
            }
            None => {
                self.descriptor
                    .fields
                    .push(FieldDef::new(name, value.type_tag()));
                self.values.push(value);
                None
            }
        }
    }

    /// Attach alias or exclusion settings to an existing field.
    /// Returns false if the record has no such field.
    pub fn configure(&mut self, name: &str, config: FieldConfig) -> bool {
        match self.descriptor.position(name) {
            Some(index) => {
                let field = &mut self.descriptor.fields[index];
                field.config = std::mem::take(&mut field.config).merge(config);
                true
            }
            None => false,
        }
    }

    /// Get a field's value by name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.descriptor.position(name).map(|i| &self.values[i])
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl Default for Record {
    fn default() -> Self {
        Self::new()
    }
}

impl Mappable for Record {
    fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    fn read_field(&self, index: usize) -> Option<Value> {
        self.values.get(index).cloned()
    }

    fn write_field(&mut self, index: usize, value: Value) -> Result<(), Value> {
        match self.descriptor.fields.get(index) {
            Some(field) if field.type_tag == value.type_tag() => {
                self.values[index] = value;
                Ok(())
            }
            _ => Err(value),
        }
    }
}

/// Helper macro to create records.
///
/// ```ignore
/// let patch = record! { "birthday" => today, "id" => 4i32 };
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {
        $crate::Record::new()$(.with($key, $value))+
    };
}
