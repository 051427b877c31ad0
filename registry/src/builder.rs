//! SchemaBuilder for constructing an immutable Schema.

use crate::schema::{Accessor, Schema};
use duckmap_core::{FieldConfig, FieldDef, TypeDescriptor, TypeTag, Value};
use std::any::Any;
use std::fmt;
use thiserror::Error;

/// Errors that can occur during schema construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("Duplicate field name: {field} on type {type_name}")]
    DuplicateField { type_name: String, field: String },

    #[error("Configuration for unknown field: {field} on type {type_name}")]
    UnknownField { type_name: String, field: String },

    #[error("Empty alias for field: {field} on type {type_name}")]
    EmptyAlias { type_name: String, field: String },
}

/// Result type for schema construction.
pub type SchemaResult<T> = Result<T, SchemaError>;

impl SchemaError {
    pub fn duplicate_field(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::DuplicateField {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    pub fn unknown_field(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownField {
            type_name: type_name.into(),
            field: field.into(),
        }
    }

    pub fn empty_alias(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::EmptyAlias {
            type_name: type_name.into(),
            field: field.into(),
        }
    }
}

/// Builder for a type's Schema.
///
/// Fields are registered in declaration order with a getter and a mutable
/// getter. Alias and exclusion settings are either passed inline with
/// `field_with` or collected into the configuration table with `configure`,
/// `alias` and `exclude`, which is applied on `build`.
pub struct SchemaBuilder<T> {
    type_name: String,
    fields: Vec<FieldDef>,
    accessors: Vec<Accessor<T>>,
    /// Configuration table keyed by declared field name, in insertion order.
    configs: Vec<(String, FieldConfig)>,
    constructor: Option<fn() -> T>,
}

impl<T: 'static> SchemaBuilder<T> {
    /// Create a new builder.
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
            accessors: Vec::new(),
            configs: Vec::new(),
            constructor: None,
        }
    }

    /// Add a field with default configuration.
    pub fn field<F>(self, name: impl Into<String>, get: fn(&T) -> &F, get_mut: fn(&mut T) -> &mut F) -> Self
    where
        F: Any + Clone + fmt::Debug,
    {
        self.field_with(name, FieldConfig::default(), get, get_mut)
    }

    /// Add a field with inline configuration.
    pub fn field_with<F>(
        mut self,
        name: impl Into<String>,
        config: FieldConfig,
        get: fn(&T) -> &F,
        get_mut: fn(&mut T) -> &mut F,
    ) -> Self
    where
        F: Any + Clone + fmt::Debug,
    {
        self.fields
            .push(FieldDef::new(name, TypeTag::of::<F>()).with_config(config));
        self.accessors.push(Accessor {
            get: Box::new(move |object: &T| Value::new(get(object).clone())),
            set: Box::new(move |object: &mut T, value: Value| {
                *get_mut(object) = value.downcast::<F>()?;
                Ok(())
            }),
        });
        self
    }

    /// Attach configuration to a field by declared name.
    pub fn configure(mut self, name: impl Into<String>, config: FieldConfig) -> Self {
        self.configs.push((name.into(), config));
        self
    }

    /// Map a field under `alias` instead of its declared name.
    pub fn alias(self, name: impl Into<String>, alias: impl Into<String>) -> Self {
        self.configure(name, FieldConfig::new().with_alias(alias))
    }

    /// Never read or write a field during mapping.
    pub fn exclude(self, name: impl Into<String>) -> Self {
        self.configure(name, FieldConfig::new().excluded())
    }

    /// Register a parameterless constructor.
    pub fn constructor(mut self, ctor: fn() -> T) -> Self {
        self.constructor = Some(ctor);
        self
    }

    /// Build the immutable Schema, validating field names and configuration.
    pub fn build(self) -> SchemaResult<Schema<T>> {
        for (i, field) in self.fields.iter().enumerate() {
            if self.fields[..i].iter().any(|f| f.name == field.name) {
                return Err(SchemaError::duplicate_field(&self.type_name, &field.name));
            }
        }

        for (name, config) in &self.configs {
            if !self.fields.iter().any(|f| &f.name == name) {
                return Err(SchemaError::unknown_field(&self.type_name, name));
            }
            if config.alias.as_deref() == Some("") {
                return Err(SchemaError::empty_alias(&self.type_name, name));
            }
        }

        if let Some(field) = self.fields.iter().find(|f| f.alias() == Some("")) {
            return Err(SchemaError::empty_alias(&self.type_name, &field.name));
        }

        Ok(self.build_unchecked())
    }

    /// Build without validation. Configuration for unknown fields is dropped.
    ///
    /// Used by `#[derive(Describe)]`, which checks field names at compile time.
    #[doc(hidden)]
    pub fn build_unchecked(self) -> Schema<T> {
        let mut fields = self.fields;
        for (name, config) in self.configs {
            if let Some(field) = fields.iter_mut().find(|f| f.name == name) {
                field.config = std::mem::take(&mut field.config).merge(config);
            }
        }

        let descriptor = TypeDescriptor {
            type_name: self.type_name,
            fields,
        };
        Schema::new(descriptor, self.accessors, self.constructor)
    }
}

impl<T: Default + 'static> SchemaBuilder<T> {
    /// Register `T::default` as the constructor.
    pub fn with_default(self) -> Self {
        self.constructor(T::default)
    }
}
