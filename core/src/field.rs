//! Field metadata types.

use crate::{names_match, TypeTag};

/// Per-field mapping configuration.
///
/// This is the declarative metadata a type attaches to its fields: an optional
/// alias used instead of the declared name, and an exclusion flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldConfig {
    /// Name used for matching instead of the declared name.
    pub alias: Option<String>,
    /// Never read or write this field during mapping.
    pub excluded: bool,
}

impl FieldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn excluded(mut self) -> Self {
        self.excluded = true;
        self
    }

    /// Merge another configuration into this one.
    /// A later alias replaces an earlier one; exclusion is sticky.
    pub fn merge(mut self, other: FieldConfig) -> Self {
        if other.alias.is_some() {
            self.alias = other.alias;
        }
        self.excluded |= other.excluded;
        self
    }
}

/// A mappable field of a type.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    /// Declared field name.
    pub name: String,
    /// Static type of the field.
    pub type_tag: TypeTag,
    /// Alias and exclusion settings.
    pub config: FieldConfig,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, type_tag: TypeTag) -> Self {
        Self {
            name: name.into(),
            type_tag,
            config: FieldConfig::default(),
        }
    }

    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    /// The name used when this field is the mapping target: the alias if one
    /// is set, otherwise the declared name.
    pub fn effective_name(&self) -> &str {
        self.config.alias.as_deref().unwrap_or(&self.name)
    }

    pub fn is_excluded(&self) -> bool {
        self.config.excluded
    }

    pub fn alias(&self) -> Option<&str> {
        self.config.alias.as_deref()
    }
}

/// The ordered field set of one type.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeDescriptor {
    /// Type name, for diagnostics.
    pub type_name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDef>,
}

impl TypeDescriptor {
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    pub fn fields(&self) -> &[FieldDef] {
        &self.fields
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Index of the first field whose declared name matches, ignoring case.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| names_match(&f.name, name))
    }

    /// First field whose declared name matches, ignoring case.
    pub fn field(&self, name: &str) -> Option<&FieldDef> {
        self.position(name).map(|i| &self.fields[i])
    }

    /// Get all declared field names in order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}
