//! duckmap
//!
//! Copy fields from one or more source objects into a destination object by
//! name, independent of the objects' declared types.
//!
//! Responsibilities:
//! - Resolve each destination field against each source (alias, exclusion, exact type)
//! - Apply sources in order, last source wins
//! - Construct and populate fresh destinations
//! - Read and write single fields by name
//!
//! # Module Structure
//!
//! - `engine` - map_into, map_new, merge and the `map!` macro
//! - `accessor` - get/set a named field on any mappable object
//! - `introspect` - enumerate a type's mappable fields
//! - `record` - ad-hoc objects whose fields are only known at runtime
//! - `error` - Error types for mapping failures

extern crate self as duckmap;

mod accessor;
mod engine;
mod error;
mod introspect;
mod record;

pub use accessor::{get_field_value, set_field_value};
pub use engine::{map, map_into, map_new, merge, resolve};
pub use error::{MapError, MapResult};
pub use introspect::{fields, fields_of};
pub use record::Record;

pub use duckmap_core::{names_match, FieldConfig, FieldDef, TypeDescriptor, TypeTag, Value};
pub use duckmap_derive::Describe;
pub use duckmap_registry::{Describe, Mappable, Schema, SchemaBuilder, SchemaError, SchemaResult};
