//! duckmap Registry
//!
//! Per-type field schemas: the ordered field metadata of a type together with
//! its accessor table. A schema is immutable after construction via
//! SchemaBuilder and is normally cached once per type by `#[derive(Describe)]`.

mod builder;
mod mappable;
mod schema;

pub use builder::{SchemaBuilder, SchemaError, SchemaResult};
pub use mappable::{Describe, Mappable};
pub use schema::Schema;
