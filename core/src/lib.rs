//! duckmap Core Types
//!
//! This crate provides the foundational types shared by the duckmap crates:
//! - Type tags (TypeTag) used for exact field type comparison
//! - The type-erased field Value
//! - Field metadata (FieldConfig, FieldDef) and per-type descriptors (TypeDescriptor)
//! - Case-insensitive name matching

mod field;
mod name;
mod value;

pub use field::*;
pub use name::*;
pub use value::*;
