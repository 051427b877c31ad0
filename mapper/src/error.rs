//! Mapping error types.

use thiserror::Error;

/// Result type for mapping operations.
pub type MapResult<T> = Result<T, MapError>;

/// Errors that can occur during a mapping call.
///
/// Field-level mismatches (no same-named field, different type, excluded
/// field) are not errors; those fields are skipped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("Invalid argument: {argument} is absent")]
    InvalidArgument { argument: String },

    #[error("Unsupported type: {type_name} has no parameterless constructor")]
    UnsupportedType { type_name: String },
}

impl MapError {
    pub fn missing_destination() -> Self {
        Self::InvalidArgument {
            argument: "destination".to_string(),
        }
    }

    pub fn missing_source(position: usize) -> Self {
        Self::InvalidArgument {
            argument: format!("sources[{}]", position),
        }
    }

    pub fn unsupported_type(type_name: impl Into<String>) -> Self {
        Self::UnsupportedType {
            type_name: type_name.into(),
        }
    }
}
