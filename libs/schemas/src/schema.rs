//! The parse step shared by every request and response shape

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::SchemaError;

/// A statically declared payload shape.
///
/// Decoding rejects missing fields and wrong primitive types; `finalize`
/// then enforces the constraints serde cannot express (length bounds) and
/// builds any derived views.
pub trait Schema: DeserializeOwned {
    /// Name used in validation errors
    const NAME: &'static str;

    /// Validate an untyped mapping into this shape
    fn parse(value: &Value) -> Result<Self, SchemaError> {
        let value = match value {
            Value::Null => Value::Object(Map::new()),
            other => other.clone(),
        };

        let parsed: Self = serde_json::from_value(value).map_err(|source| SchemaError::Malformed {
            schema: Self::NAME,
            source,
        })?;

        parsed.finalize()
    }

    /// Post-decode constraints and derived data
    fn finalize(self) -> Result<Self, SchemaError> {
        Ok(self)
    }
}

/// Check that `value` holds between `min` and `max` characters
pub fn check_length(
    schema: &'static str,
    field: &'static str,
    value: &str,
    min: usize,
    max: Option<usize>,
) -> Result<(), SchemaError> {
    let len = value.chars().count();

    if len < min {
        return Err(SchemaError::TooShort {
            schema,
            field,
            len,
            min,
        });
    }

    if let Some(max) = max {
        if len > max {
            return Err(SchemaError::TooLong {
                schema,
                field,
                len,
                max,
            });
        }
    }

    Ok(())
}

/// Check that `value` is not empty
pub fn check_non_empty(
    schema: &'static str,
    field: &'static str,
    value: &str,
) -> Result<(), SchemaError> {
    check_length(schema, field, value, 1, None)
}
