//! Schema validation errors

use thiserror::Error;

/// Raised when a payload does not conform to its declared schema
#[derive(Error, Debug)]
pub enum SchemaError {
    /// A required field is missing or has the wrong primitive type
    #[error("{schema}: {source}")]
    Malformed {
        schema: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{schema}: field `{field}` has length {len}, minimum is {min}")]
    TooShort {
        schema: &'static str,
        field: &'static str,
        len: usize,
        min: usize,
    },

    #[error("{schema}: field `{field}` has length {len}, maximum is {max}")]
    TooLong {
        schema: &'static str,
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// The field decoded but its value cannot be used
    #[error("{schema}: field `{field}` is out of range: {reason}")]
    OutOfRange {
        schema: &'static str,
        field: &'static str,
        reason: String,
    },
}

impl SchemaError {
    /// Name of the schema that rejected the payload
    pub fn schema(&self) -> &'static str {
        match self {
            SchemaError::Malformed { schema, .. }
            | SchemaError::TooShort { schema, .. }
            | SchemaError::TooLong { schema, .. }
            | SchemaError::OutOfRange { schema, .. } => schema,
        }
    }
}
